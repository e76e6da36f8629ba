//! Expected reply shape for every prompt Forge sends.
//!
//! Keys are camelCase, matching the entity JSON in `forge-core`.

use forge_core::enums::{Level, Verdict};

use crate::field::{Field, FieldKind, ResponseSchema};

const LEVEL: FieldKind = FieldKind::Enum(Level::WIRE);

// ---------------------------------------------------------------------------
// Automation
// ---------------------------------------------------------------------------

const AUTOMATION_ANALYSIS: &[Field] = &[
    Field::required("efficiency", FieldKind::Score),
    Field::required("potential", FieldKind::Score),
    Field::required("risk", FieldKind::Score),
    Field::required("roi", FieldKind::Score),
];

pub const AUTOMATION: ResponseSchema = ResponseSchema {
    name: "automation",
    fields: &[
        Field::required("analysis", FieldKind::Object(AUTOMATION_ANALYSIS)),
        Field::required("recommendations", FieldKind::TextList),
        Field::required("opportunities", FieldKind::TextList),
    ],
};

// ---------------------------------------------------------------------------
// Brainstorm
// ---------------------------------------------------------------------------

const IDEA_ANALYSIS_FIELDS: &[Field] = &[
    Field::required("marketPotential", FieldKind::Score),
    Field::required("feasibility", FieldKind::Score),
    Field::required("innovation", FieldKind::Score),
    Field::required("scalability", FieldKind::Score),
];

const SWOT: &[Field] = &[
    Field::required("strengths", FieldKind::TextList),
    Field::required("weaknesses", FieldKind::TextList),
    Field::required("opportunities", FieldKind::TextList),
    Field::required("threats", FieldKind::TextList),
];

/// Reply to a brainstorm prompt: a complete idea.
pub const GENERATED_IDEA: ResponseSchema = ResponseSchema {
    name: "generated_idea",
    fields: &[
        Field::required("title", FieldKind::Text),
        Field::required("description", FieldKind::Text),
        Field::required("analysis", FieldKind::Object(IDEA_ANALYSIS_FIELDS)),
        Field::required("swotAnalysis", FieldKind::Object(SWOT)),
    ],
};

/// Reply to a user-drafted idea: the title and description stay the user's.
pub const IDEA_ANALYSIS: ResponseSchema = ResponseSchema {
    name: "idea_analysis",
    fields: &[
        Field::required("analysis", FieldKind::Object(IDEA_ANALYSIS_FIELDS)),
        Field::required("swotAnalysis", FieldKind::Object(SWOT)),
    ],
};

pub const SIP_EVALUATION: ResponseSchema = ResponseSchema {
    name: "sip_evaluation",
    fields: &[
        Field::required("verdict", FieldKind::Enum(Verdict::WIRE)),
        Field::required("score", FieldKind::Score),
        Field::required("reasoning", FieldKind::TextList),
        Field::required("recommendations", FieldKind::TextList),
    ],
};

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

const RISK_ANALYSIS: &[Field] = &[
    Field::required("probability", FieldKind::Score),
    Field::required("impact", FieldKind::Score),
    Field::required("urgency", FieldKind::Score),
    Field::required("severity", LEVEL),
    Field::required("mitigation", FieldKind::TextList),
    Field::required("contingency", FieldKind::TextList),
];

pub const RISK: ResponseSchema = ResponseSchema {
    name: "risk",
    fields: &[
        Field::required("analysis", FieldKind::Object(RISK_ANALYSIS)),
        Field::required("recommendations", FieldKind::TextList),
    ],
};

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

const MILESTONE: &[Field] = &[
    Field::required("name", FieldKind::Text),
    Field::required("date", FieldKind::Text),
    Field::optional("deliverables", FieldKind::TextList),
];

const PHASE: &[Field] = &[
    Field::required("name", FieldKind::Text),
    Field::required("description", FieldKind::Text),
    Field::required("startDate", FieldKind::Text),
    Field::required("endDate", FieldKind::Text),
    Field::required("duration", FieldKind::Number),
    Field::optional("dependencies", FieldKind::TextList),
    Field::required("milestones", FieldKind::ObjectList(MILESTONE)),
];

const TIMELINE_ANALYSIS: &[Field] = &[
    Field::required("totalDuration", FieldKind::Number),
    Field::required("criticalPath", FieldKind::TextList),
    Field::required("riskLevel", LEVEL),
    Field::required("phases", FieldKind::ObjectList(PHASE)),
    Field::required("assumptions", FieldKind::TextList),
    Field::required("constraints", FieldKind::TextList),
];

pub const TIMELINE: ResponseSchema = ResponseSchema {
    name: "timeline",
    fields: &[
        Field::required("analysis", FieldKind::Object(TIMELINE_ANALYSIS)),
        Field::required("recommendations", FieldKind::TextList),
    ],
};

// ---------------------------------------------------------------------------
// Problem solving
// ---------------------------------------------------------------------------

const SOLUTION_ANALYSIS: &[Field] = &[
    Field::required("summary", FieldKind::Text),
    Field::required("impact", FieldKind::Score),
    Field::required("urgency", FieldKind::Score),
    Field::required("complexity", FieldKind::Score),
    Field::required("rootCauses", FieldKind::TextList),
];

const RECOMMENDATION: &[Field] = &[
    Field::required("title", FieldKind::Text),
    Field::required("description", FieldKind::Text),
    Field::required("priority", LEVEL),
    Field::required("timeframe", FieldKind::Text),
    Field::optional("steps", FieldKind::TextList),
];

const ROADMAP_PHASE: &[Field] = &[
    Field::required("phase", FieldKind::Text),
    Field::required("duration", FieldKind::Text),
    Field::required("tasks", FieldKind::TextList),
    Field::optional("milestones", FieldKind::TextList),
];

const METRIC: &[Field] = &[
    Field::required("name", FieldKind::Text),
    Field::required("target", FieldKind::Text),
    Field::required("timeframe", FieldKind::Text),
];

const RESOURCE: &[Field] = &[
    Field::required("category", FieldKind::Text),
    Field::required("description", FieldKind::Text),
    Field::optional("estimatedCost", FieldKind::Text),
];

pub const SOLUTION: ResponseSchema = ResponseSchema {
    name: "solution",
    fields: &[
        Field::required("analysis", FieldKind::Object(SOLUTION_ANALYSIS)),
        Field::required("recommendations", FieldKind::ObjectList(RECOMMENDATION)),
        Field::required("roadmap", FieldKind::ObjectList(ROADMAP_PHASE)),
        Field::required("metrics", FieldKind::ObjectList(METRIC)),
        Field::required("resources", FieldKind::ObjectList(RESOURCE)),
    ],
};

/// Every reply schema, for listing and tests.
pub const ALL: [&ResponseSchema; 7] = [
    &AUTOMATION,
    &GENERATED_IDEA,
    &IDEA_ANALYSIS,
    &SIP_EVALUATION,
    &RISK,
    &TIMELINE,
    &SOLUTION,
];

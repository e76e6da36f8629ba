//! End-to-end generate/validate/persist flows against a scripted client.
//!
//! Every test builds an in-memory workspace around a `MockClient`, drives one
//! store action, and checks the list, the loading/error flags, and what was
//! persisted.

use std::sync::Arc;

use chrono::NaiveDate;
use forge_core::enums::{Domain, IdeaSource, InsertOrder, Level, Verdict};
use forge_core::inputs::{
    BrainstormInput, BusinessInfo, IdeaDraft, ProblemInfo, RiskInput, TimelineInput,
};
use forge_llm::mock::MockClient;
use forge_llm::prompts;
use forge_schema::ResponseError;
use forge_store::{FeatureStore, KeyValueStore, MemoryStore, StoreError, StoreEvent, Workspace};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Replies
// ---------------------------------------------------------------------------

const AUTOMATION_REPLY: &str = r#"```json
{
  "analysis": {"efficiency": 150, "potential": 80, "risk": 30, "roi": 70},
  "recommendations": ["Automate invoicing"],
  "opportunities": ["Self-service booking"]
}
```"#;

const RISK_MISSING_IMPACT: &str = r#"{
  "analysis": {
    "probability": 40, "urgency": 60, "severity": "low",
    "mitigation": [], "contingency": []
  },
  "recommendations": []
}"#;

const RISK_REPLY: &str = r#"{
  "analysis": {
    "probability": 40, "impact": 80, "urgency": 60, "severity": "High",
    "mitigation": ["Second supplier"], "contingency": ["Stock buffer"]
  },
  "recommendations": ["Review quarterly"]
}"#;

const IDEA_REPLY: &str = r#"{
  "title": "Tool library",
  "description": "Members borrow power tools by the hour.",
  "analysis": {"marketPotential": 72, "feasibility": 85, "innovation": 40, "scalability": 55},
  "swotAnalysis": {
    "strengths": ["Low cost"], "weaknesses": ["Repairs"],
    "opportunities": ["Hardware partners"], "threats": ["Rental chains"]
  }
}"#;

const SIP_REPLY: &str = r#"{
  "verdict": "sip",
  "score": 82,
  "reasoning": ["Clear demand"],
  "recommendations": ["Pilot in one neighborhood"]
}"#;

const TIMELINE_REPLY: &str = r#"{
  "analysis": {
    "totalDuration": 61,
    "criticalPath": ["Build"],
    "riskLevel": "medium",
    "phases": [
      {"name": "Build", "description": "Code", "startDate": "2026-01-01", "endDate": "2026-03-01",
       "duration": 61, "dependencies": null, "milestones": []}
    ],
    "assumptions": [],
    "constraints": []
  },
  "recommendations": ["Weekly demos"]
}"#;

const SOLUTION_REPLY: &str = r#"{
  "analysis": {"summary": "Slow onboarding", "impact": 70, "urgency": 50, "complexity": 40,
               "rootCauses": ["Manual setup"]},
  "recommendations": [{"title": "Script setup", "description": "One command", "priority": "HIGH",
                       "timeframe": "2 weeks"}],
  "roadmap": [{"phase": "Pilot", "duration": "1 month", "tasks": ["Write script"]}],
  "metrics": [{"name": "Time to first commit", "target": "< 1 day", "timeframe": "Q1"}],
  "resources": [{"category": "people", "description": "One engineer", "estimatedCost": null}]
}"#;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn workspace(client: &Arc<MockClient>) -> (Workspace, Arc<MemoryStore>) {
    let kv = Arc::new(MemoryStore::new());
    let ws = Workspace::with_store(kv.clone(), client.clone(), InsertOrder::Completion).unwrap();
    (ws, kv)
}

fn business() -> BusinessInfo {
    BusinessInfo {
        name: "Acme Plumbing".into(),
        industry: "Home services".into(),
        description: "Twelve vans, phone bookings only".into(),
        challenges: vec!["Missed calls".into()],
        goals: vec!["Online booking".into()],
    }
}

fn risk_input(name: &str) -> RiskInput {
    RiskInput {
        name: name.into(),
        description: "Single supplier for sensors".into(),
        category: "operational".into(),
    }
}

// ---------------------------------------------------------------------------
// Automation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn out_of_range_score_is_clamped() {
    let client = Arc::new(MockClient::new().reply(AUTOMATION_REPLY));
    let (ws, _) = workspace(&client);

    let result = ws.automation.analyze(business()).await.unwrap();
    assert_eq!(result.analysis.efficiency, 100);
    assert_eq!(result.business_info.name, "Acme Plumbing");
    assert!(result.id.starts_with("aut-"), "{}", result.id);
    assert_eq!(ws.automation.list(), vec![result]);
    assert!(!ws.automation.is_loading());
    assert_eq!(ws.automation.error(), None);
}

#[tokio::test]
async fn invalid_json_leaves_list_unchanged() {
    let client = Arc::new(
        MockClient::new()
            .reply(AUTOMATION_REPLY)
            .reply("Sorry, I cannot help with that."),
    );
    let (ws, _) = workspace(&client);
    let kept = ws.automation.analyze(business()).await.unwrap();

    let err = ws.automation.analyze(business()).await.unwrap_err();
    assert!(matches!(err, StoreError::Response(ResponseError::Parse(_))));
    assert_eq!(ws.automation.list(), vec![kept]);
    assert!(!ws.automation.is_loading());
    assert!(ws.automation.error().is_some());
}

#[tokio::test]
async fn transport_failure_sets_error() {
    let client = Arc::new(MockClient::new().fail(503, "overloaded"));
    let (ws, _) = workspace(&client);
    let mut events = ws.automation.subscribe();

    let err = ws.automation.analyze(business()).await.unwrap_err();
    assert!(matches!(err, StoreError::Transport(_)));
    assert!(ws.automation.error().unwrap().contains("overloaded"));
    assert!(matches!(events.recv().await.unwrap(), StoreEvent::Loading { .. }));
    assert!(matches!(events.recv().await.unwrap(), StoreEvent::Failed { .. }));
}

// ---------------------------------------------------------------------------
// Risk
// ---------------------------------------------------------------------------

#[tokio::test]
async fn risk_keeps_input_fields_and_canonical_severity() {
    let client = Arc::new(MockClient::new().reply(RISK_REPLY));
    let (ws, kv) = workspace(&client);
    let mut events = ws.risk.subscribe();

    let input = risk_input("Supplier failure");
    let risk = ws.risk.assess(input).await.unwrap();
    assert_eq!(risk.name, "Supplier failure");
    assert_eq!(risk.category, "operational");
    assert_eq!(risk.analysis.severity, Level::High);

    assert!(matches!(events.recv().await.unwrap(), StoreEvent::Loading { .. }));
    assert_eq!(
        events.recv().await.unwrap(),
        StoreEvent::Created {
            domain: Domain::Risk,
            id: risk.id.clone(),
        }
    );
    assert!(kv.get("risks").unwrap().unwrap().contains(&risk.id));
}

#[tokio::test]
async fn missing_required_score_is_a_schema_error() {
    let client = Arc::new(
        MockClient::new()
            .reply(RISK_REPLY)
            .reply(RISK_MISSING_IMPACT),
    );
    let (ws, _) = workspace(&client);
    let kept = ws.risk.assess(risk_input("kept")).await.unwrap();

    let err = ws.risk.assess(risk_input("rejected")).await.unwrap_err();
    match err {
        StoreError::Response(ResponseError::Schema { path, found, .. }) => {
            assert_eq!(path, "analysis.impact");
            assert_eq!(found, "nothing");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
    assert_eq!(ws.risk.list(), vec![kept]);
    assert!(!ws.risk.is_loading());
}

#[tokio::test]
async fn deleting_unknown_id_changes_nothing() {
    let client = Arc::new(MockClient::new().reply(RISK_REPLY));
    let (ws, kv) = workspace(&client);
    let risk = ws.risk.assess(risk_input("a")).await.unwrap();
    let before = kv.raw("risks");

    assert!(!ws.risk.delete("rsk-deadbeef").unwrap());
    assert_eq!(ws.risk.list(), vec![risk.clone()]);
    assert_eq!(kv.raw("risks"), before);

    assert!(ws.risk.delete(&risk.id).unwrap());
    assert!(ws.risk.list().is_empty());
}

// ---------------------------------------------------------------------------
// Brainstorm
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generated_and_user_ideas_record_their_source() {
    let client = Arc::new(MockClient::new().reply(IDEA_REPLY).reply(IDEA_REPLY));
    let (ws, _) = workspace(&client);

    let ai = ws
        .brainstorm
        .generate_idea(BrainstormInput {
            topic: "sharing economy".into(),
            ..BrainstormInput::default()
        })
        .await
        .unwrap();
    assert_eq!(ai.source, IdeaSource::Ai);
    assert_eq!(ai.title, "Tool library");

    let mine = ws
        .brainstorm
        .add_idea(IdeaDraft {
            title: "Board game cafe".into(),
            description: "Cafe with a game library".into(),
        })
        .await
        .unwrap();
    assert_eq!(mine.source, IdeaSource::User);
    assert_eq!(mine.title, "Board game cafe");
    assert_eq!(mine.analysis.feasibility, 85);
    assert_eq!(ws.brainstorm.list().len(), 2);
}

#[tokio::test]
async fn evaluating_unknown_idea_sends_nothing() {
    let client = Arc::new(MockClient::new());
    let (ws, _) = workspace(&client);

    let err = ws.brainstorm.evaluate("ida-00000000").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { ref id, .. } if id == "ida-00000000"));
    assert_eq!(err.to_string(), "idea not found: ida-00000000");
    assert_eq!(client.calls(), 0);
    assert!(!ws.brainstorm.is_loading());
    assert!(ws.brainstorm.error().is_some());
}

#[tokio::test]
async fn evaluation_attaches_verdict_in_place() {
    let client = Arc::new(MockClient::new().reply(IDEA_REPLY).reply(SIP_REPLY));
    let (ws, _) = workspace(&client);
    let idea = ws
        .brainstorm
        .generate_idea(BrainstormInput::default())
        .await
        .unwrap();

    let evaluated = ws.brainstorm.evaluate(&idea.id).await.unwrap();
    let sip = evaluated.sip_analysis.as_ref().unwrap();
    assert_eq!(sip.verdict, Verdict::Sip);
    assert_eq!(sip.score, 82);
    assert_eq!(evaluated.id, idea.id);
    assert_eq!(evaluated.analysis, idea.analysis);
    assert_eq!(ws.brainstorm.list(), vec![evaluated]);
    let requests = client.requests();
    assert!(requests[1].text().contains("Tool library"));
    assert_eq!(requests[0].temperature, Some(prompts::CREATIVE_TEMPERATURE));
    assert_eq!(requests[1].temperature, Some(prompts::VERDICT_TEMPERATURE));
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

fn timeline_input(start: (i32, u32, u32), end: (i32, u32, u32)) -> TimelineInput {
    TimelineInput {
        project_name: "Mobile app".into(),
        description: "Booking app".into(),
        start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        team_size: Some(3),
        constraints: Vec::new(),
    }
}

#[tokio::test]
async fn inverted_dates_are_rejected_before_any_request() {
    let client = Arc::new(MockClient::new().reply(TIMELINE_REPLY));
    let (ws, _) = workspace(&client);

    let err = ws
        .timeline
        .plan(timeline_input((2026, 3, 1), (2026, 1, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidInput(_)));
    assert_eq!(client.calls(), 0);
    assert!(ws.timeline.list().is_empty());
    assert!(!ws.timeline.is_loading());
}

#[tokio::test]
async fn timeline_keeps_requested_window() {
    let client = Arc::new(MockClient::new().reply(TIMELINE_REPLY));
    let (ws, _) = workspace(&client);

    let timeline = ws
        .timeline
        .plan(timeline_input((2026, 1, 1), (2026, 3, 1)))
        .await
        .unwrap();
    assert_eq!(timeline.project_name, "Mobile app");
    assert_eq!(
        timeline.start_date,
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    );
    assert!(timeline.analysis.phases[0].dependencies.is_empty());
}

// ---------------------------------------------------------------------------
// Problem solving
// ---------------------------------------------------------------------------

#[tokio::test]
async fn solution_normalizes_priority_and_drops_null_cost() {
    let client = Arc::new(MockClient::new().reply(SOLUTION_REPLY));
    let (ws, _) = workspace(&client);

    let solution = ws
        .problems
        .solve(ProblemInfo {
            title: "Slow onboarding".into(),
            description: "New hires take a week to ship".into(),
            ..ProblemInfo::default()
        })
        .await
        .unwrap();
    assert_eq!(solution.recommendations[0].priority, Level::High);
    assert_eq!(solution.resources[0].estimated_cost, None);
    assert_eq!(solution.problem_info.title, "Slow onboarding");
}

// ---------------------------------------------------------------------------
// Workspace
// ---------------------------------------------------------------------------

#[tokio::test]
async fn report_summarizes_every_store() {
    let client = Arc::new(
        MockClient::new()
            .reply(RISK_REPLY)
            .reply(RISK_REPLY)
            .reply(AUTOMATION_REPLY),
    );
    let (ws, _) = workspace(&client);
    ws.risk.assess(risk_input("a")).await.unwrap();
    ws.risk.assess(risk_input("b")).await.unwrap();
    ws.automation.analyze(business()).await.unwrap();

    let report = ws.report();
    assert_eq!(report.total, 3);
    let risk = report.domain(Domain::Risk).unwrap();
    assert_eq!(risk.count, 2);
    assert_eq!(risk.average("impact"), Some(80.0));
    let automation = report.domain(Domain::Automation).unwrap();
    assert_eq!(automation.average("efficiency"), Some(100.0));
}

#[tokio::test]
async fn reset_clears_every_store() {
    let client = Arc::new(MockClient::new().reply(RISK_REPLY).reply(IDEA_REPLY));
    let (ws, kv) = workspace(&client);
    ws.risk.assess(risk_input("a")).await.unwrap();
    ws.brainstorm
        .generate_idea(BrainstormInput::default())
        .await
        .unwrap();

    ws.reset().unwrap();
    assert_eq!(ws.report().total, 0);
    assert!(kv.raw("risks").is_none());
    assert!(kv.raw("ideas").is_none());
}

//! Cross-store summary: counts and average scores per domain.

use chrono::{DateTime, Utc};
use forge_core::entities::{AutomationResult, Entity, Idea, Risk, Solution, Timeline};
use forge_core::enums::{Domain, Verdict};
use serde::Serialize;

/// Numeric fields worth averaging across a domain's entities.
pub trait Scored {
    /// `(name, value)` pairs; absent optional scores are simply omitted.
    fn scores(&self) -> Vec<(&'static str, f64)>;
}

impl Scored for AutomationResult {
    fn scores(&self) -> Vec<(&'static str, f64)> {
        let a = &self.analysis;
        vec![
            ("efficiency", f64::from(a.efficiency)),
            ("potential", f64::from(a.potential)),
            ("risk", f64::from(a.risk)),
            ("roi", f64::from(a.roi)),
        ]
    }
}

impl Scored for Idea {
    fn scores(&self) -> Vec<(&'static str, f64)> {
        let a = &self.analysis;
        let mut scores = vec![
            ("marketPotential", f64::from(a.market_potential)),
            ("feasibility", f64::from(a.feasibility)),
            ("innovation", f64::from(a.innovation)),
            ("scalability", f64::from(a.scalability)),
        ];
        if let Some(sip) = &self.sip_analysis {
            scores.push(("sipScore", f64::from(sip.score)));
        }
        scores
    }
}

impl Scored for Risk {
    fn scores(&self) -> Vec<(&'static str, f64)> {
        let a = &self.analysis;
        vec![
            ("probability", f64::from(a.probability)),
            ("impact", f64::from(a.impact)),
            ("urgency", f64::from(a.urgency)),
        ]
    }
}

impl Scored for Timeline {
    fn scores(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("totalDuration", self.analysis.total_duration),
            ("phases", usize_to_f64(self.analysis.phases.len())),
        ]
    }
}

impl Scored for Solution {
    fn scores(&self) -> Vec<(&'static str, f64)> {
        let a = &self.analysis;
        vec![
            ("impact", f64::from(a.impact)),
            ("urgency", f64::from(a.urgency)),
            ("complexity", f64::from(a.complexity)),
        ]
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAverage {
    pub name: String,
    pub average: f64,
    /// Entities that carried this score.
    pub samples: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub domain: Domain,
    pub count: usize,
    pub averages: Vec<ScoreAverage>,
    pub latest: Option<DateTime<Utc>>,
    /// Domain-specific tallies, e.g. SIP vs SPIT verdicts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tallies: Vec<(String, usize)>,
}

impl DomainReport {
    /// Summarize one domain's entities.
    #[must_use]
    pub fn from_entities<T: Entity + Scored>(entities: &[T]) -> Self {
        let mut totals: Vec<(&'static str, f64, usize)> = Vec::new();
        for entity in entities {
            for (name, value) in entity.scores() {
                match totals.iter_mut().find(|(n, _, _)| *n == name) {
                    Some((_, sum, samples)) => {
                        *sum += value;
                        *samples += 1;
                    }
                    None => totals.push((name, value, 1)),
                }
            }
        }

        Self {
            domain: T::DOMAIN,
            count: entities.len(),
            averages: totals
                .into_iter()
                .map(|(name, sum, samples)| ScoreAverage {
                    name: name.to_string(),
                    average: round_tenth(sum / usize_to_f64(samples)),
                    samples,
                })
                .collect(),
            latest: entities.iter().map(Entity::created_at).max(),
            tallies: Vec::new(),
        }
    }

    #[must_use]
    pub fn average(&self, name: &str) -> Option<f64> {
        self.averages
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.average)
    }
}

/// Summary across all five stores.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total: usize,
    pub domains: Vec<DomainReport>,
}

impl Report {
    #[must_use]
    pub fn new(
        automation: &[AutomationResult],
        ideas: &[Idea],
        risks: &[Risk],
        timelines: &[Timeline],
        solutions: &[Solution],
    ) -> Self {
        let mut brainstorm = DomainReport::from_entities(ideas);
        let evaluated: Vec<Verdict> = ideas
            .iter()
            .filter_map(|idea| idea.sip_analysis.as_ref().map(|sip| sip.verdict))
            .collect();
        brainstorm.tallies = vec![
            (
                Verdict::Sip.to_string(),
                evaluated.iter().filter(|v| **v == Verdict::Sip).count(),
            ),
            (
                Verdict::Spit.to_string(),
                evaluated.iter().filter(|v| **v == Verdict::Spit).count(),
            ),
            ("unevaluated".to_string(), ideas.len() - evaluated.len()),
        ];

        let domains = vec![
            DomainReport::from_entities(automation),
            brainstorm,
            DomainReport::from_entities(risks),
            DomainReport::from_entities(timelines),
            DomainReport::from_entities(solutions),
        ];
        Self {
            total: domains.iter().map(|d| d.count).sum(),
            domains,
        }
    }

    #[must_use]
    pub fn domain(&self, domain: Domain) -> Option<&DomainReport> {
        self.domains.iter().find(|d| d.domain == domain)
    }
}

#[allow(clippy::cast_precision_loss)]
const fn usize_to_f64(n: usize) -> f64 {
    n as f64
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

//! Concurrent operations on one store: list ordering, loading state, and
//! results that arrive after a reset.
//!
//! Each reply is gated on a `Notify`, so the test decides the order in which
//! in-flight requests resolve.

use std::sync::Arc;
use std::time::Duration;

use forge_core::enums::InsertOrder;
use forge_core::inputs::{BrainstormInput, RiskInput};
use forge_llm::mock::MockClient;
use forge_store::{FeatureStore, StoreError, StoreStatus, Workspace};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

const RISK_REPLY: &str = r#"{
  "analysis": {
    "probability": 40, "impact": 80, "urgency": 60, "severity": "medium",
    "mitigation": [], "contingency": []
  },
  "recommendations": []
}"#;

fn input(name: &str) -> RiskInput {
    RiskInput {
        name: name.into(),
        description: String::new(),
        category: "test".into(),
    }
}

fn spawn_assess(
    ws: &Arc<Workspace>,
    name: &'static str,
) -> JoinHandle<Result<forge_core::entities::Risk, StoreError>> {
    let ws = ws.clone();
    tokio::spawn(async move { ws.risk.assess(input(name)).await })
}

async fn wait_for_calls(client: &MockClient, n: usize) {
    while client.calls() < n {
        tokio::task::yield_now().await;
    }
}

/// Start A then B, let B finish first, then A.
#[rstest]
#[case::completion(InsertOrder::Completion, ["A", "B"])]
#[case::submission(InsertOrder::Submission, ["B", "A"])]
#[tokio::test]
async fn late_finisher_position_follows_policy(
    #[case] order: InsertOrder,
    #[case] expected: [&str; 2],
) {
    let gate_a = Arc::new(Notify::new());
    let gate_b = Arc::new(Notify::new());
    let client = Arc::new(
        MockClient::new()
            .gated_reply(RISK_REPLY, gate_a.clone())
            .gated_reply(RISK_REPLY, gate_b.clone()),
    );
    let ws = Arc::new(Workspace::in_memory(client.clone(), order).unwrap());

    let a = spawn_assess(&ws, "A");
    wait_for_calls(&client, 1).await;
    let b = spawn_assess(&ws, "B");
    wait_for_calls(&client, 2).await;
    assert!(ws.risk.is_loading());

    gate_b.notify_one();
    b.await.unwrap().unwrap();
    assert!(ws.risk.is_loading(), "A is still in flight");

    gate_a.notify_one();
    a.await.unwrap().unwrap();
    assert!(!ws.risk.is_loading());

    let names: Vec<String> = ws.risk.list().into_iter().map(|r| r.name).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn rapid_idea_generation_lists_last_completed_first() {
    let first_gate = Arc::new(Notify::new());
    let second_gate = Arc::new(Notify::new());
    let client = Arc::new(
        MockClient::new()
            .gated_reply(idea_reply("First"), first_gate.clone())
            .gated_reply(idea_reply("Second"), second_gate.clone()),
    );
    let ws = Arc::new(Workspace::in_memory(client.clone(), InsertOrder::default()).unwrap());

    let spawn = |topic: &'static str| {
        let ws = ws.clone();
        tokio::spawn(async move {
            ws.brainstorm
                .generate_idea(BrainstormInput {
                    topic: topic.into(),
                    ..BrainstormInput::default()
                })
                .await
        })
    };
    let first = spawn("first");
    wait_for_calls(&client, 1).await;
    let second = spawn("second");
    wait_for_calls(&client, 2).await;

    second_gate.notify_one();
    second.await.unwrap().unwrap();
    first_gate.notify_one();
    first.await.unwrap().unwrap();

    let titles: Vec<String> = ws.brainstorm.list().into_iter().map(|i| i.title).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

fn idea_reply(title: &str) -> String {
    format!(
        r#"{{"title": "{title}", "description": "d",
            "analysis": {{"marketPotential": 50, "feasibility": 50, "innovation": 50, "scalability": 50}},
            "swotAnalysis": {{"strengths": [], "weaknesses": [], "opportunities": [], "threats": []}}}}"#
    )
}

#[tokio::test]
async fn reset_discards_result_still_in_flight() {
    let gate = Arc::new(Notify::new());
    let client = Arc::new(MockClient::new().gated_reply(RISK_REPLY, gate.clone()));
    let ws = Arc::new(Workspace::in_memory(client.clone(), InsertOrder::Completion).unwrap());

    let pending = spawn_assess(&ws, "stale");
    wait_for_calls(&client, 1).await;
    ws.risk.reset().unwrap();
    assert!(!ws.risk.is_loading());

    gate.notify_one();
    let result = pending.await.unwrap();
    assert!(matches!(result, Err(StoreError::Discarded)));
    assert!(ws.risk.list().is_empty());
    assert_eq!(ws.risk.error(), None);
}

#[tokio::test]
async fn failure_of_one_request_keeps_the_other() {
    let gate = Arc::new(Notify::new());
    let client = Arc::new(
        MockClient::new()
            .gated_reply(RISK_REPLY, gate.clone())
            .reply("not json at all"),
    );
    let ws = Arc::new(Workspace::in_memory(client.clone(), InsertOrder::Completion).unwrap());

    let ok = spawn_assess(&ws, "kept");
    wait_for_calls(&client, 1).await;
    let failed = ws.risk.assess(input("lost")).await;
    assert!(failed.is_err());
    assert!(ws.risk.is_loading());
    assert!(ws.risk.error().is_some());

    gate.notify_one();
    ok.await.unwrap().unwrap();
    let names: Vec<String> = ws.risk.list().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["kept"]);
    assert_eq!(ws.risk.error(), None);
}

#[tokio::test]
async fn timed_out_request_returns_store_to_idle() {
    let gate = Arc::new(Notify::new());
    let client = Arc::new(
        MockClient::new()
            .gated_reply(RISK_REPLY, gate)
            .reply(RISK_REPLY),
    );
    let ws = Workspace::in_memory(client.clone(), InsertOrder::Completion).unwrap();

    let outcome =
        tokio::time::timeout(Duration::from_millis(20), ws.risk.assess(input("slow"))).await;
    assert!(outcome.is_err(), "the gated reply never arrives");
    assert_eq!(client.calls(), 1);
    assert_eq!(ws.risk.status(), StoreStatus::Idle);
    assert_eq!(ws.risk.error(), None);
    assert!(ws.risk.list().is_empty());

    let risk = ws.risk.assess(input("next")).await.unwrap();
    assert_eq!(risk.name, "next");
    assert_eq!(ws.risk.status(), StoreStatus::Idle);
}

#[tokio::test]
async fn aborted_evaluation_returns_store_to_idle() {
    let gate = Arc::new(Notify::new());
    let client = Arc::new(
        MockClient::new()
            .reply(idea_reply("Kept"))
            .gated_reply(
                r#"{"verdict": "SIP", "score": 70, "reasoning": [], "recommendations": []}"#,
                gate,
            ),
    );
    let ws = Arc::new(Workspace::in_memory(client.clone(), InsertOrder::Completion).unwrap());
    let idea = ws
        .brainstorm
        .generate_idea(BrainstormInput {
            topic: "kept".into(),
            ..BrainstormInput::default()
        })
        .await
        .unwrap();

    let pending = {
        let ws = ws.clone();
        let id = idea.id.clone();
        tokio::spawn(async move { ws.brainstorm.evaluate(&id).await })
    };
    wait_for_calls(&client, 2).await;
    assert!(ws.brainstorm.is_loading());

    pending.abort();
    assert!(pending.await.unwrap_err().is_cancelled());
    assert!(!ws.brainstorm.is_loading());
    assert_eq!(ws.brainstorm.get(&idea.id).unwrap().sip_analysis, None);
}

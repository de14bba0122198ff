//! HTTP-level planning flow against the assembled router.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use clarity_compass::adapters::ai::MockAIProvider;
use clarity_compass::adapters::gateway::AiGoalGateway;
use clarity_compass::adapters::http::{app_router, PlanningAppState};
use clarity_compass::adapters::storage::InMemorySessionStore;
use clarity_compass::application::handlers::planning::GenerationRunner;
use clarity_compass::config::ServerConfig;

fn app(provider: MockAIProvider) -> Router {
    let gateway = AiGoalGateway::new(Arc::new(provider));
    let runner = GenerationRunner::new(Arc::new(gateway), Duration::from_secs(5));
    let state = PlanningAppState::new(Arc::new(InMemorySessionStore::new()), runner);
    app_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Polls the session until the named generation is no longer pending.
async fn settle(app: &Router, session_id: &str, generation: &str) -> Value {
    for _ in 0..50 {
        let (_, body) = send(app, "GET", &format!("/api/sessions/{}", session_id), None).await;
        if body[generation]["status"] != "pending" {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("{} generation never settled", generation);
}

fn check_in_body() -> Value {
    json!({ "ratings": [
        { "life_area": "Physical Health", "rating": 4, "whats_working": "Walking the dog" },
        { "life_area": "Finances", "rating": 2, "challenges": "Impulse buys" },
        { "life_area": "Mental Health", "rating": 1 },
        { "life_area": "Hobbies & Recreation" }
    ]})
}

fn suggestions_json() -> Value {
    let goal = |title: &str, difficulty: &str| {
        json!({
            "title": title, "rationale": "why", "lifeAreasImpacted": ["Finances"],
            "timeframeWeeks": 4, "difficulty": difficulty, "successIndicators": ["calmer"]
        })
    };
    json!({
        "goals": [goal("Walk daily", "Gentle start"), goal("Budget weekly", "Moderate effort")],
        "contextualNote": "One step at a time."
    })
}

fn breakdown_json() -> Value {
    let task = |description: &str, order: i64| {
        json!({
            "description": description, "detailedSteps": [], "estimatedTime": "5 minutes",
            "whenToDo": "Morning", "whatYouNeed": [], "successLooksLike": "done",
            "commonObstacles": [], "nextStepConnection": "", "order": order
        })
    };
    json!({
        "milestones": [{
            "title": "Start", "durationWeeks": 1, "whyThisMilestone": "momentum",
            "completionCriteria": "done", "order": 1,
            "tasks": [task("List subscriptions", 1), task("Cancel one", 2)]
        }],
        "overallApproach": "small",
        "flexibilityNote": "flexible"
    })
}

#[tokio::test]
async fn full_flow_over_http() {
    let app = app(
        MockAIProvider::new()
            .with_json(suggestions_json())
            .with_json(breakdown_json()),
    );

    let (status, body) = send(&app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["session_id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "POST", &format!("/api/sessions/{}/check-in", id), Some(check_in_body())).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let session = settle(&app, &id, "suggestions").await;
    assert_eq!(session["view"], "viewing_suggestions");
    assert_eq!(session["ratings"].as_array().unwrap().len(), 3);
    let goal_id = session["suggestions"]["result"]["goals"][1]["id"].clone();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/goals", id),
        Some(json!({ "goal_ids": [goal_id] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["added"], 1);
    assert_eq!(body["session"]["view"], "daily");

    let goal_id = goal_id.as_str().unwrap();
    let (status, _) = send(&app, "POST", &format!("/api/sessions/{}/goals/{}/plan", id, goal_id), None).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let session = settle(&app, &id, "breakdown").await;
    assert_eq!(session["view"], "viewing_breakdown");
    assert_eq!(session["breakdown"]["status"], "ready");

    let (status, body) = send(&app, "POST", &format!("/api/sessions/{}/breakdown/approve", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["goal_id"], goal_id);

    let (status, today) = send(&app, "GET", &format!("/api/sessions/{}/today", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(today["has_planned_goals"], true);
    assert_eq!(today["goals"][0]["percent"], 0);
    assert_eq!(today["next_tasks"][0]["description"], "List subscriptions");
}

#[tokio::test]
async fn failed_suggestions_can_be_retried() {
    let app = app(MockAIProvider::new().with_response("nope").with_json(suggestions_json()));

    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let id = body["session_id"].as_str().unwrap().to_string();
    send(&app, "POST", &format!("/api/sessions/{}/check-in", id), Some(check_in_body())).await;

    let session = settle(&app, &id, "suggestions").await;
    assert_eq!(session["view"], "viewing_suggestions");
    assert_eq!(session["suggestions"]["status"], "failed");
    assert!(session["suggestions"]["error"].as_str().unwrap().starts_with("Sorry"));

    let (status, _) = send(&app, "POST", &format!("/api/sessions/{}/suggestions/retry", id), None).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let session = settle(&app, &id, "suggestions").await;
    assert_eq!(session["suggestions"]["status"], "ready");
    assert_eq!(session["suggestions"]["result"]["goals"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn retry_without_failure_is_conflict() {
    let app = app(MockAIProvider::new());

    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let id = body["session_id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "POST", &format!("/api/sessions/{}/suggestions/retry", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
}

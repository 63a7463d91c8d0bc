mod common;

use common::{event_log, MockTransport, BASE_URL};
use core_logic::ApiError;
use midas_bot::client::{Method, MidasClient, StreakStatus};
use std::sync::Arc;

fn setup() -> (Arc<MockTransport>, MidasClient) {
    let transport = Arc::new(MockTransport::new(event_log()));
    let client = MidasClient::new(transport.clone(), BASE_URL);
    (transport, client)
}

#[tokio::test]
async fn test_register_returns_trimmed_token_on_201() {
    let (transport, client) = setup();
    transport.on(Method::Post, "/auth/register", 201, "  tok-abc \n");

    let token = client.register("init-blob").await.unwrap();
    assert_eq!(token, "tok-abc");
}

#[tokio::test]
async fn test_register_non_201_is_http_error() {
    let (transport, client) = setup();
    transport.on(Method::Post, "/auth/register", 400, "{}");

    let err = client.register("init-blob").await.unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_streak_claimed_parses_rewards() {
    let (transport, client) = setup();
    transport.on(
        Method::Post,
        "/streak",
        200,
        r#"{"streakDaysCount": 3, "nextRewards": {"points": 100, "tickets": 1}}"#,
    );

    match client.update_streak("tok").await.unwrap() {
        StreakStatus::Claimed(info) => {
            assert_eq!(info.streak_days_count, Some(3));
            assert_eq!(info.next_points_display(), "100");
        }
        other => panic!("expected Claimed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_streak_already_claimed_branch() {
    let (transport, client) = setup();
    transport.on(
        Method::Post,
        "/streak",
        400,
        r#"{"message": "Can't claim streak now"}"#,
    );

    assert!(matches!(
        client.update_streak("tok").await.unwrap(),
        StreakStatus::AlreadyClaimed
    ));
}

#[tokio::test]
async fn test_streak_other_400_is_unexpected() {
    let (transport, client) = setup();
    transport.on(Method::Post, "/streak", 400, r#"{"message": "Maintenance"}"#);

    match client.update_streak("tok").await.unwrap() {
        StreakStatus::Unexpected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Maintenance");
        }
        other => panic!("expected Unexpected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_streak_non_json_body_is_decode_error() {
    let (transport, client) = setup();
    transport.on(Method::Post, "/streak", 200, "<html>challenge</html>");

    let err = client.update_streak("tok").await.unwrap_err();
    match err {
        ApiError::Decode { body, .. } => assert!(body.contains("challenge")),
        other => panic!("expected Decode, got {:?}", other),
    }
}

#[tokio::test]
async fn test_available_tasks_filters_completed_and_projects_fields() {
    let (transport, client) = setup();
    transport.on(
        Method::Get,
        "/tasks/available",
        200,
        r#"[
            {"id": "a", "name": "Done", "completed": true, "canBeClaimedAt": null, "waitTime": 5},
            {"id": "b", "name": "Open", "completed": false, "canBeClaimedAt": null, "waitTime": 10},
            {"id": "c", "name": "Ready", "completed": false, "canBeClaimedAt": "2024-10-02", "waitTime": null}
        ]"#,
    );

    let tasks = client.available_tasks("tok").await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "b");
    assert_eq!(tasks[0].wait_time, Some(10));
    assert!(tasks[0].completion.is_none());
    assert_eq!(tasks[1].id, "c");
    assert!(tasks[1].is_claimable());
}

#[tokio::test]
async fn test_available_tasks_non_200_is_error() {
    let (transport, client) = setup();
    transport.on(Method::Get, "/tasks/available", 503, "busy");

    assert!(client.available_tasks("tok").await.is_err());
}

#[tokio::test]
async fn test_visited_success_is_status_based() {
    let (transport, client) = setup();
    transport.on(Method::Patch, "/user/visited", 204, "");

    assert!(client.mark_visited("tok").await.success);
}

#[tokio::test]
async fn test_visited_error_status_is_a_failure() {
    // A response object alone is not success; the status decides.
    let (transport, client) = setup();
    transport.on(Method::Patch, "/user/visited", 500, "oops");

    let outcome = client.mark_visited("tok").await;
    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("HTTP Error: 500"));
}

#[tokio::test]
async fn test_play_parses_points() {
    let (transport, client) = setup();
    transport.on(Method::Post, "/game/play", 200, r#"{"points": 25}"#);

    let reward = client.play("tok").await.unwrap();
    assert_eq!(reward.points, 25);
}

#[tokio::test]
async fn test_user_profile_decode_failure_keeps_raw_body() {
    let (transport, client) = setup();
    transport.on(Method::Get, "/user", 200, "not json");

    match client.get_user("tok").await.unwrap_err() {
        ApiError::Decode { body, .. } => assert_eq!(body, "not json"),
        other => panic!("expected Decode, got {:?}", other),
    }
}

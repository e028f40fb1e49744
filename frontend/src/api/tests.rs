#![cfg(not(coverage))]

use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;

use super::test_support::mock::{MockServer, DELETE, GET, POST, PUT};
use super::*;

fn user_json(id: i64, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": "alice",
        "email": "alice@example.com",
        "role": role,
        "created_at": "2025-05-01T10:00:00",
        "is_active": true
    })
}

fn trick_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "category": "Вращения",
        "description": "Описание",
        "image_url": null,
        "technique": null,
        "video_url": null,
        "created_at": "2025-01-01T00:00:00"
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

#[tokio::test]
async fn login_posts_form_credentials_and_parses_token() {
    let server = MockServer::start();
    server.stub(
        POST,
        "/api/auth/login",
        200,
        json!({
            "access_token": "jwt-token",
            "token_type": "bearer",
            "user": user_json(1, "admin")
        }),
    );

    let client = client_for(&server);
    let token = client.login("alice", "secret").await.unwrap();
    assert_eq!(token.access_token, "jwt-token");
    assert_eq!(token.user.role, Role::Admin);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let body = requests[0].body_text();
    assert!(body.contains("username=alice"));
    assert!(body.contains("password=secret"));
}

#[tokio::test]
async fn login_surfaces_server_detail_message() {
    let server = MockServer::start();
    server.stub(
        POST,
        "/api/auth/login",
        400,
        json!({ "detail": "Неверное имя пользователя или пароль" }),
    );

    let client = client_for(&server);
    let error = client.login("alice", "wrong").await.unwrap_err();
    assert_eq!(error.message, "Неверное имя пользователя или пароль");
    assert_eq!(error.status, Some(400));
}

#[tokio::test]
async fn bearer_is_attached_once_set() {
    let server = MockServer::start();
    server.stub(GET, "/api/auth/me", 200, user_json(1, "user"));

    let client = client_for(&server);
    client.set_bearer(Some("token-1".into()));
    let user = client.current_user().await.unwrap();
    assert_eq!(user.username, "alice");

    let requests = server.requests();
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer token-1")
    );
}

#[tokio::test]
async fn requests_without_bearer_carry_no_authorization_header() {
    let server = MockServer::start();
    server.stub(GET, "/api/tricks", 200, json!([]));

    let client = client_for(&server);
    let tricks = client.tricks(None).await.unwrap();
    assert!(tricks.is_empty());
    assert!(server.requests()[0].authorization.is_none());
}

#[tokio::test]
async fn unauthorized_response_fires_hook_regardless_of_call_site() {
    let server = MockServer::start();
    server.stub(GET, "/api/tricks", 401, json!({ "detail": "Not authenticated" }));

    let client = client_for(&server);
    let fired = Rc::new(Cell::new(0u32));
    let observed = fired.clone();
    client.set_unauthorized_hook(move || observed.set(observed.get() + 1));

    let error = client.tricks(None).await.unwrap_err();
    assert!(error.is_unauthorized());
    assert_eq!(fired.get(), 1);
}

#[tokio::test]
async fn category_filter_is_percent_encoded_in_query() {
    let server = MockServer::start();
    server.stub(GET, "/api/tricks", 200, json!([trick_json(1, "Method Grab")]));

    let client = client_for(&server);
    let tricks = client.tricks(Some("Big Air")).await.unwrap();
    assert_eq!(tricks.len(), 1);
    assert_eq!(
        server.requests()[0].query.as_deref(),
        Some("category=Big%20Air")
    );
}

#[tokio::test]
async fn mark_learned_parses_new_achievements() {
    let server = MockServer::start();
    server.stub(
        POST,
        "/api/users/1/progress/3",
        200,
        json!({
            "message": "Трюк отмечен как изученный",
            "new_achievements": [
                { "name": "Первые шаги", "description": "Выучен первый трюк", "icon": "🎯", "points": 10 }
            ]
        }),
    );

    let client = client_for(&server);
    let response = client.mark_trick_learned(1, 3).await.unwrap();
    assert_eq!(response.new_achievements.len(), 1);
    assert_eq!(response.new_achievements[0].points, 10);
}

#[tokio::test]
async fn moderation_serializes_lowercase_status() {
    let server = MockServer::start();
    server.stub(
        PUT,
        "/api/suggestions/tricks/7/moderate",
        200,
        json!({ "message": "ok" }),
    );

    let client = client_for(&server);
    client
        .moderate_suggestion(
            7,
            &ModerationRequest {
                status: SuggestionStatus::Approved,
                comment: Some("Неплохо".into()),
            },
        )
        .await
        .unwrap();

    let body: serde_json::Value =
        serde_json::from_str(&server.requests()[0].body_text()).unwrap();
    assert_eq!(body["status"], json!("approved"));
}

#[tokio::test]
async fn admin_bindings_round_trip() {
    let server = MockServer::start();
    server.stub(GET, "/api/admin/users", 200, json!([user_json(5, "manager")]));
    server.stub(DELETE, "/api/admin/tricks/9", 200, json!({ "message": "Трюк удален" }));
    server.stub(
        PUT,
        "/api/admin/users/5",
        200,
        user_json(5, "admin"),
    );

    let client = client_for(&server);
    let users = client.admin_users().await.unwrap();
    assert_eq!(users[0].role, Role::Manager);

    client.admin_delete_trick(9).await.unwrap();

    let updated = client
        .admin_update_user(
            5,
            &UserUpdate {
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.role, Role::Admin);
}

#[tokio::test]
async fn quiz_question_parses_options() {
    let server = MockServer::start();
    server.stub(
        GET,
        "/api/quiz/random",
        200,
        json!({
            "question": "Как называется этот трюк?",
            "image_url": null,
            "category": "Грэбы",
            "options": [
                { "id": 1, "name": "Indy" },
                { "id": 2, "name": "Melon" }
            ],
            "correct_answer_id": 2
        }),
    );

    let client = client_for(&server);
    let question = client.random_quiz_question(None).await.unwrap();
    assert_eq!(question.options.len(), 2);
    assert_eq!(question.correct_answer_id, 2);
}

#[tokio::test]
async fn leaderboard_and_stats_parse() {
    let server = MockServer::start();
    server.stub(
        GET,
        "/api/leaderboard",
        200,
        json!([
            { "user_id": 1, "username": "alice", "total_points": 120, "achievements_count": 5, "rank": 1 }
        ]),
    );
    server.stub(
        GET,
        "/api/users/1/stats",
        200,
        json!({
            "total_tricks": 40,
            "learned_tricks": 10,
            "progress_percentage": 25.0,
            "categories": {
                "Вращения": { "total": 12, "learned": 3, "percentage": 25.0 }
            }
        }),
    );

    let client = client_for(&server);
    let board = client.leaderboard(50).await.unwrap();
    assert_eq!(board[0].rank, 1);
    assert_eq!(server.requests()[0].query.as_deref(), Some("limit=50"));

    let stats = client.user_stats(1).await.unwrap();
    assert_eq!(stats.learned_tricks, 10);
    assert_eq!(stats.categories["Вращения"].learned, 3);
}

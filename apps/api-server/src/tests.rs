//! HTTP-level tests over an in-memory SQLite database.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use uuid::Uuid;

use ruya_core::domain::{InterpretationHints, InterpretationRequest};
use ruya_core::ports::{InterpretationProvider, ProviderError, TokenService};
use ruya_infra::{Argon2PasswordService, JwtConfig, JwtTokenService};

use crate::handlers::configure_routes;
use crate::state::AppState;

/// Echoes what it was asked so tests can see the hints.
struct StubInterpreter;

#[async_trait]
impl InterpretationProvider for StubInterpreter {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
        hints: &InterpretationHints,
    ) -> Result<String, ProviderError> {
        if request.title == "fail" {
            return Err(ProviderError::Transport("connection refused".to_string()));
        }
        Ok(format!(
            "{} / age {:?} / {:?}",
            request.title, hints.age, hints.marital_status
        ))
    }
}

async fn test_state() -> AppState {
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    AppState::new(
        db,
        Arc::new(JwtTokenService::new(JwtConfig::default())),
        Arc::new(Argon2PasswordService::new()),
        Arc::new(StubInterpreter),
    )
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .configure(configure_routes),
        )
        .await
    };
}

fn registration(email: &str) -> Value {
    json!({
        "firstName": "Zeynep",
        "lastName": "Kaya",
        "email": email,
        "phone": "05321112233",
        "password": "secret123",
        "age": 29,
        "gender": "female",
        "maritalStatus": "single"
    })
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

macro_rules! register_token {
    ($app:expr, $email:expr) => {{
        let (status, body) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(registration($email))
        );
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["token"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_register_returns_flat_profile_and_token() {
    let app = app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(registration("  Zeynep@Example.com "))
    );

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "zeynep@example.com");
    assert_eq!(body["maritalStatus"], "single");
    assert_eq!(body["tokenType"], "Bearer");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
}

#[actix_web::test]
async fn test_duplicate_registration_is_conflict() {
    let app = app!();
    register_token!(app, "dup@example.com");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(registration("DUP@example.com"))
    );

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["detail"], "Email already registered");
}

#[actix_web::test]
async fn test_token_for_missing_account_cannot_create_dreams() {
    let app = app!();
    let orphan = JwtTokenService::new(JwtConfig::default())
        .generate_token(Uuid::new_v4(), "gone@example.com")
        .unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/dreams")
            .insert_header(bearer(&orphan))
            .set_json(json!({
                "title": "Orphan",
                "content": "Nobody owns this",
                "interpretation": "None"
            }))
    );

    assert_eq!(status, StatusCode::UNAUTHORIZED, "{body}");
    let detail = body["detail"].as_str().unwrap().to_lowercase();
    assert!(!detail.contains("constraint"));
    assert!(!detail.contains("foreign key"));
}

#[actix_web::test]
async fn test_registration_validation() {
    let app = app!();

    let mut too_young = registration("young@example.com");
    too_young["age"] = json!(12);
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(too_young)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("age"));

    let mut odd_gender = registration("odd@example.com");
    odd_gender["gender"] = json!("unknown");
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(odd_gender)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json");
    let (status, body) = send!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_login_failures_are_indistinguishable() {
    let app = app!();
    register_token!(app, "login@example.com");

    let (wrong_status, wrong_body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "login@example.com", "password": "nope-nope"}))
    );
    let (unknown_status, unknown_body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "ghost@example.com", "password": "secret123"}))
    );

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, unknown_status);
    assert_eq!(wrong_body, unknown_body);
}

#[actix_web::test]
async fn test_protected_routes_reject_bad_credentials() {
    let app = app!();

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/dreams"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/auth/profile")
            .insert_header(bearer("not-a-jwt"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams")
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_profile_update_merges_fields() {
    let app = app!();
    let token = register_token!(app, "profile@example.com");

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/auth/profile")
            .insert_header(bearer(&token))
            .set_json(json!({"age": 31, "maritalStatus": "married"}))
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["age"], 31);
    assert_eq!(body["maritalStatus"], "married");
    assert_eq!(body["firstName"], "Zeynep");

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri("/api/auth/profile")
            .insert_header(bearer(&token))
            .set_json(json!({"password": "new-secret"}))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "profile@example.com", "password": "new-secret"}))
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_dream_lifecycle_scenario() {
    let app = app!();
    register_token!(app, "u1@example.com");

    let (status, login) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "u1@example.com", "password": "secret123"}))
    );
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().unwrap().to_string();

    let (status, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/dreams")
            .insert_header(bearer(&token))
            .set_json(json!({
                "title": "Flight",
                "content": "I flew over clouds",
                "interpretation": "A sign of relief."
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let dream = &created["data"];
    let id = dream["id"].as_str().unwrap().to_string();
    assert_eq!(dream["category"], "General");
    assert_eq!(dream["isFavorite"], false);

    let (_, listed) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams")
            .insert_header(bearer(&token))
    );
    assert_eq!(listed["count"], 1);
    assert_eq!(listed["data"][0]["id"], id.as_str());
    assert_eq!(listed["data"][0]["isFavorite"], false);

    let (status, _) = send!(
        app,
        test::TestRequest::patch()
            .uri(&format!("/api/dreams/{id}/favorite"))
            .insert_header(bearer(&token))
            .set_json(json!({"isFavorite": true}))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/dreams/{id}"))
            .insert_header(bearer(&token))
    );
    assert_eq!(fetched["data"]["isFavorite"], true);
    assert_eq!(fetched["data"]["title"], "Flight");
    assert_eq!(fetched["data"]["content"], "I flew over clouds");
    assert_eq!(fetched["data"]["interpretation"], "A sign of relief.");

    let (status, deleted) = send!(
        app,
        test::TestRequest::delete()
            .uri(&format!("/api/dreams/{id}"))
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Dream deleted");

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/dreams/{id}"))
            .insert_header(bearer(&token))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams")
            .insert_header(bearer(&token))
    );
    assert_eq!(listed["count"], 0);
    assert_eq!(listed["data"], json!([]));
}

#[actix_web::test]
async fn test_other_users_dreams_are_not_found() {
    let app = app!();
    let alice = register_token!(app, "alice@example.com");
    let bob = register_token!(app, "bob@example.com");

    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/dreams")
            .insert_header(bearer(&alice))
            .set_json(json!({"title": "Secret", "content": "Private", "interpretation": "..."}))
    );
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/dreams/{id}");

    let (get_status, get_body) = send!(
        app,
        test::TestRequest::get().uri(&uri).insert_header(bearer(&bob))
    );
    let (put_status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&uri)
            .insert_header(bearer(&bob))
            .set_json(json!({"title": "Mine now"}))
    );
    let (delete_status, _) = send!(
        app,
        test::TestRequest::delete().uri(&uri).insert_header(bearer(&bob))
    );
    let (absent_status, absent_body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/dreams/{}", uuid::Uuid::new_v4()))
            .insert_header(bearer(&bob))
    );

    assert_eq!(get_status, StatusCode::NOT_FOUND);
    assert_eq!(put_status, StatusCode::NOT_FOUND);
    assert_eq!(delete_status, StatusCode::NOT_FOUND);
    assert_eq!(get_body, absent_body);
    assert_eq!(absent_status, StatusCode::NOT_FOUND);

    let (_, bobs) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams")
            .insert_header(bearer(&bob))
    );
    assert_eq!(bobs["count"], 0);

    let (_, still_there) = send!(
        app,
        test::TestRequest::get().uri(&uri).insert_header(bearer(&alice))
    );
    assert_eq!(still_there["data"]["title"], "Secret");
}

#[actix_web::test]
async fn test_invalid_dream_is_rejected_and_not_stored() {
    let app = app!();
    let token = register_token!(app, "empty@example.com");

    for payload in [
        json!({"title": "", "content": "x", "interpretation": "y"}),
        json!({"title": "x", "content": "  ", "interpretation": "y"}),
        json!({"title": "x", "content": "y"}),
    ] {
        let (status, _) = send!(
            app,
            test::TestRequest::post()
                .uri("/api/dreams")
                .insert_header(bearer(&token))
                .set_json(payload)
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (_, listed) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams")
            .insert_header(bearer(&token))
    );
    assert_eq!(listed["count"], 0);
}

#[actix_web::test]
async fn test_malformed_dream_id_is_not_found() {
    let app = app!();
    let token = register_token!(app, "path@example.com");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams/not-a-uuid")
            .insert_header(bearer(&token))
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Dream not found");
}

#[actix_web::test]
async fn test_list_filters() {
    let app = app!();
    let token = register_token!(app, "filters@example.com");

    for (title, category) in [("Sea voyage", "Water"), ("Mountain", "Nature")] {
        send!(
            app,
            test::TestRequest::post()
                .uri("/api/dreams")
                .insert_header(bearer(&token))
                .set_json(json!({
                    "title": title,
                    "content": "dreamt",
                    "category": category,
                    "interpretation": "..."
                }))
        );
    }

    let (_, water) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams?category=Water")
            .insert_header(bearer(&token))
    );
    assert_eq!(water["count"], 1);
    assert_eq!(water["data"][0]["title"], "Sea voyage");

    let (_, searched) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams?q=MOUNT")
            .insert_header(bearer(&token))
    );
    assert_eq!(searched["count"], 1);

    let (_, favorites) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams?favorite=true")
            .insert_header(bearer(&token))
    );
    assert_eq!(favorites["count"], 0);
}

#[actix_web::test]
async fn test_interpretation_uses_profile_hints() {
    let app = app!();
    let token = register_token!(app, "hints@example.com");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/interpretations")
            .insert_header(bearer(&token))
            .set_json(json!({"title": "Rain", "description": "Warm rain at night"}))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["interpretation"],
        "Rain / age Some(29) / Some(Single)"
    );
}

#[actix_web::test]
async fn test_interpretation_failure_is_retryable() {
    let app = app!();
    let token = register_token!(app, "retry@example.com");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/interpretations")
            .insert_header(bearer(&token))
            .set_json(json!({"title": "fail", "description": "anything"}))
    );

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["retryable"], true);
    assert!(!body["detail"].as_str().unwrap().contains("refused"));
}

#[actix_web::test]
async fn test_health_reports_database() {
    let app = app!();

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

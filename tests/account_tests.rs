// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration and login flows.

use wheyt::config::Config;
use wheyt::controllers::login::LOGIN_FAILED;
use wheyt::controllers::Outcome;
use wheyt::error::AppError;
use wheyt::models::Registration;
use wheyt::navigation::Route;
use wheyt::services::AuthSession;

mod common;
use common::{serve_once, TestApp};

fn registration() -> Registration {
    Registration {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        password: "x".to_string(),
        height: "180".to_string(),
        starting_weight: "100".to_string(),
        desired_weight: "80".to_string(),
    }
}

#[tokio::test]
async fn test_registration_creates_profile_document() {
    let mut app = TestApp::new(Route::Register);
    let mut register = app.state.register();
    register.form = registration();

    assert_eq!(register.create_account().await, Outcome::Applied);
    assert_eq!(app.nav().current(), Route::Login);
    assert!(app.drain_notices().is_empty());

    let uid = app.state.auth.current().expect("new user signed in").uid;
    let profile = app.docs.profile(&uid).expect("profile written");
    assert_eq!(profile.weight_history, vec!["100"]);
    assert_eq!(profile.entered_current_weight, "100");
    assert_eq!(profile.entered_starting_weight, "100");
    assert_eq!(profile.entered_desired_weight, "80");
    assert_eq!(profile.entered_email, "a@b.com");
    assert_eq!(profile.entered_name, "A");
    assert_eq!(profile.entered_height, "180");
}

#[tokio::test]
async fn test_duplicate_registration_shows_error_notice() {
    let mut app = TestApp::new(Route::Register);
    let mut register = app.state.register();
    register.form = registration();
    register.create_account().await;
    app.drain_notices();
    app.nav().navigate(Route::Register);

    assert_eq!(register.create_account().await, Outcome::Failed);
    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title.as_deref(), Some("Account"));
    assert_eq!(notices[0].message, "Email exists");
    assert_eq!(app.nav().current(), Route::Register);
    assert_eq!(app.docs.writes(), 1);
}

#[tokio::test]
async fn test_profile_write_failure_shows_error_notice() {
    let mut app = TestApp::new(Route::Register);
    app.docs.fail_writes(true);
    let mut register = app.state.register();
    register.form = registration();

    assert_eq!(register.create_account().await, Outcome::Failed);
    assert_eq!(app.drain_notices().len(), 1);
    assert_eq!(app.nav().current(), Route::Register);
}

#[tokio::test]
async fn test_login_then_home() {
    let (mut app, _identity) = TestApp::new_with_account().await;
    app.state.auth.sign_out();
    app.nav().navigate(Route::Login);

    let mut login = app.state.login();
    login.email = " a@b.com ".to_string();
    login.password = "x".to_string();

    assert_eq!(login.login().await, Outcome::Applied);
    assert_eq!(app.nav().current(), Route::Home);
    assert!(app.state.auth.current().is_some());
    assert!(app.drain_notices().is_empty());
}

#[tokio::test]
async fn test_wrong_password_shows_login_notice() {
    let (mut app, _identity) = TestApp::new_with_account().await;
    app.state.auth.sign_out();
    app.nav().navigate(Route::Login);

    let mut login = app.state.login();
    login.email = "a@b.com".to_string();
    login.password = "nope".to_string();

    assert_eq!(login.login().await, Outcome::Failed);
    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, LOGIN_FAILED);
    assert_eq!(app.nav().current(), Route::Login);
    assert!(app.state.auth.current().is_none());
}

#[tokio::test]
async fn test_create_account_link() {
    let app = TestApp::new(Route::Login);
    app.state.login().go_to_register();
    assert_eq!(app.nav().current(), Route::Register);
}

// ═══════════════════════════════════════════════════════════════════════════
// FIREBASE AUTH REST
// ═══════════════════════════════════════════════════════════════════════════

fn firebase_session(base_url: String) -> AuthSession {
    let config = Config {
        firebase_auth_url: base_url,
        ..Config::test_default()
    };
    AuthSession::firebase(&config)
}

#[tokio::test]
async fn test_firebase_sign_in_request_and_identity() {
    let (base_url, request) = serve_once(
        200,
        r#"{"kind":"identitytoolkit#VerifyPasswordResponse","localId":"uid-42","email":"a@b.com","idToken":"t"}"#,
    )
    .await;
    let auth = firebase_session(base_url);

    let identity = auth.sign_in("a@b.com", "x").await.unwrap();
    assert_eq!(identity.uid, "uid-42");
    assert_eq!(auth.current(), Some(identity));

    let request = request.await.unwrap();
    assert!(
        request.starts_with("POST /accounts:signInWithPassword?key=test_api_key "),
        "unexpected request: {request}"
    );
    assert!(request.contains(r#""returnSecureToken":true"#));
}

#[tokio::test]
async fn test_firebase_rejection_is_credential_error() {
    let (base_url, _request) =
        serve_once(400, r#"{"error":{"code":400,"message":"INVALID_PASSWORD"}}"#).await;
    let auth = firebase_session(base_url);

    let err = auth.sign_in("a@b.com", "nope").await.unwrap_err();
    assert!(err.is_credential_error());
    assert!(auth.current().is_none());
}

#[tokio::test]
async fn test_firebase_malformed_account_is_internal_error() {
    let (base_url, _request) = serve_once(200, r#"{"kind":"unexpected"}"#).await;
    let auth = firebase_session(base_url);

    let err = auth.create_identity("a@b.com", "x").await.unwrap_err();
    assert!(matches!(err, AppError::Internal(_)), "{err:?}");
    assert!(err.to_string().contains("Malformed accounts:signUp response"));
    assert!(!err.is_credential_error());
    assert_eq!(err.notice().title.as_deref(), Some("Error"));
    assert!(auth.current().is_none());
}

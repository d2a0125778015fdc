// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! News feed on the Home screen.

use wheyt::controllers::{Outcome, ViewState};
use wheyt::error::AppError;
use wheyt::navigation::Route;
use wheyt::services::NewsClient;

mod common;
use common::{serve_once, TestApp};

#[tokio::test]
async fn test_unreachable_feed_fails_with_one_notice() {
    let mut app = TestApp::new(Route::Home);
    let home = app.state.home();
    assert_eq!(home.state(), ViewState::Uninitialized);

    assert_eq!(home.load_feed().await, Outcome::Failed);

    assert!(matches!(home.state(), ViewState::Failed(_)));
    let notices = app.drain_notices();
    assert_eq!(notices, vec![AppError::NewsApi(String::new()).notice()]);
}

#[tokio::test]
async fn test_feed_is_not_identity_gated() {
    let mut app = TestApp::new(Route::Home);
    let home = app.state.home();

    home.load_feed().await;

    // Only the news failure, never "User not signed in"
    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_ne!(notices[0].message, "User not signed in");
    assert_eq!(app.docs.calls(), 0);
}

#[tokio::test]
async fn test_feed_request_and_ready_state() {
    let (base_url, request) = serve_once(
        200,
        r#"{"status":"ok","totalResults":2,"articles":[
            {"title":"Squats","description":"Legs day","urlToImage":"https://img/1.png"},
            {"title":"Rest days","description":null,"urlToImage":null}
        ]}"#,
    )
    .await;

    let mut app = TestApp::new(Route::Home);
    app.state.news = NewsClient::new(base_url, app.state.config.news_api_key.clone());
    let home = app.state.home();

    assert_eq!(home.load_feed().await, Outcome::Applied);

    let request = request.await.unwrap();
    assert!(
        request.starts_with("GET /everything?q=fitness&apiKey=test_news_key "),
        "unexpected request: {request}"
    );

    let state = home.state();
    let articles = state.ready().expect("feed ready");
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title.as_deref(), Some("Squats"));
    assert_eq!(articles[0].description.as_deref(), Some("Legs day"));
    assert_eq!(articles[0].url_to_image.as_deref(), Some("https://img/1.png"));
    assert_eq!(articles[1].description, None);
    assert!(app.drain_notices().is_empty());
}

#[tokio::test]
async fn test_feed_error_status_fails_with_notice() {
    let (base_url, _request) =
        serve_once(401, r#"{"status":"error","code":"apiKeyInvalid"}"#).await;

    let mut app = TestApp::new(Route::Home);
    app.state.news = NewsClient::new(base_url, "bad".to_string());
    let home = app.state.home();

    assert_eq!(home.load_feed().await, Outcome::Failed);
    match home.state() {
        ViewState::Failed(msg) => assert!(msg.contains("401"), "{msg}"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(app.drain_notices().len(), 1);
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wheyt client session
//!
//! Boots the client against Firebase: loads the news feed and, when
//! credentials are configured, signs in and loads the diary and progress
//! screens once. Notices are written to the log.

use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wheyt::{
    config::Config,
    controllers::{Outcome, ViewState},
    db::ProfileStore,
    navigation::{Navigator, Route},
    services::{AuthSession, NewsClient},
    AppState,
};

/// How long to wait for a focused screen to settle.
const SCREEN_TIMEOUT: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(project = %config.gcp_project_id, "Starting Wheyt client");

    // Initialize Firestore database
    let store = ProfileStore::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    let (navigator, mut notices) = Navigator::new(Route::Login);
    let state = AppState {
        auth: AuthSession::firebase(&config),
        news: NewsClient::from_config(&config),
        config: config.clone(),
        store,
        navigator: navigator.clone(),
    };

    // Headless presenter: log each notice and acknowledge it
    let presenter = navigator.clone();
    tokio::spawn(async move {
        while let Some(notice) = notices.recv().await {
            tracing::info!(title = ?notice.title, message = %notice.message, "Notice");
            presenter.acknowledge(&notice);
        }
    });

    if let Some((email, password)) = &config.sign_in {
        let mut login = state.login();
        login.email = email.clone();
        login.password = password.clone();
        if login.login().await != Outcome::Applied {
            tracing::warn!("Sign-in failed, continuing signed out");
        }
    }

    let home = state.home();
    if home.load_feed().await == Outcome::Applied {
        if let ViewState::Ready(articles) = home.state() {
            for article in articles.iter().take(5) {
                tracing::info!(title = ?article.title, "Article");
            }
        }
    }

    if state.auth.current().is_none() {
        tracing::info!("Not signed in, skipping per-user screens");
        return Ok(());
    }

    let diary = state.diary();
    let diary_mount = diary.mount(navigator.focus_events(Route::Diary));
    navigator.navigate(Route::Diary);
    if let Some(entries) = settle(diary.subscribe()).await {
        tracing::info!(count = entries.len(), "Diary loaded");
    }
    diary_mount.unmount();

    let progress = state.progress();
    let progress_mount = progress.mount(navigator.focus_events(Route::Progress));
    navigator.navigate(Route::Progress);
    if let Some(view) = settle(progress.subscribe()).await {
        tracing::info!(history = ?view.weight_history, "{}", view.metrics.summary());
    }
    progress_mount.unmount();

    Ok(())
}

/// Wait for a screen to leave the loading states.
async fn settle<T: Clone>(mut rx: tokio::sync::watch::Receiver<ViewState<T>>) -> Option<T> {
    let waited = tokio::time::timeout(
        SCREEN_TIMEOUT,
        rx.wait_for(|s| matches!(s, ViewState::Ready(_) | ViewState::Failed(_))),
    )
    .await;

    match waited {
        Ok(Ok(state)) => state.ready().cloned(),
        _ => {
            tracing::warn!("Screen did not settle");
            None
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wheyt=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

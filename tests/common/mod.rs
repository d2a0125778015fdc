// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use wheyt::config::Config;
use wheyt::controllers::ViewState;
use wheyt::db::{MemoryDocs, ProfileStore};
use wheyt::models::{Identity, UserProfile};
use wheyt::navigation::{Navigator, Notice, NoticeReceiver, Route};
use wheyt::services::{AuthSession, NewsClient};
use wheyt::AppState;

pub const EMAIL: &str = "a@b.com";
pub const PASSWORD: &str = "x";

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test store connection (emulator).
#[allow(dead_code)]
pub async fn test_store() -> ProfileStore {
    ProfileStore::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// App wired to in-memory documents and local accounts.
#[allow(dead_code)]
pub struct TestApp {
    pub state: AppState,
    pub docs: MemoryDocs,
    pub notices: NoticeReceiver,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new(initial: Route) -> Self {
        let config = Config::test_default();
        let docs = MemoryDocs::new();
        let (navigator, notices) = Navigator::new(initial);

        let state = AppState {
            store: ProfileStore::new_memory(docs.clone()),
            auth: AuthSession::new_local(),
            // Nothing listens on the discard port, so every request fails fast
            news: NewsClient::new("http://127.0.0.1:9".to_string(), config.news_api_key.clone()),
            config,
            navigator,
        };

        Self {
            state,
            docs,
            notices,
        }
    }

    /// App with a signed-in account but no profile document.
    pub async fn new_with_account() -> (Self, Identity) {
        let app = Self::new(Route::Home);
        let identity = app
            .state
            .auth
            .create_identity(EMAIL, PASSWORD)
            .await
            .expect("local account creation");
        (app, identity)
    }

    /// App with a registered, signed-in user whose profile is 100 → 85, goal 80.
    pub async fn signed_in(initial: Route) -> (Self, Identity) {
        let (app, identity) = Self::new_with_account().await;
        app.nav().navigate(initial);
        app.docs
            .seed_profile(&identity.uid, profile("100", "85", "80", &["100", "85"]));
        (app, identity)
    }

    pub fn nav(&self) -> &Navigator {
        &self.state.navigator
    }

    /// Every notice queued so far.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        let mut out = Vec::new();
        while let Ok(notice) = self.notices.try_recv() {
            out.push(notice);
        }
        out
    }
}

#[allow(dead_code)]
pub fn profile(start: &str, current: &str, goal: &str, history: &[&str]) -> UserProfile {
    UserProfile {
        entered_email: EMAIL.to_string(),
        entered_name: "A".to_string(),
        entered_height: "180".to_string(),
        entered_starting_weight: start.to_string(),
        entered_current_weight: current.to_string(),
        entered_desired_weight: goal.to_string(),
        weight_history: history.iter().map(|w| w.to_string()).collect(),
    }
}

/// Local HTTP endpoint that answers exactly one request with `status` and a
/// JSON `body`.
///
/// Returns the base URL and a handle resolving to the raw request (head and
/// body) as received.
#[allow(dead_code)]
pub async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind local endpoint");
    let addr = listener.local_addr().expect("local endpoint address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        let head_end = loop {
            let n = socket.read(&mut chunk).await.expect("read request");
            assert!(n > 0, "connection closed before request head");
            request.extend_from_slice(&chunk[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&request[..head_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while request.len() < head_end + content_length {
            let n = socket.read(&mut chunk).await.expect("read request body");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}

/// Wait until the view state satisfies `pred`, failing the test after 2s.
#[allow(dead_code)]
pub async fn wait_for_state<T, F>(mut rx: watch::Receiver<ViewState<T>>, pred: F) -> ViewState<T>
where
    T: Clone,
    F: FnMut(&ViewState<T>) -> bool,
{
    let state = tokio::time::timeout(Duration::from_secs(2), rx.wait_for(pred))
        .await
        .expect("view state never settled")
        .expect("controller dropped")
        .clone();
    state
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-screen view-state controllers.
//!
//! Every per-user cycle follows the same order:
//! 1. Read the current identity (no identity: one notice, no remote call)
//! 2. Issue one remote read or write
//! 3. Publish the result as local view state
//! 4. Navigate or notify
//!
//! Fetching screens share [`FetchController`]; the form screens each have
//! their own controller built on [`require_identity`] and
//! [`submit_for_current_user`].

pub mod add_food;
pub mod diary;
pub mod home;
pub mod login;
pub mod profile;
pub mod progress;
pub mod register;
pub mod update_weight;

pub use add_food::{AddFoodController, FoodForm};
pub use diary::{DiaryController, DiaryScreen};
pub use home::HomeController;
pub use login::LoginController;
pub use profile::{ProfileController, ProfileScreen};
pub use progress::{ProgressController, ProgressScreen};
pub use register::RegisterController;
pub use update_weight::{is_valid_weight, UpdateWeightController};

use crate::error::{AppError, Result};
use crate::models::Identity;
use crate::navigation::{FocusEvents, Navigator, Route};
use crate::services::AuthSession;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Local view state of a screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet
    Uninitialized,
    /// A request is in flight
    Loading,
    Ready(T),
    /// The last request was rejected
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// How one controller cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Remote call succeeded and its result was applied
    Applied,
    /// No identity; the user was told and nothing was sent
    NotSignedIn,
    /// Input rejected before any remote call
    Invalid,
    /// Remote call rejected
    Failed,
    /// A newer request started before this one finished; result dropped
    Stale,
    /// The screen was torn down before the result arrived; result dropped
    Unmounted,
}

/// Data source behind a fetching screen.
pub trait Screen: Send + Sync + 'static {
    type Data: Clone + Send + Sync + 'static;

    /// Route whose focus re-runs the fetch.
    const ROUTE: Route;

    /// The one remote read for `identity`.
    fn load(&self, identity: &Identity) -> impl Future<Output = Result<Self::Data>> + Send;
}

/// Current identity, or one "User not signed in" notice.
pub fn require_identity(auth: &AuthSession, navigator: &Navigator) -> Option<Identity> {
    let identity = auth.current();
    if identity.is_none() {
        tracing::warn!("Per-user operation attempted while signed out");
        navigator.notify(AppError::NotSignedIn.notice());
    }
    identity
}

/// Identity-gated create: run `writer` for the current user and navigate to
/// `target` once it succeeds. Rejections are logged only.
pub async fn submit_for_current_user<F, Fut>(
    auth: &AuthSession,
    navigator: &Navigator,
    target: Route,
    writer: F,
) -> Outcome
where
    F: FnOnce(Identity) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let Some(identity) = require_identity(auth, navigator) else {
        return Outcome::NotSignedIn;
    };

    let uid = identity.uid.clone();
    match writer(identity).await {
        Ok(()) => {
            navigator.navigate(target);
            Outcome::Applied
        }
        Err(e) => {
            tracing::error!(uid = %uid, error = %e, "Write rejected");
            Outcome::Failed
        }
    }
}

/// Identity-gated fetch shared by the Diary, Progress and Profile screens.
///
/// State is published on a watch channel; renderers subscribe to it. Each
/// request takes a new generation number and its result is applied only if
/// no newer request has started and the screen is still mounted.
pub struct FetchController<S: Screen> {
    inner: Arc<Shared<S>>,
}

struct Shared<S: Screen> {
    screen: S,
    auth: AuthSession,
    navigator: Navigator,
    state: watch::Sender<ViewState<S::Data>>,
    generation: AtomicU64,
    mounted: Arc<AtomicBool>,
}

impl<S: Screen> Clone for FetchController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Screen> FetchController<S> {
    /// Controller for a freshly mounted screen.
    pub fn new(screen: S, auth: AuthSession, navigator: Navigator) -> Self {
        let (state, _) = watch::channel(ViewState::Uninitialized);
        Self {
            inner: Arc::new(Shared {
                screen,
                auth,
                navigator,
                state,
                generation: AtomicU64::new(0),
                mounted: Arc::new(AtomicBool::new(true)),
            }),
        }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> ViewState<S::Data> {
        self.inner.state.borrow().clone()
    }

    /// Watch view state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<S::Data>> {
        self.inner.state.subscribe()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::SeqCst)
    }

    /// Run one fetch cycle for whoever is signed in now.
    pub async fn fetch_for_current_user(&self) -> Outcome {
        let inner = &self.inner;
        if !inner.mounted.load(Ordering::SeqCst) {
            tracing::debug!(screen = ?S::ROUTE, "Screen unmounted, not fetching");
            return Outcome::Unmounted;
        }

        let generation = inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        inner.state.send_replace(ViewState::Loading);

        let Some(identity) = require_identity(&inner.auth, &inner.navigator) else {
            return Outcome::NotSignedIn;
        };

        tracing::debug!(screen = ?S::ROUTE, uid = %identity.uid, generation, "Fetching");
        let result = inner.screen.load(&identity).await;

        if !inner.mounted.load(Ordering::SeqCst) {
            tracing::debug!(screen = ?S::ROUTE, generation, "Screen unmounted, dropping result");
            return Outcome::Unmounted;
        }
        if inner.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(screen = ?S::ROUTE, generation, "Newer fetch started, dropping result");
            return Outcome::Stale;
        }

        match result {
            Ok(data) => {
                inner.state.send_replace(ViewState::Ready(data));
                Outcome::Applied
            }
            Err(e) => {
                tracing::error!(screen = ?S::ROUTE, uid = %identity.uid, error = %e, "Fetch rejected");
                inner.state.send_replace(ViewState::Failed(e.to_string()));
                Outcome::Failed
            }
        }
    }

    /// Register the focus trigger: fetch every time the screen gains focus,
    /// and again on identity changes while it is focused.
    ///
    /// The returned handle deregisters the trigger when unmounted or dropped.
    pub fn mount(&self, mut focus: FocusEvents) -> Mounted {
        self.inner.mounted.store(true, Ordering::SeqCst);

        let controller = self.clone();
        let mut identity = self.inner.auth.subscribe();
        identity.borrow_and_update();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    focused = focus.next() => {
                        if !focused {
                            break;
                        }
                        controller.spawn_fetch();
                    }
                    changed = identity.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        if controller.inner.navigator.current() == S::ROUTE {
                            controller.spawn_fetch();
                        }
                    }
                }
            }
        });

        tracing::debug!(screen = ?S::ROUTE, "Focus trigger registered");
        Mounted {
            route: S::ROUTE,
            mounted: self.inner.mounted.clone(),
            task: Some(task),
        }
    }

    /// Start a fetch without waiting for it. Overlapping fetches are allowed;
    /// the generation check keeps only the newest.
    fn spawn_fetch(&self) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.fetch_for_current_user().await;
        });
    }
}

/// A mounted screen's focus trigger.
pub struct Mounted {
    route: Route,
    mounted: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl Mounted {
    /// Tear the screen down. In-flight fetches still finish but their
    /// results are dropped.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.mounted.store(false, Ordering::SeqCst);
            tracing::debug!(screen = ?self.route, "Focus trigger removed");
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.teardown();
    }
}

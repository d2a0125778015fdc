// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route graph, focus signal and user-facing notices.
//!
//! Controllers never render anything. They express their side effects as
//! messages: a route change on the [`Navigator`] or a [`Notice`] pushed onto
//! the notice queue for whatever shell is presenting the app.

use std::sync::Arc;
use tokio::sync::{mpsc, watch};

/// Every screen the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Home,
    Diary,
    AddFoodToDiary,
    Progress,
    Profile,
    UpdateWeight,
}

impl Route {
    /// Routes reachable from the bottom tab bar.
    pub const TABS: [Route; 4] = [Route::Home, Route::Diary, Route::Progress, Route::Profile];

    /// Header title shown above the screen.
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Wheyt",
            Route::Register => "Register",
            Route::Home => "Home",
            Route::Diary => "Diary",
            Route::AddFoodToDiary => "Add Food To Diary",
            Route::Progress => "Progress",
            Route::Profile => "Profile",
            Route::UpdateWeight => "Update Weight",
        }
    }

    /// Whether the screen is pushed on top of the tab bar rather than being a tab.
    pub fn is_stacked(self) -> bool {
        matches!(self, Route::AddFoodToDiary | Route::UpdateWeight)
    }
}

/// A blocking user-visible message, optionally followed by a navigation once
/// the user acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: Option<String>,
    pub message: String,
    /// Route to navigate to when the notice is acknowledged.
    pub then: Option<Route>,
}

impl Notice {
    /// Untitled alert.
    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            then: None,
        }
    }

    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            message: message.into(),
            then: None,
        }
    }

    /// Navigate to `route` once the user dismisses the notice.
    pub fn then_navigate(mut self, route: Route) -> Self {
        self.then = Some(route);
        self
    }
}

/// Receiving end of the notice queue, held by the presenting shell.
pub type NoticeReceiver = mpsc::UnboundedReceiver<Notice>;

/// Screen graph and transition dispatch.
#[derive(Clone)]
pub struct Navigator {
    route: Arc<watch::Sender<Route>>,
    notices: mpsc::UnboundedSender<Notice>,
}

impl Navigator {
    /// Create a navigator positioned on `initial`.
    pub fn new(initial: Route) -> (Self, NoticeReceiver) {
        let (route, _) = watch::channel(initial);
        let (notices, rx) = mpsc::unbounded_channel();
        (
            Self {
                route: Arc::new(route),
                notices,
            },
            rx,
        )
    }

    /// Route currently on screen.
    pub fn current(&self) -> Route {
        *self.route.borrow()
    }

    /// Transition to `route`. Navigating to the current route still counts as
    /// a focus event for that screen.
    pub fn navigate(&self, route: Route) {
        let previous = self.route.send_replace(route);
        tracing::debug!(from = ?previous, to = ?route, "Navigate");
    }

    /// Queue a notice for the user.
    pub fn notify(&self, notice: Notice) {
        tracing::debug!(message = %notice.message, "Notice");
        if self.notices.send(notice).is_err() {
            tracing::warn!("Notice dropped, no presenter attached");
        }
    }

    /// The user dismissed `notice`: run its follow-up navigation, if any.
    pub fn acknowledge(&self, notice: &Notice) {
        if let Some(route) = notice.then {
            self.navigate(route);
        }
    }

    /// Focus events for one screen.
    pub fn focus_events(&self, route: Route) -> FocusEvents {
        let mut rx = self.route.subscribe();
        // The screen being mounted while already visible is its first focus.
        rx.mark_changed();
        FocusEvents { route, rx }
    }
}

/// Stream of "this screen became visible" signals.
pub struct FocusEvents {
    route: Route,
    rx: watch::Receiver<Route>,
}

impl FocusEvents {
    pub fn route(&self) -> Route {
        self.route
    }

    /// Wait until the screen gains focus. Returns `false` once the navigator
    /// is gone.
    pub async fn next(&mut self) -> bool {
        loop {
            if self.rx.changed().await.is_err() {
                return false;
            }
            if *self.rx.borrow_and_update() == self.route {
                return true;
            }
        }
    }

    /// Whether the screen is on top right now.
    pub fn is_focused(&self) -> bool {
        *self.rx.borrow() == self.route
    }
}

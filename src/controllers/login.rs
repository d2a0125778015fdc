// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login screen.

use crate::controllers::Outcome;
use crate::navigation::{Navigator, Notice, Route};
use crate::services::AuthSession;

/// Shown for any sign-in rejection.
pub const LOGIN_FAILED: &str = "Incorrect Username or Password. Please try again.";

pub struct LoginController {
    auth: AuthSession,
    navigator: Navigator,
    pub email: String,
    pub password: String,
}

impl LoginController {
    pub fn new(auth: AuthSession, navigator: Navigator) -> Self {
        Self {
            auth,
            navigator,
            email: String::new(),
            password: String::new(),
        }
    }

    /// "Login" pressed.
    pub async fn login(&self) -> Outcome {
        match self.auth.sign_in(self.email.trim(), &self.password).await {
            Ok(_) => {
                self.navigator.navigate(Route::Home);
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(error = %e, credentials = e.is_credential_error(), "Sign-in rejected");
                self.navigator.notify(Notice::alert(LOGIN_FAILED));
                Outcome::Failed
            }
        }
    }

    /// "CREATE A NEW ACCOUNT" pressed.
    pub fn go_to_register(&self) {
        self.navigator.navigate(Route::Register);
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration screen: creates the account and its profile document.

use crate::controllers::Outcome;
use crate::db::ProfileStore;
use crate::models::{Registration, UserProfile};
use crate::navigation::{Navigator, Route};
use crate::services::AuthSession;

pub struct RegisterController {
    store: ProfileStore,
    auth: AuthSession,
    navigator: Navigator,
    pub form: Registration,
}

impl RegisterController {
    pub fn new(store: ProfileStore, auth: AuthSession, navigator: Navigator) -> Self {
        Self {
            store,
            auth,
            navigator,
            form: Registration::default(),
        }
    }

    /// "CREATE AN ACCOUNT" pressed.
    ///
    /// Creates the identity, writes the initial profile, then sends the user
    /// to Login. Any failure becomes one error notice.
    pub async fn create_account(&self) -> Outcome {
        let identity = match self
            .auth
            .create_identity(self.form.email.trim(), &self.form.password)
            .await
        {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "Account creation rejected");
                self.navigator.notify(e.notice());
                return Outcome::Failed;
            }
        };

        let profile = UserProfile::from_registration(&self.form);
        if let Err(e) = self.store.set_profile(&identity.uid, &profile).await {
            tracing::error!(uid = %identity.uid, error = %e, "Failed to write new profile");
            self.navigator.notify(e.notice());
            return Outcome::Failed;
        }

        tracing::info!(uid = %identity.uid, "Profile created");
        self.navigator.navigate(Route::Login);
        Outcome::Applied
    }
}

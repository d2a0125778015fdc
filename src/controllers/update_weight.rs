// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weight update screen.
//!
//! Read-modify-write of the profile document:
//! 1. Validate the typed weight (no remote call if invalid). Surrounding
//!    whitespace is trimmed before the weight is stored; the rest of the
//!    input is kept as typed, so `"72kg"` is stored as `"72kg"`.
//! 2. Read the profile for the signed-in user
//! 3. Append the weight to the history read in step 2
//! 4. Write history and current weight back in one update
//!
//! Steps 2-4 are not a transaction. Two devices updating the same account at
//! once can both read the same history, and the later write drops the other
//! device's entry.

use crate::controllers::{require_identity, Outcome};
use crate::db::{profile_path, ProfileStore};
use crate::error::AppError;
use crate::navigation::{Navigator, Notice, Route};
use crate::services::AuthSession;

/// Shown when the typed weight fails validation.
pub const INVALID_WEIGHT: &str = "Please enter a weight value that is greater than 0.";

/// A weight is accepted when it is non-empty and its leading integer
/// (optional sign, then digits; trailing text ignored) is greater than zero.
///
/// `"72"`, `"+5"` and `"72kg"` pass; `""`, `"0"`, `"-5"` and `"abc"` do not.
pub fn is_valid_weight(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }

    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    // No digits means no integer; all zeros means zero.
    let positive_magnitude = digits.bytes().any(|b| b != b'0');
    !negative && positive_magnitude
}

pub struct UpdateWeightController {
    store: ProfileStore,
    auth: AuthSession,
    navigator: Navigator,
    pub new_weight: String,
    pub entered_date: String,
}

impl UpdateWeightController {
    pub fn new(store: ProfileStore, auth: AuthSession, navigator: Navigator) -> Self {
        Self {
            store,
            auth,
            navigator,
            new_weight: String::new(),
            entered_date: String::new(),
        }
    }

    /// "Update Weight" pressed.
    ///
    /// On success the inputs are cleared and a confirmation notice is queued;
    /// acknowledging it navigates to Progress.
    pub async fn update_weight(&mut self) -> Outcome {
        if !is_valid_weight(&self.new_weight) {
            tracing::debug!(input = %self.new_weight, "Rejected weight input");
            self.navigator.notify(Notice::alert(INVALID_WEIGHT));
            return Outcome::Invalid;
        }

        let Some(identity) = require_identity(&self.auth, &self.navigator) else {
            return Outcome::NotSignedIn;
        };
        let uid = identity.uid;
        let weight = self.new_weight.trim().to_string();

        if let Err(e) = self.append_weight(&uid, &weight).await {
            tracing::error!(uid = %uid, error = %e, "Weight update failed");
            return Outcome::Failed;
        }

        tracing::info!(uid = %uid, weight = %weight, "Weight recorded");
        self.new_weight.clear();
        self.entered_date.clear();
        self.navigator.notify(
            Notice::new("Weight", "Your Weight Has Been Updated Successfully")
                .then_navigate(Route::Progress),
        );
        Outcome::Applied
    }

    async fn append_weight(&self, uid: &str, weight: &str) -> Result<(), AppError> {
        let mut profile = self
            .store
            .get_profile(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(profile_path(uid)))?;

        let update = profile.record_weight(weight);
        self.store.update_profile(uid, &update).await
    }
}

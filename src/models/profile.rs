// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model for storage.

use serde::{Deserialize, Serialize};

/// Authenticated user handle.
///
/// Both per-user paths (`userProfiles/{uid}` and its `foodList`) derive from `uid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub email: Option<String>,
}

/// User profile stored in Firestore at `userProfiles/{uid}`.
///
/// Weights are kept as the strings the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub entered_email: String,
    #[serde(default)]
    pub entered_name: String,
    #[serde(default)]
    pub entered_height: String,
    #[serde(default)]
    pub entered_starting_weight: String,
    #[serde(default)]
    pub entered_current_weight: String,
    #[serde(default)]
    pub entered_desired_weight: String,
    /// Append-only, oldest first.
    #[serde(default)]
    pub weight_history: Vec<String>,
}

impl UserProfile {
    /// Build the document written at registration: the current weight starts
    /// out equal to the starting weight, which is also the first history entry.
    pub fn from_registration(reg: &Registration) -> Self {
        Self {
            entered_email: reg.email.clone(),
            entered_name: reg.name.clone(),
            entered_height: reg.height.clone(),
            entered_starting_weight: reg.starting_weight.clone(),
            entered_current_weight: reg.starting_weight.clone(),
            entered_desired_weight: reg.desired_weight.clone(),
            weight_history: vec![reg.starting_weight.clone()],
        }
    }

    /// Record a new weight on this snapshot.
    ///
    /// Returns the partial update to write back.
    pub fn record_weight(&mut self, weight: &str) -> ProfileUpdate {
        self.weight_history.push(weight.to_string());
        self.entered_current_weight = weight.to_string();
        ProfileUpdate {
            weight_history: self.weight_history.clone(),
            entered_current_weight: self.entered_current_weight.clone(),
        }
    }
}

/// Fields written by a weight update. Merged into the existing document,
/// every other field is left alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub weight_history: Vec<String>,
    pub entered_current_weight: String,
}

impl ProfileUpdate {
    /// Stored field names covered by this update (the update mask).
    pub const FIELDS: [&'static str; 2] = ["weightHistory", "enteredCurrentWeight"];

    /// Apply the update to a local copy of the document.
    pub fn merge_into(&self, profile: &mut UserProfile) {
        profile.weight_history = self.weight_history.clone();
        profile.entered_current_weight = self.entered_current_weight.clone();
    }
}

/// Values collected by the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub height: String,
    pub starting_weight: String,
    pub desired_weight: String,
}

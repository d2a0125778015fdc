// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food diary entries.

use serde::{Deserialize, Serialize};

/// Maximum characters accepted in the calorie estimate field.
pub const CALORIES_MAX_LEN: usize = 3;

/// One entry in `userProfiles/{uid}/foodList`.
///
/// Documents get store-assigned ids; the client never addresses one directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// What was eaten
    #[serde(default)]
    pub name: String,
    /// Meal label ("breakfast", "10am", ...)
    #[serde(default)]
    pub meal: String,
    /// Estimated calories, at most three characters
    #[serde(default)]
    pub calories: String,
    /// Consumption date as typed
    #[serde(default)]
    pub date: String,
}

impl FoodEntry {
    pub fn new(
        name: impl Into<String>,
        meal: impl Into<String>,
        calories: &str,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            meal: meal.into(),
            calories: clamp_calories(calories),
            date: date.into(),
        }
    }
}

/// Truncate a calorie estimate to the field's maximum length.
pub fn clamp_calories(input: &str) -> String {
    input.chars().take(CALORIES_MAX_LEN).collect()
}

//! Progress metrics derived from a user's weights.
//!
//! Pure computation; the Progress screen feeds it the profile it just read.

use crate::error::{AppError, Result};
use crate::models::UserProfile;

/// Share of the planned loss achieved so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Percent(f64),
    /// Starting weight equals the goal, so there is no planned loss to divide by.
    Undefined,
}

/// Weight lost and progress toward the goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressMetrics {
    pub weight_lost: f64,
    pub percent_toward_goal: Ratio,
}

impl ProgressMetrics {
    pub fn compute(starting: f64, current: f64, goal: f64) -> Self {
        let weight_lost = starting - current;
        let planned = starting - goal;

        let percent_toward_goal = if planned == 0.0 {
            Ratio::Undefined
        } else {
            Ratio::Percent(weight_lost / planned * 100.0)
        };

        Self {
            weight_lost,
            percent_toward_goal,
        }
    }

    /// Sentence shown at the top of the Progress screen.
    pub fn summary(&self) -> String {
        let percent = match self.percent_toward_goal {
            Ratio::Percent(p) => format!("{}%", trim_float(p)),
            Ratio::Undefined => "an undefined share of the way".to_string(),
        };
        format!(
            "So far you have lost {} KG cumulatively! You are {} towards your goal!",
            trim_float(self.weight_lost),
            percent
        )
    }
}

/// Everything the Progress screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub starting_weight: f64,
    pub current_weight: f64,
    pub goal_weight: f64,
    /// Oldest first, exactly as stored.
    pub weight_history: Vec<String>,
    pub metrics: ProgressMetrics,
}

impl ProgressView {
    pub fn from_profile(profile: &UserProfile) -> Result<Self> {
        let starting_weight = parse_weight("enteredStartingWeight", &profile.entered_starting_weight)?;
        let current_weight = parse_weight("enteredCurrentWeight", &profile.entered_current_weight)?;
        let goal_weight = parse_weight("enteredDesiredWeight", &profile.entered_desired_weight)?;

        Ok(Self {
            starting_weight,
            current_weight,
            goal_weight,
            weight_history: profile.weight_history.clone(),
            metrics: ProgressMetrics::compute(starting_weight, current_weight, goal_weight),
        })
    }
}

fn parse_weight(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| AppError::InvalidInput(format!("{field} is not a number: {value:?}")))
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

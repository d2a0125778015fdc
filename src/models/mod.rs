// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod food;
pub mod news;
pub mod profile;
pub mod progress;

pub use food::FoodEntry;
pub use news::{Article, NewsFeed};
pub use profile::{Identity, ProfileUpdate, Registration, UserProfile};
pub use progress::{ProgressMetrics, ProgressView, Ratio};

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - remote collaborators other than the document store.

pub mod auth;
pub mod news;

pub use auth::{AuthSession, FirebaseAuthClient};
pub use news::NewsClient;

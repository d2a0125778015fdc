// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress screen: weight history and progress toward the goal.

use crate::controllers::{FetchController, Screen};
use crate::db::{profile_path, ProfileStore};
use crate::error::{AppError, Result};
use crate::models::{Identity, ProgressView};
use crate::navigation::Route;

#[derive(Clone)]
pub struct ProgressScreen {
    store: ProfileStore,
}

impl ProgressScreen {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }
}

impl Screen for ProgressScreen {
    type Data = ProgressView;

    const ROUTE: Route = Route::Progress;

    async fn load(&self, identity: &Identity) -> Result<ProgressView> {
        let profile = self
            .store
            .get_profile(&identity.uid)
            .await?
            .ok_or_else(|| AppError::NotFound(profile_path(&identity.uid)))?;

        ProgressView::from_profile(&profile)
    }
}

pub type ProgressController = FetchController<ProgressScreen>;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile screen: personal, contact and goal information.

use crate::controllers::{FetchController, Screen};
use crate::db::{profile_path, ProfileStore};
use crate::error::{AppError, Result};
use crate::models::{Identity, UserProfile};
use crate::navigation::Route;

#[derive(Clone)]
pub struct ProfileScreen {
    store: ProfileStore,
}

impl ProfileScreen {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }
}

impl Screen for ProfileScreen {
    type Data = UserProfile;

    const ROUTE: Route = Route::Profile;

    async fn load(&self, identity: &Identity) -> Result<UserProfile> {
        self.store
            .get_profile(&identity.uid)
            .await?
            .ok_or_else(|| AppError::NotFound(profile_path(&identity.uid)))
    }
}

pub type ProfileController = FetchController<ProfileScreen>;

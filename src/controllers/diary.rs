// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food diary screen: the signed-in user's food list, in store order.

use crate::controllers::{FetchController, Screen};
use crate::db::ProfileStore;
use crate::error::Result;
use crate::models::{FoodEntry, Identity};
use crate::navigation::Route;

/// Reads `userProfiles/{uid}/foodList`.
///
/// Entries are shown exactly as the store returns them. There is no sort key
/// (the consumption date is free text), so no client-side ordering is applied.
#[derive(Clone)]
pub struct DiaryScreen {
    store: ProfileStore,
}

impl DiaryScreen {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }
}

impl Screen for DiaryScreen {
    type Data = Vec<FoodEntry>;

    const ROUTE: Route = Route::Diary;

    async fn load(&self, identity: &Identity) -> Result<Vec<FoodEntry>> {
        self.store.list_food(&identity.uid).await
    }
}

pub type DiaryController = FetchController<DiaryScreen>;

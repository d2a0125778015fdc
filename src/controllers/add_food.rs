// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Add-food screen: appends one entry to the signed-in user's diary.

use crate::controllers::{submit_for_current_user, Outcome};
use crate::db::ProfileStore;
use crate::models::food::clamp_calories;
use crate::models::FoodEntry;
use crate::navigation::{Navigator, Route};
use crate::services::AuthSession;

/// Input fields of the add-food form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    pub food: String,
    pub meal: String,
    calories: String,
    pub date: String,
}

impl FoodForm {
    /// The calorie field accepts at most three characters; extra input is cut off.
    pub fn set_calories(&mut self, input: &str) {
        self.calories = clamp_calories(input);
    }

    pub fn calories(&self) -> &str {
        &self.calories
    }

    fn to_entry(&self) -> FoodEntry {
        FoodEntry::new(&self.food, &self.meal, &self.calories, &self.date)
    }
}

pub struct AddFoodController {
    store: ProfileStore,
    auth: AuthSession,
    navigator: Navigator,
    pub form: FoodForm,
}

impl AddFoodController {
    pub fn new(store: ProfileStore, auth: AuthSession, navigator: Navigator) -> Self {
        Self {
            store,
            auth,
            navigator,
            form: FoodForm::default(),
        }
    }

    /// "Add Food" pressed: store the entry, then show the diary.
    pub async fn add_food(&self) -> Outcome {
        let entry = self.form.to_entry();
        let store = &self.store;

        submit_for_current_user(&self.auth, &self.navigator, Route::Diary, |identity| async move {
            tracing::info!(uid = %identity.uid, food = %entry.name, "Adding food entry");
            store.add_food(&identity.uid, &entry).await
        })
        .await
    }
}

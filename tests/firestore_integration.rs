// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! Run with: FIRESTORE_EMULATOR_HOST=localhost:8080 cargo test --test firestore_integration
//!
//! Tests are skipped if FIRESTORE_EMULATOR_HOST is not set.

use wheyt::models::FoodEntry;

mod common;
use common::{profile, test_store};

fn unique_uid(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

#[tokio::test]
async fn test_profile_set_and_get() {
    require_emulator!();
    let store = test_store().await;
    let uid = unique_uid("profile");

    assert!(store.get_profile(&uid).await.unwrap().is_none());

    let stored = profile("100", "100", "80", &["100"]);
    store.set_profile(&uid, &stored).await.unwrap();

    let loaded = store.get_profile(&uid).await.unwrap().unwrap();
    assert_eq!(loaded, stored);
}

#[tokio::test]
async fn test_update_touches_only_weight_fields() {
    require_emulator!();
    let store = test_store().await;
    let uid = unique_uid("update");

    store
        .set_profile(&uid, &profile("100", "85", "80", &["100", "85"]))
        .await
        .unwrap();

    let mut current = store.get_profile(&uid).await.unwrap().unwrap();
    let update = current.record_weight("82");
    store.update_profile(&uid, &update).await.unwrap();

    let loaded = store.get_profile(&uid).await.unwrap().unwrap();
    assert_eq!(loaded.weight_history, vec!["100", "85", "82"]);
    assert_eq!(loaded.entered_current_weight, "82");
    assert_eq!(loaded.entered_starting_weight, "100");
    assert_eq!(loaded.entered_desired_weight, "80");
    assert_eq!(loaded.entered_name, "A");
}

#[tokio::test]
async fn test_food_list_under_profile() {
    require_emulator!();
    let store = test_store().await;
    let uid = unique_uid("food");
    let other = unique_uid("food-other");

    let oats = FoodEntry::new("Oats", "Breakfast", "350", "2020-03-01");
    store.add_food(&uid, &oats).await.unwrap();
    store
        .add_food(&other, &FoodEntry::new("Soup", "Lunch", "200", "2020-03-01"))
        .await
        .unwrap();

    let listed = store.list_food(&uid).await.unwrap();
    assert_eq!(listed, vec![oats]);
}

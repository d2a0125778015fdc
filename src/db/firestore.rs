// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user document store with typed operations.
//!
//! Provides high-level operations for:
//! - Profiles (`userProfiles/{uid}`)
//! - Food diary entries (`userProfiles/{uid}/foodList/{autoId}`)
//!
//! Backed by Firestore in production and by [`MemoryDocs`] offline.

use crate::db::{collections, MemoryDocs};
use crate::error::AppError;
use crate::models::{FoodEntry, ProfileUpdate, UserProfile};

/// Remote profile store.
#[derive(Clone)]
pub struct ProfileStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(MemoryDocs),
}

impl ProfileStore {
    /// Create a new Firestore-backed store.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a store backed by in-process documents (offline mode).
    pub fn new_memory(docs: MemoryDocs) -> Self {
        Self {
            backend: Backend::Memory(docs),
        }
    }

    // ─── Profile Operations ──────────────────────────────────────

    /// Get a user's profile document.
    pub async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USER_PROFILES)
                .obj()
                .one(uid)
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(docs) => docs.get_profile(uid).await,
        }
    }

    /// Create or overwrite a user's profile document wholesale.
    pub async fn set_profile(&self, uid: &str, profile: &UserProfile) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::USER_PROFILES)
                    .document_id(uid)
                    .object(profile)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(())
            }
            Backend::Memory(docs) => docs.set_profile(uid, profile).await,
        }
    }

    /// Merge the weight fields into an existing profile without touching
    /// any other field.
    pub async fn update_profile(&self, uid: &str, update: &ProfileUpdate) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .fields(ProfileUpdate::FIELDS)
                    .in_col(collections::USER_PROFILES)
                    .document_id(uid)
                    .object(update)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(())
            }
            Backend::Memory(docs) => docs.update_profile(uid, update).await,
        }
    }

    // ─── Food Diary Operations ───────────────────────────────────

    /// Append an entry to the user's food list under a store-assigned id.
    pub async fn add_food(&self, uid: &str, entry: &FoodEntry) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let parent = client
                    .parent_path(collections::USER_PROFILES, uid)
                    .map_err(|e| AppError::Database(e.to_string()))?;

                let _: FoodEntry = client
                    .fluent()
                    .insert()
                    .into(collections::FOOD_LIST)
                    .generate_document_id()
                    .parent(&parent)
                    .object(entry)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(())
            }
            Backend::Memory(docs) => docs.add_food(uid, entry).await,
        }
    }

    /// List the user's food entries in the order the store returns them.
    pub async fn list_food(&self, uid: &str) -> Result<Vec<FoodEntry>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let parent = client
                    .parent_path(collections::USER_PROFILES, uid)
                    .map_err(|e| AppError::Database(e.to_string()))?;

                client
                    .fluent()
                    .select()
                    .from(collections::FOOD_LIST)
                    .parent(&parent)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))
            }
            Backend::Memory(docs) => docs.list_food(uid).await,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document backend.
//!
//! Same document shapes and merge semantics as Firestore. Counts every
//! remote call and can be told to reject them, so controllers can be
//! exercised without an emulator.

use crate::db::{food_list_path, profile_path};
use crate::error::AppError;
use crate::models::{FoodEntry, ProfileUpdate, UserProfile};
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared in-memory documents. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryDocs {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    profiles: DashMap<String, UserProfile>,
    food_lists: DashMap<String, Vec<FoodEntry>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    read_delay_ms: AtomicU64,
}

impl MemoryDocs {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Test Controls ───────────────────────────────────────────

    /// Number of read calls served (or rejected) so far.
    pub fn reads(&self) -> usize {
        self.inner.reads.load(Ordering::SeqCst)
    }

    /// Number of write calls served (or rejected) so far.
    pub fn writes(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    /// Total remote calls.
    pub fn calls(&self) -> usize {
        self.reads() + self.writes()
    }

    /// Reject every read until reset.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Reject every write until reset.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Delay applied to reads that start after this call.
    pub fn set_read_delay(&self, delay: Duration) {
        self.inner
            .read_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Place a profile directly, bypassing the call counters.
    pub fn seed_profile(&self, uid: &str, profile: UserProfile) {
        self.inner.profiles.insert(uid.to_string(), profile);
    }

    /// Replace a food list directly, in the given order.
    pub fn seed_food(&self, uid: &str, entries: Vec<FoodEntry>) {
        self.inner.food_lists.insert(uid.to_string(), entries);
    }

    /// Current profile snapshot, bypassing the call counters.
    pub fn profile(&self, uid: &str) -> Option<UserProfile> {
        self.inner.profiles.get(uid).map(|p| p.clone())
    }

    /// Current food list snapshot, bypassing the call counters.
    pub fn food(&self, uid: &str) -> Vec<FoodEntry> {
        self.inner
            .food_lists
            .get(uid)
            .map(|list| list.clone())
            .unwrap_or_default()
    }

    // ─── Store Operations ────────────────────────────────────────

    async fn begin_read(&self, path: &str) -> Result<(), AppError> {
        // Capture the delay before counting so a test can change it between calls.
        let delay = self.inner.read_delay_ms.load(Ordering::SeqCst);
        self.inner.reads.fetch_add(1, Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Database(format!("read rejected: {path}")));
        }
        Ok(())
    }

    fn begin_write(&self, path: &str) -> Result<(), AppError> {
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database(format!("write rejected: {path}")));
        }
        Ok(())
    }

    pub(crate) async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, AppError> {
        self.begin_read(&profile_path(uid)).await?;
        Ok(self.profile(uid))
    }

    pub(crate) async fn set_profile(&self, uid: &str, profile: &UserProfile) -> Result<(), AppError> {
        self.begin_write(&profile_path(uid))?;
        self.inner.profiles.insert(uid.to_string(), profile.clone());
        Ok(())
    }

    pub(crate) async fn update_profile(
        &self,
        uid: &str,
        update: &ProfileUpdate,
    ) -> Result<(), AppError> {
        let path = profile_path(uid);
        self.begin_write(&path)?;
        let mut profile = self
            .inner
            .profiles
            .get_mut(uid)
            .ok_or(AppError::NotFound(path))?;
        update.merge_into(&mut profile);
        Ok(())
    }

    pub(crate) async fn add_food(&self, uid: &str, entry: &FoodEntry) -> Result<(), AppError> {
        self.begin_write(&food_list_path(uid))?;
        self.inner
            .food_lists
            .entry(uid.to_string())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    pub(crate) async fn list_food(&self, uid: &str) -> Result<Vec<FoodEntry>, AppError> {
        self.begin_read(&food_list_path(uid)).await?;
        Ok(self.food(uid))
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wheyt: fitness tracking client
//!
//! This crate provides the client core for logging food, tracking weight
//! progress and reading fitness news, with Firebase Authentication and
//! Firestore as the backend.

pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;

use config::Config;
use controllers::{
    AddFoodController, DiaryController, DiaryScreen, HomeController, LoginController,
    ProfileController, ProfileScreen, ProgressController, ProgressScreen, RegisterController,
    UpdateWeightController,
};
use db::ProfileStore;
use navigation::Navigator;
use services::{AuthSession, NewsClient};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: ProfileStore,
    pub auth: AuthSession,
    pub news: NewsClient,
    pub navigator: Navigator,
}

impl AppState {
    // ─── Screen Controllers ──────────────────────────────────────

    pub fn login(&self) -> LoginController {
        LoginController::new(self.auth.clone(), self.navigator.clone())
    }

    pub fn register(&self) -> RegisterController {
        RegisterController::new(self.store.clone(), self.auth.clone(), self.navigator.clone())
    }

    pub fn home(&self) -> HomeController {
        HomeController::new(
            self.news.clone(),
            self.navigator.clone(),
            self.config.news_query.clone(),
        )
    }

    pub fn diary(&self) -> DiaryController {
        DiaryController::new(
            DiaryScreen::new(self.store.clone()),
            self.auth.clone(),
            self.navigator.clone(),
        )
    }

    pub fn add_food(&self) -> AddFoodController {
        AddFoodController::new(self.store.clone(), self.auth.clone(), self.navigator.clone())
    }

    pub fn progress(&self) -> ProgressController {
        ProgressController::new(
            ProgressScreen::new(self.store.clone()),
            self.auth.clone(),
            self.navigator.clone(),
        )
    }

    pub fn update_weight(&self) -> UpdateWeightController {
        UpdateWeightController::new(self.store.clone(), self.auth.clone(), self.navigator.clone())
    }

    pub fn profile(&self) -> ProfileController {
        ProfileController::new(
            ProfileScreen::new(self.store.clone()),
            self.auth.clone(),
            self.navigator.clone(),
        )
    }
}

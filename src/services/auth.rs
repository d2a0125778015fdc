// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication session.
//!
//! Handles:
//! - Email/password sign-in and account creation (Firebase Auth REST API)
//! - The "current identity or none" state, broadcast to every subscriber
//! - A local account backend for offline use

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Identity;
use anyhow::Context;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Firebase Auth REST client.
#[derive(Clone)]
pub struct FirebaseAuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Sign-in / sign-up response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl FirebaseAuthClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Identity> {
        self.post_password("accounts:signInWithPassword", email, password)
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity> {
        self.post_password("accounts:signUp", email, password).await
    }

    async fn post_password(&self, method: &str, email: &str, password: &str) -> Result<Identity> {
        let url = format!("{}/{}", self.base_url, method);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&PasswordRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Auth request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            // Firebase reports the reason as an upper-case code in error.message
            return Err(match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => AppError::Auth(envelope.error.message),
                Err(_) => AppError::Auth(format!("HTTP {}: {}", status, body)),
            });
        }

        // A 2xx without an account body is a provider fault, not a rejection
        let account: AccountResponse = response
            .json()
            .await
            .with_context(|| format!("Malformed {} response", method))?;

        Ok(Identity {
            uid: account.local_id,
            email: account.email,
        })
    }
}

/// Accounts held in memory, keyed by email.
#[derive(Clone, Default)]
pub struct LocalAccounts {
    accounts: Arc<DashMap<String, LocalAccount>>,
    next_uid: Arc<AtomicU64>,
}

#[derive(Clone)]
struct LocalAccount {
    uid: String,
    password: String,
}

impl LocalAccounts {
    fn create(&self, email: &str, password: &str) -> Result<Identity> {
        if !email.contains('@') {
            return Err(AppError::Auth("INVALID_EMAIL".to_string()));
        }

        match self.accounts.entry(email.to_string()) {
            Entry::Occupied(_) => Err(AppError::Auth("EMAIL_EXISTS".to_string())),
            Entry::Vacant(vacant) => {
                let uid = format!("local-{:06}", self.next_uid.fetch_add(1, Ordering::SeqCst) + 1);
                vacant.insert(LocalAccount {
                    uid: uid.clone(),
                    password: password.to_string(),
                });
                Ok(Identity {
                    uid,
                    email: Some(email.to_string()),
                })
            }
        }
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let account = self
            .accounts
            .get(email)
            .ok_or_else(|| AppError::Auth("EMAIL_NOT_FOUND".to_string()))?;

        if account.password != password {
            return Err(AppError::Auth("INVALID_PASSWORD".to_string()));
        }

        Ok(Identity {
            uid: account.uid.clone(),
            email: Some(email.to_string()),
        })
    }
}

#[derive(Clone)]
enum Backend {
    Firebase(FirebaseAuthClient),
    Local(LocalAccounts),
}

/// Identity provider shared by every controller.
///
/// Clones share the same signed-in state.
#[derive(Clone)]
pub struct AuthSession {
    backend: Backend,
    identity: Arc<watch::Sender<Option<Identity>>>,
}

impl AuthSession {
    /// Session backed by Firebase Authentication.
    pub fn firebase(config: &Config) -> Self {
        Self::with_backend(Backend::Firebase(FirebaseAuthClient::new(
            config.firebase_auth_url.clone(),
            config.firebase_api_key.clone(),
        )))
    }

    /// Session backed by in-memory accounts (offline mode).
    pub fn new_local() -> Self {
        Self::with_backend(Backend::Local(LocalAccounts::default()))
    }

    fn with_backend(backend: Backend) -> Self {
        let (identity, _) = watch::channel(None);
        Self {
            backend,
            identity: Arc::new(identity),
        }
    }

    /// Currently signed-in user, if any.
    pub fn current(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// Identity change notifications. The current state is readable
    /// immediately; `changed()` resolves on every later transition.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let identity = match &self.backend {
            Backend::Firebase(client) => client.sign_in_with_password(email, password).await?,
            Backend::Local(accounts) => accounts.sign_in(email, password)?,
        };
        tracing::info!(uid = %identity.uid, "Signed in");
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    /// Create a new account. The new user becomes the signed-in identity.
    pub async fn create_identity(&self, email: &str, password: &str) -> Result<Identity> {
        let identity = match &self.backend {
            Backend::Firebase(client) => client.sign_up(email, password).await?,
            Backend::Local(accounts) => accounts.create(email, password)?,
        };
        tracing::info!(uid = %identity.uid, "Account created");
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    pub fn sign_out(&self) {
        tracing::info!("Signed out");
        self.publish(None);
    }

    fn publish(&self, identity: Option<Identity>) {
        self.identity.send_replace(identity);
    }
}

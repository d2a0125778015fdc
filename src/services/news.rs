// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! News API client for the Home screen feed.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Article, NewsFeed};

/// News API client.
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.news_api_url.clone(), config.news_api_key.clone())
    }

    /// Search endpoint URL, without query parameters.
    pub fn everything_url(&self) -> String {
        format!("{}/everything", self.base_url.trim_end_matches('/'))
    }

    /// One-shot search for articles matching `query`.
    ///
    /// GET {base}/everything?q={query}&apiKey={key}
    pub async fn fetch_news_feed(&self, query: &str) -> Result<Vec<Article>, AppError> {
        let response = self
            .http
            .get(self.everything_url())
            .query(&[("q", query), ("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::NewsApi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::NewsApi(format!("HTTP {}: {}", status, body)));
        }

        let feed: NewsFeed = response
            .json()
            .await
            .map_err(|e| AppError::NewsApi(format!("JSON parse error: {}", e)))?;

        tracing::debug!(query, count = feed.articles.len(), "News feed fetched");
        Ok(feed.articles)
    }
}

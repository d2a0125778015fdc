// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! News feed payloads.

use serde::Deserialize;

/// Response body of the `everything` search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsFeed {
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A single article card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url_to_image: Option<String>,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home screen: fitness news feed.
//!
//! Not identity-gated. Loaded once when the screen mounts.

use crate::controllers::{Outcome, ViewState};
use crate::models::Article;
use crate::navigation::Navigator;
use crate::services::NewsClient;
use tokio::sync::watch;

pub struct HomeController {
    news: NewsClient,
    navigator: Navigator,
    query: String,
    state: watch::Sender<ViewState<Vec<Article>>>,
}

impl HomeController {
    pub fn new(news: NewsClient, navigator: Navigator, query: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ViewState::Uninitialized);
        Self {
            news,
            navigator,
            query: query.into(),
            state,
        }
    }

    pub fn state(&self) -> ViewState<Vec<Article>> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<Article>>> {
        self.state.subscribe()
    }

    /// Fetch the feed. A failure moves to `Failed` and queues one notice.
    pub async fn load_feed(&self) -> Outcome {
        self.state.send_replace(ViewState::Loading);

        match self.news.fetch_news_feed(&self.query).await {
            Ok(articles) => {
                self.state.send_replace(ViewState::Ready(articles));
                Outcome::Applied
            }
            Err(e) => {
                tracing::error!(query = %self.query, error = %e, "News feed fetch failed");
                self.navigator.notify(e.notice());
                self.state.send_replace(ViewState::Failed(e.to_string()));
                Outcome::Failed
            }
        }
    }
}

//! Shared test workers for exercising pipeline ordering.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use postflow::article::{Article, ArticleWorker, FetchError};
use tokio::time::sleep;

/// Worker with per-id latency and distinguishable records, used to
/// build completion-order races. Selected ids can be made to fail
/// after their latency elapses.
pub struct ScriptedWorker {
    latencies: HashMap<i64, Duration>,
    failing: HashSet<i64>,
}

impl ScriptedWorker {
    pub fn new(latencies: impl IntoIterator<Item = (i64, Duration)>) -> Self {
        Self {
            latencies: latencies.into_iter().collect(),
            failing: HashSet::new(),
        }
    }

    /// Mark ids whose fetch resolves as an error instead of a record.
    pub fn failing_for(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.failing = ids.into_iter().collect();
        self
    }
}

#[async_trait::async_trait]
impl ArticleWorker for ScriptedWorker {
    async fn fetch_article(&self, article_id: i64) -> Result<Article, FetchError> {
        let latency = self
            .latencies
            .get(&article_id)
            .copied()
            .unwrap_or(Duration::from_millis(100));
        sleep(latency).await;
        if self.failing.contains(&article_id) {
            return Err(FetchError::Transport {
                article_id,
                reason: "simulated outage".to_string(),
            });
        }
        Ok(Article {
            id: article_id,
            title: format!("Article {article_id}"),
            author: format!("Author {article_id}"),
        })
    }
}

/// Worker that always fails after a short delay.
pub struct FailingWorker;

#[async_trait::async_trait]
impl ArticleWorker for FailingWorker {
    async fn fetch_article(&self, article_id: i64) -> Result<Article, FetchError> {
        sleep(Duration::from_millis(50)).await;
        Err(FetchError::Transport {
            article_id,
            reason: "simulated outage".to_string(),
        })
    }
}

//! Article fetching.
//!
//! The worker boundary is where real transport would live. The shipped
//! implementation simulates a backend with fixed latency so the
//! pipeline's ordering behavior can be exercised deterministically.

use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;

use crate::article::types::Article;

/// Errors that can occur while fetching an article.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Transport-level failure (or its simulated stand-in).
    #[error("Failed to fetch article {article_id}: {reason}")]
    Transport { article_id: i64, reason: String },
}

/// Data retrieval boundary for the article pipeline.
#[async_trait::async_trait]
pub trait ArticleWorker: Send + Sync {
    async fn fetch_article(&self, article_id: i64) -> Result<Article, FetchError>;
}

/// Simulated backend: fixed artificial latency, synthesized record.
///
/// Every id yields the same title and author; only the id varies. This
/// exists purely to exercise timing and ordering, not business data.
pub struct SimulatedWorker {
    latency: Duration,
}

impl SimulatedWorker {
    pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

    pub fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Override the artificial latency (used by tests to build
    /// unequal-latency races).
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedWorker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ArticleWorker for SimulatedWorker {
    async fn fetch_article(&self, article_id: i64) -> Result<Article, FetchError> {
        sleep(self.latency).await;
        Ok(Article {
            id: article_id,
            title: "SwiftUI e Arquitetura VIP: Um Guia Completo".to_string(),
            author: "João Silva".to_string(),
        })
    }
}

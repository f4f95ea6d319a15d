//! Exclusive owner of the last successfully fetched article.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::article::types::Article;

/// Thread-safe holder for the last fetched article.
///
/// Written only by the pipeline after a successful fetch, with
/// last-write-wins semantics. External readers (e.g. routing) may read
/// it at any time, but the store is updated *before* the observable
/// state, so readers must not assume the two are in sync at any given
/// instant.
#[derive(Clone, Default)]
pub struct ArticleStore {
    inner: Arc<RwLock<Option<Article>>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally replace the stored article.
    ///
    /// No identity check against the current content: a later fetch for
    /// the same id simply overwrites.
    pub fn replace(&self, article: Article) {
        *self.inner.write() = Some(article);
    }

    /// Clone of the last fetched article, if any fetch has succeeded.
    pub fn last_article(&self) -> Option<Article> {
        self.inner.read().clone()
    }
}

use crate::article::types::ArticleProjection;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ArticleIntent {
    /// A load was submitted; flip the loading flag on.
    Loading,
    /// A fetch resolved and was promoted; install its projection.
    Loaded(ArticleProjection),
    /// A fetch failed; record the reason and stop loading.
    Failed(String),
}

impl Intent for ArticleIntent {}

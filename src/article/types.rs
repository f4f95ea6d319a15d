//! Domain and request types for the article detail pipeline.

/// Immutable domain record for one article.
///
/// Identity is the `id`; a later fetch for the same id simply replaces
/// whatever was stored before, there is no merge logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// One load request, created per user action and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub article_id: i64,
}

impl LoadRequest {
    pub fn new(article_id: i64) -> Self {
        Self { article_id }
    }
}

/// Display-ready shape derived from an [`Article`] by the presenter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleProjection {
    pub title: String,
    pub author: String,
}

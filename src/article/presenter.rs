//! Presentation formatting: domain record -> display projection.

use crate::article::types::{Article, ArticleProjection};

/// Map an article into its display-ready projection.
///
/// Pure and infallible. Always receives a raw domain record; the
/// projection is never fed back through.
pub fn project(article: &Article) -> ArticleProjection {
    ArticleProjection {
        title: article.title.clone(),
        author: format!("By {}", article.author),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_gets_by_prefix() {
        let article = Article {
            id: 1,
            title: "Title".to_string(),
            author: "João Silva".to_string(),
        };
        let projection = project(&article);
        assert_eq!(projection.title, "Title");
        assert_eq!(projection.author, "By João Silva");
    }
}

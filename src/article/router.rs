//! Routing reads of the article store.

use crate::article::store::ArticleStore;

/// Placeholder destination label for the author profile route.
///
/// Reads the store directly (not the observable snapshot), so it sees
/// the last stored article even if the snapshot publish has not landed
/// yet. `None` until some fetch has succeeded.
pub fn author_profile(store: &ArticleStore) -> Option<String> {
    store
        .last_article()
        .map(|article| format!("Author Profile: {}", article.author))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::types::Article;

    #[test]
    fn no_route_before_first_load() {
        let store = ArticleStore::new();
        assert_eq!(author_profile(&store), None);
    }

    #[test]
    fn routes_to_last_loaded_author() {
        let store = ArticleStore::new();
        store.replace(Article {
            id: 1,
            title: "t".to_string(),
            author: "João Silva".to_string(),
        });
        assert_eq!(
            author_profile(&store).as_deref(),
            Some("Author Profile: João Silva")
        );
    }
}

//! Per-card favorite flags for the mock content list.
//!
//! The flag array is JSON-encoded under a single storage key, loaded at
//! startup (default: all false) and written back on every toggle.

use std::sync::Arc;

use crate::prefs::store::{KeyValueStore, StoreError};

const KEY_FAVORITES: &str = "favorites";

/// One entry in the mock card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCard {
    pub id: i64,
    pub description: &'static str,
}

/// Fixed demo catalog; only descriptions vary.
pub fn mock_catalog() -> Vec<ContentCard> {
    let descriptions = [
        "Desenvolvedor front-end apaixonado por criar interfaces modernas.",
        "UX Designer focada em tornar experiências mais humanas.",
        "Especialista em back-end com experiência em Node.js e bancos de dados.",
        "Product Owner dedicada a alinhar visão de negócios e tecnologia.",
        "QA Engineer com foco em automação de testes e qualidade de software.",
        "Especialista em marketing digital e estratégias de conteúdo.",
        "DevOps com experiência em pipelines CI/CD e infraestrutura na nuvem.",
    ];
    descriptions
        .into_iter()
        .enumerate()
        .map(|(idx, description)| ContentCard {
            id: idx as i64 + 1,
            description,
        })
        .collect()
}

/// Card list with a persisted per-item favorite flag array.
///
/// The array length always equals the catalog length; a stored array of
/// the wrong length is discarded in favor of the default.
pub struct FavoriteBoard {
    catalog: Vec<ContentCard>,
    flags: Vec<bool>,
    store: Arc<dyn KeyValueStore>,
}

impl FavoriteBoard {
    /// Load flags for `catalog` from durable storage.
    pub fn load(catalog: Vec<ContentCard>, store: Arc<dyn KeyValueStore>) -> Self {
        let flags = store
            .get(KEY_FAVORITES)
            .and_then(|raw| serde_json::from_str::<Vec<bool>>(&raw).ok())
            .filter(|flags| flags.len() == catalog.len())
            .unwrap_or_else(|| vec![false; catalog.len()]);
        Self {
            catalog,
            flags,
            store,
        }
    }

    pub fn catalog(&self) -> &[ContentCard] {
        &self.catalog
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn is_favorite(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(false)
    }

    /// Flip one flag and write the whole array back.
    ///
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, idx: usize) -> Result<(), StoreError> {
        let Some(flag) = self.flags.get_mut(idx) else {
            tracing::debug!(idx, len = self.flags.len(), "Favorite toggle out of range");
            return Ok(());
        };
        *flag = !*flag;
        let encoded = serde_json::to_string(&self.flags).expect("bool array serializes");
        self.store.set(KEY_FAVORITES, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::store::MemoryStore;

    #[test]
    fn defaults_to_all_false() {
        let board = FavoriteBoard::load(mock_catalog(), Arc::new(MemoryStore::new()));
        assert_eq!(board.flags().len(), board.catalog().len());
        assert!(board.flags().iter().all(|&f| !f));
    }

    #[test]
    fn double_toggle_restores_original() {
        let mut board = FavoriteBoard::load(mock_catalog(), Arc::new(MemoryStore::new()));
        let original = board.flags().to_vec();
        board.toggle(2).unwrap();
        assert!(board.is_favorite(2));
        board.toggle(2).unwrap();
        assert_eq!(board.flags(), original.as_slice());
    }

    #[test]
    fn toggles_survive_reload() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut board =
                FavoriteBoard::load(mock_catalog(), Arc::clone(&store) as Arc<dyn KeyValueStore>);
            board.toggle(0).unwrap();
            board.toggle(4).unwrap();
        }
        let board = FavoriteBoard::load(mock_catalog(), store);
        assert!(board.is_favorite(0));
        assert!(board.is_favorite(4));
        assert!(!board.is_favorite(1));
    }

    #[test]
    fn wrong_length_stored_array_is_discarded() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_FAVORITES, "[true, true]").unwrap();
        let board = FavoriteBoard::load(mock_catalog(), store);
        assert_eq!(board.flags().len(), 7);
        assert!(board.flags().iter().all(|&f| !f));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut board = FavoriteBoard::load(mock_catalog(), Arc::new(MemoryStore::new()));
        board.toggle(99).unwrap();
        assert!(board.flags().iter().all(|&f| !f));
    }
}

use crate::mvi::State;

/// Observable snapshot for the article detail screen.
///
/// `is_loading == true` means title/author still reflect the previous
/// successful load (or are empty on a fresh screen), never a
/// half-applied fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleDetailState {
    pub is_loading: bool,
    pub title: String,
    pub author: String,
    /// Reason for the most recent failed fetch, cleared on the next
    /// submit. `None` while loading or after a success.
    pub last_error: Option<String>,
}

impl State for ArticleDetailState {}

impl ArticleDetailState {
    pub fn is_loaded(&self) -> bool {
        !self.is_loading && !self.title.is_empty()
    }
}

//! Article detail pipeline.
//!
//! One submitted request flows through:
//!
//! ```text
//! submit ──→ worker fetch ──→ store ──→ presenter ──→ publisher ──→ view
//! ```
//!
//! The interactor dispatches fetches, the store owns the last fetched
//! record, the presenter is a pure projection, and the publisher is the
//! only place the observable snapshot changes.

mod intent;
mod interactor;
mod presenter;
mod reducer;
mod router;
mod state;
mod store;
mod types;
mod worker;

use std::sync::Arc;

pub use intent::ArticleIntent;
pub use interactor::{ArticleDetailInteractor, PromotionPolicy};
pub use presenter::project;
pub use reducer::ArticleReducer;
pub use router::author_profile;
pub use state::ArticleDetailState;
pub use store::ArticleStore;
pub use types::{Article, ArticleProjection, LoadRequest};
pub use worker::{ArticleWorker, FetchError, SimulatedWorker};

use crate::mvi::Publisher;

/// Fully wired article detail pipeline.
///
/// Built by the composition root; everything else receives its
/// collaborators through constructors.
pub struct ArticleDetailModule {
    pub interactor: ArticleDetailInteractor,
    pub store: ArticleStore,
    pub publisher: Arc<Publisher<ArticleReducer>>,
}

impl ArticleDetailModule {
    /// Wire the default pipeline: simulated worker, empty store,
    /// fresh publisher.
    pub fn build() -> Self {
        Self::with_worker(Some(Arc::new(SimulatedWorker::new())), PromotionPolicy::default())
    }

    /// Wire with a specific worker (or none) and promotion policy.
    pub fn with_worker(
        worker: Option<Arc<dyn ArticleWorker>>,
        policy: PromotionPolicy,
    ) -> Self {
        let store = ArticleStore::new();
        let publisher = Arc::new(Publisher::new());
        let interactor =
            ArticleDetailInteractor::new(worker, store.clone(), Arc::clone(&publisher), policy);
        Self {
            interactor,
            store,
            publisher,
        }
    }
}

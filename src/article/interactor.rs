//! Pipeline orchestration: submit -> fetch -> store -> present -> publish.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::article::presenter::project;
use crate::article::reducer::ArticleReducer;
use crate::article::store::ArticleStore;
use crate::article::types::{Article, LoadRequest};
use crate::article::worker::ArticleWorker;
use crate::article::ArticleIntent;
use crate::mvi::Publisher;

/// Decides which of several overlapping fetches ends up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionPolicy {
    /// Every completion promotes its result; the snapshot reflects
    /// whichever fetch resolved last in wall-clock time, regardless of
    /// submission order. Faithful to the original behavior.
    #[default]
    LastCompletion,
    /// A completion promotes only if its sequence number is the highest
    /// promoted so far; superseded completions are discarded.
    LatestRequest,
}

/// Dispatches load requests and promotes their results.
///
/// `submit` is non-blocking and re-entrant: each call spawns an
/// independent fetch task, and in-flight fetches are never cancelled
/// when a newer request arrives. All state mutation funnels through the
/// shared [`Publisher`], so completions landing on different runtime
/// threads are applied one at a time.
pub struct ArticleDetailInteractor {
    worker: Option<Arc<dyn ArticleWorker>>,
    store: ArticleStore,
    publisher: Arc<Publisher<ArticleReducer>>,
    policy: PromotionPolicy,
    next_seq: AtomicU64,
    highest_promoted: Arc<Mutex<u64>>,
}

impl ArticleDetailInteractor {
    pub fn new(
        worker: Option<Arc<dyn ArticleWorker>>,
        store: ArticleStore,
        publisher: Arc<Publisher<ArticleReducer>>,
        policy: PromotionPolicy,
    ) -> Self {
        Self {
            worker,
            store,
            publisher,
            policy,
            next_seq: AtomicU64::new(0),
            highest_promoted: Arc::new(Mutex::new(0)),
        }
    }

    /// Submit a load request.
    ///
    /// The loading transition is applied synchronously, so a subscriber
    /// observes `is_loading == true` as soon as this returns. With no
    /// worker configured the flag is flipped on but nothing will ever
    /// flip it off; callers can still observe that degenerate case.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, request: LoadRequest) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        self.publisher.apply(ArticleIntent::Loading);

        let Some(worker) = self.worker.clone() else {
            tracing::debug!(article_id = request.article_id, "No worker configured");
            return;
        };

        let store = self.store.clone();
        let publisher = Arc::clone(&self.publisher);
        let policy = self.policy;
        let highest_promoted = Arc::clone(&self.highest_promoted);

        tokio::spawn(async move {
            match worker.fetch_article(request.article_id).await {
                Ok(article) => {
                    promote(policy, seq, &highest_promoted, &store, &publisher, article);
                }
                Err(err) => {
                    tracing::warn!(
                        article_id = request.article_id,
                        seq,
                        error = %err,
                        "Article fetch failed"
                    );
                    fail(policy, seq, &highest_promoted, &publisher, err.to_string());
                }
            }
        });
    }

    /// Current snapshot, for callers without a subscription.
    pub fn state(&self) -> crate::article::ArticleDetailState {
        self.publisher.snapshot()
    }
}

/// Write the store, then publish the projection.
///
/// The store update is visible to external readers before the snapshot
/// changes; the two are not atomic.
fn promote(
    policy: PromotionPolicy,
    seq: u64,
    highest_promoted: &Mutex<u64>,
    store: &ArticleStore,
    publisher: &Publisher<ArticleReducer>,
    article: Article,
) {
    // Hold the promotion lock across store + publish so a pair of
    // completions cannot interleave between the two writes.
    let mut highest = highest_promoted.lock();
    if !passes_gate(policy, seq, &mut *highest) {
        return;
    }

    let projection = project(&article);
    tracing::debug!(article_id = article.id, seq, "Promoting fetch result");
    store.replace(article);
    publisher.apply(ArticleIntent::Loaded(projection));
}

/// Publish a failure through the same staleness gate as successes.
///
/// A failed completion that was already superseded must not pollute the
/// snapshot; a current one records its sequence number so slower, older
/// completions cannot overwrite the error afterwards.
fn fail(
    policy: PromotionPolicy,
    seq: u64,
    highest_promoted: &Mutex<u64>,
    publisher: &Publisher<ArticleReducer>,
    reason: String,
) {
    let mut highest = highest_promoted.lock();
    if !passes_gate(policy, seq, &mut *highest) {
        return;
    }
    publisher.apply(ArticleIntent::Failed(reason));
}

/// Under `LatestRequest`, only the highest sequence number seen so far
/// may publish; everything else is discarded. `LastCompletion` lets
/// every completion through.
fn passes_gate(policy: PromotionPolicy, seq: u64, highest: &mut u64) -> bool {
    if policy == PromotionPolicy::LatestRequest && seq < *highest {
        tracing::debug!(seq, highest = *highest, "Discarding stale completion");
        return false;
    }
    *highest = seq;
    true
}

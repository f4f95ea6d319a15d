//! Observable state holder built on a `tokio::sync::watch` channel.

use std::marker::PhantomData;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Serialized mutation point for one reducer's state.
///
/// Every transition goes through [`Publisher::apply`], which runs the
/// reducer inside `watch::Sender::send_modify`. The channel's internal
/// lock serializes concurrent appliers, so fetch tasks completing on
/// different runtime threads never produce a torn snapshot. Subscribers
/// see a fresh snapshot after every applied intent.
pub struct Publisher<R: Reducer> {
    tx: watch::Sender<R::State>,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Publisher<R> {
    /// Create a publisher holding the state type's default value.
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(R::State::default()),
            _reducer: PhantomData,
        }
    }

    /// Run an intent through the reducer and notify subscribers.
    ///
    /// Notification fires even when the reduced state compares equal to
    /// the previous one; subscribers relying on edge detection should
    /// compare snapshots themselves.
    pub fn apply(&self, intent: R::Intent) {
        self.tx.send_modify(|state| {
            let previous = std::mem::take(state);
            *state = R::reduce(previous, intent);
        });
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver starts with the current snapshot already marked seen;
    /// `changed().await` resolves on the next transition.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }
}

impl<R: Reducer> Default for Publisher<R> {
    fn default() -> Self {
        Self::new()
    }
}

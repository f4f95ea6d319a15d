//! Dark-mode appearance toggle with system-follow precedence.

use std::sync::Arc;

use crate::mvi::{Intent, Publisher, Reducer, State};
use crate::prefs::store::{get_bool, set_bool, KeyValueStore, StoreError};

const KEY_FOLLOW_SYSTEM: &str = "follow_system";
const KEY_DARK_MODE: &str = "dark_mode";

/// Two cooperating flags with override precedence.
///
/// While `follow_system` is on, `dark_mode` is ignored for display but
/// still stored; switching `follow_system` off reveals the last stored
/// explicit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceState {
    pub follow_system: bool,
    pub dark_mode: bool,
}

impl Default for AppearanceState {
    fn default() -> Self {
        Self {
            follow_system: true,
            dark_mode: false,
        }
    }
}

impl State for AppearanceState {}

impl AppearanceState {
    /// `None` means "defer to the system appearance".
    pub fn effective_dark(&self) -> Option<bool> {
        if self.follow_system {
            None
        } else {
            Some(self.dark_mode)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AppearanceIntent {
    SetFollowSystem(bool),
    SetDarkMode(bool),
}

impl Intent for AppearanceIntent {}

pub struct AppearanceReducer;

impl Reducer for AppearanceReducer {
    type State = AppearanceState;
    type Intent = AppearanceIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppearanceIntent::SetFollowSystem(follow_system) => AppearanceState {
                follow_system,
                ..state
            },
            AppearanceIntent::SetDarkMode(dark_mode) => AppearanceState { dark_mode, ..state },
        }
    }
}

/// Synchronous settings interactor: persists on every toggle and
/// republishes through its own publisher, independent of the article
/// pipeline's.
pub struct SettingsInteractor {
    store: Arc<dyn KeyValueStore>,
    publisher: Arc<Publisher<AppearanceReducer>>,
}

impl SettingsInteractor {
    /// Load both flags from durable storage (defaults:
    /// `follow_system = true`, `dark_mode = false`) and publish the
    /// initial state.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let defaults = AppearanceState::default();
        let publisher = Arc::new(Publisher::new());
        publisher.apply(AppearanceIntent::SetFollowSystem(get_bool(
            store.as_ref(),
            KEY_FOLLOW_SYSTEM,
            defaults.follow_system,
        )));
        publisher.apply(AppearanceIntent::SetDarkMode(get_bool(
            store.as_ref(),
            KEY_DARK_MODE,
            defaults.dark_mode,
        )));
        Self { store, publisher }
    }

    pub fn set_follow_system(&self, value: bool) -> Result<(), StoreError> {
        set_bool(self.store.as_ref(), KEY_FOLLOW_SYSTEM, value)?;
        self.publisher.apply(AppearanceIntent::SetFollowSystem(value));
        Ok(())
    }

    pub fn set_dark_mode(&self, value: bool) -> Result<(), StoreError> {
        set_bool(self.store.as_ref(), KEY_DARK_MODE, value)?;
        self.publisher.apply(AppearanceIntent::SetDarkMode(value));
        Ok(())
    }

    pub fn state(&self) -> AppearanceState {
        self.publisher.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<AppearanceState> {
        self.publisher.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::store::MemoryStore;

    #[test]
    fn defaults_follow_system() {
        let interactor = SettingsInteractor::load(Arc::new(MemoryStore::new()));
        let state = interactor.state();
        assert!(state.follow_system);
        assert!(!state.dark_mode);
        assert_eq!(state.effective_dark(), None);
    }

    #[test]
    fn explicit_value_hidden_while_following_system() {
        let interactor = SettingsInteractor::load(Arc::new(MemoryStore::new()));
        interactor.set_dark_mode(true).unwrap();
        // Stored, but masked by follow_system.
        assert_eq!(interactor.state().effective_dark(), None);

        interactor.set_follow_system(false).unwrap();
        assert_eq!(interactor.state().effective_dark(), Some(true));
    }

    #[test]
    fn toggling_back_to_system_masks_again() {
        let interactor = SettingsInteractor::load(Arc::new(MemoryStore::new()));
        interactor.set_follow_system(false).unwrap();
        interactor.set_dark_mode(true).unwrap();
        interactor.set_follow_system(true).unwrap();
        let state = interactor.state();
        assert_eq!(state.effective_dark(), None);
        assert!(state.dark_mode, "explicit value survives masking");
    }

    #[test]
    fn flags_survive_reload_from_same_store() {
        let store = Arc::new(MemoryStore::new());
        {
            let interactor = SettingsInteractor::load(Arc::clone(&store) as Arc<dyn KeyValueStore>);
            interactor.set_follow_system(false).unwrap();
            interactor.set_dark_mode(true).unwrap();
        }
        let reloaded = SettingsInteractor::load(store);
        let state = reloaded.state();
        assert!(!state.follow_system);
        assert!(state.dark_mode);
    }
}

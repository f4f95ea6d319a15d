//! Client-side preference persistence.
//!
//! Two independent observables live here: the appearance toggle pair
//! (follow-system / explicit dark mode) and the per-card favorite flag
//! array. Both persist through the injected [`KeyValueStore`]
//! capability; nothing in this module touches a global.

mod appearance;
mod favorites;
mod store;

pub use appearance::{
    AppearanceIntent, AppearanceReducer, AppearanceState, SettingsInteractor,
};
pub use favorites::{mock_catalog, ContentCard, FavoriteBoard};
pub use store::{get_bool, set_bool, KeyValueStore, MemoryStore, StoreError, TomlFileStore};

//! Base trait for observable screen state.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so publishers can skip no-op notifications)
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}

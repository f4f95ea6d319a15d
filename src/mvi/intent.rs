//! Base trait for intents (user actions and pipeline completions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (a tap that requests a load, a settings toggle)
/// - Pipeline completions (a fetch that resolved or failed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}

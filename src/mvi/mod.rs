//! Unidirectional data flow primitives for screen state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Publisher ──→ subscribers
//!    ↑                                             │
//!    └─────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything a view needs to render
//! - **Intent**: user action or pipeline completion
//! - **Reducer**: pure function that transforms state based on intents
//! - **Publisher**: the single serialized mutation point; delivers a fresh
//!   snapshot to every subscriber on each change

mod intent;
mod publisher;
mod reducer;
mod state;

pub use intent::Intent;
pub use publisher::Publisher;
pub use reducer::Reducer;
pub use state::State;

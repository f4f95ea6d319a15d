//! postflow: an observable load-present pipeline.
//!
//! The [`article`] module is the core: a submit → fetch → store →
//! present → publish pipeline with an explicit loading/loaded/failed
//! state machine. [`mvi`] holds the unidirectional-flow primitives it
//! is built on, and [`prefs`] covers durable client-side toggles.

pub mod article;
pub mod mvi;
pub mod prefs;

//! Troupe – a Screenplay-pattern test-authoring layer for browser automation
//!
//! This crate implements the Screenplay pattern with:
//! - Actors that hold abilities and perform composable activities
//! - An answerable-resolution engine that flattens mixed literal and deferred
//!   inputs in declaration order
//! - Interactions and questions for `<select>` controls, modal dialogs,
//!   navigation, and text read-back
//! - Lazily rendered, business-readable activity descriptions
//! - Structured reporting events consumed by external reporters
//!
//! The browser itself stays behind a narrow driver interface; this crate is a
//! coordination/DSL layer, not a browser engine.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Screenplay core: actors, abilities, activities, and answerable resolution
pub mod screenplay;

/// Web layer: driver boundary, targets, and concrete interactions/questions
pub mod web;

// Re-export key types for convenience
pub use screenplay::{Actor, Stage};

/// Current version of the Troupe crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

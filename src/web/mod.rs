//! Web layer: the driver boundary and the browser-facing screenplay DSL
//!
//! Everything browser-specific lives behind the narrow traits in
//! [`driver`]; the interactions and questions in this module consume them
//! only through the [`BrowseTheWeb`] ability.

// Submodules
pub mod browse;
pub mod driver;
pub mod interactions;
pub mod questions;
pub mod target;

// Re-export commonly used types
pub use browse::BrowseTheWeb;
pub use driver::{BrowserDriver, DialogHandle, DialogRef, ElementHandle, ElementRef, Selector};
pub use interactions::{Accept, Click, Dismiss, Navigate, Select};
pub use questions::{ModalDialog, Selected, Text};
pub use target::{Target, TargetElement, TargetElements};

//! Screenplay core and public API
//!
//! This module provides the actor/ability model, the activity abstractions,
//! the answerable-resolution engine, description formatting, and the stage
//! that scopes actors to a single test run.

// Submodules
pub mod ability;
pub mod activity;
pub mod actor;
pub mod answerable;
pub mod description;
pub mod error;
pub mod events;
pub mod reporter;
pub mod stage;

// Re-export commonly used types
pub use ability::Ability;
pub use activity::{IntoActivities, Performable, Question, Task};
pub use actor::Actor;
pub use answerable::{Answerable, AnswerableList, IntoAnswerableList, OneOrMany};
pub use description::Describe;
pub use error::{ScreenplayError, ScreenplayResult};
pub use events::{ActivityDetails, Outcome, StageEvent};
pub use reporter::{CollectingReporter, JsonLineReporter, Reporter};
pub use stage::{Cast, Stage};

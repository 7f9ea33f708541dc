//! Error types for the screenplay layer
//!
//! Domain errors use thiserror; failures bubble unchanged through the async
//! call chain of `attempts_to`/`answer`. Wrapping adds the rendered activity
//! description without losing the original message, and nothing in this crate
//! retries on its own.

use thiserror::Error;

/// An actor was asked to use a capability it was never given.
///
/// Fatal to the current activity; the message names both the actor and the
/// missing capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{actor} does not have the ability to {ability}")]
pub struct MissingAbilityError {
    /// Name of the actor that lacks the capability
    pub actor: String,
    /// Human-readable capability name, as reported by `Ability::name()`
    pub ability: &'static str,
}

/// A browser-level operation failed.
///
/// Surfaced verbatim from the driver boundary; never retried by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// An element the activity needed could not be located
    #[error("couldn't locate {name} using {selector}")]
    ElementNotFound {
        /// Rendered name of the target
        name: String,
        /// Rendered selector that failed to match
        selector: String,
    },

    /// A dialog operation was attempted while no modal dialog was open
    #[error("no modal dialog is currently open")]
    NoDialogOpen,

    /// A `<select>` control has no option matching the requested value/label
    #[error("{control} has no option matching {wanted}")]
    OptionNotFound {
        /// The value or label that was requested
        wanted: String,
        /// Rendered name of the control
        control: String,
    },

    /// A scalar read-back found no selection at all
    #[error("nothing is selected in {control}")]
    NothingSelected {
        /// Rendered name of the control
        control: String,
    },

    /// Navigation to a URL failed
    #[error("couldn't navigate to '{url}': {detail}")]
    Navigation {
        /// The URL that was requested
        url: String,
        /// Driver-reported failure detail
        detail: String,
    },

    /// Any other driver/session failure
    #[error("browser session error: {0}")]
    Session(String),
}

/// Convenience result alias for driver-boundary operations
pub type BrowserResult<T> = std::result::Result<T, BrowserError>;

/// Top-level screenplay error
#[derive(Debug, Error)]
pub enum ScreenplayError {
    /// The actor lacks a required ability
    #[error(transparent)]
    MissingAbility(#[from] MissingAbilityError),

    /// The underlying driver call failed
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// A nested answerable could not be resolved
    #[error("couldn't resolve {description}: {source}")]
    Resolution {
        /// Description of the answerable that rejected
        description: String,
        /// The original failure, preserved verbatim
        #[source]
        source: Box<ScreenplayError>,
    },

    /// An activity failed while being performed
    ///
    /// Carries the activity's rendered description so the failure is legible
    /// without source inspection.
    #[error("{description} failed: {source}")]
    Activity {
        /// Rendered description, with `#actor` replaced by the actor's name
        description: String,
        /// The failure that aborted the activity
        #[source]
        source: Box<ScreenplayError>,
    },
}

impl ScreenplayError {
    /// The innermost failure message, with wrapping layers stripped.
    pub fn root_cause(&self) -> String {
        match self {
            Self::Resolution { source, .. } | Self::Activity { source, .. } => source.root_cause(),
            other => other.to_string(),
        }
    }
}

/// Result type using ScreenplayError
pub type ScreenplayResult<T> = std::result::Result<T, ScreenplayError>;

//! The driver boundary
//!
//! The crate consumes an opaque browser session through these traits and
//! never depends on a concrete driver. A driver implementation supplies
//! element and dialog handles; the screenplay layer decides when they are
//! resolved and what is done with them.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::screenplay::Describe;
use crate::screenplay::error::BrowserResult;

/// How an element (or collection of elements) is found in the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector, e.g. `#country-of-interest-codes li`
    Css(String),
    /// Element id attribute
    Id(String),
    /// XPath expression
    XPath(String),
    /// Anchor text
    LinkText(String),
}

impl Selector {
    /// A CSS selector.
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// An element-id selector.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// An XPath selector.
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// A link-text selector.
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css '{}'", s),
            Self::Id(s) => write!(f, "id '{}'", s),
            Self::XPath(s) => write!(f, "xpath '{}'", s),
            Self::LinkText(s) => write!(f, "link text '{}'", s),
        }
    }
}

/// Shared handle to a located element.
pub type ElementRef = Arc<dyn ElementHandle>;

/// Shared handle to an open modal dialog.
pub type DialogRef = Arc<dyn DialogHandle>;

/// One browser session, as consumed by [`BrowseTheWeb`](super::BrowseTheWeb).
///
/// A driver instance backs exactly one ability instance and is not safe to
/// share between two actors simultaneously.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Locate the single element matching the selector.
    async fn locate(&self, selector: &Selector) -> BrowserResult<ElementRef>;

    /// Locate every element matching the selector, in DOM order.
    async fn locate_all(&self, selector: &Selector) -> BrowserResult<Vec<ElementRef>>;

    /// The currently open modal dialog; fails when none is open.
    async fn open_dialog(&self) -> BrowserResult<DialogRef>;

    /// Navigate the session to the given URL.
    async fn navigate_to(&self, url: &str) -> BrowserResult<()>;
}

/// Operations on a located element.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Select the option whose `value` attribute matches.
    async fn select_by_value(&self, value: &str) -> BrowserResult<()>;

    /// Select the option whose visible label text matches.
    async fn select_by_label(&self, label: &str) -> BrowserResult<()>;

    /// Values of the currently selected options, in the selection order the
    /// browser reports.
    async fn selected_values(&self) -> BrowserResult<Vec<String>>;

    /// Labels of the currently selected options, in the selection order the
    /// browser reports.
    async fn selected_labels(&self) -> BrowserResult<Vec<String>>;

    /// The element's visible text.
    async fn text(&self) -> BrowserResult<String>;

    /// Click the element.
    async fn click(&self) -> BrowserResult<()>;
}

/// Operations on an open modal dialog.
#[async_trait]
pub trait DialogHandle: Send + Sync {
    /// Dismiss (cancel) the dialog.
    async fn dismiss(&self) -> BrowserResult<()>;

    /// Accept (confirm) the dialog.
    async fn accept(&self) -> BrowserResult<()>;

    /// The dialog's message text.
    async fn message(&self) -> BrowserResult<String>;
}

// A dialog handle inside a sentence reads as the thing itself, not a value.
impl Describe for DialogRef {
    fn describe(&self) -> String {
        "the modal dialog".to_string()
    }
}

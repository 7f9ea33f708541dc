//! The browsing ability
//!
//! `BrowseTheWeb` is the single point of contact between screenplay
//! activities and the driver boundary. One ability instance wraps one browser
//! session and is owned by exactly one actor.

use std::sync::Arc;

use crate::screenplay::Ability;
use crate::screenplay::error::{BrowserError, BrowserResult};

use super::driver::{BrowserDriver, DialogRef, ElementRef};
use super::target::{TargetElement, TargetElements};

/// The ability to browse the web through an opaque driver.
pub struct BrowseTheWeb {
    driver: Arc<dyn BrowserDriver>,
}

impl Ability for BrowseTheWeb {
    fn name() -> &'static str {
        "browse the web"
    }
}

impl BrowseTheWeb {
    /// Wrap a driver session.
    pub fn using(driver: Arc<dyn BrowserDriver>) -> Self {
        Self { driver }
    }

    /// Resolve a single-element target.
    ///
    /// A driver that cannot match the selector reports its own failure; a
    /// driver that merely returns nothing is mapped to `ElementNotFound`
    /// naming the target.
    pub async fn locate(&self, target: &TargetElement) -> BrowserResult<ElementRef> {
        self.driver
            .locate(target.selector())
            .await
            .map_err(|err| named_not_found(err, &target.to_string(), &target.selector().to_string()))
    }

    /// Resolve a multi-element target, in DOM order.
    pub async fn locate_all(&self, targets: &TargetElements) -> BrowserResult<Vec<ElementRef>> {
        self.driver
            .locate_all(targets.selector())
            .await
            .map_err(|err| {
                named_not_found(err, &targets.to_string(), &targets.selector().to_string())
            })
    }

    /// The currently open modal dialog; fails when none is open.
    pub async fn modal_dialog(&self) -> BrowserResult<DialogRef> {
        self.driver.open_dialog().await
    }

    /// Navigate the session to the given URL.
    pub async fn navigate_to(&self, url: &str) -> BrowserResult<()> {
        self.driver.navigate_to(url).await
    }
}

// Drivers report lookup misses with their raw selector; once a target is in
// play the error should carry the target's declared name instead.
fn named_not_found(err: BrowserError, name: &str, selector: &str) -> BrowserError {
    match err {
        BrowserError::ElementNotFound { .. } => BrowserError::ElementNotFound {
            name: name.to_string(),
            selector: selector.to_string(),
        },
        other => other,
    }
}

//! Targets: named, lazily-located element references
//!
//! A target couples a business-readable name with a selector. Nothing is
//! resolved at construction; an interaction or question touching the target
//! locates it through the actor's browsing ability at execution time, so the
//! same target value can be declared once and reused across activities.

use std::fmt;

use super::driver::Selector;

/// Entry point for declaring targets.
pub struct Target;

impl Target {
    /// A reference to one element, e.g. `Target::the("country selector")`.
    pub fn the(name: impl Into<String>) -> TargetBuilder {
        TargetBuilder { name: name.into() }
    }

    /// A reference to a collection of elements,
    /// e.g. `Target::all("country codes")`.
    pub fn all(name: impl Into<String>) -> TargetsBuilder {
        TargetsBuilder { name: name.into() }
    }
}

/// A named single-element target awaiting its selector.
pub struct TargetBuilder {
    name: String,
}

impl TargetBuilder {
    /// Attach the selector that locates the element.
    pub fn located(self, selector: Selector) -> TargetElement {
        TargetElement {
            name: self.name,
            selector,
        }
    }
}

/// A named multi-element target awaiting its selector.
pub struct TargetsBuilder {
    name: String,
}

impl TargetsBuilder {
    /// Attach the selector that locates the elements.
    pub fn located(self, selector: Selector) -> TargetElements {
        TargetElements {
            name: self.name,
            selector,
        }
    }
}

/// A named, lazily-located reference to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetElement {
    name: String,
    selector: Selector,
}

impl TargetElement {
    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The selector used to locate the element.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl fmt::Display for TargetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the {}", self.name)
    }
}

/// A named, lazily-located reference to a collection of elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetElements {
    name: String,
    selector: Selector,
}

impl TargetElements {
    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The selector used to locate the elements.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl fmt::Display for TargetElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the {}", self.name)
    }
}

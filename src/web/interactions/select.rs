//! Selecting options in `<select>` controls
//!
//! Scalar and plural selection are distinct entry points: `value`/`option`
//! accept exactly one answerable and never flatten a collection silently,
//! while `values`/`options` accept the full mixed list and select each
//! flattened entry in declaration order. The `value` variants match the
//! option's `value` attribute, the `option` variants its visible label text.
//!
//! On a single-select control a plural selection still applies each entry in
//! order, so the last one observably wins. That matches what the browser
//! does and is left unguarded.

use std::fmt;

use async_trait::async_trait;

use crate::screenplay::answerable::{Answerable, AnswerableList, IntoAnswerableList};
use crate::screenplay::error::ScreenplayResult;
use crate::screenplay::{Actor, Performable};
use crate::web::browse::BrowseTheWeb;
use crate::web::target::TargetElement;

/// Entry point for select-control interactions.
pub struct Select;

impl Select {
    /// Select one option by its `value` attribute.
    pub fn value(value: impl Into<Answerable<String>>) -> SelectValue {
        SelectValue {
            value: value.into(),
        }
    }

    /// Select several options by their `value` attributes.
    ///
    /// Accepts any mix of literal scalars, literal collections, and
    /// questions, e.g. `Select::values((["UK", "PL"], "DE", "FR"))`.
    pub fn values(values: impl IntoAnswerableList<String>) -> SelectValues {
        SelectValues {
            values: values.into_answerable_list(),
        }
    }

    /// Select one option by its visible label text.
    pub fn option(option: impl Into<Answerable<String>>) -> SelectOption {
        SelectOption {
            option: option.into(),
        }
    }

    /// Select several options by their visible label text.
    pub fn options(options: impl IntoAnswerableList<String>) -> SelectOptions {
        SelectOptions {
            options: options.into_answerable_list(),
        }
    }
}

/// A scalar by-value selection awaiting its target control.
#[derive(Clone)]
pub struct SelectValue {
    value: Answerable<String>,
}

impl SelectValue {
    /// Anchor the selection on a target `<select>` control.
    pub fn from(self, target: &TargetElement) -> FromTarget<SelectValue> {
        FromTarget::new(self, target)
    }
}

/// A plural by-value selection awaiting its target control.
#[derive(Clone)]
pub struct SelectValues {
    values: AnswerableList<String>,
}

impl SelectValues {
    /// Anchor the selection on a target `<select>` control.
    pub fn from(self, target: &TargetElement) -> FromTarget<SelectValues> {
        FromTarget::new(self, target)
    }
}

/// A scalar by-label selection awaiting its target control.
#[derive(Clone)]
pub struct SelectOption {
    option: Answerable<String>,
}

impl SelectOption {
    /// Anchor the selection on a target `<select>` control.
    pub fn from(self, target: &TargetElement) -> FromTarget<SelectOption> {
        FromTarget::new(self, target)
    }
}

/// A plural by-label selection awaiting its target control.
#[derive(Clone)]
pub struct SelectOptions {
    options: AnswerableList<String>,
}

impl SelectOptions {
    /// Anchor the selection on a target `<select>` control.
    pub fn from(self, target: &TargetElement) -> FromTarget<SelectOptions> {
        FromTarget::new(self, target)
    }
}

/// A selection anchored on its target control, ready to perform.
///
/// `.from(target)` consumes the unanchored half and returns this configured
/// value; nothing is mutated in place, so anchored interactions are safely
/// shareable and replayable across reporting.
#[derive(Clone)]
pub struct FromTarget<S> {
    inner: S,
    target: TargetElement,
}

impl<S> FromTarget<S> {
    fn new(inner: S, target: &TargetElement) -> Self {
        Self {
            inner,
            target: target.clone(),
        }
    }
}

#[async_trait]
impl Performable for FromTarget<SelectValue> {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let value = actor.answer(&self.inner.value).await?;
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        element.select_by_value(&value).await?;
        Ok(())
    }
}

impl fmt::Display for FromTarget<SelectValue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#actor selects value {} from {}",
            self.inner.value, self.target
        )
    }
}

#[async_trait]
impl Performable for FromTarget<SelectValues> {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let values = self.inner.values.resolved_by(actor).await?;
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        for value in &values {
            element.select_by_value(value).await?;
        }
        Ok(())
    }
}

impl fmt::Display for FromTarget<SelectValues> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#actor selects values {} from {}",
            self.inner.values, self.target
        )
    }
}

#[async_trait]
impl Performable for FromTarget<SelectOption> {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let label = actor.answer(&self.inner.option).await?;
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        element.select_by_label(&label).await?;
        Ok(())
    }
}

impl fmt::Display for FromTarget<SelectOption> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#actor selects {} from {}",
            self.inner.option, self.target
        )
    }
}

#[async_trait]
impl Performable for FromTarget<SelectOptions> {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let labels = self.inner.options.resolved_by(actor).await?;
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        for label in &labels {
            element.select_by_label(label).await?;
        }
        Ok(())
    }
}

impl fmt::Display for FromTarget<SelectOptions> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#actor selects {} from {}",
            self.inner.options, self.target
        )
    }
}

//! Read-back questions for `<select>` controls

use std::fmt;

use async_trait::async_trait;

use crate::screenplay::answerable::{Answerable, OneOrMany};
use crate::screenplay::error::{BrowserError, ScreenplayResult};
use crate::screenplay::{Actor, Question};
use crate::web::browse::BrowseTheWeb;
use crate::web::target::TargetElement;

/// Entry point for questions about the current selection of a control.
///
/// Scalar and plural read-backs are distinct questions: the scalar forms
/// return the single current selection and fail when there is none, the
/// plural forms return the full selection in the order the browser reports.
pub struct Selected;

impl Selected {
    /// The `value` attribute of the selected option.
    pub fn value_of(target: &TargetElement) -> SelectedValue {
        SelectedValue {
            target: target.clone(),
        }
    }

    /// The `value` attributes of all selected options.
    pub fn values_of(target: &TargetElement) -> SelectedValues {
        SelectedValues {
            target: target.clone(),
        }
    }

    /// The visible label of the selected option.
    pub fn option_in(target: &TargetElement) -> SelectedOption {
        SelectedOption {
            target: target.clone(),
        }
    }

    /// The visible labels of all selected options.
    pub fn options_in(target: &TargetElement) -> SelectedOptions {
        SelectedOptions {
            target: target.clone(),
        }
    }
}

/// Question: the value selected in a control.
#[derive(Clone)]
pub struct SelectedValue {
    target: TargetElement,
}

#[async_trait]
impl Question for SelectedValue {
    type Answer = String;

    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        first_of(element.selected_values().await?, &self.target)
    }
}

impl fmt::Display for SelectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value selected in {}", self.target)
    }
}

/// Question: all values selected in a control.
#[derive(Clone)]
pub struct SelectedValues {
    target: TargetElement,
}

#[async_trait]
impl Question for SelectedValues {
    type Answer = Vec<String>;

    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Vec<String>> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        Ok(element.selected_values().await?)
    }
}

impl fmt::Display for SelectedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "values selected in {}", self.target)
    }
}

/// Question: the option label selected in a control.
#[derive(Clone)]
pub struct SelectedOption {
    target: TargetElement,
}

#[async_trait]
impl Question for SelectedOption {
    type Answer = String;

    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        first_of(element.selected_labels().await?, &self.target)
    }
}

impl fmt::Display for SelectedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option selected in {}", self.target)
    }
}

/// Question: all option labels selected in a control.
#[derive(Clone)]
pub struct SelectedOptions {
    target: TargetElement,
}

#[async_trait]
impl Question for SelectedOptions {
    type Answer = Vec<String>;

    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Vec<String>> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        Ok(element.selected_labels().await?)
    }
}

impl fmt::Display for SelectedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "options selected in {}", self.target)
    }
}

// Selection read-backs compose as inputs to further selections, so each
// question converts into the answerable shapes the resolution engine accepts.
impl From<SelectedValue> for Answerable<String> {
    fn from(question: SelectedValue) -> Self {
        Answerable::question(question)
    }
}

impl From<SelectedValue> for OneOrMany<String> {
    fn from(question: SelectedValue) -> Self {
        OneOrMany::One(question.into())
    }
}

impl From<SelectedOption> for Answerable<String> {
    fn from(question: SelectedOption) -> Self {
        Answerable::question(question)
    }
}

impl From<SelectedOption> for OneOrMany<String> {
    fn from(question: SelectedOption) -> Self {
        OneOrMany::One(question.into())
    }
}

impl From<SelectedValues> for Answerable<Vec<String>> {
    fn from(question: SelectedValues) -> Self {
        Answerable::question(question)
    }
}

impl From<SelectedValues> for OneOrMany<String> {
    fn from(question: SelectedValues) -> Self {
        OneOrMany::Many(question.into())
    }
}

impl From<SelectedOptions> for Answerable<Vec<String>> {
    fn from(question: SelectedOptions) -> Self {
        Answerable::question(question)
    }
}

impl From<SelectedOptions> for OneOrMany<String> {
    fn from(question: SelectedOptions) -> Self {
        OneOrMany::Many(question.into())
    }
}

fn first_of(mut selections: Vec<String>, target: &TargetElement) -> ScreenplayResult<String> {
    if selections.is_empty() {
        return Err(BrowserError::NothingSelected {
            control: target.to_string(),
        }
        .into());
    }
    Ok(selections.remove(0))
}

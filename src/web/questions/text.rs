//! Text read-back questions

use std::fmt;

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::screenplay::answerable::{Answerable, OneOrMany};
use crate::screenplay::error::ScreenplayResult;
use crate::screenplay::{Actor, Question};
use crate::web::browse::BrowseTheWeb;
use crate::web::target::{TargetElement, TargetElements};

/// Entry point for questions about visible text.
pub struct Text;

impl Text {
    /// The visible text of a single element.
    pub fn of(target: &TargetElement) -> TextOf {
        TextOf {
            target: target.clone(),
        }
    }

    /// The visible text of every element a multi-element target matches,
    /// in DOM order.
    pub fn of_all(targets: &TargetElements) -> TextOfAll {
        TextOfAll {
            targets: targets.clone(),
        }
    }
}

/// Question: the text of one element.
#[derive(Clone)]
pub struct TextOf {
    target: TargetElement,
}

#[async_trait]
impl Question for TextOf {
    type Answer = String;

    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<String> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        Ok(element.text().await?)
    }
}

impl fmt::Display for TextOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the text of {}", self.target)
    }
}

impl From<TextOf> for Answerable<String> {
    fn from(question: TextOf) -> Self {
        Answerable::question(question)
    }
}

impl From<TextOf> for OneOrMany<String> {
    fn from(question: TextOf) -> Self {
        OneOrMany::One(question.into())
    }
}

/// Question: the text of every matched element.
#[derive(Clone)]
pub struct TextOfAll {
    targets: TargetElements,
}

#[async_trait]
impl Question for TextOfAll {
    type Answer = Vec<String>;

    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<Vec<String>> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        let elements = browse.locate_all(&self.targets).await?;
        let texts = try_join_all(elements.iter().map(|element| element.text())).await?;
        Ok(texts)
    }
}

impl fmt::Display for TextOfAll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the text of {}", self.targets)
    }
}

impl From<TextOfAll> for Answerable<Vec<String>> {
    fn from(question: TextOfAll) -> Self {
        Answerable::question(question)
    }
}

impl From<TextOfAll> for OneOrMany<String> {
    fn from(question: TextOfAll) -> Self {
        OneOrMany::Many(question.into())
    }
}

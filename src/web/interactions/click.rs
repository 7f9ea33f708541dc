//! Clicking elements

use std::fmt;

use async_trait::async_trait;

use crate::screenplay::error::ScreenplayResult;
use crate::screenplay::{Actor, Performable};
use crate::web::browse::BrowseTheWeb;
use crate::web::target::TargetElement;

/// Click on a target element.
#[derive(Clone)]
pub struct Click {
    target: TargetElement,
}

impl Click {
    /// Click on the given target.
    pub fn on(target: &TargetElement) -> Self {
        Self {
            target: target.clone(),
        }
    }
}

#[async_trait]
impl Performable for Click {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        let element = browse.locate(&self.target).await?;
        element.click().await?;
        Ok(())
    }
}

impl fmt::Display for Click {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#actor clicks on {}", self.target)
    }
}

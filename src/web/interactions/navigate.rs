//! Navigation

use std::fmt;

use async_trait::async_trait;

use crate::screenplay::answerable::Answerable;
use crate::screenplay::error::ScreenplayResult;
use crate::screenplay::{Actor, Performable};
use crate::web::browse::BrowseTheWeb;

/// Navigate the browser session to a URL.
#[derive(Clone)]
pub struct Navigate {
    url: Answerable<String>,
}

impl Navigate {
    /// Navigate to the given URL.
    pub fn to(url: impl Into<Answerable<String>>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl Performable for Navigate {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let url = actor.answer(&self.url).await?;
        let browse = actor.ability::<BrowseTheWeb>()?;
        browse.navigate_to(&url).await?;
        Ok(())
    }
}

impl fmt::Display for Navigate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#actor navigates to {}", self.url)
    }
}

//! Dismissing and accepting modal dialogs
//!
//! The dialog reference is itself an answerable, so it resolves only when
//! the interaction executes. A dismissal attempted while no dialog is open
//! surfaces the driver's error; it is never swallowed.

use std::fmt;

use async_trait::async_trait;

use crate::screenplay::answerable::Answerable;
use crate::screenplay::error::ScreenplayResult;
use crate::screenplay::{Actor, Performable};
use crate::web::driver::DialogRef;

/// Dismiss (cancel) a modal dialog.
#[derive(Clone)]
pub struct Dismiss {
    window: Answerable<DialogRef>,
}

impl Dismiss {
    /// Dismiss the given dialog, typically
    /// `Dismiss::the(ModalDialog::window())`.
    pub fn the(window: impl Into<Answerable<DialogRef>>) -> Self {
        Self {
            window: window.into(),
        }
    }
}

#[async_trait]
impl Performable for Dismiss {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let dialog = actor.answer(&self.window).await?;
        dialog.dismiss().await?;
        Ok(())
    }
}

impl fmt::Display for Dismiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#actor dismisses {}", self.window)
    }
}

/// Accept (confirm) a modal dialog.
#[derive(Clone)]
pub struct Accept {
    window: Answerable<DialogRef>,
}

impl Accept {
    /// Accept the given dialog, typically
    /// `Accept::the(ModalDialog::window())`.
    pub fn the(window: impl Into<Answerable<DialogRef>>) -> Self {
        Self {
            window: window.into(),
        }
    }
}

#[async_trait]
impl Performable for Accept {
    async fn perform_as(&self, actor: &Actor) -> ScreenplayResult<()> {
        let dialog = actor.answer(&self.window).await?;
        dialog.accept().await?;
        Ok(())
    }
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#actor accepts {}", self.window)
    }
}

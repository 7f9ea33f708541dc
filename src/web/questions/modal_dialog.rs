//! The modal-dialog question

use std::fmt;

use async_trait::async_trait;

use crate::screenplay::answerable::Answerable;
use crate::screenplay::error::ScreenplayResult;
use crate::screenplay::{Actor, Question};
use crate::web::browse::BrowseTheWeb;
use crate::web::driver::DialogRef;

/// Entry point for questions about modal dialogs.
pub struct ModalDialog;

impl ModalDialog {
    /// The currently open modal dialog window.
    ///
    /// Deferred like any question: whether a dialog is actually open is only
    /// checked when an interaction such as
    /// [`Dismiss`](crate::web::interactions::Dismiss) resolves it.
    pub fn window() -> ModalDialogWindow {
        ModalDialogWindow
    }
}

/// Question: the currently open modal dialog window.
#[derive(Clone, Copy)]
pub struct ModalDialogWindow;

#[async_trait]
impl Question for ModalDialogWindow {
    type Answer = DialogRef;

    async fn answered_by(&self, actor: &Actor) -> ScreenplayResult<DialogRef> {
        let browse = actor.ability::<BrowseTheWeb>()?;
        Ok(browse.modal_dialog().await?)
    }
}

impl fmt::Display for ModalDialogWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the modal dialog window")
    }
}

impl From<ModalDialogWindow> for Answerable<DialogRef> {
    fn from(question: ModalDialogWindow) -> Self {
        Answerable::question(question)
    }
}

//! Confirmation dialog contracts and lightweight test adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ConfirmDialogService`].
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Text shown by a two-button confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// Dialog title.
    pub title: String,
    /// Body text under the title.
    pub message: String,
    /// Label of the button that accepts.
    pub accept_label: String,
    /// Label of the button that declines.
    pub decline_label: String,
}

/// The user's answer to a [`ConfirmRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    /// The accept button was chosen.
    Accepted,
    /// The decline button was chosen or the dialog was dismissed.
    Declined,
}

impl DialogChoice {
    /// Maps a host's boolean "ok" answer to a choice.
    pub const fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Declined
        }
    }

    /// Returns whether the user accepted.
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Host UI context able to present a modal confirmation and report the user's choice.
pub trait ConfirmDialogService {
    /// Presents `request` and resolves once the user has answered.
    fn confirm<'a>(
        &'a self,
        request: &'a ConfirmRequest,
    ) -> DialogFuture<'a, Result<DialogChoice, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op dialog service for hosts without a UI; every prompt is declined.
pub struct NoopConfirmDialogService;

impl ConfirmDialogService for NoopConfirmDialogService {
    fn confirm<'a>(
        &'a self,
        _request: &'a ConfirmRequest,
    ) -> DialogFuture<'a, Result<DialogChoice, String>> {
        Box::pin(async { Ok(DialogChoice::Declined) })
    }
}

#[derive(Debug, Clone)]
/// Dialog service that answers every prompt with a fixed choice and records what it was shown.
pub struct ScriptedConfirmDialogService {
    answer: Result<DialogChoice, String>,
    shown: Rc<RefCell<Vec<ConfirmRequest>>>,
}

impl ScriptedConfirmDialogService {
    /// Creates a dialog that always answers `choice`.
    pub fn new(choice: DialogChoice) -> Self {
        Self {
            answer: Ok(choice),
            shown: Rc::default(),
        }
    }

    /// Creates a dialog whose every presentation fails with `message`.
    ///
    /// Failed presentations are still recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            answer: Err(message.into()),
            shown: Rc::default(),
        }
    }

    /// Creates a dialog that always accepts.
    pub fn accepting() -> Self {
        Self::new(DialogChoice::Accepted)
    }

    /// Creates a dialog that always declines.
    pub fn declining() -> Self {
        Self::new(DialogChoice::Declined)
    }

    /// Returns every request presented so far, oldest first.
    pub fn shown_requests(&self) -> Vec<ConfirmRequest> {
        self.shown.borrow().clone()
    }
}

impl ConfirmDialogService for ScriptedConfirmDialogService {
    fn confirm<'a>(
        &'a self,
        request: &'a ConfirmRequest,
    ) -> DialogFuture<'a, Result<DialogChoice, String>> {
        Box::pin(async move {
            self.shown.borrow_mut().push(request.clone());
            self.answer.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> ConfirmRequest {
        ConfirmRequest {
            title: "Rate".to_string(),
            message: "Please?".to_string(),
            accept_label: "Sure".to_string(),
            decline_label: "Later".to_string(),
        }
    }

    #[test]
    fn scripted_dialog_answers_and_records() {
        let dialog = ScriptedConfirmDialogService::accepting();
        let dialog_obj: &dyn ConfirmDialogService = &dialog;

        let choice = block_on(dialog_obj.confirm(&request())).expect("confirm");

        assert_eq!(choice, DialogChoice::Accepted);
        assert_eq!(dialog.shown_requests(), vec![request()]);
    }

    #[test]
    fn failing_scripted_dialog_reports_error_and_records() {
        let dialog = ScriptedConfirmDialogService::failing("no window to attach to");

        let err = block_on(dialog.confirm(&request())).expect_err("confirm should fail");

        assert_eq!(err, "no window to attach to");
        assert_eq!(dialog.shown_requests().len(), 1);
    }

    #[test]
    fn noop_dialog_declines() {
        let choice = block_on(NoopConfirmDialogService.confirm(&request())).expect("confirm");
        assert!(!choice.is_accepted());
    }

    #[test]
    fn boolean_answers_map_to_choices() {
        assert_eq!(DialogChoice::from_accepted(true), DialogChoice::Accepted);
        assert_eq!(DialogChoice::from_accepted(false), DialogChoice::Declined);
    }
}

//! Confirmation dialog adapter backed by the Tauri dialog plugin.

use platform_host::{ConfirmDialogService, ConfirmRequest, DialogChoice, DialogFuture};
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

/// Native OK/Cancel message box with the request's button labels.
///
/// The dialog blocks its caller, so it must not be driven from the main thread.
#[derive(Clone)]
pub struct TauriConfirmDialogService {
    app: tauri::AppHandle,
}

impl TauriConfirmDialogService {
    /// Wraps an application handle.
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl ConfirmDialogService for TauriConfirmDialogService {
    fn confirm<'a>(
        &'a self,
        request: &'a ConfirmRequest,
    ) -> DialogFuture<'a, Result<DialogChoice, String>> {
        Box::pin(async move {
            let accepted = self
                .app
                .dialog()
                .message(request.message.clone())
                .title(request.title.clone())
                .kind(MessageDialogKind::Info)
                .buttons(MessageDialogButtons::OkCancelCustom(
                    request.accept_label.clone(),
                    request.decline_label.clone(),
                ))
                .blocking_show();
            Ok(DialogChoice::from_accepted(accepted))
        })
    }
}

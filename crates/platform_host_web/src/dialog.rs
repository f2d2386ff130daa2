//! Confirmation dialog adapter backed by `window.confirm`.

use platform_host::{ConfirmDialogService, ConfirmRequest, DialogChoice, DialogFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser dialog adapter.
///
/// `window.confirm` cannot relabel its buttons, so the labels are folded into the message text.
pub struct WebConfirmDialogService;

impl ConfirmDialogService for WebConfirmDialogService {
    fn confirm<'a>(
        &'a self,
        request: &'a ConfirmRequest,
    ) -> DialogFuture<'a, Result<DialogChoice, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsValue;
                let window =
                    web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
                return window
                    .confirm_with_message(&render_confirm_text(request))
                    .map(DialogChoice::from_accepted)
                    .map_err(|err: JsValue| format!("confirm dialog failed: {err:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = request;
                Ok(DialogChoice::Declined)
            }
        })
    }
}

/// Renders a request as the single text block `window.confirm` displays.
pub fn render_confirm_text(request: &ConfirmRequest) -> String {
    let mut text = request.title.trim().to_string();
    let message = request.message.trim();
    if !message.is_empty() {
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(message);
    }
    text.push_str(&format!(
        "\n\nOK: {}\nCancel: {}",
        request.accept_label, request.decline_label
    ));
    text
}

//! Text shown by the rating prompt.

use platform_host::ConfirmRequest;
use serde::{Deserialize, Serialize};

/// Title, message, and button labels of the rating confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptCopy {
    /// Dialog title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Label of the button that opens the review page.
    pub accept_label: String,
    /// Label of the button that dismisses the prompt.
    pub decline_label: String,
}

impl Default for PromptCopy {
    fn default() -> Self {
        Self {
            title: "Enjoying the app?".to_string(),
            message: "If you have a moment, please leave a rating in the store. Thanks for your support!"
                .to_string(),
            accept_label: "Rate Now".to_string(),
            decline_label: "Not Now".to_string(),
        }
    }
}

impl PromptCopy {
    /// Builds the host dialog request for this copy.
    pub fn to_request(&self) -> ConfirmRequest {
        ConfirmRequest {
            title: self.title.clone(),
            message: self.message.clone(),
            accept_label: self.accept_label.clone(),
            decline_label: self.decline_label.clone(),
        }
    }
}

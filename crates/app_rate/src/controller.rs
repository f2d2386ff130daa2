//! The rating controller: identifier state, review URL derivation, and the prompt flow.

use platform_host::{ConfirmDialogService, ConfirmRequest, ExternalUrlService, HostServices};
use url::Url;

use crate::{PromptCopy, RateConfig, RateError, Storefront};

/// Result of [`RateController::open_store_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The URL was handed to the host opener.
    Opened(Url),
    /// No usable review URL exists yet, so nothing was opened.
    Skipped,
}

/// Result of [`RateController::show_rate_prompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user declined; the store page was not requested.
    Declined,
    /// The user accepted and the store page was requested.
    Accepted(OpenOutcome),
}

/// Holds the configured store identifier and drives the rating prompt through host services.
///
/// One controller is expected per application lifetime. The identifier starts unset; until it is
/// set, [`store_url`](Self::store_url) returns `None` and
/// [`open_store_page`](Self::open_store_page) does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateController {
    store_identifier: Option<String>,
    storefront: Storefront,
    prompt: PromptCopy,
}

impl RateController {
    /// Builds a controller from loaded configuration.
    pub fn new(config: RateConfig) -> Self {
        Self {
            store_identifier: config.store_identifier,
            storefront: config.storefront,
            prompt: config.prompt,
        }
    }

    /// Replaces the storefront template.
    #[must_use]
    pub fn with_storefront(mut self, storefront: Storefront) -> Self {
        self.storefront = storefront;
        self
    }

    /// Replaces the dialog copy.
    #[must_use]
    pub fn with_prompt(mut self, prompt: PromptCopy) -> Self {
        self.prompt = prompt;
        self
    }

    /// Stores `id`, overwriting any previous identifier.
    ///
    /// The value is not validated here; an unusable identifier makes
    /// [`store_url`](Self::store_url) return `None`.
    pub fn set_store_identifier(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(store_identifier = %id, "store identifier set");
        self.store_identifier = Some(id);
    }

    /// Returns the raw configured identifier, if any.
    pub fn store_identifier(&self) -> Option<&str> {
        self.store_identifier.as_deref()
    }

    /// Returns the active storefront.
    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// Returns the dialog copy.
    pub fn prompt(&self) -> &PromptCopy {
        &self.prompt
    }

    /// Computes the review URL for the current identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::NotConfigured`] before an identifier is set, otherwise whatever
    /// [`Storefront::review_url`] reports.
    pub fn try_store_url(&self) -> Result<Url, RateError> {
        let id = self
            .store_identifier
            .as_deref()
            .ok_or(RateError::NotConfigured)?;
        self.storefront.review_url(id)
    }

    /// Computes the review URL, or `None` when no usable identifier is configured.
    pub fn store_url(&self) -> Option<Url> {
        self.try_store_url().ok()
    }

    /// Builds the dialog request shown by [`show_rate_prompt`](Self::show_rate_prompt).
    pub fn prompt_request(&self) -> ConfirmRequest {
        self.prompt.to_request()
    }

    /// Asks the host to open the review page.
    ///
    /// Without a usable URL this is a logged no-op returning [`OpenOutcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Host`] carrying the opener's own failure message.
    pub async fn open_store_page<O>(&self, opener: &O) -> Result<OpenOutcome, RateError>
    where
        O: ExternalUrlService + ?Sized,
    {
        let url = match self.try_store_url() {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(error = %err, "store page not opened");
                return Ok(OpenOutcome::Skipped);
            }
        };

        opener.open_url(url.as_str()).await.map_err(|err| {
            tracing::warn!(url = %url, error = %err, "host failed to open store page");
            RateError::Host(err)
        })?;
        tracing::info!(url = %url, "opened store page");
        Ok(OpenOutcome::Opened(url))
    }

    /// Presents the rating prompt and opens the review page when the user accepts.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Host`] when the dialog or the opener fails.
    pub async fn show_rate_prompt<D, O>(
        &self,
        dialog: &D,
        opener: &O,
    ) -> Result<PromptOutcome, RateError>
    where
        D: ConfirmDialogService + ?Sized,
        O: ExternalUrlService + ?Sized,
    {
        let request = self.prompt_request();
        let choice = dialog.confirm(&request).await.map_err(RateError::Host)?;
        tracing::debug!(?choice, "rate prompt answered");

        if !choice.is_accepted() {
            return Ok(PromptOutcome::Declined);
        }
        let opened = self.open_store_page(opener).await?;
        Ok(PromptOutcome::Accepted(opened))
    }

    /// Runs [`show_rate_prompt`](Self::show_rate_prompt) against a host bundle after checking
    /// that the host can present dialogs and open URLs.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Capability`] without touching the host when a capability is missing.
    pub async fn show_rate_prompt_with(
        &self,
        host: &HostServices,
    ) -> Result<PromptOutcome, RateError> {
        host.capabilities.require_prompt()?;
        tracing::debug!(host = host.host_strategy.as_str(), "showing rate prompt");
        self.show_rate_prompt(host.dialogs.as_ref(), host.external_urls.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryExternalUrlService, ScriptedConfirmDialogService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unset_controller_has_no_url() {
        let controller = RateController::default();
        assert_eq!(controller.store_url(), None);
        assert!(matches!(
            controller.try_store_url(),
            Err(RateError::NotConfigured)
        ));
    }

    #[test]
    fn configured_identifier_appears_in_url() {
        let mut controller = RateController::default();
        controller.set_store_identifier("123456789");

        let url = controller.store_url().expect("url");
        assert_eq!(
            url.as_str(),
            "https://apps.apple.com/app/id123456789?action=write-review"
        );
        assert!(url.as_str().contains("123456789"));
    }

    #[test]
    fn repeated_identifier_is_idempotent() {
        let mut once = RateController::default();
        once.set_store_identifier("abc");

        let mut twice = RateController::default();
        twice.set_store_identifier("abc");
        twice.set_store_identifier("abc");

        assert_eq!(once.store_url(), twice.store_url());
        assert_eq!(once, twice);
    }

    #[test]
    fn last_identifier_wins() {
        let mut controller = RateController::default();
        controller.set_store_identifier("a");
        controller.set_store_identifier("b");

        assert_eq!(controller.store_identifier(), Some("b"));
        assert_eq!(
            controller.store_url().map(String::from).as_deref(),
            Some("https://apps.apple.com/app/idb?action=write-review")
        );
    }

    #[test]
    fn empty_identifier_yields_sentinel_and_skips_open() {
        let mut controller = RateController::default();
        controller.set_store_identifier("");
        let opener = MemoryExternalUrlService::default();

        assert_eq!(controller.store_url(), None);
        let outcome = block_on(controller.open_store_page(&opener)).expect("open");

        assert_eq!(outcome, OpenOutcome::Skipped);
        assert_eq!(opener.open_count(), 0);
    }

    #[test]
    fn open_passes_computed_url_unmodified() {
        let mut controller = RateController::default().with_storefront(Storefront::GooglePlay);
        controller.set_store_identifier("com.example.app");
        let opener = MemoryExternalUrlService::default();

        let outcome = block_on(controller.open_store_page(&opener)).expect("open");

        let expected = controller.store_url().expect("url");
        assert_eq!(opener.opened_urls(), vec![expected.as_str().to_string()]);
        assert_eq!(outcome, OpenOutcome::Opened(expected));
    }

    #[test]
    fn opener_failure_surfaces_as_host_error() {
        let mut controller = RateController::default();
        controller.set_store_identifier("1");
        let opener = MemoryExternalUrlService::failing("no handler for https");

        let err = block_on(controller.open_store_page(&opener)).expect_err("should fail");

        assert!(matches!(err, RateError::Host(ref message) if message == "no handler for https"));
    }

    #[test]
    fn dialog_failure_surfaces_as_host_error_without_opening() {
        let mut controller = RateController::default();
        controller.set_store_identifier("123456789");
        let dialog = ScriptedConfirmDialogService::failing("no window to attach to");
        let opener = MemoryExternalUrlService::default();

        let err = block_on(controller.show_rate_prompt(&dialog, &opener)).expect_err("should fail");

        assert!(matches!(err, RateError::Host(ref message) if message == "no window to attach to"));
        assert_eq!(dialog.shown_requests().len(), 1);
        assert_eq!(opener.open_count(), 0);
    }

    #[test]
    fn prompt_uses_configured_copy() {
        let copy = PromptCopy {
            title: "Rate us".to_string(),
            ..PromptCopy::default()
        };
        let controller = RateController::default().with_prompt(copy.clone());
        let dialog = ScriptedConfirmDialogService::declining();

        block_on(controller.show_rate_prompt(&dialog, &MemoryExternalUrlService::default()))
            .expect("prompt");

        assert_eq!(dialog.shown_requests(), vec![copy.to_request()]);
    }
}

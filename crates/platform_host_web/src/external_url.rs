//! External URL adapter backed by `window.open`.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter; opens the URL in a new tab.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let window =
                    web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
                return match window.open_with_url_and_target(url, "_blank") {
                    Ok(Some(_)) => Ok(()),
                    Ok(None) => Err("popup blocked while opening external URL".to_string()),
                    Err(err) => Err(format!("external URL open failed: {err:?}")),
                };
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                tracing::debug!(url, "external URL open ignored on native target");
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_fallback_accepts_review_urls() {
        let service: &dyn ExternalUrlService = &WebExternalUrlService;
        let url = "https://play.google.com/store/apps/details?id=x&showAllReviews=true";

        assert_eq!(block_on(service.open_url(url)), Ok(()));
    }
}

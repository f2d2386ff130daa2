//! Storefront review-page URL templates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::RateError;

/// Placeholder replaced by the percent-encoded store identifier.
pub const ID_PLACEHOLDER: &str = "{id}";

const APP_STORE_TEMPLATE: &str = "https://apps.apple.com/app/id{id}?action=write-review";
const APP_STORE_NATIVE_TEMPLATE: &str = "itms-apps://itunes.apple.com/app/id{id}?action=write-review";
const GOOGLE_PLAY_TEMPLATE: &str = "https://play.google.com/store/apps/details?id={id}";

/// Storefront whose review page the prompt should open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Storefront {
    /// Apple App Store web link with the write-review action.
    #[default]
    AppStore,
    /// Apple App Store `itms-apps` deep link, handled by the store app directly.
    AppStoreNative,
    /// Google Play details page.
    GooglePlay,
    /// Caller-supplied template containing [`ID_PLACEHOLDER`].
    Custom {
        /// Template text.
        template: String,
    },
}

impl Storefront {
    /// Returns the template the identifier is substituted into.
    pub fn template(&self) -> &str {
        match self {
            Self::AppStore => APP_STORE_TEMPLATE,
            Self::AppStoreNative => APP_STORE_NATIVE_TEMPLATE,
            Self::GooglePlay => GOOGLE_PLAY_TEMPLATE,
            Self::Custom { template } => template,
        }
    }

    /// Stable name used in configuration and on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AppStore => "app-store",
            Self::AppStoreNative => "app-store-native",
            Self::GooglePlay => "google-play",
            Self::Custom { .. } => "custom",
        }
    }

    /// Builds the review URL for `identifier`.
    ///
    /// The identifier is trimmed and percent-encoded before substitution, so identifiers made of
    /// unreserved URL characters appear in the result verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidIdentifier`] for an empty or control-character identifier and
    /// [`RateError::InvalidTemplate`] when the template lacks the placeholder or does not parse.
    pub fn review_url(&self, identifier: &str) -> Result<Url, RateError> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
            return Err(RateError::InvalidIdentifier(identifier.to_string()));
        }

        let template = self.template();
        if !template.contains(ID_PLACEHOLDER) {
            return Err(RateError::InvalidTemplate {
                template: template.to_string(),
                reason: format!("missing {ID_PLACEHOLDER} placeholder"),
            });
        }

        let raw = template.replace(ID_PLACEHOLDER, &urlencoding::encode(trimmed));
        Url::parse(&raw).map_err(|err| RateError::InvalidTemplate {
            template: template.to_string(),
            reason: err.to_string(),
        })
    }
}

impl fmt::Display for Storefront {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom { template } => f.write_str(template),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Storefront {
    type Err = RateError;

    /// Parses a storefront name, or treats any text containing [`ID_PLACEHOLDER`] as a custom
    /// template.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_ascii_lowercase().as_str() {
            "app-store" | "appstore" | "ios" => Ok(Self::AppStore),
            "app-store-native" | "itms-apps" => Ok(Self::AppStoreNative),
            "google-play" | "play" | "android" => Ok(Self::GooglePlay),
            _ if value.contains(ID_PLACEHOLDER) => Ok(Self::Custom {
                template: value.to_string(),
            }),
            _ => Err(RateError::UnknownStorefront(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_templates_render_expected_urls() {
        let cases = [
            (
                Storefront::AppStore,
                "https://apps.apple.com/app/id123456789?action=write-review",
            ),
            (
                Storefront::AppStoreNative,
                "itms-apps://itunes.apple.com/app/id123456789?action=write-review",
            ),
            (
                Storefront::GooglePlay,
                "https://play.google.com/store/apps/details?id=123456789",
            ),
        ];

        for (storefront, expected) in cases {
            let url = storefront.review_url("123456789").expect("review url");
            assert_eq!(url.as_str(), expected, "{storefront}");
        }
    }

    #[test]
    fn identifier_is_trimmed_and_encoded() {
        let url = Storefront::GooglePlay
            .review_url("  com.example app ")
            .expect("review url");
        assert_eq!(
            url.as_str(),
            "https://play.google.com/store/apps/details?id=com.example%20app"
        );
    }

    #[test]
    fn unusable_identifiers_are_rejected() {
        for raw in ["", "   ", "12\n34"] {
            let err = Storefront::AppStore
                .review_url(raw)
                .expect_err("identifier should be rejected");
            assert!(matches!(err, RateError::InvalidIdentifier(ref id) if id == raw));
        }
    }

    #[test]
    fn custom_template_requires_placeholder_and_valid_url() {
        let missing = Storefront::Custom {
            template: "https://store.test/review".to_string(),
        };
        assert!(matches!(
            missing.review_url("1"),
            Err(RateError::InvalidTemplate { .. })
        ));

        let relative = Storefront::Custom {
            template: "review/{id}".to_string(),
        };
        assert!(matches!(
            relative.review_url("1"),
            Err(RateError::InvalidTemplate { .. })
        ));

        let ok = Storefront::Custom {
            template: "https://store.test/apps/{id}/reviews".to_string(),
        };
        assert_eq!(
            ok.review_url("abc").expect("custom url").as_str(),
            "https://store.test/apps/abc/reviews"
        );
    }

    #[test]
    fn names_and_templates_parse() {
        assert_eq!("app-store".parse::<Storefront>().ok(), Some(Storefront::AppStore));
        assert_eq!("Android".parse::<Storefront>().ok(), Some(Storefront::GooglePlay));
        assert_eq!(
            "itms-apps".parse::<Storefront>().ok(),
            Some(Storefront::AppStoreNative)
        );
        assert_eq!(
            "https://s.test/{id}".parse::<Storefront>().ok(),
            Some(Storefront::Custom {
                template: "https://s.test/{id}".to_string()
            })
        );
        assert!(matches!(
            "steam".parse::<Storefront>(),
            Err(RateError::UnknownStorefront(ref name)) if name == "steam"
        ));
    }
}

use std::time::Duration;

use folio_layout::{Breakpoint, DEFAULT_PANEL_WIDTH, DEFAULT_TRANSITION_MS};
use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

const MAX_TRANSITION_MS: u64 = 5_000;

/// A labelled outbound link shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SocialLink {
    pub(crate) label: String,
    pub(crate) url: String,
}

impl SocialLink {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// Responsive layout knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LayoutConfig {
    pub(crate) breakpoint: Breakpoint,
    pub(crate) sidebar_width: f32,
    pub(crate) transition_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::default(),
            sidebar_width: DEFAULT_PANEL_WIDTH,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl LayoutConfig {
    pub(crate) fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Static site metadata rendered in the chrome.
///
/// Every field falls back to its default when missing from the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SiteConfig {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) email: String,
    pub(crate) social_links: Vec<SocialLink>,
    pub(crate) copyright_year: u16,
    pub(crate) layout: LayoutConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::from("Folio"),
            author: String::from("Folio Author"),
            email: String::from("hello@example.com"),
            social_links: vec![
                SocialLink::new("GitHub", "https://github.com"),
                SocialLink::new("LinkedIn", "https://www.linkedin.com"),
                SocialLink::new("Instagram", "https://www.instagram.com"),
            ],
            copyright_year: 2024,
            layout: LayoutConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Reject values the layout cannot work with.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if !is_positive(layout.breakpoint.width()) {
            return Err(ConfigError::Validation {
                message: format!(
                    "breakpoint must be positive, got {}",
                    layout.breakpoint.width()
                ),
            });
        }

        if !is_positive(layout.sidebar_width) {
            return Err(ConfigError::Validation {
                message: format!(
                    "sidebar_width must be positive, got {}",
                    layout.sidebar_width
                ),
            });
        }

        if layout.transition_ms > MAX_TRANSITION_MS {
            return Err(ConfigError::Validation {
                message: format!(
                    "transition_ms must be at most {MAX_TRANSITION_MS}, got {}",
                    layout.transition_ms
                ),
            });
        }

        Ok(())
    }

    /// Footer line, e.g. `© 2024 Folio Author. All rights reserved.`
    pub(crate) fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year, self.author
        )
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use folio_layout::Breakpoint;

    use super::SiteConfig;
    use crate::config::errors::ConfigError;

    #[test]
    fn given_default_config_when_validated_then_it_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn given_partial_json_when_parsed_then_missing_fields_use_defaults() {
        let config: SiteConfig = serde_json::from_str(
            r#"{ "author": "Jane", "layout": { "breakpoint": 600 } }"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.author, "Jane");
        assert_eq!(config.layout.breakpoint, Breakpoint::new(600.0));
        assert_eq!(
            config.layout.sidebar_width,
            SiteConfig::default().layout.sidebar_width
        );
        assert_eq!(config.email, SiteConfig::default().email);
    }

    #[test]
    fn given_non_positive_breakpoint_when_validated_then_validation_error_is_returned()
     {
        let mut config = SiteConfig::default();
        config.layout.breakpoint = Breakpoint::new(0.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn given_excessive_transition_when_validated_then_validation_error_is_returned()
     {
        let mut config = SiteConfig::default();
        config.layout.transition_ms = 60_000;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn given_author_and_year_when_formatting_copyright_then_both_appear() {
        let config = SiteConfig {
            author: String::from("Jane"),
            copyright_year: 2031,
            ..SiteConfig::default()
        };

        assert_eq!(config.copyright(), "© 2031 Jane. All rights reserved.");
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::SiteConfig;

/// Status describing how the site config was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the site config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: SiteConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: SiteConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (SiteConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the site config, logging and falling back to defaults on any
/// failure. Startup never aborts because of the config file.
pub(crate) fn load_initial_site_config() -> SiteConfig {
    let path = site_config_path();
    match recover_invalid(load_site_config_from_path(&path)) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("site config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::info!(
                        "site config not found at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(reason) => {
                    log::warn!(
                        "site config at {} is invalid, using defaults: {reason}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!(
                "site config load from {} failed, using defaults: {err}",
                path.display()
            );
            SiteConfig::default()
        },
    }
}

fn load_site_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                SiteConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let config = serde_json::from_str::<SiteConfig>(&data)?;
    config.validate()?;

    Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded))
}

/// Turn a malformed or out-of-range document into defaults with an
/// `Invalid` status. IO failures stay errors.
fn recover_invalid(
    result: Result<ConfigLoad, ConfigError>,
) -> Result<ConfigLoad, ConfigError> {
    match result {
        Err(err @ (ConfigError::Json(_) | ConfigError::Validation { .. })) => {
            Ok(ConfigLoad::new(
                SiteConfig::default(),
                ConfigLoadStatus::Invalid(err.to_string()),
            ))
        },
        other => other,
    }
}

fn site_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("folio")
            .join("site.json");
    }

    std::env::temp_dir().join("folio").join("site.json")
}

//! Configuration model loaded from external sources.

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{DEFAULT_DEBOUNCE_MS, DEFAULT_ITEMS_PER_PAGE, DEFAULT_WINDOW_RADIUS};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Tuning shared by every list view.
pub struct ListConfig {
    pub page_size: usize,
    pub debounce_ms: u64,
    pub window_radius: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_ITEMS_PER_PAGE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

impl ListConfig {
    /// Loads `<dir>/default`, then `<dir>/<profile>`, then `APP_*` variables.
    ///
    /// Both files are optional; missing keys keep their defaults.
    pub fn load(config_dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let default_file = config_dir.join("default");
        let profile_file = config_dir.join(profile);

        let settings = Config::builder()
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&profile_file.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        let list_config = settings.try_deserialize::<ListConfig>()?;
        list_config.validate()?;
        Ok(list_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

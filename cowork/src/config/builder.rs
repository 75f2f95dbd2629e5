//! Configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from all sources.
///
/// Sources, lowest to highest precedence: built-in defaults, the user
/// config in the data directory, an explicit config file, `COWORK_*`
/// environment variables, and programmatic overrides.
///
/// # Examples
///
/// ```
/// use cowork::config::{Config, ConfigBuilder, PromptConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         prompts: Some(PromptConfig { max_empty_inputs: Some(5) }),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_empty_inputs(), 5);
/// assert_eq!(config.booking_policy().min_advance_days(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the user config from this data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }

    /// Reads an additional config file above the user config.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Applies programmatic overrides last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Loads, merges and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or a value fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::with_defaults();

        if !self.skip_files {
            let sources =
                ConfigLoader::load_all(self.data_dir.as_deref(), self.config_file.as_deref())?;
            for source in &sources {
                log::debug!("loading configuration from {}", source.path.display());
                ConfigValidator::validate(&source.config)?;
            }
            ConfigMerger::merge_into(&mut config, &ConfigMerger::merge(sources));
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::BookingConfig;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    fn test_explicit_file_overrides_user_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.yaml"),
            "booking:\n  min_advance_days: 3\n  min_cancel_days: 4\n",
        )
        .unwrap();
        let explicit = temp.path().join("team.yaml");
        fs::write(&explicit, "booking:\n  min_advance_days: 7\n").unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(temp.path())
            .with_config_file(&explicit)
            .skip_env()
            .build()
            .unwrap();

        let policy = config.booking_policy();
        assert_eq!(policy.min_advance_days(), 7);
        assert_eq!(policy.min_cancel_days(), 4);
    }

    #[test]
    fn test_overrides_win_over_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), "maximum_lock_wait_seconds: 9\n").unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(temp.path())
            .skip_env()
            .with_config(Config {
                maximum_lock_wait_seconds: Some(1),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.maximum_lock_wait_seconds, Some(1));
    }

    #[test]
    fn test_invalid_file_value_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.yaml"),
            "prompts:\n  max_empty_inputs: 0\n",
        )
        .unwrap();

        let err = ConfigBuilder::new()
            .with_data_dir(temp.path())
            .skip_env()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                booking: Some(BookingConfig {
                    min_cancel_days: Some(1000),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }
}

//! Configuration system for cowork.
//!
//! Configuration is layered from several sources. From highest to lowest
//! precedence:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`COWORK_*`)
//! 3. An explicit file (`--config`)
//! 4. User config (`<data_dir>/config.yaml`)
//! 5. Built-in defaults
//!
//! The resolved [`Config`] hands out the [`BookingPolicy`](crate::BookingPolicy)
//! used by the lifecycle operations and the
//! [`ExportSettings`](crate::export::ExportSettings) used by exports.
//!
//! # Examples
//!
//! ```no_run
//! use cowork::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("notice: {} days", config.booking_policy().min_advance_days());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{
    BookingConfig, ClosedWeekday, Config, ExportConfig, PromptConfig, DEFAULT_LOCK_WAIT_SECONDS,
    DEFAULT_MAX_EMPTY_INPUTS,
};
pub use validator::ConfigValidator;

/* src/server/core/rust/src/lib.rs */

pub mod app;
pub mod config;
pub mod errors;
pub mod messages;
pub mod resolve;

// Re-exports for ergonomic use
pub use app::PlacardApp;
pub use config::{
  ConfigError, DEFAULT_CONFIG_FILE, I18nSection, PlacardConfig, ServerSection, find_config,
  load_config, parse_config,
};
pub use errors::ServerError;
pub use messages::load_catalog;
pub use placard_engine;
pub use resolve::{LOCALE_COOKIE, LocaleRequest, resolve_locale};

/* src/server/core/rust/src/config.rs */

use std::path::{Path, PathBuf};

use placard_engine::SiteConfig;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "placard.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("parse {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
  #[error("parse messages {path}: {source}")]
  Messages {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
  #[error("{0}")]
  Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacardConfig {
  pub site: SiteConfig,
  pub i18n: I18nSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub page: PageSection,
  /// Directory relative paths resolve against. Set by `load_config`.
  #[serde(skip)]
  pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  pub locales: Vec<String>,
  #[serde(default = "default_locale")]
  pub default: String,
  #[serde(default = "default_messages_dir")]
  pub messages_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSection {
  /// Custom page template; the built-in placeholder is used when absent.
  pub template: Option<String>,
}

fn default_locale() -> String {
  "en".to_string()
}

fn default_messages_dir() -> String {
  "locales".to_string()
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

impl I18nSection {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.locales.is_empty() {
      return Err(ConfigError::Invalid("i18n.locales must not be empty".into()));
    }
    if !self.locales.contains(&self.default) {
      return Err(ConfigError::Invalid(format!(
        "i18n.default \"{}\" is not in i18n.locales {:?}",
        self.default, self.locales
      )));
    }
    Ok(())
  }
}

impl PlacardConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.site.name.trim().is_empty() {
      return Err(ConfigError::Invalid("site.name must not be empty".into()));
    }
    if self.site.url.trim().is_empty() {
      return Err(ConfigError::Invalid("site.url must not be empty".into()));
    }
    // URLs are concatenated verbatim downstream; flag rather than rewrite.
    if self.site.url.ends_with('/') {
      tracing::warn!(
        url = %self.site.url,
        "site.url has a trailing slash; structured data URLs will contain \"//\""
      );
    }
    self.i18n.validate()
  }

  pub fn messages_dir(&self) -> PathBuf {
    self.base_dir.join(&self.i18n.messages_dir)
  }

  pub fn template_path(&self) -> Option<PathBuf> {
    self.page.template.as_ref().map(|t| self.base_dir.join(t))
  }

  pub fn addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}

/// Parse and validate config text. Relative paths resolve against `base_dir`.
pub fn parse_config(
  content: &str,
  path: &Path,
  base_dir: &Path,
) -> Result<PlacardConfig, ConfigError> {
  let mut config: PlacardConfig = toml::from_str(content)
    .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
  config.base_dir = base_dir.to_path_buf();
  config.validate()?;
  Ok(config)
}

/// Search `start` and its ancestors for `placard.toml`.
pub fn find_config(start: &Path) -> Result<PathBuf, ConfigError> {
  let mut dir = start
    .canonicalize()
    .map_err(|source| ConfigError::Io { path: start.to_path_buf(), source })?;
  loop {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      return Err(ConfigError::Invalid(format!(
        "{DEFAULT_CONFIG_FILE} not found (searched upward from {})",
        start.display()
      )));
    }
  }
}

pub fn load_config(path: &Path) -> Result<PlacardConfig, ConfigError> {
  let content = std::fs::read_to_string(path)
    .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
  let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
  let config = parse_config(&content, path, &base_dir)?;
  tracing::info!(
    path = %path.display(),
    site = %config.site.name,
    locales = config.i18n.locales.len(),
    "loaded config"
  );
  Ok(config)
}

/* src/server/core/rust/src/app.rs */

use std::borrow::Cow;

use placard_engine::{
  DEFAULT_TEMPLATE, MessageCatalog, SiteConfig, assemble_home_page, render_home_page,
};

use crate::config::{ConfigError, PlacardConfig};
use crate::errors::ServerError;
use crate::messages::load_catalog;
use crate::resolve::{LocaleRequest, resolve_locale};

/// Immutable per-process render state: site identity, messages, template.
pub struct PlacardApp {
  site: SiteConfig,
  catalog: MessageCatalog,
  locales: Vec<String>,
  default_locale: String,
  template: Cow<'static, str>,
}

impl PlacardApp {
  pub fn new(site: SiteConfig, catalog: MessageCatalog, locales: Vec<String>) -> Self {
    let default_locale = catalog.default_locale().to_string();
    Self { site, catalog, locales, default_locale, template: Cow::Borrowed(DEFAULT_TEMPLATE) }
  }

  pub fn template(mut self, template: impl Into<String>) -> Self {
    self.template = Cow::Owned(template.into());
    self
  }

  /// Load messages and the optional custom template named by `config`.
  pub fn from_config(config: &PlacardConfig) -> Result<Self, ConfigError> {
    let catalog = load_catalog(&config.messages_dir(), &config.i18n)?;
    let mut app = Self::new(config.site.clone(), catalog, config.i18n.locales.clone());
    if let Some(path) = config.template_path() {
      let template = std::fs::read_to_string(&path)
        .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
      tracing::info!(path = %path.display(), "using custom page template");
      app = app.template(template);
    }
    Ok(app)
  }

  pub fn site(&self) -> &SiteConfig {
    &self.site
  }

  pub fn locales(&self) -> &[String] {
    &self.locales
  }

  pub fn default_locale(&self) -> &str {
    &self.default_locale
  }

  pub fn is_locale(&self, locale: &str) -> bool {
    self.locales.iter().any(|l| l == locale)
  }

  /// Pick a locale for a request without a locale in its path.
  pub fn resolve_locale(
    &self,
    cookie_header: Option<&str>,
    accept_language: Option<&str>,
  ) -> String {
    resolve_locale(&LocaleRequest {
      cookie_header,
      accept_language,
      locales: &self.locales,
      default_locale: &self.default_locale,
    })
  }

  /// Render the home page for a configured locale.
  pub fn render(&self, locale: &str) -> Result<String, ServerError> {
    if !self.is_locale(locale) {
      return Err(ServerError::not_found(format!("Unknown locale \"{locale}\"")));
    }

    let translator = self.catalog.translator(locale);
    let result = assemble_home_page(&self.site, &translator)
      .map_err(Into::into)
      .and_then(|page| render_home_page(&self.template, &page));

    match result {
      Ok(html) => {
        tracing::debug!(locale, bytes = html.len(), "rendered home page");
        Ok(html)
      }
      Err(e) => {
        tracing::error!(locale, error = %e, "render failed");
        Err(e.into())
      }
    }
  }
}

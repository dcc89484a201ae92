/* src/server/engine/rust/src/i18n.rs */

//! Locale-bound text lookup.
//!
//! Messages are nested JSON trees per locale, e.g.
//! `{"underConstruction": {"title": "..."}}`. A lookup walks
//! `namespace` then `key` in the active locale, falls back to the default
//! locale for that key, and fails with `MissingTranslation` otherwise.

use std::collections::BTreeMap;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing translation \"{namespace}.{key}\" for locale \"{locale}\"")]
pub struct MissingTranslation {
  pub locale: String,
  pub namespace: String,
  pub key: String,
}

/// Text resolution bound to one locale.
pub trait Translator {
  fn locale(&self) -> &str;
  fn lookup(&self, namespace: &str, key: &str) -> Result<String, MissingTranslation>;
}

/// All loaded messages plus the locale used for per-key fallback.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
  default_locale: String,
  messages: BTreeMap<String, Value>,
}

impl MessageCatalog {
  pub fn new(default_locale: impl Into<String>) -> Self {
    Self { default_locale: default_locale.into(), messages: BTreeMap::new() }
  }

  /// Add (or replace) the message tree for `locale`.
  pub fn insert(&mut self, locale: impl Into<String>, messages: Value) {
    self.messages.insert(locale.into(), messages);
  }

  pub fn with_locale(mut self, locale: impl Into<String>, messages: Value) -> Self {
    self.insert(locale, messages);
    self
  }

  pub fn default_locale(&self) -> &str {
    &self.default_locale
  }

  pub fn locales(&self) -> impl Iterator<Item = &str> {
    self.messages.keys().map(String::as_str)
  }

  pub fn has_locale(&self, locale: &str) -> bool {
    self.messages.contains_key(locale)
  }

  /// Bind a translator to `locale`. The locale does not need to be loaded;
  /// lookups then go straight to the default locale.
  pub fn translator<'a>(&'a self, locale: &'a str) -> CatalogTranslator<'a> {
    CatalogTranslator { catalog: self, locale }
  }

  fn get(&self, locale: &str, namespace: &str, key: &str) -> Option<&str> {
    self.messages.get(locale)?.get(namespace)?.get(key)?.as_str()
  }
}

pub struct CatalogTranslator<'a> {
  catalog: &'a MessageCatalog,
  locale: &'a str,
}

impl Translator for CatalogTranslator<'_> {
  fn locale(&self) -> &str {
    self.locale
  }

  fn lookup(&self, namespace: &str, key: &str) -> Result<String, MissingTranslation> {
    self
      .catalog
      .get(self.locale, namespace, key)
      .or_else(|| self.catalog.get(&self.catalog.default_locale, namespace, key))
      .map(str::to_string)
      .ok_or_else(|| MissingTranslation {
        locale: self.locale.to_string(),
        namespace: namespace.to_string(),
        key: key.to_string(),
      })
  }
}

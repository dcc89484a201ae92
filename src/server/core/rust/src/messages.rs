/* src/server/core/rust/src/messages.rs */

//! Message loading: `{messages_dir}/{locale}.json` for each configured locale.

use std::path::Path;

use placard_engine::MessageCatalog;

use crate::config::{ConfigError, I18nSection};

pub fn load_catalog(dir: &Path, i18n: &I18nSection) -> Result<MessageCatalog, ConfigError> {
  let mut catalog = MessageCatalog::new(&i18n.default);
  for locale in &i18n.locales {
    let path = dir.join(format!("{locale}.json"));
    let content = std::fs::read_to_string(&path)
      .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
    let messages: serde_json::Value = serde_json::from_str(&content)
      .map_err(|source| ConfigError::Messages { path: path.clone(), source })?;
    if !messages.is_object() {
      return Err(ConfigError::Invalid(format!(
        "{}: top level must be a JSON object",
        path.display()
      )));
    }
    tracing::debug!(locale = %locale, path = %path.display(), "loaded messages");
    catalog.insert(locale.clone(), messages);
  }
  Ok(catalog)
}

#[cfg(test)]
mod tests {
  use super::*;
  use placard_engine::Translator;

  fn i18n(locales: &[&str]) -> I18nSection {
    I18nSection {
      locales: locales.iter().map(|l| (*l).to_string()).collect(),
      default: "en".into(),
      messages_dir: "locales".into(),
    }
  }

  #[test]
  fn loads_every_locale() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en.json"), r#"{"underConstruction":{"title":"Soon"}}"#)
      .unwrap();
    std::fs::write(dir.path().join("zh.json"), r#"{"underConstruction":{"title":"即将上线"}}"#)
      .unwrap();

    let catalog = load_catalog(dir.path(), &i18n(&["en", "zh"])).unwrap();
    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["en", "zh"]);
    assert_eq!(catalog.default_locale(), "en");
    let title = catalog.translator("zh").lookup("underConstruction", "title").unwrap();
    assert_eq!(title, "即将上线");
  }

  #[test]
  fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en.json"), "{}").unwrap();
    let err = load_catalog(dir.path(), &i18n(&["en", "zh"])).unwrap_err();
    assert!(matches!(err, ConfigError::Io { ref path, .. } if path.ends_with("zh.json")));
  }

  #[test]
  fn malformed_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en.json"), "{not json").unwrap();
    let err = load_catalog(dir.path(), &i18n(&["en"])).unwrap_err();
    assert!(matches!(err, ConfigError::Messages { .. }));
  }

  #[test]
  fn non_object_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en.json"), r#"["title"]"#).unwrap();
    let err = load_catalog(dir.path(), &i18n(&["en"])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
  }
}

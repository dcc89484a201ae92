/* src/cli/core/src/export.rs */

//! Static export: one pre-rendered page per locale plus the site icon and
//! a root page that forwards to the default locale.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use placard_server::PlacardApp;
use placard_server::placard_engine::{DEFAULT_ICON_SVG, LOGO_PATH, escape_html};

pub struct ExportedFile {
  pub path: PathBuf,
  pub size: u64,
}

pub fn export_site(app: &PlacardApp, out_dir: &Path) -> Result<Vec<ExportedFile>> {
  std::fs::create_dir_all(out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;

  let mut files = Vec::new();
  for locale in app.locales() {
    let html = app.render(locale).with_context(|| format!("failed to render locale {locale}"))?;
    let dir = out_dir.join(locale);
    std::fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    files.push(write_file(&dir.join("index.html"), &html)?);
  }

  let icon = out_dir.join(LOGO_PATH.trim_start_matches('/'));
  files.push(write_file(&icon, DEFAULT_ICON_SVG)?);
  files.push(write_file(&out_dir.join("index.html"), &root_redirect(app.default_locale()))?);

  tracing::info!(out = %out_dir.display(), files = files.len(), "static export complete");
  Ok(files)
}

/// Root page for static hosting, where there is no server-side redirect.
fn root_redirect(locale: &str) -> String {
  let target = format!("/{}/", escape_html(locale));
  format!(
    r#"<!doctype html><html><head><meta charset="utf-8"><meta http-equiv="refresh" content="0; url={target}"><link rel="canonical" href="{target}"></head><body><a href="{target}">{target}</a></body></html>"#
  )
}

fn write_file(path: &Path, content: &str) -> Result<ExportedFile> {
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
  tracing::debug!(path = %path.display(), "wrote file");
  Ok(ExportedFile { path: path.to_path_buf(), size: content.len() as u64 })
}

#[cfg(test)]
mod tests {
  use super::*;
  use placard_server::placard_engine::{MessageCatalog, SiteConfig};
  use serde_json::json;

  fn app() -> PlacardApp {
    let catalog = MessageCatalog::new("en")
      .with_locale(
        "en",
        json!({"underConstruction": {
          "title": "Under construction", "description": "Soon.", "badge": "WIP"
        }}),
      )
      .with_locale(
        "es",
        json!({"underConstruction": {
          "title": "En construcción", "description": "Pronto.", "badge": "En obras"
        }}),
      );
    let site = SiteConfig {
      name: "Acme".into(),
      url: "https://acme.dev".into(),
      github: "https://github.com/acme".into(),
    };
    PlacardApp::new(site, catalog, vec!["en".into(), "es".into()])
  }

  #[test]
  fn writes_every_locale_and_assets() {
    let dir = tempfile::tempdir().unwrap();
    let files = export_site(&app(), dir.path()).unwrap();
    assert_eq!(files.len(), 4);

    let es = std::fs::read_to_string(dir.path().join("es/index.html")).unwrap();
    assert!(es.contains("<h1>En construcción</h1>"));
    assert!(es.contains(r#"<script type="application/ld+json">"#));

    let icon = std::fs::read_to_string(dir.path().join("icon.svg")).unwrap();
    assert!(icon.starts_with("<svg"));

    let root = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(root.contains(r#"url=/en/""#));
  }

  #[test]
  fn sizes_match_written_bytes() {
    let dir = tempfile::tempdir().unwrap();
    for file in export_site(&app(), dir.path()).unwrap() {
      assert_eq!(std::fs::metadata(&file.path).unwrap().len(), file.size);
    }
  }
}

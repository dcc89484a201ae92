/* src/server/core/rust/tests/demo_site.rs */

use std::path::PathBuf;

use placard_server::{PlacardApp, load_config};

fn demo_config() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../../demo/site/placard.toml")
}

#[test]
fn demo_site_renders_every_locale() {
  let config = load_config(&demo_config()).unwrap();
  let app = PlacardApp::from_config(&config).unwrap();

  assert_eq!(app.locales(), ["en", "zh", "ja"]);
  for locale in app.locales() {
    let html = app.render(locale).unwrap();
    assert!(html.contains(&format!(r#"<html lang="{locale}""#)));
    assert_eq!(html.matches(r#"<script type="application/ld+json">"#).count(), 2);
    assert!(html.contains(r#""logo":"https://acme.dev/icon.svg""#));
  }
}

#[test]
fn demo_site_redirect_target() {
  let config = load_config(&demo_config()).unwrap();
  let app = PlacardApp::from_config(&config).unwrap();
  assert_eq!(app.resolve_locale(None, Some("zh-TW,zh;q=0.9")), "zh");
  assert_eq!(app.resolve_locale(None, Some("ko")), "en");
}

/* src/server/engine/rust/src/structured_data.rs */

//! JSON-LD structured data for search engines.
//! Pure functions over `SiteConfig`; every record is built fresh per call.

use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Path of the site logo, relative to `SiteConfig::url`.
pub const LOGO_PATH: &str = "/icon.svg";

/// Static identity of the site.
///
/// `url` is absolute without a trailing slash. Builders concatenate it
/// as-is, so a trailing slash yields `//` in derived URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
  pub name: String,
  pub url: String,
  pub github: String,
}

/// One navigational node. `href` is a path starting with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
  pub name: String,
  pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationSchema {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub name: String,
  pub url: String,
  pub logo: String,
  #[serde(rename = "sameAs")]
  pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebsiteSchema {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  pub name: String,
  pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
  #[serde(rename = "@type")]
  pub kind: &'static str,
  /// 1-based.
  pub position: usize,
  pub name: String,
  pub item: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbListSchema {
  #[serde(rename = "@context")]
  pub context: &'static str,
  #[serde(rename = "@type")]
  pub kind: &'static str,
  #[serde(rename = "itemListElement")]
  pub item_list_element: Vec<ListItem>,
}

pub fn build_organization_schema(config: &SiteConfig) -> OrganizationSchema {
  OrganizationSchema {
    context: SCHEMA_CONTEXT,
    kind: "Organization",
    name: config.name.clone(),
    url: config.url.clone(),
    logo: format!("{}{LOGO_PATH}", config.url),
    same_as: vec![config.github.clone()],
  }
}

pub fn build_website_schema(config: &SiteConfig) -> WebsiteSchema {
  WebsiteSchema {
    context: SCHEMA_CONTEXT,
    kind: "WebSite",
    name: config.name.clone(),
    url: config.url.clone(),
  }
}

/// Map breadcrumb items to `ListItem`s in input order.
/// No URL normalization: `item` is `config.url` followed by `href`.
pub fn build_breadcrumb_schema(
  config: &SiteConfig,
  items: &[BreadcrumbItem],
) -> BreadcrumbListSchema {
  let item_list_element = items
    .iter()
    .enumerate()
    .map(|(i, crumb)| ListItem {
      kind: "ListItem",
      position: i + 1,
      name: crumb.name.clone(),
      item: format!("{}{}", config.url, crumb.href),
    })
    .collect();

  BreadcrumbListSchema { context: SCHEMA_CONTEXT, kind: "BreadcrumbList", item_list_element }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn acme() -> SiteConfig {
    SiteConfig {
      name: "Acme".into(),
      url: "https://acme.dev".into(),
      github: "https://github.com/acme".into(),
    }
  }

  fn crumb(name: &str, href: &str) -> BreadcrumbItem {
    BreadcrumbItem { name: name.into(), href: href.into() }
  }

  #[test]
  fn organization_matches_json_ld() {
    let value = serde_json::to_value(build_organization_schema(&acme())).unwrap();
    assert_eq!(
      value,
      json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Acme",
        "url": "https://acme.dev",
        "logo": "https://acme.dev/icon.svg",
        "sameAs": ["https://github.com/acme"]
      })
    );
  }

  #[test]
  fn organization_field_order_is_stable() {
    let json = serde_json::to_string(&build_organization_schema(&acme())).unwrap();
    assert!(json.starts_with(r#"{"@context":"https://schema.org","@type":"Organization","name""#));
  }

  #[test]
  fn organization_logo_derives_from_url() {
    let mut config = acme();
    config.url = "https://example.org".into();
    assert_eq!(build_organization_schema(&config).logo, "https://example.org/icon.svg");
  }

  #[test]
  fn website_copies_name_and_url() {
    let schema = build_website_schema(&acme());
    assert_eq!(schema.name, "Acme");
    assert_eq!(schema.url, "https://acme.dev");
    assert_eq!(
      serde_json::to_value(&schema).unwrap(),
      json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": "Acme",
        "url": "https://acme.dev"
      })
    );
  }

  #[test]
  fn breadcrumb_positions_are_one_based() {
    let items = vec![crumb("Home", "/"), crumb("Docs", "/docs")];
    let value = serde_json::to_value(build_breadcrumb_schema(&acme(), &items)).unwrap();
    assert_eq!(
      value["itemListElement"],
      json!([
        {"@type": "ListItem", "position": 1, "name": "Home", "item": "https://acme.dev/"},
        {"@type": "ListItem", "position": 2, "name": "Docs", "item": "https://acme.dev/docs"}
      ])
    );
    assert_eq!(value["@type"], "BreadcrumbList");
  }

  #[test]
  fn breadcrumb_preserves_input_order() {
    let items: Vec<_> = ["/a", "/b", "/c", "/d"].iter().map(|h| crumb(h, h)).collect();
    let schema = build_breadcrumb_schema(&acme(), &items);
    assert_eq!(schema.item_list_element.len(), items.len());
    for (i, entry) in schema.item_list_element.iter().enumerate() {
      assert_eq!(entry.position, i + 1);
      assert_eq!(entry.name, items[i].name);
    }
  }

  #[test]
  fn breadcrumb_empty_input() {
    let value = serde_json::to_value(build_breadcrumb_schema(&acme(), &[])).unwrap();
    assert_eq!(value["itemListElement"], json!([]));
  }

  #[test]
  fn breadcrumb_does_not_normalize() {
    let mut config = acme();
    config.url = "https://acme.dev/".into();
    let schema = build_breadcrumb_schema(&config, &[crumb("Docs", "docs")]);
    assert_eq!(schema.item_list_element[0].item, "https://acme.dev/docs");

    let schema = build_breadcrumb_schema(&config, &[crumb("Docs", "/docs")]);
    assert_eq!(schema.item_list_element[0].item, "https://acme.dev//docs");
  }

  #[test]
  fn builders_are_idempotent() {
    let config = acme();
    let items = vec![crumb("Home", "/")];
    assert_eq!(build_organization_schema(&config), build_organization_schema(&config));
    assert_eq!(build_website_schema(&config), build_website_schema(&config));
    assert_eq!(
      build_breadcrumb_schema(&config, &items),
      build_breadcrumb_schema(&config, &items)
    );
  }
}

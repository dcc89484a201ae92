/* src/server/engine/rust/src/render.rs */

use serde::Serialize;

use crate::escape::{escape_html, escape_script_json};
use crate::i18n::{MissingTranslation, Translator};
use crate::page::{
  fill_text_slot, inject_before_head_end, inject_head_meta, inject_html_lang, json_ld_script,
};
use crate::structured_data::{
  OrganizationSchema, SiteConfig, WebsiteSchema, build_organization_schema, build_website_schema,
};

/// Message namespace holding the placeholder page strings.
pub const UNDER_CONSTRUCTION_NAMESPACE: &str = "underConstruction";

/// Built-in placeholder template with `title`, `description` and `badge` slots.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/under_construction.html");

/// Built-in site icon, served at `LOGO_PATH`.
pub const DEFAULT_ICON_SVG: &str = include_str!("../templates/icon.svg");

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  #[error(transparent)]
  MissingTranslation(#[from] MissingTranslation),
  #[error("serialize structured data: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Localized placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderContent {
  pub title: String,
  pub description: String,
  pub badge: String,
}

/// Everything the home page needs, resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
  pub locale: String,
  pub content: PlaceholderContent,
  pub organization: OrganizationSchema,
  pub website: WebsiteSchema,
}

/// Resolve the placeholder strings and build the home page structured data.
/// The home page carries no breadcrumbs.
pub fn assemble_home_page(
  config: &SiteConfig,
  translator: &dyn Translator,
) -> Result<HomePage, MissingTranslation> {
  let ns = UNDER_CONSTRUCTION_NAMESPACE;
  let content = PlaceholderContent {
    title: translator.lookup(ns, "title")?,
    description: translator.lookup(ns, "description")?,
    badge: translator.lookup(ns, "badge")?,
  };

  Ok(HomePage {
    locale: translator.locale().to_string(),
    content,
    organization: build_organization_schema(config),
    website: build_website_schema(config),
  })
}

/// Serialize a structured-data record into a `<script type="application/ld+json">` tag.
pub fn structured_data_script<T: Serialize>(schema: &T) -> Result<String, serde_json::Error> {
  let json = serde_json::to_string(schema)?;
  Ok(json_ld_script(&escape_script_json(&json)))
}

/// Render the home page into `template`: fill text slots, set the document
/// language, add title/description head tags, then the JSON-LD scripts
/// (Organization first, WebSite second) before `</head>`.
pub fn render_home_page(template: &str, page: &HomePage) -> Result<String, RenderError> {
  let content = &page.content;
  let mut html = fill_text_slot(template, "title", &content.title);
  html = fill_text_slot(&html, "description", &content.description);
  html = fill_text_slot(&html, "badge", &content.badge);

  html = inject_html_lang(&html, &page.locale);

  let head_meta = format!(
    r#"<title>{}</title><meta name="description" content="{}">"#,
    escape_html(&content.title),
    escape_html(&content.description),
  );
  html = inject_head_meta(&html, &head_meta);

  let mut scripts = structured_data_script(&page.organization)?;
  scripts.push_str(&structured_data_script(&page.website)?);
  Ok(inject_before_head_end(&html, &scripts))
}

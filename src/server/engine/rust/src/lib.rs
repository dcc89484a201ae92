/* src/server/engine/rust/src/lib.rs */

pub mod escape;
pub mod i18n;
pub mod page;
pub mod render;
pub mod structured_data;

// Public API re-exports
pub use escape::{escape_html, escape_script_json};
pub use i18n::{CatalogTranslator, MessageCatalog, MissingTranslation, Translator};
pub use render::{
  DEFAULT_ICON_SVG, DEFAULT_TEMPLATE, HomePage, PlaceholderContent, RenderError,
  UNDER_CONSTRUCTION_NAMESPACE, assemble_home_page, render_home_page, structured_data_script,
};
pub use structured_data::{
  BreadcrumbItem, BreadcrumbListSchema, LOGO_PATH, ListItem, OrganizationSchema, SiteConfig,
  WebsiteSchema, build_breadcrumb_schema, build_organization_schema, build_website_schema,
};

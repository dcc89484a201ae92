/* src/server/adapter/axum/src/handler.rs */

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use placard_server::PlacardApp;
use placard_server::placard_engine::{DEFAULT_ICON_SVG, LOGO_PATH};

use crate::error::AxumError;

pub(crate) fn build_router(app: Arc<PlacardApp>) -> Router {
  Router::new()
    .route("/", get(handle_root))
    .route(LOGO_PATH, get(handle_icon))
    .route("/{locale}", get(handle_page))
    .route("/{locale}/", get(handle_page))
    .with_state(app)
}

/// Redirect `/` to the visitor's locale: cookie, then Accept-Language, then default.
async fn handle_root(
  State(app): State<Arc<PlacardApp>>,
  headers: HeaderMap,
) -> impl IntoResponse {
  let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
  let accept_language = headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
  let locale = app.resolve_locale(cookie, accept_language);
  tracing::debug!(locale = %locale, "redirecting root");
  let target = format!("/{locale}");
  ([(header::VARY, "Cookie, Accept-Language")], Redirect::temporary(&target))
}

async fn handle_page(
  State(app): State<Arc<PlacardApp>>,
  Path(locale): Path<String>,
) -> Result<Response, AxumError> {
  let html = app.render(&locale)?;
  let mut response = Html(html).into_response();
  if let Ok(value) = HeaderValue::from_str(&locale) {
    response.headers_mut().insert(header::CONTENT_LANGUAGE, value);
  }
  Ok(response)
}

async fn handle_icon() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "image/svg+xml")], DEFAULT_ICON_SVG)
}

/* src/server/engine/rust/src/page.rs */

use crate::escape::escape_html;

/// Replace every `<!--placard:{name}-->` marker with HTML-escaped `value`.
pub fn fill_text_slot(html: &str, name: &str, value: &str) -> String {
  let marker = format!("<!--placard:{name}-->");
  html.replace(&marker, &escape_html(value))
}

/// Wrap an already script-escaped JSON payload in a JSON-LD script tag.
pub fn json_ld_script(payload: &str) -> String {
  format!(r#"<script type="application/ld+json">{payload}</script>"#)
}

/// Set `<html lang="...">` attribute.
pub fn inject_html_lang(html: &str, locale: &str) -> String {
  html.replacen("<html", &format!("<html lang=\"{}\"", escape_html(locale)), 1)
}

/// Inject head markup after `<meta charset="utf-8">`, or before `</head>`
/// when the template has no charset declaration.
pub fn inject_head_meta(html: &str, meta_html: &str) -> String {
  let charset = r#"<meta charset="utf-8">"#;
  if let Some(pos) = html.find(charset) {
    return insert_at(html, pos + charset.len(), meta_html);
  }
  inject_before_head_end(html, meta_html)
}

/// Inject markup right before `</head>`; appended when there is no head.
pub fn inject_before_head_end(html: &str, fragment: &str) -> String {
  match html.find("</head>") {
    Some(pos) => insert_at(html, pos, fragment),
    None => format!("{html}{fragment}"),
  }
}

fn insert_at(html: &str, pos: usize, fragment: &str) -> String {
  let mut result = String::with_capacity(html.len() + fragment.len());
  result.push_str(&html[..pos]);
  result.push_str(fragment);
  result.push_str(&html[pos..]);
  result
}

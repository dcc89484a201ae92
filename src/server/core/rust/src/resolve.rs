/* src/server/core/rust/src/resolve.rs */

use std::collections::HashSet;

/// Cookie that pins the visitor's locale.
pub const LOCALE_COOKIE: &str = "placard-locale";

/// Request facts relevant to locale selection.
pub struct LocaleRequest<'a> {
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub locales: &'a [String],
  pub default_locale: &'a str,
}

/// Resolve chain: cookie("placard-locale") -> Accept-Language -> default locale.
/// A locale taken from the URL path is checked separately by the caller,
/// since an unknown path locale is a 404 rather than a fallback.
pub fn resolve_locale(req: &LocaleRequest<'_>) -> String {
  let locale_set: HashSet<&str> = req.locales.iter().map(String::as_str).collect();

  if let Some(loc) =
    req.cookie_header.and_then(|h| parse_cookie_locale(h, LOCALE_COOKIE, &locale_set))
  {
    return loc;
  }

  if let Some(loc) = req.accept_language.and_then(|h| parse_accept_language(h, &locale_set)) {
    return loc;
  }

  req.default_locale.to_string()
}

fn parse_cookie_locale(header: &str, name: &str, locale_set: &HashSet<&str>) -> Option<String> {
  header
    .split(';')
    .filter_map(|pair| pair.trim().split_once('='))
    .find(|(k, _)| k.trim() == name)
    .map(|(_, v)| v.trim())
    .filter(|v| locale_set.contains(v))
    .map(str::to_string)
}

fn parse_accept_language(header: &str, locale_set: &HashSet<&str>) -> Option<String> {
  let mut entries: Vec<(&str, f64)> = header
    .split(',')
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .map(|part| {
      let mut segments = part.split(';');
      let lang = segments.next().unwrap_or("").trim();
      let q = segments
        .filter_map(|s| s.trim().strip_prefix("q="))
        .find_map(|v| v.parse::<f64>().ok())
        .unwrap_or(1.0);
      (lang, q)
    })
    .collect();

  // Stable sort keeps header order among equal q-values
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  for (lang, q) in entries {
    if q <= 0.0 {
      continue;
    }
    if let Some(loc) = find_locale(lang, locale_set) {
      return Some(loc.to_string());
    }
    // Prefix match: zh-CN -> zh
    if let Some((prefix, _)) = lang.split_once('-')
      && let Some(loc) = find_locale(prefix, locale_set)
    {
      return Some(loc.to_string());
    }
  }

  None
}

/// Language tags compare case-insensitively; the configured spelling wins.
fn find_locale<'a>(tag: &str, locale_set: &HashSet<&'a str>) -> Option<&'a str> {
  if let Some(loc) = locale_set.get(tag).copied() {
    return Some(loc);
  }
  locale_set.iter().copied().find(|loc| loc.eq_ignore_ascii_case(tag))
}

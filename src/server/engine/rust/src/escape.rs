/* src/server/engine/rust/src/escape.rs */

/// Escape text for an HTML text node or a double-quoted attribute value.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// Make serialized JSON safe to embed inside a `<script>` element.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Inside strings, `<`,
/// `>`, `&` and every non-ASCII codepoint become `\uXXXX` escapes, so
/// neither `</script>` nor U+2028/U+2029 can survive. Chars outside the
/// BMP are encoded as surrogate pairs (`\uHHHH\uLLLL`).
pub fn escape_script_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
      continue;
    }

    match ch {
      '\\' => {
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      '<' | '>' | '&' => push_unicode_escape(&mut out, ch as u32),
      c if c as u32 > 0x7F => {
        let code = c as u32;
        if code > 0xFFFF {
          let adjusted = code - 0x1_0000;
          push_unicode_escape(&mut out, (adjusted >> 10) + 0xD800);
          push_unicode_escape(&mut out, (adjusted & 0x3FF) + 0xDC00);
        } else {
          push_unicode_escape(&mut out, code);
        }
      }
      c => out.push(c),
    }
  }
  out
}

fn push_unicode_escape(out: &mut String, unit: u32) {
  out.push_str(&format!("\\u{unit:04x}"));
}

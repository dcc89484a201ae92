/* src/server/core/rust/src/errors.rs */

use std::fmt;

use placard_engine::RenderError;

#[derive(Debug)]
pub struct ServerError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "NOT_FOUND" => 404,
    _ => 500,
  }
}

impl ServerError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl From<RenderError> for ServerError {
  fn from(err: RenderError) -> Self {
    match err {
      RenderError::MissingTranslation(e) => Self::with_code("MISSING_TRANSLATION", e.to_string()),
      RenderError::Serialize(e) => Self::internal(e.to_string()),
    }
  }
}

impl fmt::Display for ServerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for ServerError {}

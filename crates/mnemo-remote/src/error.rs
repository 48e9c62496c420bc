//! Error type for `mnemo-remote`.

use thiserror::Error;

/// A transport- or server-level fetch failure. Malformed payload entries
/// are not represented here; they are skipped during parsing.
#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("server returned {0}")]
  Status(reqwest::StatusCode),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

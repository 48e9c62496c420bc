//! HTTP client for the remote question bank.
//!
//! The bank is a fixed, read-only, query-parameter-driven JSON endpoint:
//! `?type=subjects` lists subjects, `?type=questions&subject=<name>` lists
//! the questions filed under a subject name. Malformed entries in a
//! response are skipped, not fatal.

mod fetcher;
mod wire;

pub mod error;

pub use error::{Error, Result};
pub use fetcher::{DEFAULT_BANK_URL, StudyFetcher};

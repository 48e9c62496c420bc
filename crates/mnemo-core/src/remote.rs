//! The `QuestionBank` trait and the records it yields.
//!
//! A question bank is a read-only remote source of subjects and of the
//! questions filed under a subject name. `mnemo-remote` implements it over
//! HTTP; tests substitute stubs.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// A subject as listed by the remote bank, before it exists locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSubject {
  pub text:        String,
  /// Epoch milliseconds, as reported by the bank.
  pub update_time: i64,
}

/// A question as listed by the remote bank. It has no local id and no
/// subject id yet; both are assigned when it is imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteQuestion {
  pub text:   String,
  pub answer: String,
}

/// Abstraction over the remote question bank.
///
/// Both fetches report transport- and server-level failures through
/// `Self::Error`. Malformed entries inside an otherwise well-formed
/// response are not errors: implementations skip them and return the rest.
pub trait QuestionBank: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The bank's full subject list.
  fn fetch_subjects(
    &self,
  ) -> impl Future<Output = Result<Vec<RemoteSubject>, Self::Error>> + Send + '_;

  /// All questions filed under `subject_name`.
  fn fetch_questions<'a>(
    &'a self,
    subject_name: &'a str,
  ) -> impl Future<Output = Result<Vec<RemoteQuestion>, Self::Error>> + Send + 'a;
}

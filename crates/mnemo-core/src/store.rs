//! The `StudyStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `mnemo-store-sqlite`).
//! Higher layers (`mnemo-repo`, `mnemo-api`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  question::Question,
  subject::{Subject, SubjectOrder},
};

/// Abstraction over a local subject/question store.
///
/// Add operations replace an existing row when the record carries a nonzero
/// id that is already taken; update and delete of a missing id are silent
/// no-ops. Deleting a subject cascades to every question holding its id.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait StudyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Subjects ──────────────────────────────────────────────────────────

  /// Retrieve a subject by id. Returns `None` if not found.
  fn get_subject(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Subject>, Self::Error>> + Send + '_;

  /// List all subjects in the given order.
  fn list_subjects(
    &self,
    order: SubjectOrder,
  ) -> impl Future<Output = Result<Vec<Subject>, Self::Error>> + Send + '_;

  /// Persist a subject and return its id.
  ///
  /// A zero id means "assign one"; a nonzero id replaces any existing row.
  fn add_subject(
    &self,
    subject: Subject,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Delete a subject and, by cascade, all of its questions.
  fn delete_subject(
    &self,
    subject: Subject,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Questions ─────────────────────────────────────────────────────────

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// All questions for a subject, ordered by id ascending.
  fn list_questions(
    &self,
    subject_id: i64,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Persist a question and return its id (zero id = assign, nonzero =
  /// replace).
  fn add_question(
    &self,
    question: Question,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Update a question in place by id. Updating a missing id is a no-op.
  fn update_question(
    &self,
    question: Question,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete a question by id. Deleting a missing id is a no-op.
  fn delete_question(
    &self,
    question: Question,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

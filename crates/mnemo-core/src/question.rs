//! Question — a text/answer pair belonging to exactly one subject.

use serde::{Deserialize, Serialize};

/// A flashcard. `subject_id` references the owning [`Subject`]; deleting
/// that subject deletes all of its questions.
///
/// [`Subject`]: crate::subject::Subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         i64,
  pub text:       String,
  pub answer:     String,
  pub subject_id: i64,
}

impl Question {
  /// A fresh, unsaved question for `subject_id`.
  pub fn new(
    text: impl Into<String>,
    answer: impl Into<String>,
    subject_id: i64,
  ) -> Self {
    Self {
      id: 0,
      text: text.into(),
      answer: answer.into(),
      subject_id,
    }
  }
}

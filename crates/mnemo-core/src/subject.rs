//! Subject — a named topic grouping of questions.
//!
//! A subject carries only its display text and a creation timestamp. The
//! questions that belong to it are independent records holding its id as a
//! back-reference.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A named topic. `id == 0` means the subject has not been persisted yet;
/// the store assigns a positive id on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub id:          i64,
  pub text:        String,
  /// Epoch milliseconds, set once at creation and never mutated.
  pub update_time: i64,
}

impl Subject {
  /// A fresh, unsaved subject stamped with the current time.
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      id:          0,
      text:        text.into(),
      update_time: Utc::now().timestamp_millis(),
    }
  }
}

/// The three supported orderings for [`StudyStore::list_subjects`].
///
/// Each is a total order: ties on the primary key are broken by `text`,
/// so sorting is deterministic and idempotent.
///
/// [`StudyStore::list_subjects`]: crate::store::StudyStore::list_subjects
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubjectOrder {
  /// Case-insensitive alphabetical by `text`.
  #[default]
  Alphabetic,
  /// Most recently created first (`update_time` descending).
  NewFirst,
  /// Oldest first (`update_time` ascending).
  OldFirst,
}

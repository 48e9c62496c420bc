//! Event types published by [`StudyRepository`](crate::StudyRepository).

use mnemo_core::remote::RemoteSubject;
use serde::{Deserialize, Serialize};

/// A repository notification.
///
/// `SubjectsChanged`/`QuestionsChanged` mirror the store: they carry no
/// data, the subscriber re-queries. `RemoteSubjects` and `SubjectImported`
/// are the two process-lifetime signals around the import flow.
///
/// Events are serializable so they can go straight onto an SSE stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StudyEvent {
  /// A subject was added, replaced, or deleted.
  SubjectsChanged,
  /// The question set of `subject_id` changed (including by cascade).
  QuestionsChanged { subject_id: i64 },
  /// A raw subject list arrived from the remote bank. Nothing has been
  /// persisted.
  RemoteSubjects { subjects: Vec<RemoteSubject> },
  /// An import finished: the subject and its fetched questions are in the
  /// store. Carries the subject's display name only.
  SubjectImported { subject: String },
  /// A remote fetch failed at the transport or server level.
  FetchFailed { error: String },
}

//! Handlers for the remote-bank endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/import` | Body: `{"text":"Biology"[,"update_time":…]}` |
//! | `POST` | `/remote/refresh` | Re-fetch the bank's subject list |
//!
//! Both are fire-and-forget; results arrive on `/events` as
//! `SubjectImported` / `RemoteSubjects` (or `FetchFailed`).

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use mnemo_core::{remote::QuestionBank, store::StudyStore, subject::Subject};
use mnemo_repo::StudyRepository;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ImportBody {
  pub text:        String,
  /// Bank-reported timestamp; defaults to now for manually typed names.
  #[serde(default)]
  pub update_time: Option<i64>,
}

/// `POST /import`
pub async fn import_one<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Json(body): Json<ImportBody>,
) -> Result<StatusCode, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  if body.text.is_empty() {
    return Err(ApiError::BadRequest("subject text must not be empty".into()));
  }
  repo.import_subject(Subject {
    id:          0,
    text:        body.text,
    update_time: body
      .update_time
      .unwrap_or_else(|| Utc::now().timestamp_millis()),
  });
  Ok(StatusCode::ACCEPTED)
}

/// `POST /remote/refresh`
pub async fn refresh<S, B>(
  State(repo): State<StudyRepository<S, B>>,
) -> Result<StatusCode, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  repo.fetch_subjects();
  Ok(StatusCode::ACCEPTED)
}

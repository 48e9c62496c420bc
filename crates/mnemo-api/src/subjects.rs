//! Handlers for `/subjects` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subjects` | Optional `?order=alphabetic\|new_first\|old_first` |
//! | `POST`   | `/subjects` | Body: `{"text":"Biology"}`; 400 on empty text |
//! | `GET`    | `/subjects/:id` | 404 if not found |
//! | `DELETE` | `/subjects/:id` | 202; missing id is a silent no-op |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use mnemo_core::{
  remote::QuestionBank,
  store::StudyStore,
  subject::{Subject, SubjectOrder},
};
use mnemo_repo::StudyRepository;
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub order: SubjectOrder,
}

/// `GET /subjects[?order=<order>]`
pub async fn list<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Subject>>, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  let subjects = repo
    .subjects(params.order)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(subjects))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub text: String,
}

/// `POST /subjects` — body: `{"text":"Biology"}`
///
/// Empty text is rejected; a subject is never persisted without a name.
pub async fn create<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Json(body): Json<CreateBody>,
) -> Result<StatusCode, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  if body.text.is_empty() {
    return Err(ApiError::BadRequest("subject text must not be empty".into()));
  }
  repo.add_subject(Subject::new(body.text));
  Ok(StatusCode::ACCEPTED)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /subjects/:id`
pub async fn get_one<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Path(id): Path<i64>,
) -> Result<Json<Subject>, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  let subject = repo
    .subject(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("subject {id} not found")))?;
  Ok(Json(subject))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /subjects/:id` — cascades to the subject's questions.
pub async fn delete_one<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  if let Some(subject) = repo
    .subject(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    repo.delete_subject(subject);
  }
  // A missing id deletes nothing and is not an error.
  Ok(StatusCode::ACCEPTED)
}

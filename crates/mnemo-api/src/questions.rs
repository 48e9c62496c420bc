//! Handlers for `/questions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/questions?subject_id=<id>` | Ordered by id ascending |
//! | `POST`   | `/questions` | Body: `{"text":…,"answer":…,"subject_id":…}` |
//! | `GET`    | `/questions/:id` | 404 if not found |
//! | `PUT`    | `/questions/:id` | 202; missing id is a silent no-op |
//! | `DELETE` | `/questions/:id` | 202; missing id is a silent no-op |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use mnemo_core::{question::Question, remote::QuestionBank, store::StudyStore};
use mnemo_repo::StudyRepository;
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub subject_id: i64,
}

/// `GET /questions?subject_id=<id>`
pub async fn list<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Question>>, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  let questions = repo
    .questions(params.subject_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(questions))
}

// ─── Create / update bodies ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionBody {
  pub text:       String,
  pub answer:     String,
  pub subject_id: i64,
}

/// `POST /questions`
pub async fn create<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Json(body): Json<QuestionBody>,
) -> Result<StatusCode, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  repo.add_question(Question::new(body.text, body.answer, body.subject_id));
  Ok(StatusCode::ACCEPTED)
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /questions/:id`
pub async fn get_one<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Path(id): Path<i64>,
) -> Result<Json<Question>, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  let question = repo
    .question(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("question {id} not found")))?;
  Ok(Json(question))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /questions/:id`
pub async fn update_one<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Path(id): Path<i64>,
  Json(body): Json<QuestionBody>,
) -> Result<StatusCode, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  repo.update_question(Question {
    id,
    text: body.text,
    answer: body.answer,
    subject_id: body.subject_id,
  });
  Ok(StatusCode::ACCEPTED)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /questions/:id`
pub async fn delete_one<S, B>(
  State(repo): State<StudyRepository<S, B>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  if let Some(question) = repo
    .question(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    repo.delete_question(question);
  }
  Ok(StatusCode::ACCEPTED)
}

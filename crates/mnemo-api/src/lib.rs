//! JSON REST API for mnemo.
//!
//! Exposes an axum [`Router`] backed by a [`StudyRepository`] over any
//! store/bank pair. Reads are plain GETs; commands are fire-and-forget and
//! answer `202 Accepted` (outcomes surface on the `/events` SSE stream).
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, mnemo_api::api_router(repo)).await?;
//! ```

pub mod error;
pub mod events;
pub mod import;
pub mod questions;
pub mod subjects;

use axum::{
  Router,
  routing::{get, post},
};
use mnemo_core::{remote::QuestionBank, store::StudyStore};
use mnemo_repo::StudyRepository;

pub use error::ApiError;

/// Build a fully-materialised API router for `repo`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S, B>(repo: StudyRepository<S, B>) -> Router<()>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  Router::new()
    // Subjects
    .route(
      "/subjects",
      get(subjects::list::<S, B>).post(subjects::create::<S, B>),
    )
    .route(
      "/subjects/{id}",
      get(subjects::get_one::<S, B>).delete(subjects::delete_one::<S, B>),
    )
    // Questions
    .route(
      "/questions",
      get(questions::list::<S, B>).post(questions::create::<S, B>),
    )
    .route(
      "/questions/{id}",
      get(questions::get_one::<S, B>)
        .put(questions::update_one::<S, B>)
        .delete(questions::delete_one::<S, B>),
    )
    // Remote bank
    .route("/import", post(import::import_one::<S, B>))
    .route("/remote/refresh", post(import::refresh::<S, B>))
    // Observables
    .route("/events", get(events::stream::<S, B>))
    .with_state(repo)
}

//! `GET /events` — the repository's event bus as a Server-Sent Events
//! stream. Each event is one JSON-encoded [`StudyEvent`].
//!
//! [`StudyEvent`]: mnemo_repo::StudyEvent

use std::{convert::Infallible, time::Duration};

use axum::{
  extract::State,
  response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use mnemo_core::{remote::QuestionBank, store::StudyStore};
use mnemo_repo::StudyRepository;
use tokio::sync::broadcast;

/// `GET /events`
pub async fn stream<S, B>(
  State(repo): State<StudyRepository<S, B>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  let mut rx = repo.subscribe();

  let stream = async_stream::stream! {
    loop {
      match rx.recv().await {
        Ok(event) => match Event::default().json_data(&event) {
          Ok(sse_event) => yield Ok(sse_event),
          Err(e) => tracing::error!("serialising event failed: {e}"),
        },
        Err(broadcast::error::RecvError::Lagged(skipped)) => {
          // A slow client dropped behind the ring buffer; it re-reads on
          // the next change event it does receive.
          tracing::warn!("SSE subscriber lagged, skipped {skipped} events");
        }
        Err(broadcast::error::RecvError::Closed) => break,
      }
    }
  };

  Sse::new(stream).keep_alive(
    KeepAlive::new()
      .interval(Duration::from_secs(15))
      .text("heartbeat"),
  )
}

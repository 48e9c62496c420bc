//! [`StudyRepository`] — orchestrates the local store and the remote bank.

use std::sync::Arc;

use mnemo_core::{
  question::Question,
  remote::QuestionBank,
  store::StudyStore,
  subject::{Subject, SubjectOrder},
};
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::event::StudyEvent;

/// Events buffered per subscriber before old ones are dropped.
const EVENT_CAPACITY: usize = 256;

// ─── Write queue ─────────────────────────────────────────────────────────────

/// One unit of work for the write worker. The worker applies units strictly
/// in the order they were enqueued.
enum WriteOp {
  AddSubject {
    subject: Subject,
    /// Present when the caller needs the generated id (the import flow).
    reply:   Option<oneshot::Sender<i64>>,
  },
  DeleteSubject {
    subject: Subject,
  },
  AddQuestion {
    question: Question,
  },
  UpdateQuestion {
    question: Question,
  },
  DeleteQuestion {
    question: Question,
  },
  /// An import batch: every question already carries the subject's
  /// generated id. Applied as one unit so the `SubjectImported`
  /// notification follows the whole batch.
  ImportQuestions {
    subject_text: String,
    subject_id:   i64,
    questions:    Vec<Question>,
  },
}

// ─── Repository ──────────────────────────────────────────────────────────────

/// Single coordination point between the UI boundary, a [`StudyStore`], and
/// a [`QuestionBank`].
///
/// Construct one instance at process start and inject it wherever needed;
/// cloning shares the underlying store, bank, write queue, and event bus.
/// Command methods are fire-and-forget: they enqueue or spawn and return
/// immediately, and outcomes surface on the event bus.
pub struct StudyRepository<S, B> {
  store:  Arc<S>,
  bank:   Arc<B>,
  writes: mpsc::UnboundedSender<WriteOp>,
  events: broadcast::Sender<StudyEvent>,
}

impl<S, B> Clone for StudyRepository<S, B> {
  fn clone(&self) -> Self {
    Self {
      store:  self.store.clone(),
      bank:   self.bank.clone(),
      writes: self.writes.clone(),
      events: self.events.clone(),
    }
  }
}

impl<S, B> StudyRepository<S, B>
where
  S: StudyStore + 'static,
  B: QuestionBank + 'static,
{
  /// Build a repository over `store` and `bank` and spawn its write worker.
  pub fn new(store: S, bank: B) -> Self {
    let store = Arc::new(store);
    let bank = Arc::new(bank);
    let (writes, queue) = mpsc::unbounded_channel();
    let (events, _) = broadcast::channel(EVENT_CAPACITY);

    tokio::spawn(drain_writes(store.clone(), queue, events.clone()));

    Self { store, bank, writes, events }
  }

  /// Subscribe to repository notifications. Only events published after
  /// the call are delivered.
  pub fn subscribe(&self) -> broadcast::Receiver<StudyEvent> {
    self.events.subscribe()
  }

  // ── Reads ─────────────────────────────────────────────────────────────
  //
  // Reads go straight to the store; pair them with `subscribe` to keep a
  // view live.

  pub async fn subject(&self, id: i64) -> Result<Option<Subject>, S::Error> {
    self.store.get_subject(id).await
  }

  pub async fn subjects(&self, order: SubjectOrder) -> Result<Vec<Subject>, S::Error> {
    self.store.list_subjects(order).await
  }

  pub async fn question(&self, id: i64) -> Result<Option<Question>, S::Error> {
    self.store.get_question(id).await
  }

  pub async fn questions(&self, subject_id: i64) -> Result<Vec<Question>, S::Error> {
    self.store.list_questions(subject_id).await
  }

  // ── Commands ──────────────────────────────────────────────────────────

  pub fn add_subject(&self, subject: Subject) {
    self.enqueue(WriteOp::AddSubject { subject, reply: None });
  }

  /// Delete a subject; its questions go with it (cascade).
  pub fn delete_subject(&self, subject: Subject) {
    self.enqueue(WriteOp::DeleteSubject { subject });
  }

  pub fn add_question(&self, question: Question) {
    self.enqueue(WriteOp::AddQuestion { question });
  }

  /// Updating a question whose id is gone is a silent no-op.
  pub fn update_question(&self, question: Question) {
    self.enqueue(WriteOp::UpdateQuestion { question });
  }

  pub fn delete_question(&self, question: Question) {
    self.enqueue(WriteOp::DeleteQuestion { question });
  }

  /// Fetch the bank's subject list and publish it raw as
  /// [`StudyEvent::RemoteSubjects`]. Nothing is persisted.
  pub fn fetch_subjects(&self) {
    let bank = self.bank.clone();
    let events = self.events.clone();

    tokio::spawn(async move {
      match bank.fetch_subjects().await {
        Ok(subjects) => {
          let _ = events.send(StudyEvent::RemoteSubjects { subjects });
        }
        Err(e) => {
          tracing::error!("fetching remote subjects failed: {e}");
          let _ = events.send(StudyEvent::FetchFailed { error: e.to_string() });
        }
      }
    });
  }

  /// Persist `subject` locally, fetch its questions from the bank by
  /// display name, and file them under the subject's generated id.
  ///
  /// The id is resolved before any question is enqueued; one
  /// [`StudyEvent::SubjectImported`] is published after the whole batch
  /// has been applied.
  pub fn import_subject(&self, subject: Subject) {
    let (reply, resolved) = oneshot::channel();
    let text = subject.text.clone();
    self.enqueue(WriteOp::AddSubject { subject, reply: Some(reply) });

    let bank = self.bank.clone();
    let events = self.events.clone();
    let writes = self.writes.clone();

    tokio::spawn(async move {
      // If the insert failed the reply side is dropped; the worker has
      // already logged it, and there is nothing to file questions under.
      let Ok(subject_id) = resolved.await else { return };

      match bank.fetch_questions(&text).await {
        Ok(remote) => {
          let questions = remote
            .into_iter()
            .map(|q| Question {
              id: 0,
              text: q.text,
              answer: q.answer,
              subject_id,
            })
            .collect();
          let _ = writes.send(WriteOp::ImportQuestions {
            subject_text: text,
            subject_id,
            questions,
          });
        }
        Err(e) => {
          tracing::error!("importing \"{text}\" failed: {e}");
          let _ = events.send(StudyEvent::FetchFailed { error: e.to_string() });
        }
      }
    });
  }

  fn enqueue(&self, op: WriteOp) {
    if self.writes.send(op).is_err() {
      tracing::error!("write worker is gone; dropping write");
    }
  }
}

// ─── Write worker ────────────────────────────────────────────────────────────

/// The single write worker. Store failures are logged and the queue keeps
/// draining; no failure here is fatal to the process.
async fn drain_writes<S: StudyStore>(
  store: Arc<S>,
  mut queue: mpsc::UnboundedReceiver<WriteOp>,
  events: broadcast::Sender<StudyEvent>,
) {
  while let Some(op) = queue.recv().await {
    match op {
      WriteOp::AddSubject { subject, reply } => {
        match store.add_subject(subject).await {
          Ok(id) => {
            if let Some(reply) = reply {
              let _ = reply.send(id);
            }
            let _ = events.send(StudyEvent::SubjectsChanged);
          }
          Err(e) => tracing::error!("add_subject failed: {e}"),
        }
      }

      WriteOp::DeleteSubject { subject } => {
        let subject_id = subject.id;
        match store.delete_subject(subject).await {
          Ok(()) => {
            let _ = events.send(StudyEvent::SubjectsChanged);
            // The cascade emptied the subject's question list.
            let _ = events.send(StudyEvent::QuestionsChanged { subject_id });
          }
          Err(e) => tracing::error!("delete_subject failed: {e}"),
        }
      }

      WriteOp::AddQuestion { question } => {
        let subject_id = question.subject_id;
        match store.add_question(question).await {
          Ok(_) => {
            let _ = events.send(StudyEvent::QuestionsChanged { subject_id });
          }
          Err(e) => tracing::error!("add_question failed: {e}"),
        }
      }

      WriteOp::UpdateQuestion { question } => {
        let subject_id = question.subject_id;
        match store.update_question(question).await {
          Ok(()) => {
            let _ = events.send(StudyEvent::QuestionsChanged { subject_id });
          }
          Err(e) => tracing::error!("update_question failed: {e}"),
        }
      }

      WriteOp::DeleteQuestion { question } => {
        let subject_id = question.subject_id;
        match store.delete_question(question).await {
          Ok(()) => {
            let _ = events.send(StudyEvent::QuestionsChanged { subject_id });
          }
          Err(e) => tracing::error!("delete_question failed: {e}"),
        }
      }

      WriteOp::ImportQuestions { subject_text, subject_id, questions } => {
        let total = questions.len();
        for question in questions {
          if let Err(e) = store.add_question(question).await {
            tracing::error!("storing imported question failed: {e}");
          }
        }
        tracing::debug!("applied import batch of {total} for \"{subject_text}\"");
        let _ = events.send(StudyEvent::QuestionsChanged { subject_id });
        let _ = events.send(StudyEvent::SubjectImported { subject: subject_text });
      }
    }
  }
}

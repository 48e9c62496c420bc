//! [`SqliteStore`] — the SQLite implementation of [`StudyStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use mnemo_core::{
  question::Question,
  store::StudyStore,
  subject::{Subject, SubjectOrder},
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A mnemo store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// `Some(id)` for a persisted record, `None` (let SQLite assign) for the
/// zero "unsaved" id.
fn stored_id(id: i64) -> Option<i64> {
  (id != 0).then_some(id)
}

fn subject_order_sql(order: SubjectOrder) -> &'static str {
  // Every ordering is total: ties break on text, then rowid.
  match order {
    SubjectOrder::Alphabetic => {
      "SELECT id, text, updated FROM subjects
       ORDER BY text COLLATE NOCASE, text, id"
    }
    SubjectOrder::NewFirst => {
      "SELECT id, text, updated FROM subjects
       ORDER BY updated DESC, text COLLATE NOCASE, id"
    }
    SubjectOrder::OldFirst => {
      "SELECT id, text, updated FROM subjects
       ORDER BY updated, text COLLATE NOCASE, id"
    }
  }
}

// ─── StudyStore impl ─────────────────────────────────────────────────────────

impl StudyStore for SqliteStore {
  type Error = Error;

  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn get_subject(&self, id: i64) -> Result<Option<Subject>> {
    let subject = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, text, updated FROM subjects WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(Subject {
                  id:          row.get(0)?,
                  text:        row.get(1)?,
                  update_time: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;
    Ok(subject)
  }

  async fn list_subjects(&self, order: SubjectOrder) -> Result<Vec<Subject>> {
    let sql = subject_order_sql(order);
    let subjects = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Subject {
              id:          row.get(0)?,
              text:        row.get(1)?,
              update_time: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(subjects)
  }

  async fn add_subject(&self, subject: Subject) -> Result<i64> {
    let id = stored_id(subject.id);
    let Subject { text, update_time, .. } = subject;

    let generated = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO subjects (id, text, updated)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![id, text, update_time],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(generated)
  }

  async fn delete_subject(&self, subject: Subject) -> Result<()> {
    // Cascade in the schema removes the subject's questions.
    let id = subject.id;
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM subjects WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Questions ─────────────────────────────────────────────────────────────

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    let question = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, text, answer, subject_id FROM questions WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(Question {
                  id:         row.get(0)?,
                  text:       row.get(1)?,
                  answer:     row.get(2)?,
                  subject_id: row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;
    Ok(question)
  }

  async fn list_questions(&self, subject_id: i64) -> Result<Vec<Question>> {
    let questions = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, text, answer, subject_id FROM questions
           WHERE subject_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![subject_id], |row| {
            Ok(Question {
              id:         row.get(0)?,
              text:       row.get(1)?,
              answer:     row.get(2)?,
              subject_id: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(questions)
  }

  async fn add_question(&self, question: Question) -> Result<i64> {
    let id = stored_id(question.id);
    let Question { text, answer, subject_id, .. } = question;

    let generated = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO questions (id, text, answer, subject_id)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id, text, answer, subject_id],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(generated)
  }

  async fn update_question(&self, question: Question) -> Result<()> {
    // Zero rows affected when the id is gone; deliberately not an error.
    let Question { id, text, answer, subject_id } = question;
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE questions SET text = ?2, answer = ?3, subject_id = ?4
           WHERE id = ?1",
          rusqlite::params![id, text, answer, subject_id],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete_question(&self, question: Question) -> Result<()> {
    let id = question.id;
    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM questions WHERE id = ?1", rusqlite::params![id])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

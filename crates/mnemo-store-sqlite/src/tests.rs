//! Integration tests for `SqliteStore` against an in-memory database.

use mnemo_core::{
  question::Question,
  store::StudyStore,
  subject::{Subject, SubjectOrder},
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn subject(text: &str, update_time: i64) -> Subject {
  Subject { id: 0, text: text.into(), update_time }
}

// ─── Subjects ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_subject() {
  let s = store().await;

  let id = s.add_subject(subject("Biology", 1_000)).await.unwrap();
  assert!(id >= 1);

  let fetched = s.get_subject(id).await.unwrap().unwrap();
  assert_eq!(fetched.id, id);
  assert_eq!(fetched.text, "Biology");
  assert_eq!(fetched.update_time, 1_000);
}

#[tokio::test]
async fn get_subject_missing_returns_none() {
  let s = store().await;
  assert!(s.get_subject(42).await.unwrap().is_none());
}

#[tokio::test]
async fn add_subject_with_taken_id_replaces_row() {
  let s = store().await;

  let id = s.add_subject(subject("Chemstry", 1_000)).await.unwrap();
  let replacement = Subject { id, text: "Chemistry".into(), update_time: 1_000 };
  let replaced_id = s.add_subject(replacement).await.unwrap();
  assert_eq!(replaced_id, id);

  let all = s.list_subjects(SubjectOrder::Alphabetic).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].text, "Chemistry");
}

// ─── Orderings ───────────────────────────────────────────────────────────────

async fn seeded_store() -> SqliteStore {
  let s = store().await;
  s.add_subject(subject("banana", 30)).await.unwrap();
  s.add_subject(subject("Apple", 10)).await.unwrap();
  s.add_subject(subject("cherry", 20)).await.unwrap();
  s
}

fn texts(subjects: &[Subject]) -> Vec<&str> {
  subjects.iter().map(|s| s.text.as_str()).collect()
}

#[tokio::test]
async fn list_subjects_alphabetic_is_case_insensitive() {
  let s = seeded_store().await;
  let list = s.list_subjects(SubjectOrder::Alphabetic).await.unwrap();
  assert_eq!(texts(&list), ["Apple", "banana", "cherry"]);
}

#[tokio::test]
async fn list_subjects_new_first() {
  let s = seeded_store().await;
  let list = s.list_subjects(SubjectOrder::NewFirst).await.unwrap();
  assert_eq!(texts(&list), ["banana", "cherry", "Apple"]);
}

#[tokio::test]
async fn list_subjects_old_first() {
  let s = seeded_store().await;
  let list = s.list_subjects(SubjectOrder::OldFirst).await.unwrap();
  assert_eq!(texts(&list), ["Apple", "cherry", "banana"]);
}

#[tokio::test]
async fn sort_is_idempotent_and_stable_across_order_switches() {
  let s = seeded_store().await;
  // Equal texts (differing only in case) with equal timestamps exercise
  // the tie-breaks.
  s.add_subject(subject("CHERRY", 20)).await.unwrap();

  let first = s.list_subjects(SubjectOrder::Alphabetic).await.unwrap();
  let again = s.list_subjects(SubjectOrder::Alphabetic).await.unwrap();
  assert_eq!(first, again);

  let _ = s.list_subjects(SubjectOrder::NewFirst).await.unwrap();
  let after_switch = s.list_subjects(SubjectOrder::Alphabetic).await.unwrap();
  assert_eq!(first, after_switch);
}

// ─── Questions ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_question() {
  let s = store().await;
  let subject_id = s.add_subject(subject("Biology", 1)).await.unwrap();

  let id = s
    .add_question(Question::new("What is a cell?", "The basic unit of life", subject_id))
    .await
    .unwrap();

  let q = s.get_question(id).await.unwrap().unwrap();
  assert_eq!(q.text, "What is a cell?");
  assert_eq!(q.answer, "The basic unit of life");
  assert_eq!(q.subject_id, subject_id);
}

#[tokio::test]
async fn get_question_missing_returns_none() {
  let s = store().await;
  assert!(s.get_question(7).await.unwrap().is_none());
}

#[tokio::test]
async fn list_questions_ordered_by_id_and_scoped_to_subject() {
  let s = store().await;
  let biology = s.add_subject(subject("Biology", 1)).await.unwrap();
  let physics = s.add_subject(subject("Physics", 2)).await.unwrap();

  let a = s.add_question(Question::new("a", "1", biology)).await.unwrap();
  let b = s.add_question(Question::new("b", "2", biology)).await.unwrap();
  s.add_question(Question::new("x", "9", physics)).await.unwrap();

  let list = s.list_questions(biology).await.unwrap();
  assert_eq!(list.len(), 2);
  assert_eq!(list[0].id, a);
  assert_eq!(list[1].id, b);
  assert!(a < b);
}

#[tokio::test]
async fn update_question_in_place() {
  let s = store().await;
  let subject_id = s.add_subject(subject("Biology", 1)).await.unwrap();
  let id = s.add_question(Question::new("q", "wrong", subject_id)).await.unwrap();

  s.update_question(Question { id, text: "q".into(), answer: "right".into(), subject_id })
    .await
    .unwrap();

  let q = s.get_question(id).await.unwrap().unwrap();
  assert_eq!(q.answer, "right");
}

#[tokio::test]
async fn update_missing_question_is_a_noop() {
  let s = store().await;
  let subject_id = s.add_subject(subject("Biology", 1)).await.unwrap();

  s.update_question(Question { id: 99, text: "q".into(), answer: "a".into(), subject_id })
    .await
    .unwrap();

  assert!(s.list_questions(subject_id).await.unwrap().is_empty());
  assert!(s.get_question(99).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_question_is_a_noop() {
  let s = store().await;
  let subject_id = s.add_subject(subject("Biology", 1)).await.unwrap();

  s.delete_question(Question { id: 99, text: String::new(), answer: String::new(), subject_id })
    .await
    .unwrap();
}

#[tokio::test]
async fn deleted_question_can_be_reinserted_verbatim() {
  // The undo path: the caller captures the row before deleting and replays
  // it through add_question, which reinserts under the captured id.
  let s = store().await;
  let subject_id = s.add_subject(subject("Biology", 1)).await.unwrap();
  let id = s.add_question(Question::new("q", "a", subject_id)).await.unwrap();

  let captured = s.get_question(id).await.unwrap().unwrap();
  s.delete_question(captured.clone()).await.unwrap();
  assert!(s.get_question(id).await.unwrap().is_none());

  let restored_id = s.add_question(captured.clone()).await.unwrap();
  assert_eq!(restored_id, id);
  assert_eq!(s.get_question(id).await.unwrap().unwrap(), captured);
}

// ─── Cascade delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_subject_without_questions() {
  let s = store().await;
  let id = s.add_subject(subject("Empty", 1)).await.unwrap();

  let target = s.get_subject(id).await.unwrap().unwrap();
  s.delete_subject(target).await.unwrap();

  assert!(s.get_subject(id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_subject_cascades_to_single_question() {
  let s = store().await;
  let id = s.add_subject(subject("Biology", 1)).await.unwrap();
  let qid = s.add_question(Question::new("q", "a", id)).await.unwrap();

  let target = s.get_subject(id).await.unwrap().unwrap();
  s.delete_subject(target).await.unwrap();

  assert!(s.get_question(qid).await.unwrap().is_none());
  assert!(s.list_questions(id).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_subject_cascades_to_many_questions_and_spares_others() {
  let s = store().await;
  let doomed = s.add_subject(subject("Doomed", 1)).await.unwrap();
  let spared = s.add_subject(subject("Spared", 2)).await.unwrap();

  for i in 0..5 {
    s.add_question(Question::new(format!("q{i}"), "a", doomed)).await.unwrap();
  }
  let kept = s.add_question(Question::new("keep", "a", spared)).await.unwrap();

  let target = s.get_subject(doomed).await.unwrap().unwrap();
  s.delete_subject(target).await.unwrap();

  assert!(s.list_questions(doomed).await.unwrap().is_empty());
  let remaining = s.list_questions(spared).await.unwrap();
  assert_eq!(remaining.len(), 1);
  assert_eq!(remaining[0].id, kept);
}

//! Parsing for the two question-bank payload shapes.
//!
//! An array element missing a required field (or carrying the wrong type)
//! is skipped and logged; the remaining elements still parse. A fetch never
//! fails because of a malformed element.

use mnemo_core::remote::{RemoteQuestion, RemoteSubject};
use serde::Deserialize;
use serde_json::Value;

/// One element of the `subjects` array, in the bank's field names.
#[derive(Deserialize)]
struct RawSubject {
  subject:    String,
  updatetime: i64,
}

/// One element of the `questions` array.
#[derive(Deserialize)]
struct RawQuestion {
  question: String,
  answer:   String,
}

/// Parse `{"subjects": [{"subject": …, "updatetime": …}, …]}`.
pub(crate) fn subjects_from_json(body: &Value) -> Vec<RemoteSubject> {
  let Some(items) = body.get("subjects").and_then(Value::as_array) else {
    tracing::warn!("response has no \"subjects\" array");
    return Vec::new();
  };

  items
    .iter()
    .filter_map(|item| match serde_json::from_value::<RawSubject>(item.clone()) {
      Ok(raw) => Some(RemoteSubject {
        text:        raw.subject,
        update_time: raw.updatetime,
      }),
      Err(e) => {
        tracing::warn!("field missing in the JSON data: {e}");
        None
      }
    })
    .collect()
}

/// Parse `{"questions": [{"question": …, "answer": …}, …]}`.
pub(crate) fn questions_from_json(body: &Value) -> Vec<RemoteQuestion> {
  let Some(items) = body.get("questions").and_then(Value::as_array) else {
    tracing::warn!("response has no \"questions\" array");
    return Vec::new();
  };

  items
    .iter()
    .filter_map(|item| match serde_json::from_value::<RawQuestion>(item.clone()) {
      Ok(raw) => Some(RemoteQuestion {
        text:   raw.question,
        answer: raw.answer,
      }),
      Err(e) => {
        tracing::warn!("field missing in the JSON data: {e}");
        None
      }
    })
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn subjects_parse_all_well_formed_elements() {
    let body = json!({
      "subjects": [
        { "subject": "Biology",   "updatetime": 100 },
        { "subject": "Chemistry", "updatetime": 200 },
      ]
    });

    let subjects = subjects_from_json(&body);
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].text, "Biology");
    assert_eq!(subjects[0].update_time, 100);
    assert_eq!(subjects[1].text, "Chemistry");
  }

  #[test]
  fn subject_missing_updatetime_is_skipped() {
    let body = json!({
      "subjects": [
        { "subject": "Biology", "updatetime": 100 },
        { "subject": "Broken" },
        { "subject": "Chemistry", "updatetime": 200 },
      ]
    });

    let subjects = subjects_from_json(&body);
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].text, "Biology");
    assert_eq!(subjects[1].text, "Chemistry");
  }

  #[test]
  fn subject_with_wrong_field_type_is_skipped() {
    let body = json!({
      "subjects": [
        { "subject": "Biology", "updatetime": "yesterday" },
        { "subject": "Chemistry", "updatetime": 200 },
      ]
    });

    let subjects = subjects_from_json(&body);
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].text, "Chemistry");
  }

  #[test]
  fn missing_subjects_array_yields_empty_list() {
    assert!(subjects_from_json(&json!({})).is_empty());
    assert!(subjects_from_json(&json!({ "subjects": "not-an-array" })).is_empty());
  }

  #[test]
  fn questions_parse_and_skip_malformed() {
    let body = json!({
      "questions": [
        { "question": "What is a cell?", "answer": "The basic unit of life" },
        { "question": "No answer here" },
        { "question": "What is DNA?", "answer": "Deoxyribonucleic acid" },
      ]
    });

    let questions = questions_from_json(&body);
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].text, "What is a cell?");
    assert_eq!(questions[1].answer, "Deoxyribonucleic acid");
  }

  #[test]
  fn missing_questions_array_yields_empty_list() {
    assert!(questions_from_json(&json!({ "subjects": [] })).is_empty());
  }
}

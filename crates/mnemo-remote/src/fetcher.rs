//! [`StudyFetcher`] — the reqwest implementation of [`QuestionBank`].

use std::time::Duration;

use mnemo_core::remote::{QuestionBank, RemoteQuestion, RemoteSubject};
use reqwest::Client;

use crate::{Error, Result, wire};

/// The bank endpoint queried when no override is configured.
pub const DEFAULT_BANK_URL: &str = "https://wp.zybooks.com/study-helper.php";

/// Async HTTP client for the question-bank API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct StudyFetcher {
  client:   Client,
  base_url: String,
}

impl StudyFetcher {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, base_url: base_url.into() })
  }
}

impl QuestionBank for StudyFetcher {
  type Error = Error;

  /// `GET <base>?type=subjects`
  async fn fetch_subjects(&self) -> Result<Vec<RemoteSubject>> {
    let resp = self
      .client
      .get(&self.base_url)
      .query(&[("type", "subjects")])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }
    let body: serde_json::Value = resp.json().await?;
    Ok(wire::subjects_from_json(&body))
  }

  /// `GET <base>?type=questions&subject=<urlencoded name>`
  async fn fetch_questions(&self, subject_name: &str) -> Result<Vec<RemoteQuestion>> {
    let resp = self
      .client
      .get(&self.base_url)
      .query(&[("type", "questions"), ("subject", subject_name)])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }
    let body: serde_json::Value = resp.json().await?;
    Ok(wire::questions_from_json(&body))
  }
}

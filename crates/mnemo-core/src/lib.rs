//! Core types and trait definitions for the mnemo study-card store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod question;
pub mod remote;
pub mod store;
pub mod subject;

pub use question::Question;
pub use remote::{QuestionBank, RemoteQuestion, RemoteSubject};
pub use store::StudyStore;
pub use subject::{Subject, SubjectOrder};

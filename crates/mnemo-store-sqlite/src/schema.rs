//! SQL schema for the mnemo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `foreign_keys` must stay ON for the cascade from subjects to questions
/// to fire; it is a per-connection pragma and the store holds exactly one
/// connection.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS subjects (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    text    TEXT    NOT NULL,
    updated INTEGER NOT NULL    -- epoch millis, set once at creation
);

CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    text       TEXT    NOT NULL,
    answer     TEXT    NOT NULL,
    subject_id INTEGER NOT NULL
        REFERENCES subjects(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS questions_subject_idx ON questions(subject_id);

PRAGMA user_version = 1;
";

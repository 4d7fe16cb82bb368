//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. There are no migrations; the
//! `PRAGMA user_version` is recorded for the day there are.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS students (
    id                   TEXT PRIMARY KEY,
    first_name           TEXT NOT NULL,
    last_name            TEXT NOT NULL,
    email                TEXT NOT NULL,
    gender               TEXT NOT NULL,   -- 'MALE' | 'FEMALE'
    address_json         TEXT NOT NULL,   -- {\"city\",\"country\",\"postCode\"}
    favourite_subjects   TEXT NOT NULL DEFAULT '[]',
    total_spent_in_books TEXT NOT NULL,   -- exact decimal, canonical string
    created              TEXT NOT NULL    -- ISO 8601 UTC
);

-- Backstop for the service-level uniqueness check.
CREATE UNIQUE INDEX IF NOT EXISTS students_email_idx   ON students(email);
CREATE INDEX        IF NOT EXISTS students_created_idx ON students(created);

PRAGMA user_version = 1;
";

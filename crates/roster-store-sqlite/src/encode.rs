//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 strings (nanosecond
//! precision, `Z` suffix) so that they sort lexically. The embedded address
//! and subject list are stored as compact JSON. Decimals are stored as their
//! canonical string form so no precision is lost. UUIDs are stored as
//! hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use roster_core::student::{Address, Gender, Student};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Gender ───────────────────────────────────────────────────────────────────

pub fn encode_gender(g: Gender) -> &'static str {
  match g {
    Gender::Male => "MALE",
    Gender::Female => "FEMALE",
  }
}

pub fn decode_gender(s: &str) -> Result<Gender> {
  match s {
    "MALE" => Ok(Gender::Male),
    "FEMALE" => Ok(Gender::Female),
    other => Err(Error::UnknownGender(other.to_owned())),
  }
}

// ─── Documents ────────────────────────────────────────────────────────────────

pub fn encode_address(a: &Address) -> Result<String> { Ok(serde_json::to_string(a)?) }

pub fn decode_address(s: &str) -> Result<Address> { Ok(serde_json::from_str(s)?) }

pub fn encode_subjects(subjects: &[String]) -> Result<String> {
  Ok(serde_json::to_string(subjects)?)
}

pub fn decode_subjects(s: &str) -> Result<Vec<String>> { Ok(serde_json::from_str(s)?) }

// ─── Decimal ──────────────────────────────────────────────────────────────────

pub fn encode_decimal(d: Decimal) -> String { d.to_string() }

pub fn decode_decimal(s: &str) -> Result<Decimal> { Ok(s.parse()?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that produces a [`RawStudent`].
pub const STUDENT_COLUMNS: &str = "id, first_name, last_name, email, gender, address_json, \
                                   favourite_subjects, total_spent_in_books, created";

/// Raw strings read directly from a `students` row.
pub struct RawStudent {
  pub id:                   String,
  pub first_name:           String,
  pub last_name:            String,
  pub email:                String,
  pub gender:               String,
  pub address_json:         String,
  pub favourite_subjects:   String,
  pub total_spent_in_books: String,
  pub created:              String,
}

impl RawStudent {
  /// Build from a row selected with [`STUDENT_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                   row.get(0)?,
      first_name:           row.get(1)?,
      last_name:            row.get(2)?,
      email:                row.get(3)?,
      gender:               row.get(4)?,
      address_json:         row.get(5)?,
      favourite_subjects:   row.get(6)?,
      total_spent_in_books: row.get(7)?,
      created:              row.get(8)?,
    })
  }

  pub fn encode(s: &Student) -> Result<Self> {
    Ok(Self {
      id:                   encode_uuid(s.id),
      first_name:           s.first_name.clone(),
      last_name:            s.last_name.clone(),
      email:                s.email.clone(),
      gender:               encode_gender(s.gender).to_owned(),
      address_json:         encode_address(&s.address)?,
      favourite_subjects:   encode_subjects(&s.favourite_subjects)?,
      total_spent_in_books: encode_decimal(s.total_spent_in_books),
      created:              encode_dt(s.created),
    })
  }

  pub fn into_student(self) -> Result<Student> {
    Ok(Student {
      id:                   decode_uuid(&self.id)?,
      first_name:           self.first_name,
      last_name:            self.last_name,
      email:                self.email,
      gender:               decode_gender(&self.gender)?,
      address:              decode_address(&self.address_json)?,
      favourite_subjects:   decode_subjects(&self.favourite_subjects)?,
      total_spent_in_books: decode_decimal(&self.total_spent_in_books)?,
      created:              decode_dt(&self.created)?,
    })
  }
}

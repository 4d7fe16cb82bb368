//! [`SqliteStore`] — the SQLite implementation of [`StudentStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use roster_core::{
  store::StudentStore,
  student::{NewStudent, Student},
};

use crate::{
  Error, Result,
  encode::{RawStudent, STUDENT_COLUMNS, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A student store backed by a single SQLite file.
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

  /// Fetch at most one row matching `column = value`.
  async fn find_one(&self, column: &'static str, value: String) -> Result<Option<Student>> {
    let raw: Option<RawStudent> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE {column} = ?1"),
            rusqlite::params![value],
            RawStudent::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawStudent::into_student).transpose()
  }

  async fn exists(&self, column: &'static str, value: String) -> Result<bool> {
    let exists = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          &format!("SELECT EXISTS (SELECT 1 FROM students WHERE {column} = ?1)"),
          rusqlite::params![value],
          |row| row.get::<_, bool>(0),
        )?)
      })
      .await?;
    Ok(exists)
  }
}

// ─── StudentStore impl ───────────────────────────────────────────────────────

impl StudentStore for SqliteStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn find_all(&self) -> Result<Vec<Student>> {
    let raws: Vec<RawStudent> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {STUDENT_COLUMNS} FROM students ORDER BY created, id"
        ))?;
        let rows = stmt
          .query_map([], RawStudent::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawStudent::into_student).collect()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>> {
    self.find_one("id", encode_uuid(id)).await
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<Student>> {
    self.find_one("email", email.to_owned()).await
  }

  async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
    self.exists("id", encode_uuid(id)).await
  }

  async fn exists_by_email(&self, email: &str) -> Result<bool> {
    self.exists("email", email.to_owned()).await
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert(&self, input: NewStudent) -> Result<Student> {
    let student = input.into_student(Uuid::new_v4());
    let raw = RawStudent::encode(&student)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          &format!(
            "INSERT INTO students ({STUDENT_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
          ),
          rusqlite::params![
            raw.id,
            raw.first_name,
            raw.last_name,
            raw.email,
            raw.gender,
            raw.address_json,
            raw.favourite_subjects,
            raw.total_spent_in_books,
            raw.created,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(student)
  }

  async fn save(&self, student: Student) -> Result<Student> {
    let raw = RawStudent::encode(&student)?;

    let updated = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE students SET
             first_name = ?2, last_name = ?3, email = ?4, gender = ?5,
             address_json = ?6, favourite_subjects = ?7,
             total_spent_in_books = ?8, created = ?9
           WHERE id = ?1",
          rusqlite::params![
            raw.id,
            raw.first_name,
            raw.last_name,
            raw.email,
            raw.gender,
            raw.address_json,
            raw.favourite_subjects,
            raw.total_spent_in_books,
            raw.created,
          ],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::StudentNotFound(student.id));
    }
    Ok(student)
  }

  async fn delete_by_id(&self, id: Uuid) -> Result<()> {
    let id_str = encode_uuid(id);

    self
      .conn
      .call(move |conn| {
        conn.execute("DELETE FROM students WHERE id = ?1", rusqlite::params![id_str])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

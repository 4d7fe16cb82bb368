//! The `StudentStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! [`StudentService`](crate::service::StudentService) depends on this
//! abstraction, not on any concrete backend, so any document or relational
//! store that can answer these eight calls is substitutable.

use std::future::Future;

use uuid::Uuid;

use crate::student::{NewStudent, Student};

/// Abstraction over a student store backend.
///
/// The store enforces nothing beyond its own native guarantees; uniqueness of
/// emails is checked by the service before writing.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait StudentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every stored student, oldest first.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  /// Retrieve a student by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + '_;

  /// Retrieve a student by exact email. Returns `None` if not found.
  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Student>, Self::Error>> + Send + 'a;

  fn exists_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn exists_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new student and return it with its store-assigned id.
  fn insert(
    &self,
    input: NewStudent,
  ) -> impl Future<Output = Result<Student, Self::Error>> + Send + '_;

  /// Overwrite an existing student in place, keyed by `student.id`.
  fn save(
    &self,
    student: Student,
  ) -> impl Future<Output = Result<Student, Self::Error>> + Send + '_;

  /// Remove a student. Deleting an absent id is not an error at this layer.
  fn delete_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

//! Handlers for `/students` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/students`      | All students; `200` with `[]` when empty |
//! | `POST`   | `/students`      | Body: [`NewStudent`]; returns 201 + stored student |
//! | `GET`    | `/students/{id}` | 404 if not found |
//! | `PUT`    | `/students/{id}` | Body: [`StudentPatch`]; returns the merged student |
//! | `DELETE` | `/students/{id}` | 200 with empty body |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  StudentService,
  store::StudentStore,
  student::{NewStudent, Student, StudentPatch},
};
use uuid::Uuid;

use crate::error::{ApiError, JsonBody};

/// An id that is not a UUID cannot name a stored student.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(format!("student not found: {raw}")))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /students`
pub async fn list<S>(
  State(service): State<StudentService<S>>,
) -> Result<Json<Vec<Student>>, ApiError>
where
  S: StudentStore,
{
  Ok(Json(service.list().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /students/{id}`
pub async fn get_one<S>(
  State(service): State<StudentService<S>>,
  Path(id): Path<String>,
) -> Result<Json<Student>, ApiError>
where
  S: StudentStore,
{
  Ok(Json(service.get(parse_id(&id)?).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /students` — returns 201 + the stored [`Student`].
pub async fn create<S>(
  State(service): State<StudentService<S>>,
  JsonBody(body): JsonBody<NewStudent>,
) -> Result<impl IntoResponse, ApiError>
where
  S: StudentStore,
{
  let student = service.create(body).await?;
  Ok((StatusCode::CREATED, Json(student)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /students/{id}` — partial update; blank fields are left unchanged.
pub async fn update<S>(
  State(service): State<StudentService<S>>,
  Path(id): Path<String>,
  JsonBody(patch): JsonBody<StudentPatch>,
) -> Result<Json<Student>, ApiError>
where
  S: StudentStore,
{
  Ok(Json(service.update(parse_id(&id)?, patch).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /students/{id}`
pub async fn delete<S>(
  State(service): State<StudentService<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: StudentStore,
{
  service.delete(parse_id(&id)?).await?;
  Ok(StatusCode::OK)
}

//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by a [`StudentService`] over any
//! [`roster_core::store::StudentStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api/v1", roster_api::api_router(service))
//! ```

pub mod error;
pub mod students;

use axum::{Router, routing::get};
use roster_core::{StudentService, store::StudentStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: StudentService<S>) -> Router<()>
where
  S: StudentStore + 'static,
{
  Router::new()
    .route(
      "/students",
      get(students::list::<S>).post(students::create::<S>),
    )
    .route(
      "/students/{id}",
      get(students::get_one::<S>)
        .put(students::update::<S>)
        .delete(students::delete::<S>),
    )
    .with_state(service)
}

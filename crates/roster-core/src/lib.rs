//! Core types and trait definitions for the Roster student service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod merge;
pub mod service;
pub mod store;
pub mod student;

pub use error::{Error, Result};
pub use service::StudentService;

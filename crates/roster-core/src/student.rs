//! Student — the single record type managed by the service.
//!
//! Three shapes of the same entity travel through the system:
//!
//! - [`Student`]: a persisted record, carrying its store-assigned `id`.
//! - [`NewStudent`]: the create-time input; no `id`, `created` optional.
//! - [`StudentPatch`]: the update-time input; every field optional, blank
//!   strings and empty lists meaning "leave unchanged".
//!
//! All three serialise with camelCase field names.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Value types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
  Male,
  Female,
}

/// Postal address embedded in a student document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  pub city:      String,
  pub country:   String,
  pub post_code: String,
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
  /// Assigned by the store on insert; never changes afterwards.
  pub id:                   Uuid,
  pub first_name:           String,
  pub last_name:            String,
  /// Unique across all records.
  pub email:                String,
  pub gender:               Gender,
  pub address:              Address,
  pub favourite_subjects:   Vec<String>,
  pub total_spent_in_books: Decimal,
  pub created:              DateTime<Utc>,
}

/// Input for [`StudentStore::insert`](crate::store::StudentStore::insert).
///
/// Any `id` in an incoming JSON body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
  pub first_name:           String,
  pub last_name:            String,
  pub email:                String,
  pub gender:               Gender,
  #[serde(default)]
  pub address:              Address,
  #[serde(default)]
  pub favourite_subjects:   Vec<String>,
  #[serde(default)]
  pub total_spent_in_books: Decimal,
  /// Defaulted to "now" by the service when absent.
  pub created:              Option<DateTime<Utc>>,
}

impl NewStudent {
  /// Attach a store-assigned id, defaulting `created` to now.
  pub fn into_student(self, id: Uuid) -> Student {
    Student {
      id,
      first_name: self.first_name,
      last_name: self.last_name,
      email: self.email,
      gender: self.gender,
      address: self.address,
      favourite_subjects: self.favourite_subjects,
      total_spent_in_books: self.total_spent_in_books,
      created: self.created.unwrap_or_else(Utc::now),
    }
  }
}

// ─── Patch ───────────────────────────────────────────────────────────────────

/// Partial address supplied with a [`StudentPatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPatch {
  pub city:      Option<String>,
  pub country:   Option<String>,
  pub post_code: Option<String>,
}

/// A partially-populated student supplied to an update.
///
/// Absent fields, empty strings and an empty subject list all mean "no change
/// requested". See [`crate::merge::apply`] for the exact rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
  pub first_name:           Option<String>,
  pub last_name:            Option<String>,
  pub email:                Option<String>,
  pub gender:               Option<Gender>,
  pub address:              Option<AddressPatch>,
  pub favourite_subjects:   Option<Vec<String>>,
  pub total_spent_in_books: Option<Decimal>,
  pub created:              Option<DateTime<Utc>>,
}

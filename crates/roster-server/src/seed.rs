//! Bootstrap data inserted on startup when `seed = true`.

use roster_core::{
  StudentService,
  store::StudentStore,
  student::{Address, Gender, NewStudent},
};
use rust_decimal::Decimal;

pub const DEFAULT_EMAIL: &str = "juan.delacruz@medinar.com";

pub fn default_student() -> NewStudent {
  NewStudent {
    first_name:           "Juan".into(),
    last_name:            "Dela Cruz".into(),
    email:                DEFAULT_EMAIL.into(),
    gender:               Gender::Male,
    address:              Address {
      city:      "Makati City".into(),
      country:   "Philippines".into(),
      post_code: "1200".into(),
    },
    favourite_subjects:   vec!["Computer Science".into(), "English".into()],
    total_spent_in_books: Decimal::TEN,
    created:              None,
  }
}

/// Insert [`default_student`] unless a student with its email already exists.
pub async fn ensure_default_student<S: StudentStore>(
  service: &StudentService<S>,
) -> roster_core::Result<()> {
  let existing = service
    .store()
    .find_by_email(DEFAULT_EMAIL)
    .await
    .map_err(roster_core::Error::store)?;

  match existing {
    Some(student) => {
      tracing::info!(id = %student.id, email = DEFAULT_EMAIL, "seed student already exists");
    }
    None => {
      service.create(default_student()).await?;
    }
  }
  Ok(())
}

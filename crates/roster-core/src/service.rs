//! [`StudentService`] — business rules layered over a [`StudentStore`].
//!
//! The service owns the two decisions the store does not make: the email
//! uniqueness precondition and the partial-update merge. Check-then-write is
//! two store calls; there is no locking between them.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
  Error, Result, merge,
  store::StudentStore,
  student::{NewStudent, Student, StudentPatch},
};

pub struct StudentService<S> {
  store: Arc<S>,
}

impl<S> Clone for StudentService<S> {
  fn clone(&self) -> Self {
    Self {
      store: Arc::clone(&self.store),
    }
  }
}

impl<S: StudentStore> StudentService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  /// All students, unfiltered.
  pub async fn list(&self) -> Result<Vec<Student>> {
    self.store.find_all().await.map_err(Error::store)
  }

  pub async fn get(&self, id: Uuid) -> Result<Student> {
    self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))
  }

  /// Insert `input` unless its email is already taken.
  pub async fn create(&self, input: NewStudent) -> Result<Student> {
    validate(&input)?;

    if self
      .store
      .exists_by_email(&input.email)
      .await
      .map_err(Error::store)?
    {
      tracing::warn!(email = %input.email, "rejecting student with duplicate email");
      return Err(Error::EmailConflict(input.email));
    }

    let student = self.store.insert(input).await.map_err(Error::store)?;
    tracing::info!(id = %student.id, email = %student.email, "created student");
    Ok(student)
  }

  /// Merge `patch` into the stored student `id` and persist the result.
  ///
  /// A changed email is accepted only if no other student owns it. On any
  /// error nothing is written.
  pub async fn update(&self, id: Uuid, patch: StudentPatch) -> Result<Student> {
    let mut student = self.get(id).await?;

    if let Some(email) = merge::email_change(&student, &patch)
      && self
        .store
        .exists_by_email(email)
        .await
        .map_err(Error::store)?
    {
      tracing::warn!(%id, %email, "rejecting update to an email already in use");
      return Err(Error::EmailConflict(email.to_owned()));
    }

    let changed = merge::apply(&mut student, patch);
    tracing::debug!(%id, ?changed, "merged student patch");

    let student = self.store.save(student).await.map_err(Error::store)?;
    tracing::info!(%id, changed = changed.len(), "updated student");
    Ok(student)
  }

  pub async fn delete(&self, id: Uuid) -> Result<()> {
    if !self.store.exists_by_id(id).await.map_err(Error::store)? {
      return Err(Error::NotFound(id));
    }
    self.store.delete_by_id(id).await.map_err(Error::store)?;
    tracing::info!(%id, "deleted student");
    Ok(())
  }
}

/// Presence checks on create; the only validation the service performs.
fn validate(input: &NewStudent) -> Result<()> {
  for (field, value) in [
    ("firstName", &input.first_name),
    ("lastName", &input.last_name),
    ("email", &input.email),
  ] {
    if value.trim().is_empty() {
      return Err(Error::Invalid(format!("{field} must not be empty")));
    }
  }
  Ok(())
}

//! Field-by-field merge of a [`StudentPatch`] onto a stored [`Student`].
//!
//! Each field is overwritten only when the patch carries a *present* value
//! that *differs* from the current one. Present means non-null, and for
//! strings non-empty, and for the subject list non-empty. A blank patch field
//! is "no change requested", never "change to empty".
//!
//! The email uniqueness precondition is not checked here; see
//! [`email_change`] and [`StudentService::update`](crate::StudentService::update).

use crate::student::{Student, StudentPatch};

/// The new email a patch would apply, if any.
pub fn email_change<'a>(current: &Student, patch: &'a StudentPatch) -> Option<&'a str> {
  patch
    .email
    .as_deref()
    .filter(|e| !e.is_empty() && *e != current.email)
}

/// Merge `patch` into `student`, returning the camelCase names of the fields
/// that changed (empty if nothing did).
pub fn apply(student: &mut Student, patch: StudentPatch) -> Vec<&'static str> {
  let StudentPatch {
    first_name,
    last_name,
    email,
    gender,
    address,
    favourite_subjects,
    total_spent_in_books,
    created,
  } = patch;

  let mut changed = Vec::new();

  if set(&mut student.first_name, text(first_name)) {
    changed.push("firstName");
  }
  if set(&mut student.last_name, text(last_name)) {
    changed.push("lastName");
  }
  if set(&mut student.email, text(email)) {
    changed.push("email");
  }
  if set(&mut student.gender, gender) {
    changed.push("gender");
  }
  if let Some(address) = address {
    if set(&mut student.address.city, text(address.city)) {
      changed.push("address.city");
    }
    if set(&mut student.address.country, text(address.country)) {
      changed.push("address.country");
    }
    if set(&mut student.address.post_code, text(address.post_code)) {
      changed.push("address.postCode");
    }
  }
  if set(
    &mut student.favourite_subjects,
    favourite_subjects.filter(|s| !s.is_empty()),
  ) {
    changed.push("favouriteSubjects");
  }
  if set(&mut student.total_spent_in_books, total_spent_in_books) {
    changed.push("totalSpentInBooks");
  }
  if set(&mut student.created, created) {
    changed.push("created");
  }

  changed
}

fn text(value: Option<String>) -> Option<String> { value.filter(|s| !s.is_empty()) }

fn set<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
  match value {
    Some(v) if *slot != v => {
      *slot = v;
      true
    }
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use rust_decimal::Decimal;
  use uuid::Uuid;

  use super::*;
  use crate::student::{Address, AddressPatch, Gender};

  fn jane() -> Student {
    Student {
      id:                   Uuid::new_v4(),
      first_name:           "Jane".into(),
      last_name:            "Smith".into(),
      email:                "a@x.com".into(),
      gender:               Gender::Female,
      address:              Address {
        city:      "Manila".into(),
        country:   "Philippines".into(),
        post_code: "1000".into(),
      },
      favourite_subjects:   vec!["Maths".into()],
      total_spent_in_books: Decimal::TEN,
      created:              Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
  }

  #[test]
  fn empty_patch_changes_nothing() {
    let mut s = jane();
    let before = s.clone();
    assert!(apply(&mut s, StudentPatch::default()).is_empty());
    assert_eq!(s, before);
  }

  #[test]
  fn blank_first_name_is_ignored_while_last_name_applies() {
    let mut s = jane();
    let changed = apply(&mut s, StudentPatch {
      first_name: Some(String::new()),
      last_name:  Some("Doe".into()),
      ..Default::default()
    });
    assert_eq!(changed, ["lastName"]);
    assert_eq!(s.first_name, "Jane");
    assert_eq!(s.last_name, "Doe");
  }

  #[test]
  fn equal_values_are_not_reported_as_changes() {
    let mut s = jane();
    let changed = apply(&mut s, StudentPatch {
      first_name:           Some("Jane".into()),
      gender:               Some(Gender::Female),
      total_spent_in_books: Some(Decimal::new(1000, 2)),
      ..Default::default()
    });
    assert!(changed.is_empty(), "changed: {changed:?}");
  }

  #[test]
  fn gender_applies_without_email() {
    let mut s = jane();
    let changed = apply(&mut s, StudentPatch {
      gender: Some(Gender::Male),
      ..Default::default()
    });
    assert_eq!(changed, ["gender"]);
    assert_eq!(s.gender, Gender::Male);
    assert_eq!(s.email, "a@x.com");
  }

  #[test]
  fn address_sub_fields_merge_independently() {
    let mut s = jane();
    let changed = apply(&mut s, StudentPatch {
      address: Some(AddressPatch {
        city:      Some("Cebu".into()),
        country:   Some(String::new()),
        post_code: None,
      }),
      ..Default::default()
    });
    assert_eq!(changed, ["address.city"]);
    assert_eq!(s.address.city, "Cebu");
    assert_eq!(s.address.country, "Philippines");
    assert_eq!(s.address.post_code, "1000");
  }

  #[test]
  fn empty_subject_list_means_no_change() {
    let mut s = jane();
    assert!(
      apply(&mut s, StudentPatch {
        favourite_subjects: Some(vec![]),
        ..Default::default()
      })
      .is_empty()
    );
    assert_eq!(s.favourite_subjects, ["Maths"]);

    let changed = apply(&mut s, StudentPatch {
      favourite_subjects: Some(vec!["History".into(), "Art".into()]),
      ..Default::default()
    });
    assert_eq!(changed, ["favouriteSubjects"]);
    assert_eq!(s.favourite_subjects, ["History", "Art"]);
  }

  #[test]
  fn email_change_requires_present_and_different() {
    let s = jane();
    let same = StudentPatch { email: Some("a@x.com".into()), ..Default::default() };
    let blank = StudentPatch { email: Some(String::new()), ..Default::default() };
    let new = StudentPatch { email: Some("b@x.com".into()), ..Default::default() };
    assert_eq!(email_change(&s, &same), None);
    assert_eq!(email_change(&s, &blank), None);
    assert_eq!(email_change(&s, &StudentPatch::default()), None);
    assert_eq!(email_change(&s, &new), Some("b@x.com"));
  }

  #[test]
  fn id_is_never_touched() {
    let mut s = jane();
    let id = s.id;
    let patch: StudentPatch = serde_json::from_str(&format!(
      r#"{{"id":"{}","firstName":"Janet"}}"#,
      Uuid::new_v4()
    ))
    .unwrap();
    apply(&mut s, patch);
    assert_eq!(s.id, id);
    assert_eq!(s.first_name, "Janet");
  }
}

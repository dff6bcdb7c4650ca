//! Tests for the profile completeness selector.

use std::sync::Arc;

use crate::client::selectors::UserSelectors;
use crate::model::user::ProfileDto;

fn full_profile() -> ProfileDto {
    ProfileDto {
        id: "u1".to_string(),
        email: Some("lena@example.com".to_string()),
        full_name: Some("Lena Weber".to_string()),
        phone: Some("+49 151 0000000".to_string()),
        birthdate: Some("1992-03-14".to_string()),
        country: Some("DE".to_string()),
        language_preference: None,
    }
}

/// Tests a profile with every identity field filled.
///
/// Verifies that email, full name, phone, birthdate, and country are the five
/// fields that matter; the language preference may stay unset.
///
/// Expected: true
#[test]
fn accepts_all_five_identity_fields() {
    let selectors = UserSelectors::new();

    assert!(*selectors.is_profile_complete(&Arc::new(Some(full_profile()))));
}

/// Tests a missing identity field.
///
/// Verifies that an unset country makes the profile incomplete.
///
/// Expected: false
#[test]
fn rejects_missing_field() {
    let selectors = UserSelectors::new();
    let mut profile = full_profile();
    profile.country = None;

    assert!(!*selectors.is_profile_complete(&Arc::new(Some(profile))));
}

/// Tests an empty-string identity field.
///
/// Verifies that a present-but-empty phone number does not count as filled.
///
/// Expected: false
#[test]
fn rejects_empty_string_field() {
    let selectors = UserSelectors::new();
    let mut profile = full_profile();
    profile.phone = Some(String::new());

    assert!(!*selectors.is_profile_complete(&Arc::new(Some(profile))));
}

/// Tests the signed-out case.
///
/// Verifies that no profile at all is never complete.
///
/// Expected: false
#[test]
fn rejects_absent_profile() {
    let selectors = UserSelectors::new();

    assert!(!*selectors.is_profile_complete(&Arc::new(None)));
}

//! HubSpot contact property-bag builder.
//!
//! Shapes a [`CanonicalContact`] for the contacts batch-upsert endpoint.
//! A property is only included when the source value is present; absent
//! fields are omitted entirely, never sent as null or empty. HubSpot's
//! partial-update semantics mean an omitted property leaves the remote
//! value untouched.

use serde_json::{Map, Value};

use crate::canonical::CanonicalContact;

/// Property bag keyed by HubSpot's native property names
/// (e.g. `firstname`, `acc_membership_type`, `zip`).
pub type ContactProperties = Map<String, Value>;

/// Read a string-valued extra, treating null and empty as absent.
fn extra_str<'a>(extras: &'a ContactProperties, key: &str) -> Option<&'a str> {
    extras
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Treat blank canonical fields as absent. Normalization passes
/// whitespace-only input through trimmed, so an empty string can reach
/// the builder and must not become an empty remote property.
fn present(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.trim().is_empty())
}

/// Build the contact property bag for one canonical contact.
pub fn build_contact_payload(canonical: &CanonicalContact) -> ContactProperties {
    let mut props = Map::new();
    props.insert("firstname".into(), Value::String(canonical.first_name.clone()));
    props.insert("lastname".into(), Value::String(canonical.last_name.clone()));
    props.insert("email".into(), Value::String(canonical.email.clone()));
    props.insert("acc_waiver_signed".into(), Value::Bool(canonical.waiver_signed));

    if let Some(phone) = present(&canonical.phone) {
        props.insert("phone".into(), Value::String(phone.clone()));
    }
    if let Some(membership_type) = present(&canonical.membership_type) {
        props.insert("acc_membership_type".into(), Value::String(membership_type.clone()));
    }
    if let Some(section) = present(&canonical.section) {
        props.insert("acc_section".into(), Value::String(section.clone()));
    }
    if let Some(emergency_contact) = present(&canonical.emergency_contact) {
        props.insert(
            "acc_emergency_contact".into(),
            Value::String(emergency_contact.clone()),
        );
    }

    // Source-specific extras with known HubSpot properties.
    let extras = &canonical.extras;
    if let Some(code) = extra_str(extras, "courseCode") {
        props.insert("acc_last_course_code".into(), Value::String(code.into()));
    }
    if let Some(name) = extra_str(extras, "courseName") {
        props.insert("acc_last_course_name".into(), Value::String(name.into()));
    }
    if let Some(hut) = extra_str(extras, "hutName") {
        props.insert("acc_last_hut_booked".into(), Value::String(hut.into()));
    }
    if let Some(date) = extra_str(extras, "renewalDate") {
        props.insert(
            "acc_membership_renewal_date".into(),
            Value::String(date.into()),
        );
    }
    if let Some(postal) = extra_str(extras, "postalCode") {
        props.insert("zip".into(), Value::String(postal.into()));
    }
    if let Some(prm) = extra_str(extras, "prmType") {
        props.insert("acc_prm_type".into(), Value::String(prm.into()));
    }

    props
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

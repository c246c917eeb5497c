//! Canonical contact shape and per-source canonicalization.
//!
//! A [`CanonicalContact`] is the source-agnostic view of a registration
//! used for display and for building the CRM payload. Source-unique
//! fields are preserved losslessly in `extras`, keyed by field name.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::normalize::{normalize_phone, normalize_section};
use crate::payload::{CourseRegistration, HutBooking, Membership, RawPayload};

/// Normalized, source-agnostic contact data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub section: Option<String>,
    pub waiver_signed: bool,
    pub emergency_contact: Option<String>,
    /// Source-specific fields with no universal slot, preserved for the
    /// CRM payload and the dashboard drawer.
    pub extras: Map<String, Value>,
}

/// Convert a decoded payload into the canonical contact shape.
pub fn canonicalize(payload: &RawPayload) -> CanonicalContact {
    match payload {
        RawPayload::Course(p) => canonicalize_course(p),
        RawPayload::HutBooking(p) => canonicalize_hut_booking(p),
        RawPayload::Membership(p) => canonicalize_membership(p),
    }
}

/// Treat blank strings as absent values.
fn blank_to_none(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn opt_str(value: Option<&String>) -> Value {
    value.map(|s| Value::String(s.clone())).unwrap_or(Value::Null)
}

fn canonicalize_course(p: &CourseRegistration) -> CanonicalContact {
    let mut extras = Map::new();
    extras.insert("courseCode".into(), Value::String(p.course_code.clone()));
    extras.insert("courseName".into(), Value::String(p.course_name.clone()));
    extras.insert("startDate".into(), Value::String(p.start_date.clone()));
    extras.insert("membershipNumber".into(), opt_str(p.membership_number.as_ref()));
    extras.insert("postalCode".into(), opt_str(p.postal_code.as_ref()));

    CanonicalContact {
        first_name: p.first_name.clone(),
        last_name: p.last_name.clone(),
        email: p.email.clone(),
        phone: normalize_phone(p.phone.as_deref()),
        membership_type: blank_to_none(p.membership_type.as_ref()),
        section: normalize_section(p.section.as_deref()),
        waiver_signed: p.waiver_signed,
        emergency_contact: p.emergency_contact.clone(),
        extras,
    }
}

fn canonicalize_hut_booking(p: &HutBooking) -> CanonicalContact {
    let mut extras = Map::new();
    extras.insert("hutName".into(), Value::String(p.hut_name.clone()));
    extras.insert("checkIn".into(), Value::String(p.check_in.clone()));
    extras.insert("checkOut".into(), Value::String(p.check_out.clone()));
    extras.insert("partySize".into(), Value::from(p.party_size));
    extras.insert("membershipNumber".into(), opt_str(p.membership_number.as_ref()));
    extras.insert("specialRequests".into(), opt_str(p.special_requests.as_ref()));

    // Hut bookings carry no membership, section, or emergency contact data.
    CanonicalContact {
        first_name: p.first_name.clone(),
        last_name: p.last_name.clone(),
        email: p.email.clone(),
        phone: normalize_phone(p.phone.as_deref()),
        membership_type: None,
        section: None,
        waiver_signed: p.waiver_signed,
        emergency_contact: None,
        extras,
    }
}

fn canonicalize_membership(p: &Membership) -> CanonicalContact {
    let mut extras = Map::new();
    extras.insert("renewalDate".into(), opt_str(p.renewal_date.as_ref()));
    extras.insert("postalCode".into(), opt_str(p.postal_code.as_ref()));
    extras.insert("prmType".into(), opt_str(p.prm_type.as_ref()));

    CanonicalContact {
        first_name: p.first_name.clone(),
        last_name: p.last_name.clone(),
        email: p.email.clone(),
        phone: normalize_phone(p.phone.as_deref()),
        membership_type: blank_to_none(Some(&p.membership_type)),
        section: normalize_section(Some(&p.section)),
        waiver_signed: p.waiver_signed,
        emergency_contact: p.emergency_contact.clone(),
        extras,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Per-record validation rule engine.
//!
//! Validation runs against the raw payload, not the canonical contact:
//! the rules describe what the source system failed to provide. The
//! structural shape check happens first via [`RawPayload::decode`]; on
//! mismatch a single `RAW_DATA_INVALID` error issue short-circuits the
//! rule list. Rule order per source is fixed and issues keep insertion
//! order.

use serde::Serialize;
use serde_json::Value;

use crate::payload::{CourseRegistration, HutBooking, Membership, RawPayload};
use crate::types::{IssueSeverity, SourceType, ValidationIssue, ValidationStatus};

// ---------------------------------------------------------------------------
// Issue codes
// ---------------------------------------------------------------------------

pub const RAW_DATA_INVALID: &str = "RAW_DATA_INVALID";
pub const WAIVER_MISSING: &str = "WAIVER_MISSING";
pub const EMAIL_MISSING: &str = "EMAIL_MISSING";
pub const EMERGENCY_CONTACT_MISSING: &str = "EMERGENCY_CONTACT_MISSING";
pub const PHONE_MISSING: &str = "PHONE_MISSING";
pub const MEMBERSHIP_TYPE_MISSING: &str = "MEMBERSHIP_TYPE_MISSING";
pub const DUPLICATE_EMAIL: &str = "DUPLICATE_EMAIL";

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Outcome of validating one record, before duplicate resolution.
#[derive(Debug, Clone, Serialize)]
pub struct RecordValidationResult {
    pub issues: Vec<ValidationIssue>,
    /// Derived from the issue list: `Blocked`, `Warning`, or `Valid`.
    /// `Duplicate` is applied separately by the status resolver.
    pub status: ValidationStatus,
}

// ---------------------------------------------------------------------------
// Shared rule helpers
// ---------------------------------------------------------------------------

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn opt_blank(value: Option<&String>) -> bool {
    value.map_or(true, |s| is_blank(s))
}

fn waiver_issue() -> ValidationIssue {
    ValidationIssue::new(
        IssueSeverity::Error,
        WAIVER_MISSING,
        "Waiver has not been signed.",
        Some("waiverSigned"),
    )
}

fn email_issue() -> ValidationIssue {
    ValidationIssue::new(
        IssueSeverity::Error,
        EMAIL_MISSING,
        "Email address is missing.",
        Some("email"),
    )
}

fn emergency_contact_issue() -> ValidationIssue {
    ValidationIssue::new(
        IssueSeverity::Warning,
        EMERGENCY_CONTACT_MISSING,
        "Emergency contact is not provided.",
        Some("emergencyContact"),
    )
}

fn phone_issue() -> ValidationIssue {
    ValidationIssue::new(
        IssueSeverity::Warning,
        PHONE_MISSING,
        "Phone number is not provided.",
        Some("phone"),
    )
}

// ---------------------------------------------------------------------------
// Per-source rule lists (order is part of the contract)
// ---------------------------------------------------------------------------

fn validate_course(payload: &CourseRegistration) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !payload.waiver_signed {
        issues.push(waiver_issue());
    }
    if is_blank(&payload.email) {
        issues.push(email_issue());
    }
    if opt_blank(payload.emergency_contact.as_ref()) {
        issues.push(emergency_contact_issue());
    }
    if opt_blank(payload.phone.as_ref()) {
        issues.push(phone_issue());
    }

    issues
}

fn validate_hut_booking(payload: &HutBooking) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !payload.waiver_signed {
        issues.push(waiver_issue());
    }
    if is_blank(&payload.email) {
        issues.push(email_issue());
    }
    if opt_blank(payload.phone.as_ref()) {
        issues.push(phone_issue());
    }

    issues
}

fn validate_membership(payload: &Membership) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if is_blank(&payload.membership_type) {
        issues.push(ValidationIssue::new(
            IssueSeverity::Error,
            MEMBERSHIP_TYPE_MISSING,
            "Membership type is empty or missing.",
            Some("membershipType"),
        ));
    }
    if !payload.waiver_signed {
        issues.push(waiver_issue());
    }
    if is_blank(&payload.email) {
        issues.push(email_issue());
    }
    if opt_blank(payload.emergency_contact.as_ref()) {
        issues.push(emergency_contact_issue());
    }
    if opt_blank(payload.phone.as_ref()) {
        issues.push(phone_issue());
    }

    issues
}

/// Run the business rules for an already-decoded payload.
pub fn validate_payload(payload: &RawPayload) -> Vec<ValidationIssue> {
    match payload {
        RawPayload::Course(p) => validate_course(p),
        RawPayload::HutBooking(p) => validate_hut_booking(p),
        RawPayload::Membership(p) => validate_membership(p),
    }
}

// ---------------------------------------------------------------------------
// Status derivation
// ---------------------------------------------------------------------------

/// Derive the coarse status from an issue list.
///
/// Any error severity blocks; otherwise any warning downgrades; a clean
/// list is valid.
pub fn derive_status(issues: &[ValidationIssue]) -> ValidationStatus {
    if issues.iter().any(|i| i.severity == IssueSeverity::Error) {
        return ValidationStatus::Blocked;
    }
    if issues.iter().any(|i| i.severity == IssueSeverity::Warning) {
        return ValidationStatus::Warning;
    }
    ValidationStatus::Valid
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Validate one record's raw data against its declared source type.
///
/// A payload that fails the structural decode yields a single
/// `RAW_DATA_INVALID` error issue and `Blocked`; no further rules are
/// evaluated.
pub fn validate_record(source_type: SourceType, raw: &Value) -> RecordValidationResult {
    let payload = match RawPayload::decode(source_type, raw) {
        Ok(p) => p,
        Err(_) => {
            return RecordValidationResult {
                issues: vec![ValidationIssue::new(
                    IssueSeverity::Error,
                    RAW_DATA_INVALID,
                    format!("Raw payload does not match expected {source_type} shape."),
                    None,
                )],
                status: ValidationStatus::Blocked,
            };
        }
    };

    let issues = validate_payload(&payload);
    let status = derive_status(&issues);
    RecordValidationResult { issues, status }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_course() -> Value {
        json!({
            "firstName": "Sarah",
            "lastName": "Okonkwo",
            "email": "sarah.okonkwo@email.com",
            "phone": "403-555-0101",
            "courseCode": "GMC-2026",
            "courseName": "General Mountaineering Camp 2026",
            "startDate": "2026-07-12",
            "waiverSigned": true,
            "emergencyContact": "James Okonkwo: 403-555-0102"
        })
    }

    fn valid_membership() -> Value {
        json!({
            "firstName": "Christine",
            "lastName": "Beausoleil",
            "email": "c.beausoleil@telus.net",
            "phone": "403-555-0711",
            "membershipType": "Full",
            "section": "Calgary Section",
            "emergencyContact": "Pierre Beausoleil: 403-555-0712",
            "waiverSigned": true
        })
    }

    // -- Structural check ----------------------------------------------------

    #[test]
    fn malformed_payload_short_circuits_to_raw_data_invalid() {
        let result = validate_record(SourceType::Course, &json!({"firstName": "only"}));

        assert_eq!(result.status, ValidationStatus::Blocked);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, RAW_DATA_INVALID);
        assert_eq!(result.issues[0].severity, IssueSeverity::Error);
    }

    // -- Course rules --------------------------------------------------------

    #[test]
    fn fully_valid_course_has_no_issues() {
        let result = validate_record(SourceType::Course, &valid_course());
        assert_eq!(result.status, ValidationStatus::Valid);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn missing_phone_is_warning_never_blocked() {
        let mut raw = valid_course();
        raw.as_object_mut().unwrap().remove("phone");
        let result = validate_record(SourceType::Course, &raw);

        assert_eq!(result.status, ValidationStatus::Warning);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, PHONE_MISSING);
    }

    #[test]
    fn unsigned_waiver_blocks_regardless_of_warnings() {
        let mut raw = valid_course();
        raw["waiverSigned"] = json!(false);
        raw.as_object_mut().unwrap().remove("emergencyContact");
        let result = validate_record(SourceType::Course, &raw);

        assert_eq!(result.status, ValidationStatus::Blocked);
        // Rule order: waiver before the emergency contact warning.
        assert_eq!(result.issues[0].code, WAIVER_MISSING);
        assert_eq!(result.issues[1].code, EMERGENCY_CONTACT_MISSING);
    }

    #[test]
    fn blank_email_is_an_error() {
        let mut raw = valid_course();
        raw["email"] = json!("   ");
        let result = validate_record(SourceType::Course, &raw);

        assert_eq!(result.status, ValidationStatus::Blocked);
        assert!(result.issues.iter().any(|i| i.code == EMAIL_MISSING));
    }

    // -- Hut booking rules ---------------------------------------------------

    #[test]
    fn hut_booking_has_no_emergency_contact_rule() {
        let raw = json!({
            "firstName": "Luca",
            "lastName": "Moretti",
            "email": "luca.moretti@gmail.com",
            "phone": "7785550831",
            "hutName": "Stanley Mitchell Hut",
            "checkIn": "2026-07-10",
            "checkOut": "2026-07-14",
            "partySize": 2,
            "waiverSigned": true
        });
        let result = validate_record(SourceType::HutBooking, &raw);
        assert_eq!(result.status, ValidationStatus::Valid);
    }

    // -- Membership rules ----------------------------------------------------

    #[test]
    fn empty_membership_type_is_blocking() {
        let mut raw = valid_membership();
        raw["membershipType"] = json!("");
        let result = validate_record(SourceType::Membership, &raw);

        assert_eq!(result.status, ValidationStatus::Blocked);
        assert_eq!(result.issues[0].code, MEMBERSHIP_TYPE_MISSING);
        assert_eq!(result.issues[0].severity, IssueSeverity::Error);
    }

    #[test]
    fn membership_rule_order_is_stable() {
        let raw = json!({
            "firstName": "Test",
            "lastName": "Person",
            "email": "",
            "membershipType": "",
            "section": "Edmonton",
            "waiverSigned": false
        });
        let result = validate_record(SourceType::Membership, &raw);

        let codes: Vec<&str> = result.issues.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                MEMBERSHIP_TYPE_MISSING,
                WAIVER_MISSING,
                EMAIL_MISSING,
                EMERGENCY_CONTACT_MISSING,
                PHONE_MISSING,
            ]
        );
    }

    // -- Status derivation ---------------------------------------------------

    #[test]
    fn derive_status_precedence() {
        assert_eq!(derive_status(&[]), ValidationStatus::Valid);
        assert_eq!(derive_status(&[phone_issue()]), ValidationStatus::Warning);
        assert_eq!(
            derive_status(&[phone_issue(), waiver_issue()]),
            ValidationStatus::Blocked
        );
    }
}

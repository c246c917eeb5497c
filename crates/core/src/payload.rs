//! Raw source payloads and their fallible decode.
//!
//! Each source system ships a different `rawData` shape. Decoding the
//! stored JSON into the strict per-source struct *is* the structural
//! shape check: a payload that fails to decode is the
//! `RAW_DATA_INVALID` condition, and no further rules run against it.
//!
//! Field names stay camelCase because that is how the source systems
//! serialize them and how they are stored in `raw_data`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::SourceType;

// ---------------------------------------------------------------------------
// Per-source shapes
// ---------------------------------------------------------------------------

/// Course registration payload (Hapily export).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub membership_number: Option<String>,
    pub membership_type: Option<String>,
    pub section: Option<String>,
    pub course_code: String,
    pub course_name: String,
    pub start_date: String,
    pub waiver_signed: bool,
    pub emergency_contact: Option<String>,
    pub postal_code: Option<String>,
}

/// Hut booking payload (Mews export).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HutBooking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub hut_name: String,
    pub check_in: String,
    pub check_out: String,
    pub party_size: i64,
    pub membership_number: Option<String>,
    pub waiver_signed: bool,
    pub special_requests: Option<String>,
}

/// Section membership payload (manual CSV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub membership_type: String,
    pub section: String,
    pub renewal_date: Option<String>,
    pub postal_code: Option<String>,
    pub emergency_contact: Option<String>,
    pub waiver_signed: bool,
    pub prm_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagged union + decode
// ---------------------------------------------------------------------------

/// A decoded raw payload, tagged by its source type.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    Course(CourseRegistration),
    HutBooking(HutBooking),
    Membership(Membership),
}

impl RawPayload {
    /// Decode a stored `raw_data` JSON value into the strict shape for
    /// its source type.
    ///
    /// Required fields must be present with the correct primitive type;
    /// unknown extra fields are ignored. A failure here means the
    /// payload is structurally invalid for the declared source.
    pub fn decode(source_type: SourceType, raw: &Value) -> Result<Self, CoreError> {
        let decoded = match source_type {
            SourceType::Course => {
                serde_json::from_value(raw.clone()).map(RawPayload::Course)
            }
            SourceType::HutBooking => {
                serde_json::from_value(raw.clone()).map(RawPayload::HutBooking)
            }
            SourceType::Membership => {
                serde_json::from_value(raw.clone()).map(RawPayload::Membership)
            }
        };

        decoded.map_err(|e| {
            CoreError::Decode(format!(
                "Raw payload does not match expected {source_type} shape: {e}"
            ))
        })
    }

    /// The source type this payload was decoded as.
    pub fn source_type(&self) -> SourceType {
        match self {
            RawPayload::Course(_) => SourceType::Course,
            RawPayload::HutBooking(_) => SourceType::HutBooking,
            RawPayload::Membership(_) => SourceType::Membership,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn course_json() -> Value {
        json!({
            "firstName": "Sarah",
            "lastName": "Okonkwo",
            "email": "sarah.okonkwo@email.com",
            "phone": "403-555-0101",
            "membershipType": "Full",
            "section": "Calgary",
            "courseCode": "GMC-2026",
            "courseName": "General Mountaineering Camp 2026",
            "startDate": "2026-07-12",
            "waiverSigned": true,
            "emergencyContact": "James Okonkwo: 403-555-0102",
            "postalCode": "T2P 1G5"
        })
    }

    #[test]
    fn decodes_course_payload() {
        let payload = RawPayload::decode(SourceType::Course, &course_json()).unwrap();
        assert_matches!(payload, RawPayload::Course(c) => {
            assert_eq!(c.course_code, "GMC-2026");
            assert_eq!(c.phone.as_deref(), Some("403-555-0101"));
            assert!(c.waiver_signed);
        });
    }

    #[test]
    fn decodes_hut_booking_with_optional_fields_missing() {
        let raw = json!({
            "firstName": "Omar",
            "lastName": "Al-Rashid",
            "email": "omar.alrashid@gmail.com",
            "phone": "403-555-0507",
            "hutName": "Abbot Pass Refuge Cabin",
            "checkIn": "2026-09-01",
            "checkOut": "2026-09-03",
            "partySize": 2,
            "waiverSigned": true
        });
        let payload = RawPayload::decode(SourceType::HutBooking, &raw).unwrap();
        assert_matches!(payload, RawPayload::HutBooking(h) => {
            assert_eq!(h.party_size, 2);
            assert_eq!(h.membership_number, None);
            assert_eq!(h.special_requests, None);
        });
    }

    #[test]
    fn membership_with_empty_type_still_decodes() {
        // An empty membershipType is a business-rule failure, not a
        // structural one.
        let raw = json!({
            "firstName": "Fatima",
            "lastName": "Hussain",
            "email": "fatima.hussain@ualberta.ca",
            "phone": "7805550344",
            "membershipType": "",
            "section": "Edmonton",
            "waiverSigned": true
        });
        assert!(RawPayload::decode(SourceType::Membership, &raw).is_ok());
    }

    #[test]
    fn missing_required_field_fails_decode() {
        let mut raw = course_json();
        raw.as_object_mut().unwrap().remove("courseCode");
        let err = RawPayload::decode(SourceType::Course, &raw).unwrap_err();
        assert_matches!(err, CoreError::Decode(msg) => {
            assert!(msg.contains("COURSE"));
        });
    }

    #[test]
    fn wrong_primitive_type_fails_decode() {
        let mut raw = course_json();
        raw["waiverSigned"] = json!("yes");
        assert!(RawPayload::decode(SourceType::Course, &raw).is_err());
    }

    #[test]
    fn payload_for_wrong_source_fails_decode() {
        // A course payload declared as HUT_BOOKING lacks hutName etc.
        assert!(RawPayload::decode(SourceType::HutBooking, &course_json()).is_err());
    }

    #[test]
    fn non_object_payload_fails_decode() {
        assert!(RawPayload::decode(SourceType::Course, &json!("not an object")).is_err());
        assert!(RawPayload::decode(SourceType::Course, &Value::Null).is_err());
    }
}

//! Pure validation pass over a loaded record set.
//!
//! Combines the rule engine, the global duplicate detector, and the
//! status resolver without touching the database, so the hard logic is
//! unit-testable on in-memory registrations. Persisting the results is
//! the query service's job.

use serde_json::Value;

use accsync_core::duplicate::{duplicate_issue, find_duplicate_ids};
use accsync_core::status::resolve;
use accsync_core::types::{DbId, ValidationIssue, ValidationStatus};
use accsync_core::validation::validate_record;
use accsync_db::models::registration::Registration;

/// Computed validation state for one registration.
#[derive(Debug, Clone)]
pub struct ComputedValidation {
    pub id: DbId,
    pub status: ValidationStatus,
    pub issues: Vec<ValidationIssue>,
    /// `issues` serialized once, for persistence and change detection.
    pub issues_json: Value,
    pub is_duplicate: bool,
    /// Whether the computed state differs from what is stored.
    pub changed: bool,
}

/// Validate every registration and resolve duplicates globally.
///
/// Duplicate detection always runs over the full input set; callers
/// must pass all records, never a filtered subset. Results come back in
/// input order.
pub fn compute_validation(registrations: &[Registration]) -> Vec<ComputedValidation> {
    let identity_keys: Vec<(DbId, Option<String>)> = registrations
        .iter()
        .map(|r| (r.id, r.email.clone()))
        .collect();
    let duplicate_ids = find_duplicate_ids(&identity_keys);

    registrations
        .iter()
        .map(|r| {
            let result = validate_record(r.source_type, &r.raw_data);
            let is_duplicate = duplicate_ids.contains(&r.id);
            let status = resolve(result.status, is_duplicate);

            let mut issues = result.issues;
            if is_duplicate {
                issues.push(duplicate_issue(r.email.as_deref()));
            }

            let issues_json =
                serde_json::to_value(&issues).unwrap_or_else(|_| Value::Array(Vec::new()));
            let changed = r.validation_status != status || r.validation_errors != issues_json;

            ComputedValidation {
                id: r.id,
                status,
                issues,
                issues_json,
                is_duplicate,
                changed,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use accsync_core::types::{SourceType, SyncStatus};
    use accsync_core::validation::DUPLICATE_EMAIL;
    use serde_json::json;

    fn registration(id: DbId, source_type: SourceType, email: &str, raw: Value) -> Registration {
        Registration {
            id,
            source_type,
            external_id: format!("EXT-{id}"),
            source_ref: None,
            email: Some(email.to_string()),
            first_name: None,
            last_name: None,
            raw_data: raw,
            validation_status: ValidationStatus::Pending,
            validation_errors: json!([]),
            sync_status: SyncStatus::Pending,
            hubspot_id: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn valid_course(id: DbId, email: &str) -> Registration {
        registration(
            id,
            SourceType::Course,
            email,
            json!({
                "firstName": "A", "lastName": "B", "email": email,
                "phone": "403-555-0101",
                "courseCode": "GMC-2026", "courseName": "GMC",
                "startDate": "2026-07-12", "waiverSigned": true,
                "emergencyContact": "C: 403-555-0102"
            }),
        )
    }

    fn valid_hut(id: DbId, email: &str) -> Registration {
        registration(
            id,
            SourceType::HutBooking,
            email,
            json!({
                "firstName": "A", "lastName": "B", "email": email,
                "phone": "403-555-0101",
                "hutName": "Stanley Mitchell Hut",
                "checkIn": "2026-08-14", "checkOut": "2026-08-17",
                "partySize": 2, "waiverSigned": true
            }),
        )
    }

    fn valid_membership(id: DbId, email: &str) -> Registration {
        registration(
            id,
            SourceType::Membership,
            email,
            json!({
                "firstName": "A", "lastName": "B", "email": email,
                "phone": "403-555-0101",
                "membershipType": "Full", "section": "Calgary",
                "emergencyContact": "C: 403-555-0102", "waiverSigned": true
            }),
        )
    }

    #[test]
    fn cross_source_duplicates_all_flagged() {
        let email = "amara.diallo@email.com";
        let regs = vec![
            valid_course(1, email),
            valid_hut(2, email),
            valid_membership(3, email),
            valid_course(4, "someone.else@email.com"),
        ];
        let computed = compute_validation(&regs);

        for c in &computed[..3] {
            assert_eq!(c.status, ValidationStatus::Duplicate);
            assert!(c.is_duplicate);
            let dup_issues: Vec<_> = c
                .issues
                .iter()
                .filter(|i| i.code == DUPLICATE_EMAIL)
                .collect();
            assert_eq!(dup_issues.len(), 1, "exactly one DUPLICATE_EMAIL issue");
            assert!(dup_issues[0].message.contains(email));
        }
        assert_eq!(computed[3].status, ValidationStatus::Valid);
        assert!(!computed[3].is_duplicate);
    }

    #[test]
    fn blocked_wins_over_duplicate() {
        let email = "shared@email.com";
        let mut blocked = valid_course(1, email);
        blocked.raw_data["waiverSigned"] = json!(false);
        let regs = vec![blocked, valid_hut(2, email)];
        let computed = compute_validation(&regs);

        assert_eq!(computed[0].status, ValidationStatus::Blocked);
        // Still flagged and still gets the appended duplicate issue.
        assert!(computed[0].is_duplicate);
        assert_eq!(
            computed[0].issues.last().map(|i| i.code.as_str()),
            Some(DUPLICATE_EMAIL)
        );
        assert_eq!(computed[1].status, ValidationStatus::Duplicate);
    }

    #[test]
    fn duplicate_issue_appends_after_base_issues() {
        let email = "shared@email.com";
        let mut warned = valid_course(1, email);
        warned.raw_data.as_object_mut().unwrap().remove("phone");
        let regs = vec![warned, valid_course(2, email)];
        let computed = compute_validation(&regs);

        let codes: Vec<&str> = computed[0].issues.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["PHONE_MISSING", DUPLICATE_EMAIL]);
        assert_eq!(computed[0].status, ValidationStatus::Duplicate);
    }

    #[test]
    fn unchanged_stored_state_is_not_flagged_changed() {
        let mut reg = valid_course(1, "a@example.com");
        let first = compute_validation(&[reg.clone()]);
        assert!(first[0].changed, "pending record needs its first repair");

        // Store the computed state, recompute: nothing to do.
        reg.validation_status = first[0].status;
        reg.validation_errors = first[0].issues_json.clone();
        let second = compute_validation(&[reg]);
        assert!(!second[0].changed);
    }

    #[test]
    fn undecodable_raw_data_is_blocked() {
        let reg = registration(1, SourceType::Course, "a@example.com", json!({"oops": true}));
        let computed = compute_validation(&[reg]);

        assert_eq!(computed[0].status, ValidationStatus::Blocked);
        assert_eq!(computed[0].issues.len(), 1);
        assert_eq!(computed[0].issues[0].code, "RAW_DATA_INVALID");
    }
}

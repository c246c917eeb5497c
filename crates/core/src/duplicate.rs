//! Cross-source duplicate detection by normalized email.
//!
//! Detection is always global: it runs over the identity keys of every
//! record regardless of source type or any display filter. Records
//! without an email never group together.

use std::collections::{HashMap, HashSet};

use crate::normalize::normalize_email;
use crate::types::{DbId, IssueSeverity, ValidationIssue};
use crate::validation::DUPLICATE_EMAIL;

/// Return the ids of every record sharing a normalized email with at
/// least one other record.
///
/// Symmetric and transitive within a group: if three records share an
/// email, all three are flagged.
pub fn find_duplicate_ids(records: &[(DbId, Option<String>)]) -> HashSet<DbId> {
    let mut by_email: HashMap<String, Vec<DbId>> = HashMap::new();

    for (id, email) in records {
        let Some(email) = email else { continue };
        if email.trim().is_empty() {
            continue;
        }
        by_email.entry(normalize_email(email)).or_default().push(*id);
    }

    let mut duplicates = HashSet::new();
    for ids in by_email.values() {
        if ids.len() > 1 {
            duplicates.extend(ids.iter().copied());
        }
    }
    duplicates
}

/// Build the warning issue appended to a duplicate record's issue list.
pub fn duplicate_issue(email: Option<&str>) -> ValidationIssue {
    let message = match email {
        Some(email) => format!("Duplicate email detected: {email}."),
        None => "Duplicate record detected by email.".to_string(),
    };
    ValidationIssue::new(IssueSeverity::Warning, DUPLICATE_EMAIL, message, Some("email"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_all_members_of_a_group() {
        let records = vec![
            (1, Some("amara.diallo@email.com".to_string())),
            (2, Some("AMARA.DIALLO@EMAIL.COM ".to_string())),
            (3, Some("amara.diallo@email.com".to_string())),
            (4, Some("unique@example.com".to_string())),
        ];
        let dupes = find_duplicate_ids(&records);

        assert_eq!(dupes, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn null_emails_never_collide() {
        let records = vec![(1, None), (2, None), (3, Some("".to_string()))];
        assert!(find_duplicate_ids(&records).is_empty());
    }

    #[test]
    fn distinct_emails_produce_no_duplicates() {
        let records = vec![
            (1, Some("a@example.com".to_string())),
            (2, Some("b@example.com".to_string())),
        ];
        assert!(find_duplicate_ids(&records).is_empty());
    }

    #[test]
    fn duplicate_issue_names_the_email() {
        let issue = duplicate_issue(Some("amara.diallo@email.com"));
        assert_eq!(issue.code, DUPLICATE_EMAIL);
        assert_eq!(issue.severity, IssueSeverity::Warning);
        assert!(issue.message.contains("amara.diallo@email.com"));

        let generic = duplicate_issue(None);
        assert_eq!(generic.message, "Duplicate record detected by email.");
    }
}

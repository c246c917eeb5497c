//! Final status resolution over an explicit precedence lattice.
//!
//! BLOCKED > DUPLICATE > WARNING > VALID. Resolution is a max over
//! that order rather than nested conditionals, so adding a status later
//! cannot silently reorder precedence.

use crate::types::ValidationStatus;

/// Position of a status in the precedence lattice. Higher wins.
///
/// `Pending` ranks lowest: it is the pre-validation default and is
/// always replaced by a computed status.
pub fn precedence(status: ValidationStatus) -> u8 {
    match status {
        ValidationStatus::Pending => 0,
        ValidationStatus::Valid => 1,
        ValidationStatus::Warning => 2,
        ValidationStatus::Duplicate => 3,
        ValidationStatus::Blocked => 4,
    }
}

/// Combine the rule-engine status with the duplicate flag.
///
/// Validation errors dominate duplicate flags; a duplicate otherwise
/// overrides `Warning` and `Valid`.
pub fn resolve(base: ValidationStatus, is_duplicate: bool) -> ValidationStatus {
    let duplicate_status = if is_duplicate {
        ValidationStatus::Duplicate
    } else {
        ValidationStatus::Valid
    };

    if precedence(base) >= precedence(duplicate_status) {
        base
    } else {
        duplicate_status
    }
}

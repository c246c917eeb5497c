//! Phone, section, and email normalization.
//!
//! Pure string functions with no dependencies. These never fail and
//! never drop data: an unrecognized format passes through trimmed.

// ---------------------------------------------------------------------------
// Phone numbers
// ---------------------------------------------------------------------------

/// Normalize a North American phone number to E.164.
///
/// Strips all non-digit characters. Exactly 10 digits become
/// `+1<digits>`; exactly 11 digits starting with `1` become `+<digits>`.
/// Anything else is returned trimmed but otherwise unchanged.
pub fn normalize_phone(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        return Some(format!("+1{digits}"));
    }
    if digits.len() == 11 && digits.starts_with('1') {
        return Some(format!("+{digits}"));
    }
    Some(raw.trim().to_string())
}

// ---------------------------------------------------------------------------
// Section names
// ---------------------------------------------------------------------------

/// Known section-name variants, matched case-insensitively after trim.
const SECTION_ALIASES: &[(&str, &str)] = &[
    ("yyc", "Calgary"),
    ("yyc section", "Calgary"),
    ("calgary section", "Calgary"),
    ("calgary", "Calgary"),
    ("van", "Vancouver"),
    ("van section", "Vancouver"),
    ("victoria", "Victoria"),
    ("edmonton", "Edmonton"),
    ("whistler", "Whistler"),
    ("vancouver island", "Vancouver Island"),
];

/// Collapse known section-name variants to one canonical display name.
///
/// Unknown values pass through trimmed, preserving their original case.
pub fn normalize_section(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    let key = raw.trim().to_lowercase();
    let canonical = SECTION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, name)| (*name).to_string());

    Some(canonical.unwrap_or_else(|| raw.trim().to_string()))
}

// ---------------------------------------------------------------------------
// Emails
// ---------------------------------------------------------------------------

/// Normalize an email for identity comparison: trim + lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Phone ---------------------------------------------------------------

    #[test]
    fn phone_ten_digits_gets_plus_one() {
        assert_eq!(
            normalize_phone(Some("403-555-0101")).as_deref(),
            Some("+14035550101")
        );
        assert_eq!(
            normalize_phone(Some("(780) 555-0312")).as_deref(),
            Some("+17805550312")
        );
    }

    #[test]
    fn phone_eleven_digits_with_leading_one_gets_plus() {
        assert_eq!(
            normalize_phone(Some("+14035550203")).as_deref(),
            Some("+14035550203")
        );
        assert_eq!(
            normalize_phone(Some("+1 403 555 0654")).as_deref(),
            Some("+14035550654")
        );
    }

    #[test]
    fn phone_unknown_format_passes_through_trimmed() {
        assert_eq!(normalize_phone(Some("123")).as_deref(), Some("123"));
        assert_eq!(
            normalize_phone(Some("  +44 20 7946 0958  ")).as_deref(),
            Some("+44 20 7946 0958")
        );
    }

    #[test]
    fn phone_absent_is_none() {
        assert_eq!(normalize_phone(None), None);
        assert_eq!(normalize_phone(Some("")), None);
    }

    // -- Section -------------------------------------------------------------

    #[test]
    fn section_variants_collapse_to_calgary() {
        for variant in ["Calgary", "YYC Section", "YYC", "Calgary Section", " yyc "] {
            assert_eq!(
                normalize_section(Some(variant)).as_deref(),
                Some("Calgary"),
                "variant {variant:?} should normalize to Calgary"
            );
        }
    }

    #[test]
    fn section_vancouver_aliases() {
        assert_eq!(normalize_section(Some("van")).as_deref(), Some("Vancouver"));
        assert_eq!(
            normalize_section(Some("Van Section")).as_deref(),
            Some("Vancouver")
        );
        assert_eq!(
            normalize_section(Some("Vancouver Island")).as_deref(),
            Some("Vancouver Island")
        );
    }

    #[test]
    fn section_unknown_passes_through_trimmed() {
        assert_eq!(
            normalize_section(Some("  Squamish  ")).as_deref(),
            Some("Squamish")
        );
    }

    #[test]
    fn section_absent_is_none() {
        assert_eq!(normalize_section(None), None);
        assert_eq!(normalize_section(Some("")), None);
    }

    // -- Email ---------------------------------------------------------------

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(
            normalize_email("  Amara.Diallo@Email.com "),
            "amara.diallo@email.com"
        );
    }
}

//! Form validation run before any statement that changes the table.
//!
//! Checks stop at the first violation, in this order: ID present, ID numeric
//! (both only when an ID is required), name present, email format, phone
//! format. Every field is trimmed before it is checked.
//!
//! Trimming strips ASCII control characters and spaces only, and the email
//! pattern treats only ASCII whitespace as whitespace. A no-break space is
//! an ordinary character here.

use crate::libs::error::ValidationError;
use crate::libs::form::StudentForm;
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^@\t\n\x0B\x0C\r ]+@[^@\t\n\x0B\x0C\r ]+\.[^@\t\n\x0B\x0C\r ]+$";
const PHONE_PATTERN: &str = r"^[0-9]{7,15}$";

struct Patterns {
    email: Regex,
    phone: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        email: Regex::new(EMAIL_PATTERN).expect("Invalid email pattern"),
        phone: Regex::new(PHONE_PATTERN).expect("Invalid phone pattern"),
    })
}

/// Strips leading and trailing characters up to and including U+0020.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Validates the form for an add (`require_id == false`) or an update
/// (`require_id == true`).
pub fn validate_fields(form: &StudentForm, require_id: bool) -> Result<(), ValidationError> {
    if require_id {
        validate_id(form)?;
    }

    if trim_field(&form.name).is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let email = trim_field(&form.email);
    if !email.is_empty() && !patterns().email.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let phone = trim_field(&form.phone);
    if !phone.is_empty() && !patterns().phone.is_match(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// Checks only the ID field and returns it parsed. Used on its own by delete.
pub fn validate_id(form: &StudentForm) -> Result<i64, ValidationError> {
    let id = trim_field(&form.student_id);
    if id.is_empty() {
        return Err(ValidationError::IdRequired);
    }
    id.parse::<i64>().map_err(|_| ValidationError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        let form = StudentForm {
            name: "Alice".into(),
            phone: "١٢٣٤٥٦٧".into(),
            ..StudentForm::default()
        };
        assert_eq!(validate_fields(&form, false), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_trim_keeps_no_break_space() {
        assert_eq!(trim_field("\t Alice \r\n"), "Alice");
        assert_eq!(trim_field("\u{a0}Alice\u{a0}"), "\u{a0}Alice\u{a0}");
        assert_eq!(trim_field("\u{1}\u{1f} "), "");
    }

    #[test]
    fn test_id_is_trimmed() {
        let form = StudentForm {
            student_id: " 12 ".into(),
            ..StudentForm::default()
        };
        assert_eq!(validate_id(&form), Ok(12));
    }
}

use std::sync::OnceLock;

use regex::Regex;

pub const DEFAULT_PHONE_COLUMN: &str = "Phone Number";
pub const DEFAULT_NAME_COLUMN: &str = "Name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValidity {
    Valid,
    Invalid,
    Unchecked,
}

impl CellValidity {
    pub fn is_invalid(self) -> bool {
        matches!(self, CellValidity::Invalid)
    }
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\+91|0)?[6789][0-9]{9}$").expect("valid regex"))
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z\s]{2,}$").expect("valid regex"))
}

/// Indian mobile number, optionally prefixed with `+91` or `0`.
pub fn is_indian_phone_number(value: &str) -> bool {
    phone_regex().is_match(value)
}

pub fn is_name_valid(value: &str) -> bool {
    name_regex().is_match(value)
}

/// Which columns carry the phone and name checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRules {
    pub phone_column: String,
    pub name_column: String,
}

impl Default for ColumnRules {
    fn default() -> Self {
        Self {
            phone_column: DEFAULT_PHONE_COLUMN.to_string(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
        }
    }
}

impl ColumnRules {
    pub fn validate(&self, column: &str, value: &str) -> CellValidity {
        let checked = if column == self.phone_column {
            is_indian_phone_number(value)
        } else if column == self.name_column {
            is_name_valid(value)
        } else {
            return CellValidity::Unchecked;
        };
        if checked {
            CellValidity::Valid
        } else {
            CellValidity::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_plain_and_prefixed_numbers() {
        assert!(is_indian_phone_number("9876543210"));
        assert!(is_indian_phone_number("+919876543210"));
        assert!(is_indian_phone_number("09876543210"));
    }

    #[test]
    fn phone_rejects_short_or_bad_leading_digit() {
        assert!(!is_indian_phone_number("12345"));
        assert!(!is_indian_phone_number("5876543210"));
        assert!(!is_indian_phone_number("+91 9876543210"));
        assert!(!is_indian_phone_number(""));
    }

    #[test]
    fn name_needs_three_letters_or_spaces() {
        assert!(!is_name_valid("Jo"));
        assert!(is_name_valid("Joe"));
        assert!(is_name_valid("John Doe"));
        assert!(!is_name_valid(" John"));
        assert!(!is_name_valid("J0hn"));
    }

    #[test]
    fn rules_only_check_configured_columns() {
        let rules = ColumnRules::default();
        assert_eq!(rules.validate("Phone Number", "9876543210"), CellValidity::Valid);
        assert_eq!(rules.validate("Phone Number", "12345"), CellValidity::Invalid);
        assert_eq!(rules.validate("Name", "Jo"), CellValidity::Invalid);
        assert_eq!(rules.validate("Name", "John Doe"), CellValidity::Valid);
        assert_eq!(rules.validate("City", ""), CellValidity::Unchecked);
    }
}

use crate::error::{ContactError, ContactResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ContactResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Loose syntactic check: the address must contain both '@' and '.'.
pub fn email(value: &str) -> ContactResult<String> {
    if value.contains('@') && value.contains('.') {
        Ok(value.to_string())
    } else {
        Err(ContactError::InvalidEmail {
            email: value.to_string(),
        })
    }
}

/// Trims and lower-cases an email as typed.
pub fn clean_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Capitalizes every letter that follows a non-letter and lower-cases the
/// rest, so "mary-jane o'brien" becomes "Mary-Jane O'Brien". Runs of
/// whitespace collapse to a single space.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut prev_is_letter = false;
            let mut out = String::with_capacity(word.len());
            for c in word.chars() {
                if prev_is_letter {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                prev_is_letter = c.is_alphabetic();
            }
            out
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Strips spaces and hyphens, for comparing numbers only.
pub fn normalize_number(value: &str) -> String {
    value.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

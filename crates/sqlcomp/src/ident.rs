//! Identifier checks for names that are spliced into discovery SQL.
//!
//! Only unquoted, optionally dotted identifiers are accepted: every segment must
//! match `[A-Za-z_][A-Za-z0-9_$]*`.

use crate::error::{SqlError, SqlResult};

/// Validate a dotted identifier such as `public.get_columns`.
pub fn validate_ident(s: &str) -> SqlResult<()> {
    if s.is_empty() {
        return Err(SqlError::validation("Identifier cannot be empty"));
    }
    if s.ends_with('.') {
        return Err(SqlError::validation("Trailing '.' in identifier"));
    }
    for segment in s.split('.') {
        validate_segment(segment)?;
    }
    Ok(())
}

fn validate_segment(segment: &str) -> SqlResult<()> {
    let mut chars = segment.chars();
    match chars.next() {
        None => return Err(SqlError::validation("Empty identifier segment")),
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(c) => {
            return Err(SqlError::validation(format!(
                "Invalid identifier start character: '{c}'"
            )));
        }
    }
    if let Some(c) = chars.find(|&c| !(c == '_' || c == '$' || c.is_ascii_alphanumeric())) {
        return Err(SqlError::validation(format!(
            "Invalid character in identifier: '{c}'"
        )));
    }
    Ok(())
}

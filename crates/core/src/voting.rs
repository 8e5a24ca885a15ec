//! Voting domain constants and validation functions.
//!
//! Field bounds match the column widths in the `weeks`, `presentations`,
//! and `votes` tables. Validation runs before any database round trip so
//! over-long values are rejected as caller errors, not storage errors.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a week key (e.g. "2025-W42") in characters.
pub const MAX_WEEK_KEY_LENGTH: usize = 20;

/// Maximum length of a presentation title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a presenter name.
pub const MAX_PRESENTER_LENGTH: usize = 100;

/// Maximum length of a caller-supplied user identifier.
pub const MAX_USER_IDENTIFIER_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a week key: required, at most [`MAX_WEEK_KEY_LENGTH`] characters.
///
/// The key itself is opaque; no format is enforced beyond the length bound.
pub fn validate_week_key(week_id: &str) -> Result<(), String> {
    if week_id.is_empty() {
        return Err("week_id is required".to_string());
    }
    if week_id.chars().count() > MAX_WEEK_KEY_LENGTH {
        return Err(format!(
            "week_id must be at most {MAX_WEEK_KEY_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a presentation title: required, at most [`MAX_TITLE_LENGTH`]
/// characters.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!("title must be at most {MAX_TITLE_LENGTH} characters"));
    }
    Ok(())
}

/// Validate a presenter name: required, at most [`MAX_PRESENTER_LENGTH`]
/// characters.
pub fn validate_presenter(presenter: &str) -> Result<(), String> {
    if presenter.is_empty() {
        return Err("presenter is required".to_string());
    }
    if presenter.chars().count() > MAX_PRESENTER_LENGTH {
        return Err(format!(
            "presenter must be at most {MAX_PRESENTER_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a user identifier: required, at most
/// [`MAX_USER_IDENTIFIER_LENGTH`] characters. The value is otherwise opaque
/// (a browser fingerprint or session token, chosen by the caller).
pub fn validate_user_identifier(user_identifier: &str) -> Result<(), String> {
    if user_identifier.is_empty() {
        return Err("user_identifier is required".to_string());
    }
    if user_identifier.chars().count() > MAX_USER_IDENTIFIER_LENGTH {
        return Err(format!(
            "user_identifier must be at most {MAX_USER_IDENTIFIER_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

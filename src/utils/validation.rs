//! Client-side form validation
//!
//! These checks run before any remote call is issued; a failure here is a
//! validation error surfaced to the viewer, never sent to the server.

use std::sync::OnceLock;

use regex::Regex;

use crate::utils::errors::{Result, SocialPizzaError};

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
    })
}

/// Require a non-blank text field
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SocialPizzaError::InvalidInput(format!(
            "{} is required",
            field
        )));
    }
    Ok(())
}

/// Require a plausible mailbox shape
pub fn validate_email(email: &str) -> Result<()> {
    validate_required("Email", email)?;
    if !email_regex().is_match(email.trim()) {
        return Err(SocialPizzaError::InvalidInput(
            "Email is not valid".to_string(),
        ));
    }
    Ok(())
}

/// Passwords must be at least 6 characters
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < 6 {
        return Err(SocialPizzaError::InvalidInput(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

/// Validate the event-creation form before building the request payload.
///
/// Mirrors the organize form: title required, a restaurant and a category
/// must be chosen (0 means "not selected"), seats bounded to 2..=50.
pub fn validate_event_form(
    title: &str,
    restaurant_id: i64,
    category_id: i64,
    max_participants: i32,
) -> Result<()> {
    validate_required("Title", title)?;
    if restaurant_id <= 0 {
        return Err(SocialPizzaError::InvalidInput(
            "A restaurant must be selected".to_string(),
        ));
    }
    if category_id <= 0 {
        return Err(SocialPizzaError::InvalidInput(
            "A category must be selected".to_string(),
        ));
    }
    if !(2..=50).contains(&max_participants) {
        return Err(SocialPizzaError::InvalidInput(
            "Max participants must be between 2 and 50".to_string(),
        ));
    }
    Ok(())
}

/// Validate the admin new-restaurant form
pub fn validate_restaurant_form(
    name: &str,
    address: &str,
    city_id: Option<i64>,
    owner_id: Option<i64>,
) -> Result<()> {
    validate_required("Restaurant name", name)?;
    validate_required("Address", address)?;
    if city_id.is_none() {
        return Err(SocialPizzaError::InvalidInput(
            "A city must be selected".to_string(),
        ));
    }
    if owner_id.is_none() {
        return Err(SocialPizzaError::InvalidInput(
            "An owner must be selected".to_string(),
        ));
    }
    Ok(())
}

/// Validate the admin new-user form
pub fn validate_user_form(name: &str, surname: &str, email: &str, password: &str) -> Result<()> {
    validate_required("Name", name)?;
    validate_required("Surname", surname)?;
    validate_email(email)?;
    validate_password(password)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("mario.rossi@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_event_form() {
        assert!(validate_event_form("Serata Naruto", 2, 3, 10).is_ok());
        assert!(validate_event_form("", 2, 3, 10).is_err());
        assert!(validate_event_form("Serata Naruto", 0, 3, 10).is_err());
        assert!(validate_event_form("Serata Naruto", 2, 0, 10).is_err());
        assert!(validate_event_form("Serata Naruto", 2, 3, 1).is_err());
        assert!(validate_event_form("Serata Naruto", 2, 3, 51).is_err());
    }

    #[test]
    fn test_validate_restaurant_form() {
        assert!(validate_restaurant_form("Da Gino", "Via Roma 1", Some(1), Some(2)).is_ok());
        assert!(validate_restaurant_form("Da Gino", "Via Roma 1", None, Some(2)).is_err());
        assert!(validate_restaurant_form("Da Gino", "Via Roma 1", Some(1), None).is_err());
        assert!(validate_restaurant_form("", "Via Roma 1", Some(1), Some(2)).is_err());
    }
}

//! Field rules shared by every input type.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ServiceError;

pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

pub fn required_text(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.is_empty() {
        return Err(ServiceError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub fn optional_text(field: &str, value: Option<&String>) -> Result<(), ServiceError> {
    match value {
        Some(v) => required_text(field, v),
        None => Ok(()),
    }
}

pub fn order_index(value: i32) -> Result<(), ServiceError> {
    if value < 0 {
        return Err(ServiceError::validation("order_index", "must be a non-negative integer"));
    }
    Ok(())
}

pub fn optional_order_index(value: Option<i32>) -> Result<(), ServiceError> {
    value.map_or(Ok(()), order_index)
}

pub fn record_id(value: i32) -> Result<(), ServiceError> {
    if value <= 0 {
        return Err(ServiceError::validation("id", "must be a positive integer"));
    }
    Ok(())
}

/// Checked as sent; surrounding whitespace makes the address invalid.
pub fn email(field: &str, value: &str) -> Result<(), ServiceError> {
    let local = value.split('@').next().unwrap_or_default();
    if !EMAIL_RE.is_match(value) || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(ServiceError::validation(field, "must be a valid email address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rules() {
        assert!(required_text("title", "X").is_ok());
        assert!(required_text("title", "   ").is_ok());
        let err = required_text("title", "").unwrap_err();
        assert_eq!(err.field(), Some("title"));
        assert!(optional_text("title", None).is_ok());
        assert!(optional_text("title", Some(&String::new())).is_err());
    }

    #[test]
    fn numeric_rules() {
        assert!(order_index(0).is_ok());
        assert!(order_index(-1).is_err());
        assert!(optional_order_index(None).is_ok());
        assert!(record_id(1).is_ok());
        assert_eq!(record_id(0).unwrap_err().field(), Some("id"));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last+tag@mail.example.com", "x_y@sub-domain.io"] {
            assert!(email("email", ok).is_ok(), "{ok}");
        }
        for bad in [
            "", "plain", "a@b", "@b.com", "a@.com", "a@b.c", ".a@b.com", "a..b@c.com", "a b@c.com",
            "  a@b.co \n", " a@b.co", "a@b.co\n",
        ] {
            assert!(email("email", bad).is_err(), "{bad}");
        }
    }
}

// src/utils/validation.rs
use std::borrow::Cow;
use validator::ValidationError;

/// Normalize an email for storage: trim, lowercase, and check it against a
/// simple pattern. Returns the storable form.
pub fn normalize_email(raw: &str) -> Result<String, String> {
    let email = raw.trim().to_lowercase();

    let email_regex = regex::Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$")
        .map_err(|_| "Invalid email regex".to_string())?;

    if !email_regex.is_match(&email) {
        return Err("Email is invalid".to_string());
    }

    Ok(email)
}

/// Prices must be real, non-negative amounts. JSON cannot carry NaN or
/// infinity directly, but this also guards programmatic callers.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        let mut error = ValidationError::new("invalid_price");
        error.message = Some(Cow::from("Price must be a non-negative number"));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases() {
        assert_eq!(
            normalize_email("  Asha.Rao@Example.COM "),
            Ok("asha.rao@example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_email_rejects_malformed() {
        assert!(normalize_email("not-an-email").is_err());
        assert!(normalize_email("missing@tld").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("user@.com").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(499.5).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }
}

//! Email input constraints: a required field holding one address

pub const EMAIL_REQUIRED_MESSAGE: &str = "Please enter your email address";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Longest domain label allowed between dots
const MAX_LABEL_LEN: usize = 63;

/// Validate an email address, returning the message to show beside the field.
///
/// An empty string means the address is acceptable. Surrounding whitespace is
/// ignored. The shape is `local@domain`, where the local part uses the
/// characters a mail input accepts and the domain is one or more
/// dot-separated labels of ASCII letters, digits and inner hyphens.
pub fn validate_email(email: &str) -> &'static str {
    let email = email.trim();
    if email.is_empty() {
        return EMAIL_REQUIRED_MESSAGE;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return INVALID_EMAIL_MESSAGE;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return INVALID_EMAIL_MESSAGE;
    }
    if !domain.split('.').all(is_domain_label) {
        return INVALID_EMAIL_MESSAGE;
    }
    ""
}

/// Whether the address passes [`validate_email`]
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_empty()
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_required() {
        assert_eq!(validate_email(""), EMAIL_REQUIRED_MESSAGE);
        assert_eq!(validate_email("   "), EMAIL_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_well_formed_addresses_are_valid() {
        for email in [
            "a@b.com",
            "boris@borisboarman.com",
            "first.last+tag@mail.example.co.uk",
            "user@localhost",
            " padded@example.com ",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_malformed_addresses_are_rejected() {
        for email in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@exa mple.com",
            "user@-example.com",
            "user@example-.com",
            "user@example..com",
            "us er@example.com",
            "user@example.com.",
        ] {
            assert_eq!(
                validate_email(email),
                INVALID_EMAIL_MESSAGE,
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_long_domain_label_is_rejected() {
        let label = "a".repeat(MAX_LABEL_LEN + 1);
        assert!(!is_valid_email(&format!("user@{label}.com")));
        let label = "a".repeat(MAX_LABEL_LEN);
        assert!(is_valid_email(&format!("user@{label}.com")));
    }
}

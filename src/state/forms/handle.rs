//! Twitter handle rules: validation and profile-link derivation

/// Base URL that a handle (minus its `@`) is appended to
pub const PROFILE_BASE_URL: &str = "https://twitter.com/";

/// Longest name allowed after the `@`
pub const MAX_HANDLE_LEN: usize = 15;

pub const MISSING_AT_MESSAGE: &str = "Twitter handle must start with @";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid Twitter handle format";

/// Validate a handle, returning the message to show beside the field.
///
/// An empty string means the handle is acceptable; the field is optional so
/// empty input is always valid. Otherwise the handle must be `@` followed by
/// 1 to 15 ASCII letters, digits or underscores.
pub fn validate_handle(handle: &str) -> &'static str {
    if handle.is_empty() {
        return "";
    }
    let Some(name) = handle.strip_prefix('@') else {
        return MISSING_AT_MESSAGE;
    };
    let len = name.chars().count();
    if !(1..=MAX_HANDLE_LEN).contains(&len) || !name.chars().all(is_handle_char) {
        return INVALID_FORMAT_MESSAGE;
    }
    ""
}

/// Whether the handle passes [`validate_handle`]
pub fn is_valid_handle(handle: &str) -> bool {
    validate_handle(handle).is_empty()
}

fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Profile URL for an already-validated handle.
///
/// Returns an empty string for an empty handle or the bare `@`.
pub fn profile_url(handle: &str) -> String {
    if handle.is_empty() || handle == "@" {
        return String::new();
    }
    let name = handle.strip_prefix('@').unwrap_or(handle);
    format!("{PROFILE_BASE_URL}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validate {
        use super::*;

        #[test]
        fn test_empty_is_valid() {
            assert_eq!(validate_handle(""), "");
        }

        #[test]
        fn test_missing_at_is_rejected() {
            assert_eq!(validate_handle("alice"), MISSING_AT_MESSAGE);
            assert_eq!(validate_handle("boris@"), MISSING_AT_MESSAGE);
            assert_eq!(validate_handle(" @boris"), MISSING_AT_MESSAGE);
        }

        #[test]
        fn test_well_formed_handles_are_valid() {
            for handle in ["@boris_99", "@a", "@_", "@ABCdef123456789", "@Boris"] {
                assert_eq!(validate_handle(handle), "", "{handle} should be valid");
            }
        }

        #[test]
        fn test_bare_at_is_invalid_format() {
            assert_eq!(validate_handle("@"), INVALID_FORMAT_MESSAGE);
        }

        #[test]
        fn test_too_long_is_invalid_format() {
            assert_eq!(validate_handle("@this-is-way-too-long-1"), INVALID_FORMAT_MESSAGE);
            assert_eq!(validate_handle("@abcdefghijklmnop"), INVALID_FORMAT_MESSAGE);
        }

        #[test]
        fn test_fifteen_characters_is_the_limit() {
            assert_eq!(validate_handle("@abcdefghijklmno"), "");
            assert_eq!(validate_handle("@abcdefghijklmnop"), INVALID_FORMAT_MESSAGE);
        }

        #[test]
        fn test_disallowed_characters_are_invalid_format() {
            for handle in ["@bo-ris", "@bo ris", "@boris!", "@bóris", "@@boris", "@boris\n"] {
                assert_eq!(
                    validate_handle(handle),
                    INVALID_FORMAT_MESSAGE,
                    "{handle:?} should be rejected"
                );
            }
        }

        #[test]
        fn test_repeated_calls_agree() {
            for handle in ["", "@boris_99", "alice", "@bad-handle"] {
                let first = validate_handle(handle);
                for _ in 0..5 {
                    assert_eq!(validate_handle(handle), first);
                }
            }
        }

        #[test]
        fn test_is_valid_handle() {
            assert!(is_valid_handle(""));
            assert!(is_valid_handle("@boris"));
            assert!(!is_valid_handle("boris"));
            assert!(!is_valid_handle("@"));
        }
    }

    mod profile_link {
        use super::*;

        #[test]
        fn test_empty_has_no_link() {
            assert_eq!(profile_url(""), "");
        }

        #[test]
        fn test_bare_at_has_no_link() {
            assert_eq!(profile_url("@"), "");
        }

        #[test]
        fn test_link_strips_at() {
            let url = profile_url("@boris");
            assert_eq!(url, "https://twitter.com/boris");
            assert!(url.ends_with("boris"));
        }
    }
}

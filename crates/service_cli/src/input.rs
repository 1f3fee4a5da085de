//! Parsing of user-supplied numbers and option kinds.
//!
//! Shared by the interactive prompts and the `price` subcommand so both
//! accept exactly the same tokens.

use pricer_core::types::OptionKind;

/// Printed when a numeric prompt receives something that is not a number.
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid double number.";

/// Printed when the option-type prompt receives something other than c or p.
pub const INVALID_KIND: &str = "Invalid input. Please enter 'c' for call or 'p' for put.";

/// Parses a finite decimal number.
///
/// The whole token must be consumed after trimming surrounding whitespace.
/// Empty input, trailing characters, `nan` and infinities are rejected.
///
/// # Examples
/// ```
/// use service_cli::input::parse_number;
///
/// assert_eq!(parse_number(" 100.5 "), Some(100.5));
/// assert_eq!(parse_number("1e-3"), Some(0.001));
/// assert_eq!(parse_number("100abc"), None);
/// assert_eq!(parse_number("inf"), None);
/// ```
pub fn parse_number(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses an option kind: `c`/`call` or `p`/`put`, case-insensitive.
pub fn parse_kind(token: &str) -> Option<OptionKind> {
    token.parse().ok()
}

/// `clap` value parser wrapping [`parse_number`].
pub fn number_arg(token: &str) -> Result<f64, String> {
    parse_number(token).ok_or_else(|| format!("'{}' is not a finite number", token))
}

/// Returns `true` for the tokens that end an interactive session.
pub fn is_quit(token: &str) -> bool {
    matches!(token.trim().to_lowercase().as_str(), "q" | "quit" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_decimal_forms() {
        assert_eq!(parse_number("100"), Some(100.0));
        assert_eq!(parse_number("0.05"), Some(0.05));
        assert_eq!(parse_number("-0.01"), Some(-0.01));
        assert_eq!(parse_number("+2.5"), Some(2.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("2.5E2"), Some(250.0));
        assert_eq!(parse_number("\t42\n"), Some(42.0));
    }

    #[test]
    fn test_parse_number_requires_full_consumption() {
        for token in ["", "   ", "abc", "100abc", "1.2.3", "10 20", "0x10", "1,5"] {
            assert_eq!(parse_number(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        for token in ["nan", "NaN", "inf", "-inf", "infinity", "1e400"] {
            assert_eq!(parse_number(token), None, "token {:?}", token);
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("c"), Some(OptionKind::Call));
        assert_eq!(parse_kind("P"), Some(OptionKind::Put));
        assert_eq!(parse_kind(" call "), Some(OptionKind::Call));
        assert_eq!(parse_kind("put"), Some(OptionKind::Put));
        assert_eq!(parse_kind("x"), None);
        assert_eq!(parse_kind(""), None);
        assert_eq!(parse_kind("cp"), None);
    }

    #[test]
    fn test_number_arg_message() {
        assert_eq!(number_arg("1.5"), Ok(1.5));
        assert_eq!(
            number_arg("abc"),
            Err("'abc' is not a finite number".to_string())
        );
    }

    #[test]
    fn test_is_quit() {
        assert!(is_quit("q"));
        assert!(is_quit(" QUIT "));
        assert!(is_quit("exit"));
        assert!(!is_quit("c"));
        assert!(!is_quit("100"));
    }
}

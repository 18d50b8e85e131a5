//! Total conversions from submitted text to numbers.
//!
//! Every function here is defined for every input string, including empty
//! and malformed ones. Nothing panics and nothing returns an error: inputs
//! that do not look like numbers coerce to zero, and values outside the
//! target range saturate.

use std::sync::LazyLock;

use regex::Regex;

/// A complete numeric string: optional sign, integer or decimal digits,
/// optional exponent. Surrounding whitespace is tolerated.
///
/// Digits and whitespace are ASCII only, so every match parses as `f64`.
const NUMERIC_PATTERN: &str =
    r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$";

/// The longest numeric prefix of a string, after leading whitespace.
const NUMERIC_PREFIX_PATTERN: &str =
    r"^[ \t\n\r\x0B\x0C]*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)";

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERIC_PATTERN).expect("valid regex"));

static NUMERIC_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERIC_PREFIX_PATTERN).expect("valid regex"));

/// True when `value` is non-empty and made only of ASCII decimal digits.
///
/// Signs, decimal points and whitespace are all rejected.
pub fn is_whole_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// True when `value` is a numeric string such as `19.99`, `-3`, `.5` or `1e3`.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_RE.is_match(value)
}

/// Coerce arbitrary text to an integer.
///
/// Takes the leading numeric prefix (after whitespace) and truncates it
/// toward zero. Text without a numeric prefix coerces to `0`.
///
/// ```
/// use gamecat_core::coerce::coerce_int;
/// assert_eq!(coerce_int("42"), 42);
/// assert_eq!(coerce_int("12abc"), 12);
/// assert_eq!(coerce_int("notanumber"), 0);
/// ```
pub fn coerce_int(value: &str) -> i64 {
    let Some(prefix) = NUMERIC_PREFIX_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return 0;
    };

    let digits = prefix.trim_start_matches(['+', '-']);
    if is_whole_number(digits) {
        let negative = prefix.starts_with('-');
        return match prefix.parse::<i64>() {
            Ok(n) => n,
            Err(_) if negative => i64::MIN,
            Err(_) => i64::MAX,
        };
    }

    // Decimal or exponent form. `as` truncates toward zero and saturates.
    prefix.parse::<f64>().map(|f| f as i64).unwrap_or(0)
}

/// Parse a string of ASCII digits, saturating at `i64::MAX`.
///
/// Callers check [`is_whole_number`] first; anything else yields `0`.
pub fn parse_whole_number(value: &str) -> i64 {
    if !is_whole_number(value) {
        return 0;
    }
    value.parse::<i64>().unwrap_or(i64::MAX)
}

/// Parse a numeric string as `f64`.
///
/// Callers check [`is_numeric`] first; anything else yields `0.0`.
pub fn parse_number(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

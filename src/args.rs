//! Numeric argument helpers for command handlers.
//!
//! Both parsers are lenient in the way C's `strtoll` / `strtod` are: leading
//! spaces are skipped and parsing stops at the first character that cannot
//! continue the number, so `"42abc"` reads as `42`. They return `None` only
//! when no digits are found at all or the value does not fit.
//!
//! ```rust
//! use tinyshell::args::{parse_double, parse_long_long};
//!
//! fn addint(argc: usize, argv: &[&str]) -> i32 {
//!     if argc < 3 {
//!         return -1;
//!     }
//!     let a = parse_long_long(argv[1]).unwrap_or(0);
//!     let b = parse_long_long(argv[2]).unwrap_or(0);
//!     println!("{}", a + b);
//!     0
//! }
//!
//! assert_eq!(parse_long_long("  -0x1F"), Some(-31));
//! assert_eq!(parse_double("2.5e1V"), Some(25.0));
//! # addint(3, &["addint", "1", "2"]);
//! ```

fn skip_spaces(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ' ' || c == '\t')
}

/// Parse a leading signed integer, decimal or `0x`-prefixed hexadecimal.
pub fn parse_long_long(arg: &str) -> Option<i64> {
    let s = skip_spaces(arg).as_bytes();

    let (negative, s) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s {
        [b'0', b'x' | b'X', rest @ ..] if rest.first().is_some_and(u8::is_ascii_hexdigit) => {
            (16, rest)
        }
        _ => (10, s),
    };

    let digits = s
        .iter()
        .take_while(|&&b| (b as char).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }

    // Accumulate as a negative number so i64::MIN stays representable.
    let mut value: i64 = 0;
    for &b in &s[..digits] {
        let digit = (b as char).to_digit(radix)? as i64;
        value = value.checked_mul(radix as i64)?.checked_sub(digit)?;
    }

    if negative { Some(value) } else { value.checked_neg() }
}

/// Parse a leading decimal floating-point number with optional fraction and
/// exponent.
pub fn parse_double(arg: &str) -> Option<f64> {
    let s = skip_spaces(arg);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'-' | b'+')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

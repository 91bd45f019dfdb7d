use crate::{Decimal, Error};

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Validates `input` against the grammar `-?\d+(\.\d*)?` and splits it into
/// sign, integer digits and fraction digits in a single pass over the raw
/// bytes. The digit buffers are normalized by [`Decimal::from_parts`].
pub(crate) fn parse_str(input: &str) -> Result<Decimal, Error> {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return Err(Error::Empty);
    }
    let (negative, bytes) = match bytes {
        [b'-', rest @ ..] => (true, rest),
        _ => (false, bytes),
    };

    let mut integer = Vec::with_capacity(bytes.len());
    let mut fraction = Vec::new();
    let mut seen_point = false;
    for &b in bytes {
        match b {
            b'0'..=b'9' => {
                if seen_point {
                    fraction.push(b - b'0');
                } else {
                    integer.push(b - b'0');
                }
            }
            b'.' if !seen_point => {
                if integer.is_empty() {
                    return Err(Error::MissingDigits);
                }
                seen_point = true;
            }
            b'.' => return Err(Error::TwoDecimalPoints),
            _ => return Err(Error::InvalidCharacter(char::from(b))),
        }
    }
    if integer.is_empty() {
        return Err(Error::MissingDigits);
    }

    Ok(Decimal::from_parts(negative, integer, fraction))
}

// Canonical form without formatter flags, for serialization purposes.
pub(crate) fn to_str_internal(value: &Decimal) -> String {
    let integer = value.integer_digits();
    let fraction = value.fraction_digits();
    let mut rep = String::with_capacity(integer.len() + fraction.len() + 2);
    if value.is_sign_negative() {
        rep.push('-');
    }
    for &d in integer {
        rep.push(char::from(b'0' + d));
    }
    if !fraction.is_empty() {
        rep.push('.');
        for &d in fraction {
            rep.push(char::from(b'0' + d));
        }
    }
    rep
}

impl fmt::Display for Decimal {
    /// Renders the canonical form: `-` only for negative values (zero is
    /// never negative), integer digits, and a `.` plus fraction digits only
    /// when the fraction is non-empty. An explicit formatter precision
    /// zero-pads or truncates the fraction without rounding; width, fill
    /// and alignment follow the standard integral rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = self.fraction_digits();
        let precision = f.precision().unwrap_or(fraction.len());

        let mut rep = String::with_capacity(self.integer_digits().len() + precision + 1);
        for &d in self.integer_digits() {
            rep.push(char::from(b'0' + d));
        }
        if precision > 0 {
            rep.push('.');
            for i in 0..precision {
                let d = fraction.get(i).copied().unwrap_or(0);
                rep.push(char::from(b'0' + d));
            }
        }

        f.pad_integral(self.is_sign_positive(), "", &rep)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    #[inline]
    fn from_str(value: &str) -> Result<Decimal, Error> {
        parse_str(value)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = Error;

    #[inline]
    fn try_from(value: &str) -> Result<Decimal, Error> {
        parse_str(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn parses_integer_strings() {
        assert_eq!("233", parse_str("233").unwrap().to_string());
        assert_eq!("-233", parse_str("-233").unwrap().to_string());
        assert_eq!("0", parse_str("0").unwrap().to_string());
    }

    #[test]
    fn parses_fractional_strings() {
        assert_eq!("233.323223", parse_str("233.323223").unwrap().to_string());
        assert_eq!("-0.000001", parse_str("-0.000001").unwrap().to_string());
    }

    #[test]
    fn strips_insignificant_zeros() {
        assert_eq!("7", parse_str("007").unwrap().to_string());
        assert_eq!("7.1", parse_str("7.100").unwrap().to_string());
        assert_eq!("0.5", parse_str("000.500").unwrap().to_string());
    }

    #[test]
    fn parses_trailing_point_as_integer() {
        // The grammar allows a point followed by zero fraction digits.
        assert_eq!("5", parse_str("5.").unwrap().to_string());
    }

    #[test]
    fn normalizes_negative_zero_spellings() {
        for input in ["-0", "-0.", "-0.000", "-000"] {
            let parsed = parse_str(input).unwrap();
            assert!(parsed.is_sign_positive(), "{input} should normalize to +0");
            assert_eq!("0", parsed.to_string());
        }
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(parse_str(""), Err(Error::Empty));
        assert_eq!(parse_str("-"), Err(Error::MissingDigits));
        assert_eq!(parse_str("."), Err(Error::MissingDigits));
        assert_eq!(parse_str(".5"), Err(Error::MissingDigits));
        assert_eq!(parse_str("-.5"), Err(Error::MissingDigits));
        assert_eq!(parse_str("1.2.3"), Err(Error::TwoDecimalPoints));
        assert_eq!(parse_str("--1"), Err(Error::InvalidCharacter('-')));
        assert_eq!(parse_str("1-2"), Err(Error::InvalidCharacter('-')));
        assert_eq!(parse_str("+1"), Err(Error::InvalidCharacter('+')));
        assert_eq!(parse_str("abc"), Err(Error::InvalidCharacter('a')));
        assert_eq!(parse_str("12a"), Err(Error::InvalidCharacter('a')));
        assert_eq!(parse_str("1 2"), Err(Error::InvalidCharacter(' ')));
    }

    #[test]
    fn display_honors_precision_without_rounding() {
        let num = parse_str("1.2").unwrap();
        assert_eq!("1.200", format!("{num:.3}"));
        assert_eq!("1", format!("{num:.0}"));

        let num = parse_str("-3.456").unwrap();
        assert_eq!("-3.45", format!("{num:.2}"));
        assert_eq!("-3", format!("{num:.0}"));
    }

    #[test]
    fn display_honors_width_and_fill() {
        let num = parse_str("-1.5").unwrap();
        assert_eq!("  -1.5", format!("{num:>6}"));
        assert_eq!("-001.5", format!("{num:06}"));
    }
}

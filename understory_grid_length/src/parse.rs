// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation and parsing of single grid-length values.
//!
//! Both entry points run the same classification, so they only disagree
//! where documented: a trailing `*` after something that is not a number.

use core::str::FromStr;

use crate::error::ParseGridLengthError;
use crate::length::{GridLength, LengthUnit};

/// The shape of a grid-length string, in the order the branches are tried.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Token {
    /// A number followed by a unit suffix. `number` is still in `unit`.
    Qualified { number: f64, unit: LengthUnit },
    /// A trailing `*`. `weight` is `None` when the prefix is not a number.
    Star { weight: Option<f64> },
    /// `auto` in any ASCII case, or `!`.
    Auto,
    /// A bare number of pixels.
    Plain(f64),
    Invalid,
}

impl Token {
    fn is_valid(self) -> bool {
        match self {
            Self::Star { weight } => weight.is_some(),
            Self::Invalid => false,
            _ => true,
        }
    }

    /// The length this token denotes; a star with an unreadable weight counts as one star.
    fn to_length(self) -> Option<GridLength> {
        match self {
            Self::Qualified { number, unit } => Some(GridLength::pixels(unit.to_pixels(number))),
            Self::Star { weight } => Some(GridLength::stars(weight.unwrap_or(1.0))),
            Self::Auto => Some(GridLength::AUTO),
            Self::Plain(value) => Some(GridLength::pixels(value)),
            Self::Invalid => None,
        }
    }
}

fn classify(value: &str) -> Token {
    if let Some((number, unit)) = split_unit(value) {
        return Token::Qualified { number, unit };
    }
    if let Some(prefix) = value.strip_suffix('*') {
        let weight = if prefix.is_empty() {
            Some(1.0)
        } else {
            parse_number(prefix)
        };
        return Token::Star { weight };
    }
    if value.eq_ignore_ascii_case("auto") || value == "!" {
        return Token::Auto;
    }
    parse_number(value).map_or(Token::Invalid, Token::Plain)
}

/// Splits `value` into a number and the two-character unit suffix after it.
fn split_unit(value: &str) -> Option<(f64, LengthUnit)> {
    let split = value.len().checked_sub(2)?;
    // `get` refuses to split inside a multi-byte character.
    let unit = LengthUnit::from_suffix(value.get(split..)?)?;
    let number = parse_number(value.get(..split)?)?;
    Some((number, unit))
}

/// Parses a culture-invariant decimal: surrounding whitespace, an optional
/// `+`, then digits with at most one `.`. No `-`, exponent or grouping.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| matches!(c, ' ' | '\t'..='\r'));
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return None;
    }
    unsigned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns `true` if `value` is written in the grid-length grammar.
///
/// Accepted forms are a number with a `px`, `in`, `cm` or `pt` suffix, `*`,
/// a number followed by `*`, `auto` in any ASCII case, `!`, and a bare number.
/// Numbers use `.` as the decimal point, may be surrounded by whitespace and
/// prefixed with `+`, and have no `-`, exponent or grouping separators.
///
/// This is stricter than [`parse_grid_length`] for star lengths: `"d*"` is
/// rejected here but parses as one star there. Use [`str::parse`] for a
/// parser that agrees with this function.
///
/// ```rust
/// use understory_grid_length::is_valid_grid_length;
///
/// assert!(is_valid_grid_length("2.5*"));
/// assert!(is_valid_grid_length("AUTO"));
/// assert!(is_valid_grid_length("20.2cm"));
/// assert!(!is_valid_grid_length("20.5kg"));
/// assert!(!is_valid_grid_length("d*"));
/// assert!(!is_valid_grid_length("   "));
/// ```
#[must_use]
pub fn is_valid_grid_length(value: &str) -> bool {
    classify(value).is_valid()
}

/// Parses a grid length.
///
/// Branches are tried in a fixed order: a number with a unit suffix (converted
/// to pixels at 96 per inch), a trailing `*`, the `auto`/`!` keywords, then a
/// bare number of pixels.
///
/// The star branch is lenient: any string ending in `*` parses, and a prefix
/// that is not a number gives a weight of one. [`is_valid_grid_length`] and
/// the [`FromStr`] impl on [`GridLength`] reject those strings.
///
/// ```rust
/// use understory_grid_length::{GridLength, parse_grid_length};
///
/// assert_eq!(parse_grid_length("2*"), Ok(GridLength::stars(2.0)));
/// assert_eq!(parse_grid_length("20.5in"), Ok(GridLength::pixels(1968.0)));
/// assert_eq!(parse_grid_length("!"), Ok(GridLength::AUTO));
/// assert_eq!(parse_grid_length("d*"), Ok(GridLength::STAR));
/// assert!(parse_grid_length("?").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ParseGridLengthError`], carrying `value`, when no branch matches.
pub fn parse_grid_length(value: &str) -> Result<GridLength, ParseGridLengthError> {
    classify(value)
        .to_length()
        .ok_or_else(|| ParseGridLengthError::new(value))
}

/// Parses only what [`is_valid_grid_length`] accepts.
impl FromStr for GridLength {
    type Err = ParseGridLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Some(classify(s))
            .filter(|token| token.is_valid())
            .and_then(Token::to_length)
            .ok_or_else(|| ParseGridLengthError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_invariant_decimals() {
        assert_eq!(parse_number("20"), Some(20.0));
        assert_eq!(parse_number("42.9"), Some(42.9));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));

        for text in [
            "", " ", "\t\n", ".", "+", " + ", "-1", "++1", "+-1", "+ 1", "1 2", "1,000", "1.2.3",
            "1e3", "inf", "NaN", "0x10",
        ] {
            assert_eq!(parse_number(text), None, "{text:?} should not be a number");
        }
    }

    #[test]
    fn numbers_allow_surrounding_whitespace_and_plus() {
        assert_eq!(parse_number(" 1"), Some(1.0));
        assert_eq!(parse_number("1 "), Some(1.0));
        assert_eq!(parse_number("\t2.5\r\n"), Some(2.5));
        assert_eq!(parse_number("+5"), Some(5.0));
        assert_eq!(parse_number(" +.5 "), Some(0.5));
    }

    #[test]
    fn whitespace_around_a_star_weight_keeps_the_weight() {
        assert_eq!(classify("\n2*"), Token::Star { weight: Some(2.0) });
        assert_eq!(classify("\t2 *"), Token::Star { weight: Some(2.0) });
        assert_eq!(classify(" *"), Token::Star { weight: None });
    }

    #[test]
    fn overflowing_numerals_are_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(parse_number(&huge), None);
    }

    #[test]
    fn unit_suffix_wins_over_other_branches() {
        assert_eq!(
            classify("3pt"),
            Token::Qualified {
                number: 3.0,
                unit: LengthUnit::Pt
            }
        );
        assert_eq!(classify("px"), Token::Invalid);
        assert_eq!(classify("*px"), Token::Invalid);
        assert_eq!(classify("1PX"), Token::Invalid);
    }

    #[test]
    fn star_prefix_is_optional_for_parsing_only() {
        assert_eq!(classify("*"), Token::Star { weight: Some(1.0) });
        assert_eq!(classify("2.5*"), Token::Star { weight: Some(2.5) });
        assert_eq!(classify("d*"), Token::Star { weight: None });
        assert_eq!(classify("**"), Token::Star { weight: None });
        assert!(!Token::Star { weight: None }.is_valid());
        assert_eq!(
            Token::Star { weight: None }.to_length(),
            Some(GridLength::STAR)
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(classify("auto"), Token::Auto);
        assert_eq!(classify("AuTo"), Token::Auto);
        assert_eq!(classify("!"), Token::Auto);
        assert_eq!(classify("autos"), Token::Invalid);
        assert_eq!(classify("!!"), Token::Invalid);
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!(!is_valid_grid_length("é"));
        assert!(!is_valid_grid_length("1é"));
        assert!(!is_valid_grid_length("1€"));
        assert!(parse_grid_length("∞px").is_err());
    }

    #[test]
    fn strict_parse_rejects_unreadable_star_weights() {
        assert_eq!("d*".parse::<GridLength>(), Err(ParseGridLengthError::new("d*")));
        assert_eq!("*".parse::<GridLength>(), Ok(GridLength::STAR));
        assert_eq!("2*".parse::<GridLength>(), Ok(GridLength::stars(2.0)));
    }
}

//! Decimal text form: `[-]D.DDD[E[-]N]`, trailing zeros trimmed and no
//! exponent suffix when it is zero. Also `NaN`, `Infinity`, `-Infinity`.

use crate::bigfloat::BigFloat;
use crate::error::Error;
use crate::outcome::Outcome;
use crate::ubigint::UBigInt;
use crate::word::{char_to_digit, Word};
use core::fmt;
use core::str::FromStr;

/// Digits are produced nine at a time, one multiply by `10^9` per block.
pub const DIGIT_BLOCK: Word = 1_000_000_000;
pub const DIGIT_BLOCK_LEN: usize = 9;

/// Passes of the rescaling fix-up before giving up on a decimal form.
const MAX_SCALE_ADJUST: usize = 4;

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// Significant decimal digits the formatter emits. A few guard bits are
    /// held back to absorb the rounding of the power-of-ten rescaling.
    pub fn decimal_digits() -> usize {
        let bits = Self::MANTISSA_BITS.saturating_sub(8 + M as u32);
        ((bits as f64 * core::f64::consts::LOG10_2) as usize).max(1)
    }

    /// Digits the parser accumulates: `10^max` still fits the mantissa.
    fn max_parsed_digits() -> usize {
        (Self::MANTISSA_BITS as f64 * core::f64::consts::LOG10_2) as usize
    }

    /// `self *= 10^p` in two halves, so each power stays far from the
    /// exponent limits. This rounds twice; the guard digit covers the extra
    /// half ulp.
    fn scale_pow10(&mut self, p: i64) -> Outcome {
        let magnitude = p.unsigned_abs();
        let half = magnitude / 2;
        let mut outcome = Outcome::Ok;
        for part in [half, magnitude - half] {
            if part == 0 {
                continue;
            }
            let (factor, o) = Self::pow10(part);
            outcome = outcome.and(o);
            let scaled = if p < 0 { self.divide(&factor) } else { self.multiply(&factor) };
            outcome = outcome.and(scaled);
        }
        outcome
    }

    /// Significant digits and the decimal exponent of a positive finite
    /// value, or `None` when it cannot be rescaled into `[1, 10)`.
    fn decimal_digits_of(&self, limit: usize) -> Option<(Vec<u8>, i64)> {
        let e = self.exponent.to_i64()?;
        let mut p = (e as f64 * core::f64::consts::LOG10_2).floor() as i64;

        let mut v = *self;
        v.abs();
        if !v.scale_pow10(-p).is_ok() {
            return None;
        }

        let ten = Self::from_u32(10);
        for _ in 0..MAX_SCALE_ADJUST {
            if v >= ten {
                v.divide(&ten);
                p += 1;
            } else if v < Self::one() {
                v.multiply(&ten);
                p -= 1;
            } else {
                break;
            }
        }
        let first = v.to_u32().filter(|d| (1..=9).contains(d))?;

        let mut digits = Vec::with_capacity(limit + DIGIT_BLOCK_LEN + 1);
        digits.push(first as u8);
        v.subtract(&Self::from_u32(first));
        while digits.len() <= limit && !v.is_zero() {
            v.multiply_word(DIGIT_BLOCK);
            let block = v.to_u32().unwrap_or(0).min(DIGIT_BLOCK - 1);
            v.subtract(&Self::from_u32(block));
            let mut divisor = DIGIT_BLOCK / 10;
            while divisor > 0 {
                digits.push((block / divisor % 10) as u8);
                divisor /= 10;
            }
        }

        // one guard digit decides the rounding, half up
        if digits.len() > limit {
            let round = digits[limit] >= 5;
            digits.truncate(limit);
            if round {
                match digits.iter().rposition(|&d| d != 9) {
                    Some(i) => {
                        digits[i] += 1;
                        digits.truncate(i + 1);
                    }
                    None => {
                        digits = vec![1];
                        p += 1;
                    }
                }
            }
        }
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        Some((digits, p))
    }

    /// Decimal form with at most `limit` significant digits.
    fn to_decimal_string_with(&self, limit: usize) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }
        let sign = if self.is_negative() { "-" } else { "" };
        if self.is_infinite() {
            return format!("{sign}Infinity");
        }
        if self.is_zero() {
            return "0".to_string();
        }

        let (digits, p) = match self.decimal_digits_of(limit.max(1)) {
            Some(dp) => dp,
            // exponents beyond i64 only fit the exact binary form
            None => return format!("{sign}0x{}p{}", self.mantissa.to_hex(), self.exponent),
        };

        let mut out = String::with_capacity(digits.len() + 24);
        out.push_str(sign);
        out.push(char::from(b'0' + digits[0]));
        if digits.len() > 1 {
            out.push('.');
            out.extend(digits[1..].iter().map(|&d| char::from(b'0' + d)));
        }
        if p != 0 {
            out.push_str(&format!("E{p}"));
        }
        out
    }

    pub fn to_decimal_string(&self) -> String {
        self.to_decimal_string_with(Self::decimal_digits())
    }

    /// Parses `[+-]digits[.digits][(E|e)[+-]digits]`, `NaN`, `inf` or
    /// `Infinity`. Digits past what the mantissa resolves are ignored;
    /// decimal exponents that overflow the float saturate.
    pub fn parse_decimal(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }

        let (negative, body, offset) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..], 1),
            b'+' => (false, &s[1..], 1),
            _ => (false, s, 0),
        };
        if body.eq_ignore_ascii_case("nan") {
            return Ok(Self::nan());
        }
        if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
            return Ok(Self::infinity(negative));
        }

        let max_digits = Self::max_parsed_digits();
        let mut coefficient = UBigInt::<M>::zero();
        let mut kept = 0;
        let mut seen_digit = false;
        let mut in_fraction = false;
        let mut dec_exp: i64 = 0;
        let mut explicit_exp: Option<i64> = None;

        let mut chars = body.chars().enumerate().map(|(i, c)| (i + offset, c));
        while let Some((position, c)) = chars.next() {
            match c {
                '0'..='9' => {
                    let d = c as Word - '0' as Word;
                    seen_digit = true;
                    if kept < max_digits {
                        if d != 0 || !coefficient.is_zero() {
                            coefficient.multiply_small(10);
                            coefficient.add_word(d);
                            kept += 1;
                        }
                        if in_fraction {
                            dec_exp -= 1;
                        }
                    } else if !in_fraction {
                        dec_exp += 1;
                    }
                }
                '.' if !in_fraction => in_fraction = true,
                'e' | 'E' => {
                    explicit_exp = Some(Self::parse_exponent(&mut chars)?);
                    break;
                }
                _ => return Err(Error::InvalidDigit { position, found: c }),
            }
        }
        if !seen_digit {
            return Err(Error::MalformedNumber("no digits"));
        }

        let p = dec_exp.checked_add(explicit_exp.unwrap_or(0)).ok_or(Error::OutOfRange)?;
        let mut v = Self::from_ubig(&coefficient);
        if !v.is_zero() && p != 0 {
            let outcome = v.scale_pow10(p);
            if !outcome.is_ok() {
                log::debug!("decimal exponent {p} saturates BigFloat<{M}, {E}>: {outcome}");
            }
        }
        v.set_negative(negative);
        Ok(v)
    }

    fn parse_exponent(chars: &mut impl Iterator<Item = (usize, char)>) -> Result<i64, Error> {
        let mut negative = false;
        let mut seen_digit = false;
        let mut exp: i64 = 0;
        for (i, (position, c)) in chars.enumerate() {
            match c {
                '-' | '+' if i == 0 => negative = c == '-',
                _ => {
                    let d = match char_to_digit(c) {
                        Some(d) if d < 10 => d as i64,
                        _ => return Err(Error::InvalidDigit { position, found: c }),
                    };
                    seen_digit = true;
                    exp = exp
                        .checked_mul(10)
                        .and_then(|e| e.checked_add(d))
                        .ok_or(Error::OutOfRange)?;
                }
            }
        }
        if !seen_digit {
            return Err(Error::MalformedNumber("missing exponent digits"));
        }
        Ok(if negative { -exp } else { exp })
    }
}

impl<const M: usize, const E: usize> fmt::Display for BigFloat<M, E> {
    /// A precision sets the number of digits after the decimal point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = match f.precision() {
            Some(precision) => (precision + 1).min(Self::decimal_digits()),
            None => Self::decimal_digits(),
        };
        f.write_str(&self.to_decimal_string_with(limit))
    }
}

impl<const M: usize, const E: usize> fmt::Debug for BigFloat<M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_finite() || self.is_zero() {
            return write!(f, "BigFloat<{M}, {E}>({self})");
        }
        f.debug_struct(&format!("BigFloat<{M}, {E}>"))
            .field("negative", &self.is_negative())
            .field("exponent", &self.exponent)
            .field("mantissa", &self.mantissa)
            .finish()
    }
}

impl<const M: usize, const E: usize> FromStr for BigFloat<M, E> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_decimal(s)
    }
}

#[cfg(test)]
mod test {
    use crate::bigfloat::{BigFloat, Float128, Float256};
    use crate::error::Error;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_round_trip_small_exponent() {
        let v: Float256 = "1.2345678E-50".parse().unwrap();
        assert_eq!(v.to_string(), "1.2345678E-50");

        let v: Float256 = "-98765.4321e+120".parse().unwrap();
        assert_eq!(v.to_string(), "-9.87654321E124");
    }

    #[test]
    fn test_format() {
        assert_eq!(Float128::zero().to_string(), "0");
        assert_eq!(Float128::one().to_string(), "1");
        assert_eq!(Float128::from_u32(12345).to_string(), "1.2345E4");
        assert_eq!(Float128::from_i32(-25).to_string(), "-2.5E1");
        assert_eq!(Float128::from_f64(0.5).to_string(), "5E-1");
        assert_eq!(Float128::from_f64(0.375).to_string(), "3.75E-1");
        assert_eq!(Float128::nan().to_string(), "NaN");
        assert_eq!(Float128::infinity(true).to_string(), "-Infinity");
        assert_eq!(format!("{:.3}", Float128::from_f64(3.14159)), "3.142");
        assert_eq!(format!("{:.2}", Float128::from_f64(9.999)), "1E1");
    }

    #[test]
    fn test_format_large_exponents() {
        for s in ["1E400", "-7.5E-400", "1.25E100000"] {
            let v: Float128 = s.parse().unwrap();
            assert_eq!(v.to_string(), s);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("-12.5".parse::<Float128>().unwrap(), Float128::from_f64(-12.5));
        assert_eq!("+0.000125e3".parse::<Float128>().unwrap(), Float128::from_f64(0.125));
        assert_eq!("1024".parse::<Float128>().unwrap(), Float128::from_u32(1024));
        assert_eq!("000.0".parse::<Float128>().unwrap(), Float128::zero());
        assert_eq!("-0".parse::<Float128>().unwrap(), Float128::zero());
        assert!("nan".parse::<Float128>().unwrap().is_nan());
        assert_eq!("-Infinity".parse::<Float128>().unwrap(), Float128::infinity(true));
        assert_eq!("inf".parse::<Float128>().unwrap(), Float128::infinity(false));
    }

    #[test]
    fn test_parse_excess_digits() {
        // digits past the mantissa precision only move the exponent
        let long = format!("1{}", "0".repeat(80));
        let v: Float128 = long.parse().unwrap();
        assert_eq!(v.to_string(), "1E80");

        let v: BigFloat<1, 1> = "123456789012345".parse().unwrap();
        assert_eq!(v.to_string(), "1.23457E14");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Float128>(), Err(Error::EmptyInput));
        let invalid = |position, found| Err(Error::InvalidDigit { position, found });
        assert_eq!("1.2.3".parse::<Float128>(), invalid(3, '.'));
        assert_eq!("-12a".parse::<Float128>(), invalid(3, 'a'));
        assert_eq!("1e5x".parse::<Float128>(), invalid(3, 'x'));

        let no_exponent = Err(Error::MalformedNumber("missing exponent digits"));
        assert_eq!("1e".parse::<Float128>(), no_exponent);
        assert_eq!("1e-".parse::<Float128>(), no_exponent);
        assert_eq!(".".parse::<Float128>(), Err(Error::MalformedNumber("no digits")));
        assert_eq!("-".parse::<Float128>(), Err(Error::MalformedNumber("no digits")));
        assert_eq!("1e99999999999999999999".parse::<Float128>(), Err(Error::OutOfRange));
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!("1e9999999999".parse::<Float128>().unwrap(), Float128::infinity(false));
        assert!("-1e-9999999999".parse::<Float128>().unwrap().is_zero());
    }

    #[test]
    fn test_random_round_trip() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..200 {
            let v = Float128::from_f64(prng.gen::<f64>() * 10f64.powi(prng.gen_range(-300..300)));
            let back: Float128 = v.to_string().parse().unwrap();
            let mut d = back;
            d.subtract(&v);
            if !d.is_zero() {
                let gap = v.exponent().to_i64().unwrap() - d.exponent().to_i64().unwrap();
                assert!(gap >= 110, "{v} lost precision");
            }
        }
    }
}

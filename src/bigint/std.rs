use crate::bigint::BigInt;
use crate::error::Error;
use crate::ubigint::UBigInt;
use core::fmt;
use core::str::FromStr;
use num_bigint::{BigInt as NumBigInt, Sign};

impl<const N: usize> BigInt<N> {
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = self.unsigned_abs().to_str_radix(radix);
        if self.is_negative() {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Digits with an optional leading `-`. Like the unsigned parser, large
    /// magnitudes wrap silently.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let mut v = BigInt(UBigInt::from_str_radix(digits, radix).map_err(|e| match e {
            Error::InvalidDigit { position, found } if negative => {
                Error::InvalidDigit { position: position + 1, found }
            }
            e => e,
        })?);
        if negative {
            v.negate();
        }
        Ok(v)
    }
}

impl<const N: usize> fmt::Display for BigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.unsigned_abs().to_str_radix(10))
    }
}

impl<const N: usize> fmt::Debug for BigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt<{}>({})", N, self)
    }
}

impl<const N: usize> FromStr for BigInt<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl<const N: usize> From<i32> for BigInt<N> {
    fn from(n: i32) -> Self {
        Self::from_i32(n)
    }
}

impl<const N: usize> From<&BigInt<N>> for NumBigInt {
    fn from(v: &BigInt<N>) -> Self {
        let sign = if v.is_negative() { Sign::Minus } else { Sign::Plus };
        NumBigInt::from_biguint(sign, v.unsigned_abs().into())
    }
}

impl<const N: usize> TryFrom<&NumBigInt> for BigInt<N> {
    type Error = Error;

    fn try_from(v: &NumBigInt) -> Result<Self, Self::Error> {
        let magnitude = UBigInt::<N>::try_from(v.magnitude())?;
        let mut out = BigInt(magnitude);
        if v.sign() == Sign::Minus {
            out.negate();
            if !out.is_negative() && !out.is_zero() {
                return Err(Error::OutOfRange);
            }
        } else if out.is_negative() {
            return Err(Error::OutOfRange);
        }
        Ok(out)
    }
}

//! Bit-exact conversion from and to the IEEE-754 binary32 and binary64
//! layouts. Subnormals are flushed to zero in both directions.

use crate::bigfloat::{BigFloat, SIGN};
use crate::bigint::BigInt;
use crate::ubigint::UBigInt;
use crate::word::{Word, WORD_BITS, WORD_HIGH_BIT};

const F64_EXP_BIAS: i64 = 1023;
const F64_EXP_MAX: u64 = 0x7FF;
const F64_FRAC_BITS: u32 = 52;

const F32_EXP_BIAS: i64 = 127;
const F32_EXP_MAX: u32 = 0xFF;
const F32_FRAC_BITS: u32 = 23;

enum Native {
    Zero,
    Nan,
    Infinite,
    /// Unbiased exponent and the mantissa with its top bit set.
    Finite(i64, u64),
}

impl<const M: usize, const E: usize> BigFloat<M, E> {
    fn from_native(negative: bool, native: Native) -> Self {
        match native {
            Native::Zero => Self::zero(),
            Native::Nan => Self::nan(),
            Native::Infinite => Self::infinity(negative),
            Native::Finite(exponent, top) => {
                let mut mantissa = UBigInt::zero();
                mantissa.set_word(M - 1, (top >> WORD_BITS) as Word);
                if M > 1 {
                    mantissa.set_word(M - 2, top as Word);
                }
                Self {
                    stats: if negative { SIGN } else { 0 },
                    exponent: BigInt::from_i64(exponent),
                    mantissa,
                }
            }
        }
    }

    /// Exact for `M >= 2`; a single-word mantissa keeps the top 32 bits.
    pub fn from_f64(v: f64) -> Self {
        let bits = v.to_bits();
        let negative = bits >> 63 != 0;
        let exp = (bits >> F64_FRAC_BITS) & F64_EXP_MAX;
        let frac = bits & ((1 << F64_FRAC_BITS) - 1);

        let native = match exp {
            0 => Native::Zero,
            F64_EXP_MAX if frac != 0 => Native::Nan,
            F64_EXP_MAX => Native::Infinite,
            _ => Native::Finite(exp as i64 - F64_EXP_BIAS, 1 << 63 | frac << (63 - F64_FRAC_BITS)),
        };
        Self::from_native(negative, native)
    }

    pub fn from_f32(v: f32) -> Self {
        let bits = v.to_bits();
        let negative = bits >> 31 != 0;
        let exp = (bits >> F32_FRAC_BITS) & F32_EXP_MAX;
        let frac = bits & ((1 << F32_FRAC_BITS) - 1);

        let native = match exp {
            0 => Native::Zero,
            F32_EXP_MAX if frac != 0 => Native::Nan,
            F32_EXP_MAX => Native::Infinite,
            _ => {
                let top = (WORD_HIGH_BIT | frac << (31 - F32_FRAC_BITS)) as u64;
                Native::Finite(exp as i64 - F32_EXP_BIAS, top << WORD_BITS)
            }
        };
        Self::from_native(negative, native)
    }

    /// The top 64 mantissa bits.
    pub(crate) fn top_bits(&self) -> u64 {
        let high = self.mantissa.word(M - 1) as u64;
        let low = if M > 1 { self.mantissa.word(M - 2) as u64 } else { 0 };
        high << WORD_BITS | low
    }

    /// Unbiased exponent clamped to `[min, max + 1]`; `min - 1` stands for
    /// anything smaller.
    fn native_exponent(&self, min: i64, max: i64) -> i64 {
        match self.exponent.to_i64() {
            Some(e) => e.clamp(min - 1, max + 1),
            None if self.exponent.is_negative() => min - 1,
            None => max + 1,
        }
    }

    /// Truncates the mantissa. Values beyond the binary64 range become
    /// infinities, values below the smallest normal become zero. `None` only
    /// for NaN.
    pub fn to_f64(&self) -> Option<f64> {
        if self.is_nan() {
            return None;
        }
        let sign = if self.is_negative() { 1u64 << 63 } else { 0 };
        if self.is_zero() {
            return Some(0.0);
        }
        if self.is_infinite() {
            return Some(f64::from_bits(sign | F64_EXP_MAX << F64_FRAC_BITS));
        }

        let e = self.native_exponent(1 - F64_EXP_BIAS, F64_EXP_BIAS);
        let bits = if e > F64_EXP_BIAS {
            sign | F64_EXP_MAX << F64_FRAC_BITS
        } else if e < 1 - F64_EXP_BIAS {
            sign
        } else {
            let frac = (self.top_bits() << 1) >> (64 - F64_FRAC_BITS);
            sign | ((e + F64_EXP_BIAS) as u64) << F64_FRAC_BITS | frac
        };
        Some(f64::from_bits(bits))
    }

    pub fn to_f32(&self) -> Option<f32> {
        if self.is_nan() {
            return None;
        }
        let sign = if self.is_negative() { 1u32 << 31 } else { 0 };
        if self.is_zero() {
            return Some(0.0);
        }
        if self.is_infinite() {
            return Some(f32::from_bits(sign | F32_EXP_MAX << F32_FRAC_BITS));
        }

        let e = self.native_exponent(1 - F32_EXP_BIAS, F32_EXP_BIAS);
        let bits = if e > F32_EXP_BIAS {
            sign | F32_EXP_MAX << F32_FRAC_BITS
        } else if e < 1 - F32_EXP_BIAS {
            sign
        } else {
            let frac = (self.mantissa.word(M - 1) << 1) >> (WORD_BITS - F32_FRAC_BITS);
            sign | ((e + F32_EXP_BIAS) as u32) << F32_FRAC_BITS | frac
        };
        Some(f32::from_bits(bits))
    }
}

impl<const M: usize, const E: usize> From<f64> for BigFloat<M, E> {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}

impl<const M: usize, const E: usize> From<f32> for BigFloat<M, E> {
    fn from(v: f32) -> Self {
        Self::from_f32(v)
    }
}

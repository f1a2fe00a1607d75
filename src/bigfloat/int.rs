use crate::bigfloat::BigFloat;
use crate::bigint::BigInt;
use crate::ubigint::UBigInt;
use crate::word::{lowest_set_bit, Word, WORD_BITS};

impl<const M: usize, const E: usize> BigFloat<M, E> {
    pub fn from_u32(v: u32) -> Self {
        let mut mantissa = UBigInt::zero();
        mantissa.set_word(M - 1, v);
        Self::from_parts(false, BigInt::from_i32(WORD_BITS as i32 - 1), mantissa)
    }

    pub fn from_i32(v: i32) -> Self {
        let mut out = Self::from_u32(v.unsigned_abs());
        out.set_negative(v < 0);
        out
    }

    /// Integers wider than the mantissa are rounded to nearest.
    pub fn from_ubig<const K: usize>(v: &UBigInt<K>) -> Self {
        let len = v.bit_length();
        if len == 0 {
            return Self::zero();
        }

        let mut v = *v;
        let drop = len.saturating_sub(Self::MANTISSA_BITS);
        let round = drop > 0 && v.bit(drop - 1);
        v.shift_right(drop);
        let (mantissa, _) = v.resize::<M>();

        let exponent = BigInt::from_i64(Self::MANTISSA_BITS as i64 - 1 + drop as i64);
        let mut out = Self::from_parts(false, exponent, mantissa);
        if round {
            out.round_up();
        }
        out
    }

    pub fn from_bigint<const K: usize>(v: &BigInt<K>) -> Self {
        let mut out = Self::from_ubig(&v.unsigned_abs());
        out.set_negative(v.is_negative());
        out
    }

    /// Number of mantissa bits that carry information, from the leading one
    /// down to the lowest set bit. Zero for zero and non-finite values.
    pub fn mantissa_bit_count(&self) -> u32 {
        if !self.is_finite() || self.is_zero() {
            return 0;
        }
        match self.mantissa.lowest_nonzero_word() {
            Some(i) => {
                let lowest = i as u32 * WORD_BITS + lowest_set_bit(self.mantissa.word(i)) - 1;
                Self::MANTISSA_BITS - lowest
            }
            None => 0,
        }
    }

    /// Drops the fractional bits, rounding toward zero.
    pub fn trunc(&mut self) {
        if !self.is_finite() || self.is_zero() {
            return;
        }
        let e = match self.exponent.to_i64() {
            Some(e) => e,
            None if self.exponent.is_negative() => -1,
            None => return,
        };
        if e < 0 {
            self.set_zero();
            return;
        }
        let integer_bits = Self::MANTISSA_BITS as i64 - 1;
        if e >= integer_bits {
            return;
        }

        let fraction_bits = (integer_bits - e) as u32;
        self.mantissa.shift_right(fraction_bits);
        self.mantissa.shift_left(fraction_bits);
    }

    pub fn integer_part(&self) -> Self {
        let mut out = *self;
        out.trunc();
        out
    }

    pub fn is_integer(&self) -> bool {
        if self.is_zero() {
            return true;
        }
        if !self.is_finite() || self.exponent.is_negative() {
            return false;
        }
        match self.exponent.to_i64() {
            Some(e) => self.mantissa_bit_count() as i64 <= e + 1,
            None => true,
        }
    }

    /// Integer part as a `u32`; `None` for NaN, infinities and values outside
    /// `(-1, 2^32)`.
    pub fn to_u32(&self) -> Option<u32> {
        if !self.is_finite() {
            return None;
        }
        if self.is_zero() || self.exponent.is_negative() {
            return Some(0);
        }
        if self.is_negative() {
            return None;
        }
        match self.exponent.to_i64() {
            Some(e) if e < WORD_BITS as i64 => {
                let top: Word = self.mantissa.word(M - 1);
                Some(top >> (WORD_BITS - 1 - e as u32))
            }
            _ => None,
        }
    }

    /// Integer part as an `i64`, rounding toward zero.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_finite() {
            return None;
        }
        if self.is_zero() || self.exponent.is_negative() {
            return Some(0);
        }
        let e = self.exponent.to_i64().filter(|&e| e < 64)?;
        let magnitude = self.top_bits() >> (63 - e as u32);

        if self.is_negative() {
            if magnitude > 1 << 63 {
                return None;
            }
            Some((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).ok()
        }
    }
}

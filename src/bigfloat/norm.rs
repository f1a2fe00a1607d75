use crate::bigfloat::{BigFloat, NAN, INFINITY, SIGN, ZERO};
use crate::bigint::BigInt;
use crate::outcome::Outcome;
use crate::ubigint::{UBigInt, WideUBigInt};

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// Shifts the mantissa up until its top bit is set and lowers the
    /// exponent to match. An all-zero mantissa becomes the canonical zero.
    /// Overflow if the exponent underflows, in which case the value is zero.
    pub fn standardize(&mut self) -> Outcome {
        if self.stats & (NAN | INFINITY) != 0 {
            return Outcome::Ok;
        }

        let len = self.mantissa.bit_length();
        if len == 0 {
            self.set_zero();
            return Outcome::Ok;
        }

        self.stats &= SIGN;
        let shift = Self::MANTISSA_BITS - len;
        if shift == 0 {
            return Outcome::Ok;
        }
        self.mantissa.shift_left(shift);
        self.offset_exponent(-(shift as i64))
    }

    pub fn is_standardized(&self) -> bool {
        if !self.is_finite() {
            return self.mantissa.is_zero() && self.exponent.is_zero();
        }
        if self.is_zero() {
            return self.mantissa.is_zero() && self.exponent.is_zero() && self.stats == ZERO;
        }
        self.mantissa.bit(Self::MANTISSA_BITS - 1)
    }

    /// An exponent gap up to one past the mantissa width can still round
    /// the larger operand.
    #[inline]
    pub(crate) fn within_reach(d: i64) -> bool {
        d.unsigned_abs() <= Self::MANTISSA_BITS as u64 + 1
    }

    /// `self.exponent - other.exponent`, if it fits an `i64`.
    pub(crate) fn exponent_difference(&self, other: &Self) -> Option<i64> {
        let mut d = self.exponent;
        if !d.subtract(&other.exponent).is_ok() {
            return None;
        }
        d.to_i64()
    }

    /// Whether the two values are close enough in magnitude that adding one
    /// to the other can change it. Zero aligns with everything.
    pub fn aligns_with(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return true;
        }
        self.exponent_difference(other).map_or(false, Self::within_reach)
    }

    /// Brings both operands to the larger exponent by shifting the smaller
    /// one's mantissa down, dropping the bits that fall off. Returns `false`
    /// and leaves both untouched when one of them is negligible.
    ///
    /// The shifted operand is no longer standardized.
    pub fn normalize(&mut self, other: &mut Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return true;
        }
        let d = match self.exponent_difference(other) {
            Some(d) if Self::within_reach(d) => d,
            _ => return false,
        };

        if d < 0 {
            self.mantissa.shift_right(d.unsigned_abs() as u32);
            self.exponent = other.exponent;
        } else {
            other.mantissa.shift_right(d as u32);
            other.exponent = self.exponent;
        }
        true
    }

    /// Replaces the value by `±infinity` (upwards) or zero (downwards).
    pub(crate) fn saturate(&mut self, upward: bool) -> Outcome {
        if upward {
            log::debug!("BigFloat<{M}, {E}> exponent overflow, saturating to infinity");
            *self = Self::infinity(self.is_negative());
        } else {
            log::debug!("BigFloat<{M}, {E}> exponent underflow, flushing to zero");
            *self = Self::zero();
        }
        Outcome::Overflow
    }

    /// Adds a small delta to the exponent, saturating on overflow.
    pub(crate) fn offset_exponent(&mut self, delta: i64) -> Outcome {
        debug_assert!(delta.unsigned_abs() <= i32::MAX as u64);
        if self.exponent.add(&BigInt::from_i64(delta)).is_ok() {
            Outcome::Ok
        } else {
            self.saturate(delta > 0)
        }
    }

    /// Loads `wide / 2^(2 * MANTISSA_BITS - 1) * 2^(exponent + extra)`,
    /// rounding to nearest with ties away from zero.
    pub(crate) fn load_wide(
        &mut self,
        negative: bool,
        exponent: BigInt<E>,
        mut wide: WideUBigInt<M>,
        extra: i64,
    ) -> Outcome {
        let len = wide.bit_length();
        if len == 0 {
            self.set_zero();
            return Outcome::Ok;
        }

        let shift = WideUBigInt::<M>::N_BITS - len;
        wide.shift_left(shift);

        self.stats = if negative { SIGN } else { 0 };
        self.exponent = exponent;
        self.mantissa = wide.high();
        let outcome = self.offset_exponent(extra - shift as i64);
        if !outcome.is_ok() {
            return outcome;
        }

        if wide.low().bit(Self::MANTISSA_BITS - 1) {
            self.round_up()
        } else {
            Outcome::Ok
        }
    }

    /// Adds one unit in the last place of the mantissa.
    pub(crate) fn round_up(&mut self) -> Outcome {
        if self.mantissa.add_word(1).is_ok() {
            return Outcome::Ok;
        }
        self.mantissa = UBigInt::zero();
        self.mantissa.set_bit(Self::MANTISSA_BITS - 1);
        self.offset_exponent(1)
    }
}

#[cfg(test)]
mod test {
    use crate::bigfloat::BigFloat;
    use crate::bigint::BigInt;
    use crate::outcome::Outcome;
    use crate::ubigint::UBigInt;

    type F = BigFloat<2, 1>;

    #[test]
    fn test_standardize_idempotent() {
        let mut v = F {
            stats: 0,
            exponent: BigInt::from_i32(10),
            mantissa: UBigInt::from_u64(0x0000_0123_4567_89ab),
        };
        assert!(!v.is_standardized());
        assert_eq!(v.standardize(), Outcome::Ok);
        assert!(v.is_standardized());

        let once = v;
        assert_eq!(v.standardize(), Outcome::Ok);
        assert_eq!(v.stats, once.stats);
        assert_eq!(v.exponent, once.exponent);
        assert_eq!(v.mantissa, once.mantissa);
    }

    #[test]
    fn test_standardize_zero_and_underflow() {
        let mut z = F { stats: 1, exponent: BigInt::from_i32(7), mantissa: UBigInt::zero() };
        z.standardize();
        assert!(z.is_zero() && z.is_standardized() && !z.is_negative());

        let mut tiny = F { stats: 0, exponent: BigInt::min_value(), mantissa: UBigInt::one() };
        assert_eq!(tiny.standardize(), Outcome::Overflow);
        assert!(tiny.is_zero());
    }

    #[test]
    fn test_normalize() {
        let mut a = F::from_u32(12);
        let mut b = F::from_u32(3);
        assert!(a.normalize(&mut b));
        assert_eq!(a.exponent, b.exponent);
        assert_eq!(b.mantissa, UBigInt::from_u64(0x3000_0000_0000_0000));

        let mut big = F::from_u32(1);
        big.offset_exponent(66);
        let mut small = F::one();
        assert!(!big.normalize(&mut small));
        assert_eq!(small, F::one());
        assert!(!big.aligns_with(&small));

        let mut near = F::one();
        near.offset_exponent(65);
        assert!(near.aligns_with(&F::one()));
    }

    #[test]
    fn test_saturation() {
        let mut v = F::one();
        v.negate();
        v.exponent = BigInt::max_value();
        assert_eq!(v.offset_exponent(1), Outcome::Overflow);
        assert!(v.is_infinite() && v.is_negative());

        let mut w = F::one();
        w.exponent = BigInt::min_value();
        assert_eq!(w.offset_exponent(-1), Outcome::Overflow);
        assert!(w.is_zero());
    }
}

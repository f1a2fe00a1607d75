use crate::bigfloat::BigFloat;
use crate::outcome::Outcome;
use crate::word::{highest_set_bit, Word};

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// `self *= rhs`: full-width mantissa product rounded to nearest.
    pub fn multiply(&mut self, rhs: &Self) -> Outcome {
        let negative = self.is_negative() != rhs.is_negative();

        if self.is_nan() || rhs.is_nan() {
            self.set_nan();
            return Outcome::Indeterminate;
        }
        if self.is_infinite() || rhs.is_infinite() {
            if self.is_zero() || rhs.is_zero() {
                self.set_nan();
                return Outcome::Indeterminate;
            }
            *self = Self::infinity(negative);
            return Outcome::Ok;
        }
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return Outcome::Ok;
        }

        let mut exponent = self.exponent;
        if !exponent.add(&rhs.exponent).is_ok() {
            self.set_negative(negative);
            return self.saturate(!rhs.exponent.is_negative());
        }

        // (a / 2^(n-1)) * (b / 2^(n-1)) = (a * b) / 2^(2n-1) * 2
        let product = self.mantissa.multiply_full(&rhs.mantissa);
        self.load_wide(negative, exponent, product, 1)
    }

    /// Multiplies by a word. Bits shifted out at the bottom are dropped.
    pub fn multiply_word(&mut self, n: Word) -> Outcome {
        if self.is_nan() {
            return Outcome::Indeterminate;
        }
        if self.is_infinite() {
            if n == 0 {
                self.set_nan();
                return Outcome::Indeterminate;
            }
            return Outcome::Ok;
        }
        if self.is_zero() {
            return Outcome::Ok;
        }
        if n == 0 {
            self.set_zero();
            return Outcome::Ok;
        }

        let carry = self.mantissa.multiply_small(n);
        if carry == 0 {
            return Outcome::Ok;
        }
        let shift = highest_set_bit(carry);
        self.mantissa.shift_right_fill(shift, carry);
        self.offset_exponent(shift as i64)
    }
}

#[cfg(test)]
mod test {
    use crate::bigfloat::{BigFloat, Float256};
    use crate::outcome::Outcome;
    use crate::ubigint::UBigInt;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    type F = BigFloat<2, 1>;

    #[test]
    fn test_multiply_matches_f64() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..500 {
            // 26-bit operands keep the product exact in an f64
            let a = prng.gen_range(-(1i64 << 26)..(1 << 26)) as f64 / 1024.0;
            let b = prng.gen_range(-(1i64 << 26)..(1 << 26)) as f64 * 8.0;
            let mut x = F::from_f64(a);
            assert_eq!(x.multiply(&F::from_f64(b)), Outcome::Ok);
            assert_eq!(x.to_f64(), Some(a * b), "{a} * {b}");
        }
    }

    #[test]
    fn test_multiply_rounding() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..1000 {
            let a: u32 = prng.gen::<u32>() | 0x8000_0000;
            let b: u32 = prng.gen::<u32>() | 0x8000_0000;
            let mut x = BigFloat::<1, 1>::from_u32(a);
            x.multiply(&BigFloat::from_u32(b));

            // round half away from zero on the exact 64-bit product
            let p = a as u64 * b as u64;
            let shift = if p >> 63 == 1 { 32 } else { 31 };
            let mut m = (p >> shift) + ((p >> (shift - 1)) & 1);
            let mut e = 31 + shift as i64;
            if m == 1 << 32 {
                m = 1 << 31;
                e += 1;
            }
            assert_eq!(x.mantissa, UBigInt::from_word(m as u32), "{a} * {b}");
            assert_eq!(x.exponent.to_i64(), Some(e), "{a} * {b}");
        }
    }

    #[test]
    fn test_multiply_word() {
        let mut x = F::from_u32(3);
        assert_eq!(x.multiply_word(7), Outcome::Ok);
        assert_eq!(x, F::from_u32(21));

        let mut y = Float256::from_f64(1.5);
        assert_eq!(y.multiply_word(u32::MAX), Outcome::Ok);
        assert_eq!(y.to_f64(), Some(1.5 * u32::MAX as f64));

        let mut z = F::from_u32(9);
        z.multiply_word(0);
        assert!(z.is_zero());
    }

    #[test]
    fn test_multiply_special_values() {
        let mut v = F::infinity(false);
        assert_eq!(v.multiply(&F::zero()), Outcome::Indeterminate);
        assert!(v.is_nan());

        let mut w = F::infinity(true);
        assert_eq!(w.multiply(&F::from_i32(-2)), Outcome::Ok);
        assert_eq!(w, F::infinity(false));

        let mut z = F::from_i32(-4);
        z.multiply(&F::zero());
        assert!(z.is_zero() && !z.is_negative());
    }

    #[test]
    fn test_multiply_overflow_saturates() {
        let mut big = F::one();
        big.exponent = crate::bigint::BigInt::max_value();
        let mut x = big;
        assert_eq!(x.multiply(&F::from_i32(-4)), Outcome::Overflow);
        assert!(x.is_infinite() && x.is_negative());

        let mut tiny = F::one();
        tiny.exponent = crate::bigint::BigInt::min_value();
        let mut y = tiny;
        assert_eq!(y.multiply(&F::from_f64(0.25)), Outcome::Overflow);
        assert!(y.is_zero());
    }
}

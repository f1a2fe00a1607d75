use crate::bigfloat::BigFloat;
use crate::outcome::Outcome;
use crate::ubigint::{add_words, shr_words, sub_words, UBigInt, WideUBigInt};

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// Resolves the operand combinations that need no mantissa arithmetic.
    fn add_special(&mut self, rhs: &Self) -> Option<Outcome> {
        if self.is_nan() || rhs.is_nan() {
            self.set_nan();
            return Some(Outcome::Indeterminate);
        }
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) if self.is_negative() != rhs.is_negative() => {
                self.set_nan();
                return Some(Outcome::Indeterminate);
            }
            (true, _) => return Some(Outcome::Ok),
            (false, true) => {
                *self = *rhs;
                return Some(Outcome::Ok);
            }
            _ => {}
        }
        if rhs.is_zero() {
            return Some(Outcome::Ok);
        }
        if self.is_zero() {
            *self = *rhs;
            return Some(Outcome::Ok);
        }
        None
    }

    /// `self += rhs`, rounded to nearest. An operand too small to affect the
    /// other is dropped.
    pub fn add(&mut self, rhs: &Self) -> Outcome {
        if let Some(outcome) = self.add_special(rhs) {
            return outcome;
        }

        let d = match self.exponent_difference(rhs) {
            Some(d) if Self::within_reach(d) => d,
            _ => {
                if rhs.exponent > self.exponent {
                    *self = *rhs;
                }
                return Outcome::Ok;
            }
        };

        let (big, small) = if d >= 0 { (*self, *rhs) } else { (*rhs, *self) };
        let mut a = WideUBigInt::from_halves(UBigInt::zero(), big.mantissa);
        let mut b = WideUBigInt::from_halves(UBigInt::zero(), small.mantissa);
        b.shift_right(d.unsigned_abs() as u32);

        let (negative, extra) = if big.is_negative() == small.is_negative() {
            if add_words(a.as_words_mut(), b.as_words()) {
                // the carry is the new top bit
                shr_words(a.as_words_mut(), 1, 1);
                (big.is_negative(), 1)
            } else {
                (big.is_negative(), 0)
            }
        } else if a >= b {
            sub_words(a.as_words_mut(), b.as_words());
            (big.is_negative(), 0)
        } else {
            sub_words(b.as_words_mut(), a.as_words());
            a = b;
            (small.is_negative(), 0)
        };

        self.load_wide(negative, big.exponent, a, extra)
    }

    pub fn subtract(&mut self, rhs: &Self) -> Outcome {
        let mut neg = *rhs;
        neg.negate();
        self.add(&neg)
    }
}

#[cfg(test)]
mod test {
    use crate::bigfloat::{BigFloat, Float256};
    use crate::outcome::Outcome;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    type F = BigFloat<2, 1>;

    #[test]
    fn test_add_matches_f64() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        // sums of small integers are exact in both types
        for _ in 0..500 {
            let a = prng.gen_range(-1_000_000i32..1_000_000);
            let b = prng.gen_range(-1_000_000i32..1_000_000);
            let mut x = F::from_i32(a);
            assert_eq!(x.add(&F::from_i32(b)), Outcome::Ok);
            assert_eq!(x.to_f64(), Some((a + b) as f64));

            let mut y = F::from_i32(a);
            assert_eq!(y.subtract(&F::from_i32(b)), Outcome::Ok);
            assert_eq!(y.to_f64(), Some((a - b) as f64));
        }
    }

    #[test]
    fn test_add_fractions() {
        let mut x = F::from_f64(0.75);
        x.add(&F::from_f64(0.375));
        assert_eq!(x.to_f64(), Some(1.125));

        x.subtract(&F::from_f64(1.125));
        assert!(x.is_zero());
        assert!(!x.is_negative());

        let mut y = F::from_f64(0.5);
        y.subtract(&F::from_f64(2.0));
        assert_eq!(y.to_f64(), Some(-1.5));
    }

    #[test]
    fn test_add_rounds_carry() {
        let mut ulp = F::one();
        ulp.offset_exponent(-(F::MANTISSA_BITS as i64 - 1));
        let mut almost_two = F::from_u32(2);
        almost_two.subtract(&ulp);
        assert!(almost_two < F::from_u32(2));
        assert_eq!(almost_two.mantissa, crate::ubigint::UBigInt::max_value());

        // half an ulp rounds away from zero and carries into the next power of two
        let mut half_ulp = ulp;
        half_ulp.offset_exponent(-1);
        let mut x = almost_two;
        x.add(&half_ulp);
        assert_eq!(x, F::from_u32(2));
    }

    #[test]
    fn test_negligible_operand() {
        let mut big = Float256::from_u32(1);
        big.offset_exponent(300);
        let before = big;
        big.add(&Float256::one());
        assert_eq!(big, before);

        let mut small = Float256::one();
        small.add(&before);
        assert_eq!(small, before);
    }

    #[test]
    fn test_special_values() {
        let inf = F::infinity(false);
        let ninf = F::infinity(true);

        let mut v = inf;
        assert_eq!(v.add(&ninf), Outcome::Indeterminate);
        assert!(v.is_nan());

        let mut w = F::one();
        assert_eq!(w.add(&ninf), Outcome::Ok);
        assert_eq!(w, ninf);

        let mut n = F::nan();
        assert_eq!(n.add(&F::one()), Outcome::Indeterminate);
        assert!(n.is_nan());

        let mut z = F::zero();
        z.subtract(&F::from_u32(5));
        assert_eq!(z.to_f64(), Some(-5.0));
    }

    #[test]
    fn test_rhs_untouched() {
        let a = F::from_f64(1.5);
        let b = F::from_f64(1e-5);
        let copy = b;
        let mut x = a;
        x.add(&b);
        assert_eq!(b, copy);
    }
}

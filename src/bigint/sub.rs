use crate::bigint::BigInt;
use crate::outcome::Outcome;

/// Signed overflow of `a - b = r`: the operand signs differ and the result
/// took the sign of `b`.
#[inline]
pub(crate) fn sub_overflowed(a_negative: bool, b_negative: bool, r_negative: bool) -> bool {
    a_negative != b_negative && a_negative != r_negative
}

impl<const N: usize> BigInt<N> {
    pub fn subtract(&mut self, rhs: &Self) -> Outcome {
        let (a, b) = (self.is_negative(), rhs.is_negative());
        self.0.subtract(&rhs.0);
        Outcome::from_carry(sub_overflowed(a, b, self.is_negative()))
    }

    pub fn sub_i32(&mut self, n: i32) -> Outcome {
        self.subtract(&Self::from_i32(n))
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{BigInt, I64};
    use crate::outcome::Outcome;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_sub_matches_i64() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..1000 {
            let a: i64 = prng.gen();
            let b: i64 = prng.gen();
            let mut x = I64::from_i64(a);
            let carry = x.subtract(&I64::from_i64(b));

            let (expected, overflow) = a.overflowing_sub(b);
            assert_eq!(x.to_i64(), Some(expected));
            assert_eq!(carry, Outcome::from_carry(overflow));
        }
    }

    #[test]
    fn test_sub_boundaries() {
        let mut x = BigInt::<1>::min_value();
        assert_eq!(x.sub_i32(1), Outcome::Overflow);
        assert_eq!(x.to_i32(), Some(i32::MAX));

        let mut y = I64::zero();
        assert_eq!(y.sub_i32(i32::MIN), Outcome::Ok);
        assert_eq!(y.to_i64(), Some(1 << 31));

        let mut z = I64::from_i64(-1);
        assert_eq!(z.subtract(&I64::min_value()), Outcome::Ok);
        assert_eq!(z.to_i64(), Some(i64::MAX));
    }
}

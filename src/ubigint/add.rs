use crate::outcome::Outcome;
use crate::ubigint::UBigInt;
use crate::word::Word;

/// `a += b` over equally long word slices, returning the carry out of the top word.
pub(crate) fn add_words(a: &mut [Word], b: &[Word]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut carry = false;
    for (x, &y) in a.iter_mut().zip(b) {
        let (v, c1) = x.overflowing_add(y);
        let (v, c2) = v.overflowing_add(carry as Word);
        *x = v;
        carry = c1 || c2;
    }
    carry
}

/// Adds `n` at word `idx` and ripples the carry upwards.
pub(crate) fn add_word_at(a: &mut [Word], idx: usize, n: Word) -> bool {
    debug_assert!(idx < a.len());
    let (v, mut carry) = a[idx].overflowing_add(n);
    a[idx] = v;
    for x in a[idx + 1..].iter_mut() {
        if !carry {
            break;
        }
        let (v, c) = x.overflowing_add(1);
        *x = v;
        carry = c;
    }
    carry
}

impl<const N: usize> UBigInt<N> {
    /// `self += rhs`, wrapping, with the carry reported as `Overflow`.
    ///
    /// With `core::ops::Add` in scope, `x.add(&y)` on a value resolves to the
    /// operator instead, which returns the wrapped sum and drops the carry.
    /// Call `UBigInt::add(&mut x, &y)` there.
    pub fn add(&mut self, rhs: &Self) -> Outcome {
        Outcome::from_carry(add_words(&mut self.words, &rhs.words))
    }

    pub fn add_word(&mut self, n: Word) -> Outcome {
        Outcome::from_carry(add_word_at(&mut self.words, 0, n))
    }
}

#[cfg(test)]
mod test {
    use crate::outcome::Outcome;
    use crate::ubigint::{U256, U64};
    use core::ops::{Rem, Shl};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::One;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_add() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..100 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let b: BigUint = prng.sample(RandomBits::new(256));
            let sum = &a + &b;
            let c = sum.clone().rem(BigUint::one().shl(256));

            let mut x = U256::try_from(&a).unwrap();
            let carry = x.add(&U256::try_from(&b).unwrap());

            assert_eq!(BigUint::from(&x), c);
            assert_eq!(carry == Outcome::Overflow, sum.bits() > 256);
        }
    }

    #[test]
    fn test_add_carry_boundary() {
        let mut a = U64::from_words([0xFFFF_FFFF, 0]);
        assert_eq!(a.add_word(1), Outcome::Ok);
        assert_eq!(a, U64::from_words([0, 1]));

        let mut b = U64::max_value();
        assert_eq!(b.add_word(1), Outcome::Overflow);
        assert!(b.is_zero());

        let mut c = U64::max_value();
        assert_eq!(c.add(&U64::max_value()), Outcome::Overflow);
        assert_eq!(c, U64::from_words([0xFFFF_FFFE, 0xFFFF_FFFF]));
    }
}

use crate::bigint::BigInt;
use crate::ubigint::cmp_words;
use core::cmp::Ordering;

impl<const N: usize> Ord for BigInt<N> {
    /// The top word compares as signed, the rest as unsigned.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.0.words[N - 1] as i32, other.0.words[N - 1] as i32);
        a.cmp(&b).then_with(|| cmp_words(&self.0.words[..N - 1], &other.0.words[..N - 1]))
    }
}

impl<const N: usize> PartialOrd for BigInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{BigInt, I128, I64};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_cmp_matches_i64() {
        let mut prng = ChaCha20Rng::seed_from_u64(4);

        for _ in 0..1000 {
            let a: i64 = prng.gen();
            let b: i64 = if prng.gen() { prng.gen() } else { a ^ prng.gen::<u8>() as i64 };
            assert_eq!(I64::from_i64(a).cmp(&I64::from_i64(b)), a.cmp(&b), "{a} vs {b}");
        }
    }

    #[test]
    fn test_order() {
        assert!(I128::min_value() < I128::from_i32(-1));
        assert!(I128::from_i32(-1) < I128::zero());
        assert!(I128::zero() < I128::one());
        assert!(I128::one() < I128::max_value());
        assert!(BigInt::<1>::from_i32(-2) < BigInt::<1>::from_i32(-1));
    }
}

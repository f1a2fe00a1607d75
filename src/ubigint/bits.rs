use crate::ubigint::UBigInt;
use crate::word::{Word, WORD_BITS};

/// Moves words towards the top by `offset`, filling the bottom with `fill`.
fn shl_whole_words(a: &mut [Word], offset: usize, fill: Word) {
    if offset == 0 {
        return;
    }
    if offset >= a.len() {
        a.fill(fill);
        return;
    }
    a.copy_within(..a.len() - offset, offset);
    a[..offset].fill(fill);
}

fn shr_whole_words(a: &mut [Word], offset: usize, fill: Word) {
    if offset == 0 {
        return;
    }
    let len = a.len();
    if offset >= len {
        a.fill(fill);
        return;
    }
    a.copy_within(offset.., 0);
    a[len - offset..].fill(fill);
}

/// Shift by fewer than `WORD_BITS` bits; the top `bits` bits of `fill` enter
/// at the bottom.
pub(crate) fn shl_sub_word(a: &mut [Word], bits: u32, fill: Word) {
    debug_assert!(bits < WORD_BITS);
    if bits == 0 || a.is_empty() {
        return;
    }
    let back = WORD_BITS - bits;
    for i in (1..a.len()).rev() {
        a[i] = (a[i] << bits) | (a[i - 1] >> back);
    }
    a[0] = (a[0] << bits) | (fill >> back);
}

/// Shift by fewer than `WORD_BITS` bits; the low `bits` bits of `fill` enter
/// at the top.
pub(crate) fn shr_sub_word(a: &mut [Word], bits: u32, fill: Word) {
    debug_assert!(bits < WORD_BITS);
    if bits == 0 || a.is_empty() {
        return;
    }
    let back = WORD_BITS - bits;
    let last = a.len() - 1;
    for i in 0..last {
        a[i] = (a[i] >> bits) | (a[i + 1] << back);
    }
    a[last] = (a[last] >> bits) | (fill << back);
}

pub(crate) fn shl_words(a: &mut [Word], bits: u32, fill: Word) {
    let offset = (bits / WORD_BITS) as usize;
    if offset >= a.len() {
        a.fill(fill);
        return;
    }
    shl_sub_word(a, bits % WORD_BITS, fill);
    shl_whole_words(a, offset, fill);
}

pub(crate) fn shr_words(a: &mut [Word], bits: u32, fill: Word) {
    let offset = (bits / WORD_BITS) as usize;
    if offset >= a.len() {
        a.fill(fill);
        return;
    }
    shr_sub_word(a, bits % WORD_BITS, fill);
    shr_whole_words(a, offset, fill);
}

impl<const N: usize> UBigInt<N> {
    pub fn shift_left(&mut self, bits: u32) {
        shl_words(&mut self.words, bits, 0);
    }

    pub fn shift_right(&mut self, bits: u32) {
        shr_words(&mut self.words, bits, 0);
    }

    /// Shift with an explicit fill pattern. Whole vacated words take `fill`;
    /// a partial word takes the matching edge bits of `fill`.
    pub fn shift_left_fill(&mut self, bits: u32, fill: Word) {
        shl_words(&mut self.words, bits, fill);
    }

    pub fn shift_right_fill(&mut self, bits: u32, fill: Word) {
        shr_words(&mut self.words, bits, fill);
    }

    pub fn bit_and(&mut self, rhs: &Self) {
        for (x, y) in self.words.iter_mut().zip(rhs.words.iter()) {
            *x &= y;
        }
    }

    pub fn bit_or(&mut self, rhs: &Self) {
        for (x, y) in self.words.iter_mut().zip(rhs.words.iter()) {
            *x |= y;
        }
    }

    pub fn bit_xor(&mut self, rhs: &Self) {
        for (x, y) in self.words.iter_mut().zip(rhs.words.iter()) {
            *x ^= y;
        }
    }

    pub fn bit_not(&mut self) {
        for x in self.words.iter_mut() {
            *x = !*x;
        }
    }
}

#[cfg(test)]
mod test {
    use crate::ubigint::{U128, U256};
    use crate::word::WORD_MAX;
    use core::ops::{Rem, Shl, Shr};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::One;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_shift() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..100 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let shift: u32 = prng.gen_range(0..300);

            let mut x = U256::try_from(&a).unwrap();
            x.shift_left(shift);
            let expected = a.clone().shl(shift).rem(BigUint::one().shl(256));
            assert_eq!(BigUint::from(&x), expected);

            let mut y = U256::try_from(&a).unwrap();
            y.shift_right(shift);
            assert_eq!(BigUint::from(&y), a.clone().shr(shift));
        }
    }

    #[test]
    fn test_shift_across_words() {
        let mut a = U128::from_words([0x8000_0001, 0, 0, 0]);
        a.shift_left(1);
        assert_eq!(a, U128::from_words([2, 1, 0, 0]));
        a.shift_left(63);
        assert_eq!(a, U128::from_words([0, 0, 0x8000_0001, 0]));
        a.shift_right(63);
        assert_eq!(a, U128::from_words([2, 1, 0, 0]));
        a.shift_right(33);
        assert_eq!(a, U128::zero());
    }

    #[test]
    fn test_shift_fill() {
        let mut a = U128::zero();
        a.shift_right_fill(1, 1);
        assert_eq!(a, U128::from_words([0, 0, 0, 0x8000_0000]));

        let mut b = U128::zero();
        b.shift_left_fill(40, WORD_MAX);
        assert_eq!(b, U128::from_words([WORD_MAX, 0xFF, 0, 0]));

        let mut c = U128::from_word(7);
        c.shift_left_fill(128, WORD_MAX);
        assert_eq!(c, U128::max_value());
        c.shift_right(1000);
        assert!(c.is_zero());
    }

    #[test]
    fn test_bitwise() {
        let mut prng = ChaCha20Rng::seed_from_u64(3);

        for _ in 0..50 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let b: BigUint = prng.sample(RandomBits::new(256));
            let x = U256::try_from(&a).unwrap();
            let y = U256::try_from(&b).unwrap();

            let mut and = x;
            and.bit_and(&y);
            assert_eq!(BigUint::from(&and), &a & &b);

            let mut or = x;
            or.bit_or(&y);
            assert_eq!(BigUint::from(&or), &a | &b);

            let mut xor = x;
            xor.bit_xor(&y);
            assert_eq!(BigUint::from(&xor), &a ^ &b);

            let mut not = x;
            not.bit_not();
            let mut back = not;
            back.bit_xor(&U256::max_value());
            assert_eq!(back, x);
        }
    }
}

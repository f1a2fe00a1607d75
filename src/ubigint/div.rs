use crate::error::Error;
use crate::ubigint::{cmp_words, significant_len, UBigInt, ZERO_SKIP_MIN_WORDS};
use crate::word::{join, trial_quotient, DoubleWord, Word, WORD_BITS};
use core::cmp::Ordering;

/// `a /= d` for a single-word divisor, returning the remainder.
pub(crate) fn div_word_words(a: &mut [Word], d: Word) -> Word {
    debug_assert!(d != 0);
    let len = if a.len() > ZERO_SKIP_MIN_WORDS { significant_len(a) } else { a.len() };

    let mut rem: Word = 0;
    for x in a[..len].iter_mut().rev() {
        let cur = join(rem, *x);
        *x = (cur / d as DoubleWord) as Word;
        rem = (cur % d as DoubleWord) as Word;
    }
    rem
}

#[inline]
fn spill(w: Word, shift: u32) -> Word {
    if shift == 0 {
        0
    } else {
        w >> (WORD_BITS - shift)
    }
}

/// Long division of `u` by a nonzero `v` (Knuth, TAOCP vol. 2, 4.3.1 D).
///
/// `q` receives the quotient and must be at least as long as `u`; `r` receives
/// the remainder and must be at least as long as `v`. `un` (one word longer
/// than `u`) and `vn` (as long as `v`) are scratch space.
pub(crate) fn div_rem_words(
    u: &[Word],
    v: &[Word],
    q: &mut [Word],
    r: &mut [Word],
    un: &mut [Word],
    vn: &mut [Word],
) {
    debug_assert!(q.len() >= u.len() && r.len() >= v.len());
    debug_assert!(un.len() > u.len() && vn.len() >= v.len());
    q.fill(0);
    r.fill(0);

    let n = significant_len(v);
    let m = significant_len(u);
    debug_assert!(n > 0, "division by zero");
    if n == 0 || m == 0 {
        return;
    }

    if m < n || (m == n && cmp_words(&u[..n], &v[..n]) == Ordering::Less) {
        r[..m].copy_from_slice(&u[..m]);
        return;
    }

    if n == 1 {
        q[..m].copy_from_slice(&u[..m]);
        r[0] = div_word_words(&mut q[..m], v[0]);
        return;
    }

    // normalize so the divisor's top word has its high bit set
    let shift = v[n - 1].leading_zeros();
    for i in (1..n).rev() {
        vn[i] = (v[i] << shift) | spill(v[i - 1], shift);
    }
    vn[0] = v[0] << shift;

    un[m] = spill(u[m - 1], shift);
    for i in (1..m).rev() {
        un[i] = (u[i] << shift) | spill(u[i - 1], shift);
    }
    un[0] = u[0] << shift;

    let (v1, v0) = (vn[n - 1], vn[n - 2]);
    for j in (0..=m - n).rev() {
        let mut qhat = trial_quotient(un[j + n], un[j + n - 1], un[j + n - 2], v1, v0);

        // un[j..=j+n] -= qhat * vn
        let mut borrow: i64 = 0;
        let mut carry: DoubleWord = 0;
        for i in 0..n {
            let p = qhat as DoubleWord * vn[i] as DoubleWord + carry;
            carry = p >> WORD_BITS;
            let t = un[i + j] as i64 - (p & Word::MAX as DoubleWord) as i64 + borrow;
            un[i + j] = t as Word;
            borrow = t >> WORD_BITS;
        }
        let t = un[j + n] as i64 - carry as i64 + borrow;
        un[j + n] = t as Word;

        // the estimate was one too large: add the divisor back
        if t < 0 {
            qhat -= 1;
            let mut c: DoubleWord = 0;
            for i in 0..n {
                let s = un[i + j] as DoubleWord + vn[i] as DoubleWord + c;
                un[i + j] = s as Word;
                c = s >> WORD_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(c as Word);
        }
        q[j] = qhat;
    }

    for i in 0..n {
        let high = if shift == 0 { 0 } else { un[i + 1] << (WORD_BITS - shift) };
        r[i] = (un[i] >> shift) | high;
    }
}

impl<const N: usize> UBigInt<N> {
    /// Returns `(quotient, remainder)`.
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            log::debug!("UBigInt<{N}> divided by zero");
            return Err(Error::DivideByZero);
        }

        let mut quotient = Self::zero();
        let mut remainder = Self::zero();
        let mut un = [[0 as Word; N]; 2];
        let mut vn = [0 as Word; N];
        div_rem_words(
            &self.words,
            &divisor.words,
            &mut quotient.words,
            &mut remainder.words,
            &mut un.as_flattened_mut()[..N + 1],
            &mut vn,
        );
        Ok((quotient, remainder))
    }

    /// Divides in place by a single word and returns the remainder.
    pub fn divide_word(&mut self, divisor: Word) -> Result<Word, Error> {
        if divisor == 0 {
            log::debug!("UBigInt<{N}> divided by zero");
            return Err(Error::DivideByZero);
        }
        Ok(div_word_words(&mut self.words, divisor))
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::ubigint::{U128, U256, U512, U64};
    use crate::word::Word;
    use num_bigint::{BigUint, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_divide() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..300 {
            let bits_a = prng.gen_range(1..=512);
            let bits_b = prng.gen_range(1..=512);
            let a: BigUint = prng.sample(RandomBits::new(bits_a));
            let mut b: BigUint = prng.sample(RandomBits::new(bits_b));
            if b == BigUint::from(0u32) {
                b = BigUint::from(7u32);
            }

            let x = U512::try_from(&a).unwrap();
            let y = U512::try_from(&b).unwrap();
            let (q, r) = x.divide(&y).unwrap();
            let (eq, er) = (&a / &b, &a % &b);

            assert_eq!(BigUint::from(&q), eq);
            assert_eq!(BigUint::from(&r), er);
        }
    }

    #[test]
    fn test_divide_matches_native() {
        let dividends = [
            0u64,
            1,
            0xFFFF_FFFF,
            0x1_0000_0000,
            0x8000_0000_0000_0000,
            u64::MAX,
            0x1234_5678_9abc_def0,
        ];
        let divisors = [
            1u64,
            2,
            3,
            0x7FFF_FFFF,
            0x8000_0000,
            0xFFFF_FFFF,
            0x1_0000_0001,
            0x8000_0000_0000_0001,
            u64::MAX,
        ];

        for &a in dividends.iter() {
            for &b in divisors.iter().chain(std::iter::once(&a)) {
                if b == 0 {
                    continue;
                }
                let (q, r) = U64::from_u64(a).divide(&U64::from_u64(b)).unwrap();
                assert_eq!(q, U64::from_u64(a / b), "{a} / {b}");
                assert_eq!(r, U64::from_u64(a % b), "{a} % {b}");
            }
        }
    }

    #[test]
    fn test_divide_add_back() {
        let a = U128::from_words([0, 0, 0x8000_0000, 0x7FFF_FFFF]);
        let b = U128::from_words([1, 0, 0x8000_0000, 0]);
        let (q, r) = a.divide(&b).unwrap();
        let (ba, bb) = (BigUint::from(&a), BigUint::from(&b));
        let (eq, er) = (&ba / &bb, &ba % &bb);
        assert_eq!(BigUint::from(&q), eq);
        assert_eq!(BigUint::from(&r), er);
    }

    #[test]
    fn test_divide_remainder_denormalized() {
        // two-word divisor with a 19-bit normalization shift
        let a = U128::from_words([0x1234_5678, 0x9abc_def0, 0x1111_2222, 0x0333_4444]);
        let b = U128::from_words([0xdead_beef, 0x1234, 0, 0]);
        let (q, r) = a.divide(&b).unwrap();
        let (ba, bb) = (BigUint::from(&a), BigUint::from(&b));
        assert_eq!(BigUint::from(&q), &ba / &bb);
        assert_eq!(BigUint::from(&r), &ba % &bb);

        // already normalized divisor, no shift at all
        let b = U128::from_words([0x0000_0001, 0x8000_0000, 0, 0]);
        let (q, r) = a.divide(&b).unwrap();
        let bb = BigUint::from(&b);
        assert_eq!(BigUint::from(&q), &ba / &bb);
        assert_eq!(BigUint::from(&r), &ba % &bb);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(U256::one().divide(&U256::zero()), Err(Error::DivideByZero));
        assert_eq!(U256::one().divide_word(0), Err(Error::DivideByZero));
    }

    #[test]
    fn test_divide_word() {
        let mut prng = ChaCha20Rng::seed_from_u64(4);

        for _ in 0..100 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let d: Word = prng.gen::<Word>() | 1;
            let mut x = U256::try_from(&a).unwrap();
            let rem = x.divide_word(d).unwrap();
            let (eq, er) = (&a / d, &a % d);
            assert_eq!(BigUint::from(&x), eq);
            assert_eq!(BigUint::from(rem), er);
        }
    }
}

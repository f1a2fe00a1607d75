use crate::outcome::Outcome;
use crate::ubigint::{significant_len, UBigInt, WideUBigInt, ZERO_SKIP_MIN_WORDS};
use crate::word::{split, DoubleWord, Word};

#[inline]
fn active_len(a: &[Word]) -> usize {
    if a.len() > ZERO_SKIP_MIN_WORDS {
        significant_len(a)
    } else {
        a.len()
    }
}

/// `a *= n`, returning the word that did not fit.
pub(crate) fn mul_word_words(a: &mut [Word], n: Word) -> Word {
    let len = active_len(a);
    let mut carry: DoubleWord = 0;
    for x in a[..len].iter_mut() {
        let (hi, lo) = split(*x as DoubleWord * n as DoubleWord + carry);
        *x = lo;
        carry = hi as DoubleWord;
    }
    if len < a.len() {
        a[len] = carry as Word;
        0
    } else {
        carry as Word
    }
}

/// Schoolbook product; `out` must hold `a.len() + b.len()` words.
pub(crate) fn mul_full_words(a: &[Word], b: &[Word], out: &mut [Word]) {
    debug_assert_eq!(out.len(), a.len() + b.len());
    out.fill(0);

    let (na, nb) = (active_len(a), active_len(b));
    for (i, &x) in a[..na].iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry: DoubleWord = 0;
        for (j, &y) in b[..nb].iter().enumerate() {
            let t = x as DoubleWord * y as DoubleWord + out[i + j] as DoubleWord + carry;
            let (hi, lo) = split(t);
            out[i + j] = lo;
            carry = hi as DoubleWord;
        }
        out[i + nb] = carry as Word;
    }
}

impl<const N: usize> UBigInt<N> {
    /// Returns the overflow word beyond `N` words, 0 if the product fits.
    pub fn multiply_small(&mut self, n: Word) -> Word {
        mul_word_words(&mut self.words, n)
    }

    pub fn multiply_full(&self, rhs: &Self) -> WideUBigInt<N> {
        let mut out = WideUBigInt::zero();
        mul_full_words(&self.words, &rhs.words, out.as_words_mut());
        out
    }

    /// Keeps the low `N` words of the product.
    pub fn multiply(&mut self, rhs: &Self) -> Outcome {
        let product = self.multiply_full(rhs);
        *self = product.low();
        Outcome::from_carry(!product.high().is_zero())
    }
}

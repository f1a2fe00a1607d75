use crate::outcome::Outcome;
use crate::ubigint::UBigInt;
use crate::word::Word;

/// `a -= b` over equally long word slices, returning the borrow out of the top word.
pub(crate) fn sub_words(a: &mut [Word], b: &[Word]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = false;
    for (x, &y) in a.iter_mut().zip(b) {
        let (v, b1) = x.overflowing_sub(y);
        let (v, b2) = v.overflowing_sub(borrow as Word);
        *x = v;
        borrow = b1 || b2;
    }
    borrow
}

pub(crate) fn sub_word_at(a: &mut [Word], idx: usize, n: Word) -> bool {
    debug_assert!(idx < a.len());
    let (v, mut borrow) = a[idx].overflowing_sub(n);
    a[idx] = v;
    for x in a[idx + 1..].iter_mut() {
        if !borrow {
            break;
        }
        let (v, b) = x.overflowing_sub(1);
        *x = v;
        borrow = b;
    }
    borrow
}

impl<const N: usize> UBigInt<N> {
    /// `Overflow` means `rhs > self` and the result wrapped.
    pub fn subtract(&mut self, rhs: &Self) -> Outcome {
        Outcome::from_carry(sub_words(&mut self.words, &rhs.words))
    }

    pub fn sub_word(&mut self, n: Word) -> Outcome {
        Outcome::from_carry(sub_word_at(&mut self.words, 0, n))
    }
}

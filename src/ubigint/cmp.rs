use crate::ubigint::UBigInt;
use crate::word::Word;
use core::cmp::Ordering;

/// Compares equally long word slices from the most significant word down.
pub(crate) fn cmp_words(a: &[Word], b: &[Word]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// Index of the highest nonzero word plus one; zero for an all-zero slice.
pub(crate) fn significant_len(a: &[Word]) -> usize {
    a.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

impl<const N: usize> Ord for UBigInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_words(&self.words, &other.words)
    }
}

impl<const N: usize> PartialOrd for UBigInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

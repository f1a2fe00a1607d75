use crate::error::Error;
use crate::outcome::Outcome;
use crate::ubigint::{add_word_at, cmp_words, div_rem_words, shl_words, shr_words, UBigInt};
use crate::word::{highest_set_bit, Word, WORD_BITS};
use core::cmp::Ordering;
use core::fmt;
use num_bigint::BigUint;

/// Unsigned integer of `2 * N` words, the width of a full product of two
/// `UBigInt<N>`. The halves are kept as separate arrays and viewed as one
/// contiguous little-endian slice.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WideUBigInt<const N: usize> {
    words: [[Word; N]; 2],
}

impl<const N: usize> WideUBigInt<N> {
    pub const N_BITS: u32 = 2 * N as u32 * WORD_BITS;

    pub const fn zero() -> Self {
        Self { words: [[0; N]; 2] }
    }

    pub fn from_halves(low: UBigInt<N>, high: UBigInt<N>) -> Self {
        Self { words: [low.words, high.words] }
    }

    pub fn low(&self) -> UBigInt<N> {
        UBigInt::from_words(self.words[0])
    }

    pub fn high(&self) -> UBigInt<N> {
        UBigInt::from_words(self.words[1])
    }

    pub fn as_words(&self) -> &[Word] {
        self.words.as_flattened()
    }

    pub fn as_words_mut(&mut self) -> &mut [Word] {
        self.words.as_flattened_mut()
    }

    pub fn word(&self, idx: usize) -> Word {
        self.as_words()[idx]
    }

    pub fn set_word(&mut self, idx: usize, val: Word) {
        self.as_words_mut()[idx] = val;
    }

    pub fn is_zero(&self) -> bool {
        self.as_words().iter().all(|&w| w == 0)
    }

    pub fn highest_nonzero_word(&self) -> Option<usize> {
        self.as_words().iter().rposition(|&w| w != 0)
    }

    pub fn bit_length(&self) -> u32 {
        match self.highest_nonzero_word() {
            Some(i) => i as u32 * WORD_BITS + highest_set_bit(self.word(i)),
            None => 0,
        }
    }

    pub fn bit(&self, pos: u32) -> bool {
        self.word((pos / WORD_BITS) as usize) & (1 << (pos % WORD_BITS)) != 0
    }

    pub fn add_word(&mut self, n: Word) -> Outcome {
        Outcome::from_carry(add_word_at(self.as_words_mut(), 0, n))
    }

    pub fn shift_left(&mut self, bits: u32) {
        shl_words(self.as_words_mut(), bits, 0);
    }

    pub fn shift_right(&mut self, bits: u32) {
        shr_words(self.as_words_mut(), bits, 0);
    }

    /// Divides by a narrow divisor. The remainder always fits in `N` words.
    pub fn divide(&self, divisor: &UBigInt<N>) -> Result<(Self, UBigInt<N>), Error> {
        if divisor.is_zero() {
            log::debug!("WideUBigInt<{N}> divided by zero");
            return Err(Error::DivideByZero);
        }

        let mut quotient = Self::zero();
        let mut remainder = UBigInt::zero();
        let mut un = [[0 as Word; N]; 3];
        let mut vn = [0 as Word; N];
        div_rem_words(
            self.as_words(),
            &divisor.words,
            quotient.as_words_mut(),
            &mut remainder.words,
            &mut un.as_flattened_mut()[..2 * N + 1],
            &mut vn,
        );
        Ok((quotient, remainder))
    }
}

impl<const N: usize> Default for WideUBigInt<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<UBigInt<N>> for WideUBigInt<N> {
    fn from(v: UBigInt<N>) -> Self {
        Self::from_halves(v, UBigInt::zero())
    }
}

impl<const N: usize> Ord for WideUBigInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_words(self.as_words(), other.as_words())
    }
}

impl<const N: usize> PartialOrd for WideUBigInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> fmt::Debug for WideUBigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideUBigInt<{}>(0x{:x})", N, BigUint::from(self))
    }
}

impl<const N: usize> From<&WideUBigInt<N>> for BigUint {
    fn from(v: &WideUBigInt<N>) -> Self {
        BigUint::from_slice(v.as_words())
    }
}

use crate::word::{highest_set_bit, Word, WORD_BITS, WORD_MAX};

mod add;
mod bits;
mod cmp;
mod div;
mod mul;
mod ops;
mod pow;
mod std;
mod sub;
mod wide;

pub(crate) use add::{add_word_at, add_words};
pub(crate) use bits::{shl_words, shr_words};
pub(crate) use cmp::{cmp_words, significant_len};
pub(crate) use div::div_rem_words;
pub(crate) use mul::mul_full_words;
pub(crate) use sub::sub_words;
pub use wide::WideUBigInt;

/// Below this width the multiply and divide loops walk every word instead of
/// first looking for the highest nonzero one.
pub const ZERO_SKIP_MIN_WORDS: usize = 4;

/// Unsigned integer of exactly `N` 32-bit words, least significant word first.
///
/// Values never grow or shrink: leading zero words simply encode a smaller
/// magnitude. Every carry-producing operation keeps the result modulo
/// `2^(32 * N)` and reports whether it wrapped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UBigInt<const N: usize> {
    pub(crate) words: [Word; N],
}

pub type U64 = UBigInt<2>;
pub type U128 = UBigInt<4>;
pub type U256 = UBigInt<8>;
pub type U512 = UBigInt<16>;

impl<const N: usize> UBigInt<N> {
    pub const N_WORDS: usize = N;
    pub const N_BITS: u32 = N as u32 * WORD_BITS;

    pub const fn zero() -> Self {
        Self { words: [0; N] }
    }

    pub const fn max_value() -> Self {
        Self { words: [WORD_MAX; N] }
    }

    pub const fn from_words(words: [Word; N]) -> Self {
        Self { words }
    }

    pub fn one() -> Self {
        Self::from_word(1)
    }

    pub fn from_word(n: Word) -> Self {
        let mut v = Self::zero();
        v.words[0] = n;
        v
    }

    /// Bits above `32 * N` are dropped.
    pub fn from_u64(n: u64) -> Self {
        let mut v = Self::zero();
        v.words[0] = n as Word;
        if N > 1 {
            v.words[1] = (n >> WORD_BITS) as Word;
        }
        v
    }

    /// `n * 10^exp`, wrapping if it does not fit.
    pub fn pow10(n: Word, exp: Word) -> Self {
        let mut v = Self::from_word(10);
        v.power(exp);
        v.multiply_small(n);
        v
    }

    pub fn words(&self) -> &[Word; N] {
        &self.words
    }

    pub fn word(&self, idx: usize) -> Word {
        self.words[idx]
    }

    pub fn set_word(&mut self, idx: usize, val: Word) {
        self.words[idx] = val;
    }

    pub fn set_zero(&mut self) {
        self.words = [0; N];
    }

    pub fn set_max(&mut self) {
        self.words = [WORD_MAX; N];
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.words[0] & 1 != 0
    }

    pub fn highest_nonzero_word(&self) -> Option<usize> {
        self.words.iter().rposition(|&w| w != 0)
    }

    pub fn lowest_nonzero_word(&self) -> Option<usize> {
        self.words.iter().position(|&w| w != 0)
    }

    /// Number of bits needed to hold the value; zero needs none.
    pub fn bit_length(&self) -> u32 {
        match self.highest_nonzero_word() {
            Some(i) => i as u32 * WORD_BITS + highest_set_bit(self.words[i]),
            None => 0,
        }
    }

    pub fn bit(&self, pos: u32) -> bool {
        let (word, bit) = ((pos / WORD_BITS) as usize, pos % WORD_BITS);
        self.words[word] & (1 << bit) != 0
    }

    pub fn set_bit(&mut self, pos: u32) {
        let (word, bit) = ((pos / WORD_BITS) as usize, pos % WORD_BITS);
        self.words[word] |= 1 << bit;
    }

    /// Copies into a differently sized integer; high words are dropped or
    /// zero-filled. Returns whether any nonzero word was dropped.
    pub fn resize<const K: usize>(&self) -> (UBigInt<K>, bool) {
        let mut out = UBigInt::<K>::zero();
        let n = N.min(K);
        out.words[..n].copy_from_slice(&self.words[..n]);
        let dropped = self.words[n..].iter().any(|&w| w != 0);
        (out, dropped)
    }
}

impl<const N: usize> Default for UBigInt<N> {
    fn default() -> Self {
        Self::zero()
    }
}

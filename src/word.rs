//! Single-word helpers shared by every multi-word type.

pub type Word = u32;
pub type DoubleWord = u64;

pub const WORD_BITS: u32 = Word::BITS;
pub const WORD_HIGH_BIT: Word = 1 << (WORD_BITS - 1);
pub const WORD_MAX: Word = Word::MAX;

/// 1-based position of the most significant set bit, 0 for a zero word.
#[inline]
pub fn highest_set_bit(n: Word) -> u32 {
    WORD_BITS - n.leading_zeros()
}

/// 1-based position of the least significant set bit, 0 for a zero word.
#[inline]
pub fn lowest_set_bit(n: Word) -> u32 {
    if n == 0 {
        0
    } else {
        n.trailing_zeros() + 1
    }
}

#[inline]
pub(crate) fn split(v: DoubleWord) -> (Word, Word) {
    ((v >> WORD_BITS) as Word, v as Word)
}

#[inline]
pub(crate) fn join(high: Word, low: Word) -> DoubleWord {
    ((high as DoubleWord) << WORD_BITS) | low as DoubleWord
}

/// Estimates one quotient word of `(u2 u1 u0) / (v1 v0)`.
///
/// `v1` must have its high bit set and `(u2 u1) <= (v1 v0)` must hold, which
/// the normalization step of the long division guarantees. The estimate is
/// refined against `v0` so that it is either exact or one too large; the
/// caller detects the latter when the scaled subtraction borrows.
pub fn trial_quotient(u2: Word, u1: Word, u0: Word, v1: Word, v0: Word) -> Word {
    debug_assert!(v1 & WORD_HIGH_BIT != 0, "divisor is not normalized");
    debug_assert!(u2 <= v1);

    let base = 1 << WORD_BITS;
    let num = join(u2, u1);
    let v1w = v1 as DoubleWord;

    let mut qhat = if u2 >= v1 { WORD_MAX as DoubleWord } else { num / v1w };
    let mut rhat = num - qhat * v1w;

    while rhat < base && qhat * v0 as DoubleWord > ((rhat << WORD_BITS) | u0 as DoubleWord) {
        qhat -= 1;
        rhat += v1w;
    }
    qhat as Word
}

pub fn is_digit_char(c: char, radix: u32) -> bool {
    char_to_digit(c).map_or(false, |d| d < radix)
}

/// Value of a digit character in bases up to 16, `None` for anything else.
pub fn char_to_digit(c: char) -> Option<Word> {
    match c {
        '0'..='9' => Some(c as Word - '0' as Word),
        'a'..='f' => Some(c as Word - 'a' as Word + 10),
        'A'..='F' => Some(c as Word - 'A' as Word + 10),
        _ => None,
    }
}

pub fn digit_to_char(d: Word) -> Option<char> {
    char::from_digit(d, 16)
}

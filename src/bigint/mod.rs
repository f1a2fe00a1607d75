use crate::outcome::Outcome;
use crate::ubigint::UBigInt;
use crate::word::{Word, WORD_BITS, WORD_HIGH_BIT, WORD_MAX};

mod add;
mod bits;
mod cmp;
mod div;
mod mul;
mod ops;
mod std;
mod sub;

/// Two's-complement signed integer of `N` words.
///
/// The storage is a plain [`UBigInt`]; the top bit of the highest word is the
/// sign. Arithmetic runs on the unsigned representation and the signed
/// overflow is recovered from the operand and result signs afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigInt<const N: usize>(pub(crate) UBigInt<N>);

pub type I64 = BigInt<2>;
pub type I128 = BigInt<4>;
pub type I256 = BigInt<8>;

impl<const N: usize> BigInt<N> {
    pub const N_BITS: u32 = N as u32 * WORD_BITS;

    pub const fn zero() -> Self {
        Self(UBigInt::zero())
    }

    pub fn one() -> Self {
        Self(UBigInt::one())
    }

    pub fn min_value() -> Self {
        let mut v = UBigInt::zero();
        v.words[N - 1] = WORD_HIGH_BIT;
        Self(v)
    }

    pub fn max_value() -> Self {
        let mut v = UBigInt::max_value();
        v.words[N - 1] = WORD_MAX >> 1;
        Self(v)
    }

    pub fn from_i32(n: i32) -> Self {
        let fill = if n < 0 { WORD_MAX } else { 0 };
        let mut v = UBigInt::from_words([fill; N]);
        v.words[0] = n as Word;
        Self(v)
    }

    /// Sign-extends; bits above `32 * N` are dropped.
    pub fn from_i64(n: i64) -> Self {
        let fill = if n < 0 { WORD_MAX } else { 0 };
        let mut v = UBigInt::from_words([fill; N]);
        v.words[0] = n as Word;
        if N > 1 {
            v.words[1] = (n >> WORD_BITS) as Word;
        }
        Self(v)
    }

    /// Overflow only for a single-word integer when `n` has its top bit set.
    pub fn from_u32(n: u32) -> (Self, Outcome) {
        let v = Self(UBigInt::from_word(n));
        (v, Outcome::from_carry(N == 1 && n & WORD_HIGH_BIT != 0))
    }

    /// Reinterprets the bits. Overflow if the value reads back negative.
    pub fn from_unsigned(v: UBigInt<N>) -> (Self, Outcome) {
        let v = Self(v);
        (v, Outcome::from_carry(v.is_negative()))
    }

    pub fn as_unsigned(&self) -> &UBigInt<N> {
        &self.0
    }

    pub fn into_unsigned(self) -> UBigInt<N> {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.words[N - 1] & WORD_HIGH_BIT != 0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_min(&self) -> bool {
        self.0.words[N - 1] == WORD_HIGH_BIT && self.0.words[..N - 1].iter().all(|&w| w == 0)
    }

    pub fn set_zero(&mut self) {
        self.0.set_zero();
    }

    /// Two's complement in place. `MIN` maps to itself.
    pub fn negate(&mut self) {
        self.0.bit_not();
        self.0.add_word(1);
    }

    /// Overflow exactly when the value is `MIN`, which has no positive
    /// counterpart and is left unchanged.
    pub fn abs(&mut self) -> Outcome {
        if self.is_negative() {
            self.negate();
        }
        Outcome::from_carry(self.is_min())
    }

    /// Magnitude as an unsigned value; exact even for `MIN`.
    pub fn unsigned_abs(&self) -> UBigInt<N> {
        let mut v = *self;
        v.abs();
        v.0
    }

    /// `None` when the value does not fit in an `i32`.
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|v| i32::try_from(v).ok())
    }

    /// `None` when the value does not fit in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        let fill = if self.is_negative() { WORD_MAX } else { 0 };
        if self.0.words.iter().skip(2).any(|&w| w != fill) {
            return None;
        }

        let low = self.0.words[0] as u64;
        let high = if N > 1 { self.0.words[1] } else { fill };
        let v = ((high as u64) << WORD_BITS | low) as i64;
        // the sign of the truncated value must agree with the full one
        if (v < 0) != self.is_negative() {
            return None;
        }
        Some(v)
    }

    /// Copies into a different width, sign-extending. Overflow if the value
    /// does not fit the target.
    pub fn resize<const K: usize>(&self) -> (BigInt<K>, Outcome) {
        let negative = self.is_negative();
        let fill = if negative { WORD_MAX } else { 0 };
        let mut out = UBigInt::<K>::from_words([fill; K]);
        let n = N.min(K);
        out.words[..n].copy_from_slice(&self.0.words[..n]);

        let out = BigInt(out);
        let lost = self.0.words[n..].iter().any(|&w| w != fill) || out.is_negative() != negative;
        (out, Outcome::from_carry(lost))
    }
}

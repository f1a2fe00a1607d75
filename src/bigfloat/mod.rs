use crate::bigint::BigInt;
use crate::ubigint::UBigInt;
use crate::word::{WORD_BITS, WORD_HIGH_BIT};

mod add;
mod cmp;
pub mod decimal;
mod div;
mod ieee;
mod int;
mod mul;
mod norm;
mod ops;
mod transcendental;

pub(crate) const SIGN: u8 = 0x01;
pub(crate) const NAN: u8 = 0x02;
pub(crate) const INFINITY: u8 = 0x04;
pub(crate) const ZERO: u8 = 0x08;

/// Binary floating point number with an `M`-word mantissa and an `E`-word
/// two's-complement exponent.
///
/// A finite nonzero value is `1.fff... * 2^exponent`: the top mantissa bit is
/// always set and worth `2^0`. Zero, NaN and the infinities are flagged in
/// `stats` and keep an all-zero mantissa and exponent, so every value has a
/// single representation and equality is structural. There is no negative
/// zero.
#[derive(Clone, Copy)]
pub struct BigFloat<const M: usize, const E: usize> {
    pub(crate) stats: u8,
    pub(crate) exponent: BigInt<E>,
    pub(crate) mantissa: UBigInt<M>,
}

pub type Float128 = BigFloat<4, 1>;
pub type Float256 = BigFloat<8, 1>;
pub type Float1024 = BigFloat<32, 1>;

impl<const M: usize, const E: usize> BigFloat<M, E> {
    pub const MANTISSA_BITS: u32 = M as u32 * WORD_BITS;

    pub fn zero() -> Self {
        Self { stats: ZERO, exponent: BigInt::zero(), mantissa: UBigInt::zero() }
    }

    pub fn one() -> Self {
        let mut mantissa = UBigInt::zero();
        mantissa.set_word(M - 1, WORD_HIGH_BIT);
        Self { stats: 0, exponent: BigInt::zero(), mantissa }
    }

    pub fn nan() -> Self {
        Self { stats: NAN, exponent: BigInt::zero(), mantissa: UBigInt::zero() }
    }

    pub fn infinity(negative: bool) -> Self {
        let sign = if negative { SIGN } else { 0 };
        Self { stats: INFINITY | sign, exponent: BigInt::zero(), mantissa: UBigInt::zero() }
    }

    /// Builds a value from raw parts and standardizes it.
    pub fn from_parts(negative: bool, exponent: BigInt<E>, mantissa: UBigInt<M>) -> Self {
        let mut v = Self { stats: if negative { SIGN } else { 0 }, exponent, mantissa };
        v.standardize();
        v
    }

    pub fn exponent(&self) -> &BigInt<E> {
        &self.exponent
    }

    pub fn mantissa(&self) -> &UBigInt<M> {
        &self.mantissa
    }

    pub fn is_nan(&self) -> bool {
        self.stats & NAN != 0
    }

    pub fn is_infinite(&self) -> bool {
        self.stats & INFINITY != 0
    }

    pub fn is_finite(&self) -> bool {
        self.stats & (NAN | INFINITY) == 0
    }

    pub fn is_zero(&self) -> bool {
        self.stats & ZERO != 0
    }

    pub fn is_negative(&self) -> bool {
        self.stats & SIGN != 0
    }

    pub fn set_nan(&mut self) {
        *self = Self::nan();
    }

    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    pub fn set_one(&mut self) {
        *self = Self::one();
    }

    /// Zero and NaN carry no sign; for them this is a no-op.
    pub fn set_negative(&mut self, negative: bool) {
        if self.is_zero() || self.is_nan() {
            return;
        }
        if negative {
            self.stats |= SIGN;
        } else {
            self.stats &= !SIGN;
        }
    }

    pub fn abs(&mut self) {
        self.stats &= !SIGN;
    }

    pub fn negate(&mut self) {
        let negative = self.is_negative();
        self.set_negative(!negative);
    }
}

impl<const M: usize, const E: usize> Default for BigFloat<M, E> {
    fn default() -> Self {
        Self::zero()
    }
}

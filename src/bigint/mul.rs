use crate::bigint::BigInt;
use crate::outcome::Outcome;
use crate::word::Word;

impl<const N: usize> BigInt<N> {
    /// Wrapping multiply. The magnitudes are multiplied at full width, so
    /// Overflow is exact: it is reported iff the true product lies outside
    /// `[MIN, MAX]`.
    pub fn multiply(&mut self, rhs: &Self) -> Outcome {
        let negative = self.is_negative() != rhs.is_negative();
        let product = self.unsigned_abs().multiply_full(&rhs.unsigned_abs());

        let mut overflow = !product.high().is_zero();
        self.0 = product.low();
        if self.is_negative() {
            // only -2^(bits-1) may use the top bit of the magnitude
            overflow |= !(negative && self.is_min());
        }
        if negative {
            self.negate();
        }
        Outcome::from_carry(overflow)
    }

    pub fn multiply_i32(&mut self, n: i32) -> Outcome {
        self.multiply(&Self::from_i32(n))
    }

    /// Multiplies by a non-negative word.
    pub fn multiply_word(&mut self, n: Word) -> Outcome {
        let negative = self.is_negative();
        let mut magnitude = self.unsigned_abs();
        let mut overflow = magnitude.multiply_small(n) != 0;

        self.0 = magnitude;
        if self.is_negative() {
            overflow |= !(negative && self.is_min());
        }
        if negative {
            self.negate();
        }
        Outcome::from_carry(overflow)
    }
}

use crate::bigint::BigInt;
use crate::word::WORD_MAX;

impl<const N: usize> BigInt<N> {
    /// Shifts towards the top; bits pushed past the sign are lost.
    pub fn shift_left(&mut self, bits: u32) {
        self.0.shift_left(bits);
    }

    /// Arithmetic shift: the sign bit is replicated into the vacated bits,
    /// rounding towards negative infinity.
    pub fn shift_right(&mut self, bits: u32) {
        let fill = if self.is_negative() { WORD_MAX } else { 0 };
        self.0.shift_right_fill(bits, fill);
    }
}

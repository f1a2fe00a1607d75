use crate::outcome::Outcome;
use crate::ubigint::UBigInt;
use crate::word::Word;

impl<const N: usize> UBigInt<N> {
    /// `self = self^n` by square-and-multiply. `0^0` is `Indeterminate` and
    /// leaves the value untouched.
    pub fn power(&mut self, mut n: Word) -> Outcome {
        if n == 0 && self.is_zero() {
            return Outcome::Indeterminate;
        }

        let mut base = *self;
        *self = Self::one();

        let mut result = Outcome::Ok;
        loop {
            if n & 1 != 0 {
                result = result.and(self.multiply(&base));
            }
            n >>= 1;
            if n == 0 {
                break;
            }
            let square = base;
            result = result.and(base.multiply(&square));
        }
        result
    }

    /// Replaces the value with `floor(sqrt(self))`, one result bit per step.
    pub fn integer_square_root(&mut self) {
        if self.is_zero() {
            return;
        }

        let mut rest = *self;
        let mut root = Self::zero();
        let mut bit = Self::zero();
        bit.set_bit((self.bit_length() - 1) & !1);

        while !bit.is_zero() {
            let mut trial = root;
            trial.add(&bit);
            root.shift_right(1);
            if rest >= trial {
                rest.subtract(&trial);
                root.add(&bit);
            }
            bit.shift_right(2);
        }
        *self = root;
    }
}

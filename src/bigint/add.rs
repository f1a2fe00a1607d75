use crate::bigint::BigInt;
use crate::outcome::Outcome;

/// Signed overflow of `a + b = r`: both operands share a sign the result lacks.
#[inline]
pub(crate) fn add_overflowed(a_negative: bool, b_negative: bool, r_negative: bool) -> bool {
    a_negative == b_negative && a_negative != r_negative
}

impl<const N: usize> BigInt<N> {
    /// Wrapping add; Overflow when the signed result left the representable range.
    ///
    /// As with [`UBigInt::add`](crate::ubigint::UBigInt::add), an `Add` import
    /// makes `x.add(&y)` pick the status-dropping operator; use
    /// `BigInt::add(&mut x, &y)` in that case.
    pub fn add(&mut self, rhs: &Self) -> Outcome {
        let (a, b) = (self.is_negative(), rhs.is_negative());
        self.0.add(&rhs.0);
        Outcome::from_carry(add_overflowed(a, b, self.is_negative()))
    }

    pub fn add_i32(&mut self, n: i32) -> Outcome {
        self.add(&Self::from_i32(n))
    }
}

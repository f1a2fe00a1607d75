use crate::bigint::BigInt;
use crate::error::Error;

impl<const N: usize> BigInt<N> {
    /// Truncating division, returning `(quotient, remainder)`. The remainder
    /// takes the sign of the dividend. `MIN / -1` does not fit and is
    /// reported as out of range.
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        let (q, r) = self.unsigned_abs().divide(&divisor.unsigned_abs())?;

        let mut quotient = BigInt(q);
        let mut remainder = BigInt(r);
        let negative = self.is_negative() != divisor.is_negative();
        if quotient.is_negative() && !(negative && quotient.is_min()) {
            log::debug!("BigInt<{N}> quotient does not fit");
            return Err(Error::OutOfRange);
        }
        if negative {
            quotient.negate();
        }
        if self.is_negative() {
            remainder.negate();
        }
        Ok((quotient, remainder))
    }
}

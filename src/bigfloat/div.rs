use crate::bigfloat::BigFloat;
use crate::outcome::Outcome;
use crate::ubigint::{UBigInt, WideUBigInt};

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// `self /= rhs`, rounded to nearest. A zero divisor leaves `self`
    /// unchanged and reports `DomainError`.
    pub fn divide(&mut self, rhs: &Self) -> Outcome {
        self.divide_exact(rhs).0
    }

    /// Like [`divide`](Self::divide), also telling whether the quotient was
    /// exact before rounding.
    pub fn divide_exact(&mut self, rhs: &Self) -> (Outcome, bool) {
        if self.is_nan() || rhs.is_nan() {
            self.set_nan();
            return (Outcome::Indeterminate, false);
        }
        if rhs.is_zero() {
            log::debug!("BigFloat<{M}, {E}> divided by zero");
            return (Outcome::DomainError, false);
        }

        let negative = self.is_negative() != rhs.is_negative();
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) => {
                self.set_nan();
                return (Outcome::Indeterminate, false);
            }
            (true, false) => {
                *self = Self::infinity(negative);
                return (Outcome::Ok, true);
            }
            (false, true) => {
                let exact = self.is_zero();
                self.set_zero();
                return (Outcome::Ok, exact);
            }
            _ => {}
        }
        if self.is_zero() {
            return (Outcome::Ok, true);
        }

        let mut exponent = self.exponent;
        if !exponent.subtract(&rhs.exponent).is_ok() {
            self.set_negative(negative);
            return (self.saturate(rhs.exponent.is_negative()), false);
        }

        // q = a * 2^n / b lies in [2^(n-1), 2^(n+1))
        let numerator = WideUBigInt::from_halves(UBigInt::zero(), self.mantissa);
        let (quotient, remainder) = match numerator.divide(&rhs.mantissa) {
            Ok(qr) => qr,
            Err(_) => return (Outcome::DomainError, false),
        };

        let top = Self::MANTISSA_BITS;
        let (mantissa, round, dropped, extra) = if quotient.bit(top) {
            let mut q = quotient;
            q.shift_right(1);
            (q.low(), quotient.bit(0), quotient.bit(0), 0)
        } else {
            // round when 2 * remainder >= divisor
            let round = remainder.bit(top - 1) || {
                let mut twice = remainder;
                twice.shift_left(1);
                twice >= rhs.mantissa
            };
            (quotient.low(), round, false, -1)
        };

        self.stats = 0;
        self.set_negative(negative);
        self.exponent = exponent;
        self.mantissa = mantissa;
        let exact = remainder.is_zero() && !dropped;

        let mut outcome = self.offset_exponent(extra);
        if outcome.is_ok() && round {
            outcome = self.round_up();
        }
        (outcome, exact)
    }

    /// `self = 1 / self`.
    pub fn inverse(&mut self) -> Outcome {
        if self.is_zero() {
            log::debug!("BigFloat<{M}, {E}> inverse of zero");
            return Outcome::DomainError;
        }
        let divisor = *self;
        *self = Self::one();
        self.divide(&divisor)
    }
}

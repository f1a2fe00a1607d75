//! Logarithm, exponential and powers. The series stop as soon as the next
//! term no longer aligns with the partial sum, i.e. adding it would be a
//! no-op.

use crate::bigfloat::BigFloat;
use crate::bigint::BigInt;
use crate::outcome::Outcome;
use crate::ubigint::UBigInt;
use crate::word::Word;

/// Top mantissa word of `sqrt(2)`.
const SQRT2_TOP_WORD: Word = 0xB504_F333;

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// `ln(x) = 2 * atanh((x - 1) / (x + 1))`, for `x` close to one.
    fn ln_series(x: &Self) -> Self {
        let mut y = *x;
        y.subtract(&Self::one());
        let mut den = *x;
        den.add(&Self::one());
        y.divide(&den);

        let mut y2 = y;
        y2.multiply(&y);

        let mut power = y;
        let mut sum = y;
        let mut n: u32 = 1;
        loop {
            power.multiply(&y2);
            let mut term = power;
            term.divide(&Self::from_u32(2 * n + 1));
            if term.is_zero() || !sum.aligns_with(&term) {
                break;
            }
            sum.add(&term);
            n += 1;
        }
        log::trace!("BigFloat<{M}, {E}> ln series: {n} terms");

        if !sum.is_zero() {
            sum.offset_exponent(1);
        }
        sum
    }

    /// Taylor series of `e^x`, for `|x| < 1`.
    fn exp_series(x: &Self) -> Self {
        let mut sum = Self::one();
        let mut term = Self::one();
        let mut n: u32 = 1;
        loop {
            term.multiply(x);
            term.divide(&Self::from_u32(n));
            if term.is_zero() || !sum.aligns_with(&term) {
                break;
            }
            sum.add(&term);
            n += 1;
        }
        log::trace!("BigFloat<{M}, {E}> exp series: {n} terms");
        sum
    }

    pub fn ln2() -> Self {
        Self::ln_series(&Self::from_u32(2))
    }

    pub fn ln10() -> Self {
        let mut v = Self::from_u32(10);
        v.ln();
        v
    }

    /// Natural logarithm in place. Zero and negative values become NaN and
    /// report `DomainError`.
    pub fn ln(&mut self) -> Outcome {
        if self.is_nan() {
            return Outcome::Indeterminate;
        }
        if self.is_zero() || self.is_negative() {
            log::debug!("ln of non-positive BigFloat<{M}, {E}>");
            self.set_nan();
            return Outcome::DomainError;
        }
        if self.is_infinite() {
            return Outcome::Ok;
        }

        // x = m * 2^e with m in [sqrt(2) / 2, sqrt(2))
        let mut exponent = self.exponent;
        let mut m = *self;
        m.exponent = BigInt::zero();
        let mut reduced = exponent;
        if m.mantissa.word(M - 1) > SQRT2_TOP_WORD && reduced.add_i32(1).is_ok() {
            m.exponent = BigInt::from_i32(-1);
            exponent = reduced;
        }

        let mut result = Self::ln_series(&m);
        if !exponent.is_zero() {
            let mut scaled = Self::ln2();
            scaled.multiply(&Self::from_bigint(&exponent));
            result.add(&scaled);
        }
        *self = result;
        Outcome::Ok
    }

    /// `e^self` in place. The argument is scaled into `[0.5, 1)`, run
    /// through the series and squared back up.
    pub fn exp(&mut self) -> Outcome {
        if self.is_nan() {
            return Outcome::Indeterminate;
        }
        if self.is_infinite() {
            if self.is_negative() {
                self.set_zero();
            }
            return Outcome::Ok;
        }
        if self.is_zero() {
            self.set_one();
            return Outcome::Ok;
        }
        if self.exponent.is_negative() {
            *self = Self::exp_series(self);
            return Outcome::Ok;
        }

        let squarings = match self.exponent.to_i64() {
            Some(e) => e + 1,
            None => {
                let upward = !self.is_negative();
                self.abs();
                return self.saturate(upward);
            }
        };

        let mut reduced = *self;
        reduced.exponent = BigInt::from_i32(-1);
        let mut result = Self::exp_series(&reduced);
        for _ in 0..squarings {
            let square = result;
            let outcome = result.multiply(&square);
            if !outcome.is_ok() {
                *self = result;
                return outcome;
            }
        }
        *self = result;
        Outcome::Ok
    }

    /// `self^y` as `exp(y * ln(self))`. Integral exponents go through
    /// [`powi`](Self::powi), so negative bases work for them; any other
    /// exponent of a negative base is a `DomainError`.
    pub fn pow(&mut self, y: &Self) -> Outcome {
        if self.is_nan() || y.is_nan() {
            self.set_nan();
            return Outcome::Indeterminate;
        }
        if y.is_integer() {
            if let Some(n) = y.to_i64() {
                return self.powi(n);
            }
        }
        if self.is_negative() {
            log::debug!("non-integral power of negative BigFloat<{M}, {E}>");
            self.set_nan();
            return Outcome::DomainError;
        }
        if self.is_zero() {
            if y.is_negative() {
                log::debug!("negative power of zero BigFloat<{M}, {E}>");
                return Outcome::DomainError;
            }
            return Outcome::Ok;
        }

        let outcome = self.ln();
        let outcome = outcome.and(self.multiply(y));
        outcome.and(self.exp())
    }

    /// Square-and-multiply. `0^0` is NaN and reports `Indeterminate`.
    pub fn pow_uint<const K: usize>(&mut self, n: &UBigInt<K>) -> Outcome {
        if self.is_nan() {
            return Outcome::Indeterminate;
        }
        if n.is_zero() {
            if self.is_zero() {
                self.set_nan();
                return Outcome::Indeterminate;
            }
            self.set_one();
            return Outcome::Ok;
        }

        let base = *self;
        let mut outcome = Outcome::Ok;
        for i in (0..n.bit_length() - 1).rev() {
            let square = *self;
            outcome = outcome.and(self.multiply(&square));
            if n.bit(i) {
                outcome = outcome.and(self.multiply(&base));
            }
        }
        outcome
    }

    /// Negative exponents invert the power. A power that underflows to zero
    /// inverts to infinity.
    pub fn pow_int<const K: usize>(&mut self, n: &BigInt<K>) -> Outcome {
        if self.is_nan() {
            return Outcome::Indeterminate;
        }
        if !n.is_negative() {
            return self.pow_uint(n.as_unsigned());
        }
        if self.is_zero() {
            log::debug!("negative power of zero BigFloat<{M}, {E}>");
            return Outcome::DomainError;
        }

        let magnitude = n.unsigned_abs();
        let negative = self.is_negative() && magnitude.is_odd();
        let outcome = self.pow_uint(&magnitude);
        if self.is_zero() {
            *self = Self::infinity(negative);
            return Outcome::Overflow;
        }
        outcome.and(self.inverse())
    }

    pub fn powi(&mut self, n: i64) -> Outcome {
        self.pow_int(&BigInt::<2>::from_i64(n))
    }

    /// `10^exp`, exact while it fits the mantissa.
    pub fn pow10(exp: u64) -> (Self, Outcome) {
        let mut v = Self::from_u32(10);
        let outcome = v.pow_uint(&UBigInt::<2>::from_u64(exp));
        (v, outcome)
    }
}

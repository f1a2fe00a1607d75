use crate::bigfloat::BigFloat;
use crate::outcome::Outcome;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// Division as the `/` operator sees it: a zero divisor gives `±infinity`,
    /// or NaN for `0 / 0`, instead of leaving `self` untouched.
    fn divide_saturating(&mut self, rhs: &Self) -> Outcome {
        let outcome = self.divide(rhs);
        if outcome == Outcome::DomainError {
            *self = if self.is_zero() { Self::nan() } else { Self::infinity(self.is_negative()) };
        }
        outcome
    }
}

/// Operators drop the `Outcome`; overflow and division by zero are still
/// visible in the value as an infinity, zero or NaN.
macro_rules! impl_float_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $method:ident) => {
        impl<const M: usize, const E: usize> $assign<&BigFloat<M, E>> for BigFloat<M, E> {
            fn $assign_fn(&mut self, rhs: &BigFloat<M, E>) {
                let _ = BigFloat::$method(self, rhs);
            }
        }

        impl<const M: usize, const E: usize> $assign for BigFloat<M, E> {
            fn $assign_fn(&mut self, rhs: BigFloat<M, E>) {
                let _ = BigFloat::$method(self, &rhs);
            }
        }

        impl<const M: usize, const E: usize> $op for BigFloat<M, E> {
            type Output = BigFloat<M, E>;

            fn $op_fn(mut self, rhs: BigFloat<M, E>) -> BigFloat<M, E> {
                let _ = BigFloat::$method(&mut self, &rhs);
                self
            }
        }

        impl<const M: usize, const E: usize> $op<&BigFloat<M, E>> for BigFloat<M, E> {
            type Output = BigFloat<M, E>;

            fn $op_fn(mut self, rhs: &BigFloat<M, E>) -> BigFloat<M, E> {
                let _ = BigFloat::$method(&mut self, rhs);
                self
            }
        }
    };
}

impl_float_op!(Add, add, AddAssign, add_assign, add);
impl_float_op!(Sub, sub, SubAssign, sub_assign, subtract);
impl_float_op!(Mul, mul, MulAssign, mul_assign, multiply);
impl_float_op!(Div, div, DivAssign, div_assign, divide_saturating);

impl<const M: usize, const E: usize> Neg for BigFloat<M, E> {
    type Output = BigFloat<M, E>;

    fn neg(mut self) -> BigFloat<M, E> {
        self.negate();
        self
    }
}

impl<const M: usize, const E: usize> From<u32> for BigFloat<M, E> {
    fn from(v: u32) -> Self {
        Self::from_u32(v)
    }
}

impl<const M: usize, const E: usize> From<i32> for BigFloat<M, E> {
    fn from(v: i32) -> Self {
        Self::from_i32(v)
    }
}

impl<const M: usize, const E: usize> Zero for BigFloat<M, E> {
    fn zero() -> Self {
        BigFloat::zero()
    }

    fn is_zero(&self) -> bool {
        BigFloat::is_zero(self)
    }
}

impl<const M: usize, const E: usize> One for BigFloat<M, E> {
    fn one() -> Self {
        BigFloat::one()
    }
}

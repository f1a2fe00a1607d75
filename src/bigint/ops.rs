use crate::bigint::BigInt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Shl, Shr, Sub, SubAssign};
use num_traits::{Bounded, One, Zero};

macro_rules! impl_wrapping_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $method:ident) => {
        impl<const N: usize> $assign<&BigInt<N>> for BigInt<N> {
            fn $assign_fn(&mut self, rhs: &BigInt<N>) {
                let _ = BigInt::$method(self, rhs);
            }
        }

        impl<const N: usize> $assign for BigInt<N> {
            fn $assign_fn(&mut self, rhs: BigInt<N>) {
                let _ = BigInt::$method(self, &rhs);
            }
        }

        impl<const N: usize> $op for BigInt<N> {
            type Output = BigInt<N>;

            fn $op_fn(mut self, rhs: BigInt<N>) -> BigInt<N> {
                let _ = BigInt::$method(&mut self, &rhs);
                self
            }
        }

        impl<const N: usize> $op<&BigInt<N>> for BigInt<N> {
            type Output = BigInt<N>;

            fn $op_fn(mut self, rhs: &BigInt<N>) -> BigInt<N> {
                let _ = BigInt::$method(&mut self, rhs);
                self
            }
        }
    };
}

impl_wrapping_op!(Add, add, AddAssign, add_assign, add);
impl_wrapping_op!(Sub, sub, SubAssign, sub_assign, subtract);
impl_wrapping_op!(Mul, mul, MulAssign, mul_assign, multiply);

impl<const N: usize> Neg for BigInt<N> {
    type Output = BigInt<N>;

    fn neg(mut self) -> BigInt<N> {
        self.negate();
        self
    }
}

impl<const N: usize> Shl<u32> for BigInt<N> {
    type Output = BigInt<N>;

    fn shl(mut self, bits: u32) -> BigInt<N> {
        self.shift_left(bits);
        self
    }
}

impl<const N: usize> Shr<u32> for BigInt<N> {
    type Output = BigInt<N>;

    fn shr(mut self, bits: u32) -> BigInt<N> {
        self.shift_right(bits);
        self
    }
}

impl<const N: usize> Zero for BigInt<N> {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl<const N: usize> One for BigInt<N> {
    fn one() -> Self {
        BigInt::one()
    }
}

impl<const N: usize> Bounded for BigInt<N> {
    fn min_value() -> Self {
        BigInt::min_value()
    }

    fn max_value() -> Self {
        BigInt::max_value()
    }
}

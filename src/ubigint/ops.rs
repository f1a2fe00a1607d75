//! Operator sugar. Arithmetic operators wrap modulo `2^(32 * N)` and drop the
//! status; call the named methods to observe overflow.

use crate::ubigint::UBigInt;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, MulAssign,
    Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use num_traits::{Bounded, One, Zero};

macro_rules! impl_binary_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $method:ident) => {
        impl<const N: usize> $assign<&UBigInt<N>> for UBigInt<N> {
            fn $assign_fn(&mut self, rhs: &UBigInt<N>) {
                let _ = UBigInt::$method(self, rhs);
            }
        }

        impl<const N: usize> $assign for UBigInt<N> {
            fn $assign_fn(&mut self, rhs: UBigInt<N>) {
                let _ = UBigInt::$method(self, &rhs);
            }
        }

        impl<const N: usize> $op<&UBigInt<N>> for UBigInt<N> {
            type Output = UBigInt<N>;

            fn $op_fn(mut self, rhs: &UBigInt<N>) -> UBigInt<N> {
                let _ = UBigInt::$method(&mut self, rhs);
                self
            }
        }

        impl<const N: usize> $op for UBigInt<N> {
            type Output = UBigInt<N>;

            fn $op_fn(mut self, rhs: UBigInt<N>) -> UBigInt<N> {
                let _ = UBigInt::$method(&mut self, &rhs);
                self
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, subtract);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, multiply);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, bit_and);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, bit_or);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, bit_xor);

impl<const N: usize> Not for UBigInt<N> {
    type Output = UBigInt<N>;

    fn not(mut self) -> UBigInt<N> {
        self.bit_not();
        self
    }
}

impl<const N: usize> Shl<u32> for UBigInt<N> {
    type Output = UBigInt<N>;

    fn shl(mut self, bits: u32) -> UBigInt<N> {
        self.shift_left(bits);
        self
    }
}

impl<const N: usize> ShlAssign<u32> for UBigInt<N> {
    fn shl_assign(&mut self, bits: u32) {
        self.shift_left(bits);
    }
}

impl<const N: usize> Shr<u32> for UBigInt<N> {
    type Output = UBigInt<N>;

    fn shr(mut self, bits: u32) -> UBigInt<N> {
        self.shift_right(bits);
        self
    }
}

impl<const N: usize> ShrAssign<u32> for UBigInt<N> {
    fn shr_assign(&mut self, bits: u32) {
        self.shift_right(bits);
    }
}

impl<const N: usize> Zero for UBigInt<N> {
    fn zero() -> Self {
        UBigInt::zero()
    }

    fn is_zero(&self) -> bool {
        UBigInt::is_zero(self)
    }
}

impl<const N: usize> One for UBigInt<N> {
    fn one() -> Self {
        UBigInt::one()
    }
}

impl<const N: usize> Bounded for UBigInt<N> {
    fn min_value() -> Self {
        UBigInt::zero()
    }

    fn max_value() -> Self {
        UBigInt::max_value()
    }
}

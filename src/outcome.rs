use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Status of an in-place arithmetic operation.
///
/// * `Ok` - the stored result is exact (or correctly rounded for floats).
/// * `Overflow` - the true result did not fit. Integers keep the value modulo
///   `2^(32 * N)`; floats saturate to infinity (or to zero on underflow).
/// * `Indeterminate` - the operation has no defined value, e.g. `0^0`.
/// * `DomainError` - an operand is outside the domain, e.g. a zero divisor or
///   the logarithm of a non-positive number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Outcome {
    Ok,
    Overflow,
    Indeterminate,
    DomainError,
}

impl Outcome {
    #[inline]
    pub fn from_carry(carry: bool) -> Self {
        if carry {
            Outcome::Overflow
        } else {
            Outcome::Ok
        }
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        self == Outcome::Ok
    }

    /// Keeps the first failure of a chain of operations.
    #[inline]
    pub fn and(self, next: Outcome) -> Outcome {
        if self.is_ok() {
            next
        } else {
            self
        }
    }
}

#[cfg(test)]
mod test {
    use super::Outcome;
    use strum::IntoEnumIterator;

    #[test]
    fn test_and() {
        for a in Outcome::iter() {
            for b in Outcome::iter() {
                let c = a.and(b);
                if a.is_ok() {
                    assert_eq!(c, b);
                } else {
                    assert_eq!(c, a);
                }
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Outcome::from_carry(true).to_string(), "Overflow");
        let name: &'static str = Outcome::DomainError.into();
        assert_eq!(name, "DomainError");
    }
}

use crate::bigfloat::BigFloat;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

impl<const M: usize, const E: usize> BigFloat<M, E> {
    /// Compares magnitudes; `None` if either side is NaN.
    pub fn cmp_abs(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        let ordering = match (self.is_infinite(), other.is_infinite()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => match (self.is_zero(), other.is_zero()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => self
                    .exponent
                    .cmp(&other.exponent)
                    .then_with(|| self.mantissa.cmp(&other.mantissa)),
            },
        };
        Some(ordering)
    }
}

impl<const M: usize, const E: usize> PartialEq for BigFloat<M, E> {
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan()
            && !other.is_nan()
            && self.stats == other.stats
            && self.exponent == other.exponent
            && self.mantissa == other.mantissa
    }
}

impl<const M: usize, const E: usize> Hash for BigFloat<M, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stats.hash(state);
        self.exponent.hash(state);
        self.mantissa.hash(state);
    }
}

impl<const M: usize, const E: usize> PartialOrd for BigFloat<M, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let magnitude = self.cmp_abs(other)?;
        Some(match (self.is_negative(), other.is_negative()) {
            (false, false) => magnitude,
            (true, true) => magnitude.reverse(),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        })
    }
}

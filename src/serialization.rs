use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::Display;

use crate::bigfloat::BigFloat;
use crate::bigint::BigInt;
use crate::error::Error;
use crate::ubigint::UBigInt;

impl<const N: usize> Serialize for UBigInt<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for UBigInt<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UBigInt::from_hex(&s).map_err(D::Error::custom)
    }
}

impl<const N: usize> Serialize for BigInt<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, const N: usize> Deserialize<'de> for BigInt<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Which kind of value a [`SerializableBigFloat`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FloatClass {
    NaN,
    Infinity,
    Zero,
    Finite,
}

/// Exact mirror of a [`BigFloat`]: the exponent in decimal, the mantissa
/// as fixed-width hex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerializableBigFloat {
    pub class: FloatClass,
    pub negative: bool,
    pub exponent: String,
    pub mantissa: String,
}

impl<const M: usize, const E: usize> BigFloat<M, E> {
    pub fn as_serializable(&self) -> SerializableBigFloat {
        let class = if self.is_nan() {
            FloatClass::NaN
        } else if self.is_infinite() {
            FloatClass::Infinity
        } else if self.is_zero() {
            FloatClass::Zero
        } else {
            FloatClass::Finite
        };
        SerializableBigFloat {
            class,
            negative: self.is_negative(),
            exponent: self.exponent.to_string(),
            mantissa: self.mantissa.to_hex(),
        }
    }

    /// Rejects finite values whose mantissa is not standardized.
    pub fn from_serializable(v: &SerializableBigFloat) -> Result<Self, Error> {
        match v.class {
            FloatClass::NaN => Ok(Self::nan()),
            FloatClass::Infinity => Ok(Self::infinity(v.negative)),
            FloatClass::Zero => Ok(Self::zero()),
            FloatClass::Finite => {
                let exponent: BigInt<E> = v.exponent.parse()?;
                let mantissa = UBigInt::<M>::from_hex(&v.mantissa)?;
                if !mantissa.bit(Self::MANTISSA_BITS - 1) {
                    return Err(Error::MalformedNumber("mantissa is not standardized"));
                }
                Ok(Self::from_parts(v.negative, exponent, mantissa))
            }
        }
    }
}

impl<const M: usize, const E: usize> Serialize for BigFloat<M, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_serializable().serialize(serializer)
    }
}

impl<'de, const M: usize, const E: usize> Deserialize<'de> for BigFloat<M, E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = SerializableBigFloat::deserialize(deserializer)?;
        BigFloat::from_serializable(&v).map_err(D::Error::custom)
    }
}

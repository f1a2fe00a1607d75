//! Fixed-width multi-word arithmetic: unsigned and two's-complement
//! integers of `N` 32-bit words, and binary floating point numbers built
//! from them. Every value lives on the stack; no operation allocates
//! except string formatting.

pub mod bigfloat;
pub mod bigint;
pub mod error;
pub mod outcome;
pub mod serialization;
pub mod ubigint;
pub mod word;

pub use bigfloat::{BigFloat, Float1024, Float128, Float256};
pub use bigint::{BigInt, I128, I256, I64};
pub use error::Error;
pub use outcome::Outcome;
pub use serialization::{FloatClass, SerializableBigFloat};
pub use ubigint::{UBigInt, WideUBigInt, U128, U256, U512, U64};

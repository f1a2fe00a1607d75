use crate::error::Error;
use crate::ubigint::div::div_word_words;
use crate::ubigint::UBigInt;
use crate::word::{char_to_digit, digit_to_char, Word, WORD_BITS};
use core::fmt;
use core::str::FromStr;
use num_bigint::BigUint;

const WORD_BYTES: usize = (WORD_BITS / 8) as usize;

impl<const N: usize> UBigInt<N> {
    /// Formats in any radix from 2 to 16, lowercase, without a prefix.
    pub fn to_str_radix(&self, radix: u32) -> String {
        debug_assert!((2..=16).contains(&radix), "radix {radix} out of range");
        if self.is_zero() {
            return "0".to_string();
        }

        let mut digits = Vec::with_capacity(Self::N_BITS as usize);
        let mut rest = self.words;
        while rest.iter().any(|&w| w != 0) {
            let d = div_word_words(&mut rest, radix);
            digits.extend(digit_to_char(d));
        }
        digits.iter().rev().collect()
    }

    /// Parses digits in the given radix. The string is validated before any
    /// arithmetic; values too large for `N` words wrap silently.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        if !(2..=16).contains(&radix) {
            return Err(Error::InvalidRadix(radix));
        }
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut value = Self::zero();
        for (position, c) in s.chars().enumerate() {
            let d = match char_to_digit(c) {
                Some(d) if d < radix => d,
                _ => return Err(Error::InvalidDigit { position, found: c }),
            };
            value.multiply_small(radix);
            value.add_word(d);
        }
        Ok(value)
    }

    /// Big-endian bytes, always `4 * N` of them.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.words.iter().rev().flat_map(|w| w.to_be_bytes()).collect()
    }

    /// Accepts up to `4 * N` significant bytes; leading zero bytes beyond
    /// that are ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let bytes = &bytes[start..];
        if bytes.len() > N * WORD_BYTES {
            return Err(Error::OutOfRange);
        }

        let mut value = Self::zero();
        for (i, chunk) in bytes.rchunks(WORD_BYTES).enumerate() {
            let mut buf = [0u8; WORD_BYTES];
            buf[WORD_BYTES - chunk.len()..].copy_from_slice(chunk);
            value.words[i] = Word::from_be_bytes(buf);
        }
        Ok(value)
    }

    /// Fixed-width hex, `8 * N` digits.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Parses hex with an optional `0x` prefix and any number of digits.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.is_empty() {
            return Err(Error::EmptyInput);
        }
        let bytes = if s.len() % 2 == 1 {
            hex::decode(format!("0{s}"))?
        } else {
            hex::decode(s)?
        };
        Self::from_be_bytes(&bytes)
    }
}

impl<const N: usize> fmt::Display for UBigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_str_radix(10))
    }
}

impl<const N: usize> fmt::LowerHex for UBigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_str_radix(16))
    }
}

impl<const N: usize> fmt::Debug for UBigInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UBigInt<{}>(0x{})", N, self.to_hex())
    }
}

impl<const N: usize> FromStr for UBigInt<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl<const N: usize> From<&UBigInt<N>> for BigUint {
    fn from(v: &UBigInt<N>) -> Self {
        BigUint::from_slice(&v.words)
    }
}

impl<const N: usize> From<UBigInt<N>> for BigUint {
    fn from(v: UBigInt<N>) -> Self {
        BigUint::from(&v)
    }
}

impl<const N: usize> TryFrom<&BigUint> for UBigInt<N> {
    type Error = Error;

    fn try_from(v: &BigUint) -> Result<Self, Self::Error> {
        let digits = v.to_u32_digits();
        if digits.len() > N {
            return Err(Error::OutOfRange);
        }
        let mut out = Self::zero();
        out.words[..digits.len()].copy_from_slice(&digits);
        Ok(out)
    }
}

impl<const N: usize> From<u32> for UBigInt<N> {
    fn from(n: u32) -> Self {
        Self::from_word(n)
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::ubigint::{UBigInt, U128, U256, U64};
    use num_bigint::{BigUint, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_to_str_radix() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..50 {
            let a: BigUint = prng.sample(RandomBits::new(256));
            let x = U256::try_from(&a).unwrap();
            for radix in [2, 7, 10, 16] {
                assert_eq!(x.to_str_radix(radix), a.to_str_radix(radix));
                assert_eq!(U256::from_str_radix(&a.to_str_radix(radix), radix).unwrap(), x);
            }
        }
        assert_eq!(U64::zero().to_string(), "0");
    }

    #[test]
    fn test_from_str_errors() {
        assert_eq!(U64::from_str_radix("12", 17), Err(Error::InvalidRadix(17)));
        assert_eq!("".parse::<U64>(), Err(Error::EmptyInput));
        assert_eq!("12a4".parse::<U64>(), Err(Error::InvalidDigit { position: 2, found: 'a' }));
        assert_eq!("-1".parse::<U64>(), Err(Error::InvalidDigit { position: 0, found: '-' }));
    }

    #[test]
    fn test_from_str_wraps() {
        // 2^64 + 5 wraps to 5 in two words
        let x: U64 = "18446744073709551621".parse().unwrap();
        assert_eq!(x, U64::from_word(5));
    }

    #[test]
    fn test_hex() {
        let x = U64::from_u64(0x0123_4567_89ab_cdef);
        assert_eq!(x.to_hex(), "0123456789abcdef");
        assert_eq!(format!("{x:x}"), "123456789abcdef");
        assert_eq!(format!("{x:#x}"), "0x123456789abcdef");
        assert_eq!(U64::from_hex("0x123456789abcdef").unwrap(), x);
        assert_eq!(U64::from_hex("00000000000000000001").unwrap(), U64::one());
        assert_eq!(U64::from_hex("10000000000000000"), Err(Error::OutOfRange));
        assert!(matches!(U64::from_hex("xyz"), Err(Error::Hex(_))));
    }

    #[test]
    fn test_be_bytes() {
        let x = U128::from_words([1, 2, 3, 4]);
        let bytes = x.to_be_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[15], 1);
        assert_eq!(bytes[0..4], [0, 0, 0, 4]);
        assert_eq!(U128::from_be_bytes(&bytes).unwrap(), x);
        assert_eq!(UBigInt::<1>::from_be_bytes(&[0, 0, 1, 2]).unwrap(), UBigInt::from_word(0x102));
    }

    #[test]
    fn test_biguint_range() {
        let big = BigUint::from(1u32) << 128u32;
        assert_eq!(U128::try_from(&big), Err(Error::OutOfRange));
        assert_eq!(BigUint::from(U256::try_from(&big).unwrap()), big);
    }
}

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    DivideByZero,
    EmptyInput,
    InvalidRadix(u32),
    InvalidDigit { position: usize, found: char },
    MalformedNumber(&'static str),
    OutOfRange,
    Hex(hex::FromHexError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivideByZero => write!(f, "division by zero"),
            Error::EmptyInput => write!(f, "cannot parse a number from an empty string"),
            Error::InvalidRadix(radix) => write!(f, "radix {radix} is outside 2..=16"),
            Error::InvalidDigit { position, found } => {
                write!(f, "invalid digit {found:?} at position {position}")
            }
            Error::MalformedNumber(what) => write!(f, "malformed number: {what}"),
            Error::OutOfRange => write!(f, "value does not fit the target type"),
            Error::Hex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::Hex(e)
    }
}

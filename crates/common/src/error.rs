use std::fmt;
use thiserror::Error;

/// Textual encodings understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base58,
    Hex,
}

impl Encoding {
    /// What a value in this encoding is called in user-facing messages
    pub fn subject(&self) -> &'static str {
        match self {
            Encoding::Base58 => "Solana address",
            Encoding::Hex => "H256",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Base58 => write!(f, "Base58"),
            Encoding::Hex => write!(f, "hex"),
        }
    }
}

/// Conversion errors between Base58 addresses and H256 hashes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input contains characters outside the expected alphabet
    #[error("Invalid {encoding} input: {reason}")]
    DecodeError { encoding: Encoding, reason: String },

    /// Decoded byte sequence has the wrong size
    #[error("Invalid {} length: {actual} bytes (expected {expected})", .encoding.subject())]
    InvalidLength {
        encoding: Encoding,
        actual: usize,
        expected: usize,
    },
}

impl CodecError {
    pub fn decode(encoding: Encoding, reason: impl fmt::Display) -> Self {
        CodecError::DecodeError {
            encoding,
            reason: reason.to_string(),
        }
    }

    pub fn invalid_length(encoding: Encoding, actual: usize, expected: usize) -> Self {
        CodecError::InvalidLength {
            encoding,
            actual,
            expected,
        }
    }

    /// Encoding of the input that was rejected
    pub fn encoding(&self) -> Encoding {
        match self {
            CodecError::DecodeError { encoding, .. } => *encoding,
            CodecError::InvalidLength { encoding, .. } => *encoding,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CodecError>;

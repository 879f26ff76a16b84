// RSA Errors
// Caller-visible failures of the toy cryptosystem

use super::bigint::ToyInt;

/// Which exponent a bounded search was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exponent {
    Public,
    Private,
}

impl std::fmt::Display for Exponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exponent::Public => write!(f, "public"),
            Exponent::Private => write!(f, "private"),
        }
    }
}

/// Errors that can occur during key derivation and message processing.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Degenerate modulus: p={p}, q={q} give totient {totient}, must be greater than 2")]
    DegenerateModulus { p: ToyInt, q: ToyInt, totient: ToyInt },

    #[error("No {exponent} exponent found after {searched} candidates")]
    ExponentSearchExhausted { exponent: Exponent, searched: u64 },

    #[error("Operand {value} is outside [0, {modulus})")]
    OperandOutOfRange { value: ToyInt, modulus: ToyInt },

    #[error("Character {symbol:?} (ordinal {ordinal}) does not fit below modulus {modulus}")]
    CharacterOverflow { symbol: char, ordinal: u32, modulus: ToyInt },

    #[error("Integer {0} is not a valid character")]
    InvalidCodePoint(ToyInt),

    #[error("Digest symbol {0:?} is not a hexadecimal digit")]
    MalformedDigest(char),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod codec;
pub mod cryptosystem;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;

pub use bigint::ToyInt;
pub use codec::MessageCodec;
pub use cryptosystem::Cryptosystem;
pub use decrypt::{decrypt_integer, sign_integer};
pub use encrypt::{encrypt_integer, verify_integer};
pub use error::{CryptoError, Exponent, Result};
pub use keygen::{find_private_exponent, find_public_exponent, KeyMaterial};

//! Textbook RSA built from two small primes.
//!
//! Keys are derived by brute-force search, text is encrypted one character
//! at a time and message digests are signed one hex symbol at a time. There
//! is no padding and no secure prime generation: this crate demonstrates the
//! raw algorithm and must not protect real data.

pub mod demo;
pub mod rsa;
pub mod util;

pub use rsa::{CryptoError, Cryptosystem, KeyMaterial, MessageCodec, ToyInt};

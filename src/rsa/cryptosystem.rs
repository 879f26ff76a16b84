// RSA Cryptosystem
// Integer-level encrypt/decrypt and sign/verify over one key

use super::bigint::ToyInt;
use super::decrypt::{decrypt_integer, sign_integer};
use super::encrypt::{encrypt_integer, verify_integer};
use super::error::Result;
use super::keygen::KeyMaterial;

/// Textbook RSA over a fixed key.
///
/// Every operation is a pure function of the key and its operand, and
/// rejects operands outside `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cryptosystem {
    key: KeyMaterial,
}

impl Cryptosystem {
    pub fn new(key: KeyMaterial) -> Self {
        Self { key }
    }

    /// Derive keys from two primes and wrap them
    pub fn from_primes(p: u64, q: u64) -> Result<Self> {
        Ok(Self::new(KeyMaterial::new(p, q)?))
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    /// c = m^e mod n
    pub fn encrypt(&self, m: &ToyInt) -> Result<ToyInt> {
        encrypt_integer(m, &self.key)
    }

    /// m = c^d mod n
    pub fn decrypt(&self, c: &ToyInt) -> Result<ToyInt> {
        decrypt_integer(c, &self.key)
    }

    /// s = h^d mod n
    pub fn sign(&self, h: &ToyInt) -> Result<ToyInt> {
        sign_integer(h, &self.key)
    }

    /// h = s^e mod n
    pub fn verify(&self, s: &ToyInt) -> Result<ToyInt> {
        verify_integer(s, &self.key)
    }
}

// Message Codec
// Maps text and digests to per-character integers and through the cryptosystem
//
// Digests are signed one hex symbol at a time rather than as a single big
// integer. Equal symbols therefore yield equal signature integers; this is a
// teaching simplification and not a standard signature scheme.

use num_traits::ToPrimitive;
use tracing::trace;

use super::bigint::{from_u64, ToyInt};
use super::cryptosystem::Cryptosystem;
use super::error::{CryptoError, Result};
use crate::util::digest::{digest_hex, MessageHasher};

/// Per-character encoding on top of a [`Cryptosystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCodec {
    rsa: Cryptosystem,
}

impl MessageCodec {
    pub fn new(rsa: Cryptosystem) -> Self {
        Self { rsa }
    }

    pub fn cryptosystem(&self) -> &Cryptosystem {
        &self.rsa
    }

    /// Encrypt every character of `text`, in order
    pub fn encode_message(&self, text: &str) -> Result<Vec<ToyInt>> {
        text.chars()
            .map(|symbol| {
                let value = self.ordinal(symbol)?;
                let cipher = self.rsa.encrypt(&value)?;
                trace!(?symbol, %cipher, "encrypted character");
                Ok(cipher)
            })
            .collect()
    }

    /// Decrypt every integer and rebuild the text
    pub fn decode_message(&self, ciphertext: &[ToyInt]) -> Result<String> {
        ciphertext
            .iter()
            .map(|c| to_char(self.rsa.decrypt(c)?))
            .collect()
    }

    /// Sign every symbol of a hex digest, in order
    pub fn encode_digest(&self, digest: &str) -> Result<Vec<ToyInt>> {
        digest
            .chars()
            .map(|symbol| {
                if !symbol.is_ascii_hexdigit() {
                    return Err(CryptoError::MalformedDigest(symbol));
                }
                let value = self.ordinal(symbol)?;
                let signature = self.rsa.sign(&value)?;
                trace!(?symbol, %signature, "signed digest symbol");
                Ok(signature)
            })
            .collect()
    }

    /// Verify every signature integer and rebuild the digest text
    pub fn decode_digest(&self, signature: &[ToyInt]) -> Result<String> {
        signature
            .iter()
            .map(|s| to_char(self.rsa.verify(s)?))
            .collect()
    }

    /// Hash `text`, render the digest as hex and sign it
    pub fn sign_message<H: MessageHasher + ?Sized>(
        &self,
        text: &str,
        hasher: &H,
    ) -> Result<Vec<ToyInt>> {
        self.encode_digest(&digest_hex(hasher, text.as_bytes()))
    }

    /// Check that `signature` recovers the digest of `text`
    ///
    /// A signature that verifies to a non-character yields `false`; operands
    /// outside the modulus are still reported as errors.
    pub fn verify_message<H: MessageHasher + ?Sized>(
        &self,
        text: &str,
        signature: &[ToyInt],
        hasher: &H,
    ) -> Result<bool> {
        let expected = digest_hex(hasher, text.as_bytes());
        match self.decode_digest(signature) {
            Ok(recovered) => Ok(recovered == expected),
            Err(CryptoError::InvalidCodePoint(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn ordinal(&self, symbol: char) -> Result<ToyInt> {
        let ordinal = symbol as u32;
        let value = from_u64(u64::from(ordinal));
        if &value >= self.rsa.key().modulus() {
            return Err(CryptoError::CharacterOverflow {
                symbol,
                ordinal,
                modulus: self.rsa.key().modulus().clone(),
            });
        }
        Ok(value)
    }
}

fn to_char(value: ToyInt) -> Result<char> {
    value
        .to_u32()
        .and_then(char::from_u32)
        .ok_or(CryptoError::InvalidCodePoint(value))
}

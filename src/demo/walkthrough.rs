// Walkthrough
// Runs the full demonstration once and records every intermediate value

use std::fmt;

use rand::Rng;
use tracing::info;

use crate::rsa::{MessageCodec, Result, ToyInt};
use crate::util::digest::{append_random_letter, digest_hex, MessageHasher};

/// Every value produced by one pass of the demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughReport {
    pub p: ToyInt,
    pub q: ToyInt,
    pub modulus: ToyInt,
    pub public_exponent: ToyInt,
    pub message: String,
    pub encrypted: Vec<ToyInt>,
    pub decrypted: String,
    pub digest: String,
    pub signature: Vec<ToyInt>,
    pub recovered_digest: String,
    pub edited_message: String,
    pub edited_digest: String,
    pub edited_signature: Vec<ToyInt>,
}

impl WalkthroughReport {
    /// Whether decryption and verification both gave back their inputs
    pub fn round_trips(&self) -> bool {
        self.decrypted == self.message && self.recovered_digest == self.digest
    }
}

/// Drives the demonstration steps over one codec
pub struct Walkthrough<'a> {
    codec: &'a MessageCodec,
}

impl<'a> Walkthrough<'a> {
    pub fn new(codec: &'a MessageCodec) -> Self {
        Self { codec }
    }

    /// Encrypt, decrypt, sign, verify, then sign a one-letter edit
    pub fn run<H, R>(&self, message: &str, hasher: &H, rng: &mut R) -> Result<WalkthroughReport>
    where
        H: MessageHasher + ?Sized,
        R: Rng,
    {
        let key = self.codec.cryptosystem().key();

        let encrypted = self.codec.encode_message(message)?;
        let decrypted = self.codec.decode_message(&encrypted)?;
        info!(characters = encrypted.len(), "message encrypted and decrypted");

        let digest = digest_hex(hasher, message.as_bytes());
        let signature = self.codec.encode_digest(&digest)?;
        let recovered_digest = self.codec.decode_digest(&signature)?;
        info!(%digest, "digest signed and verified");

        let edited_message = append_random_letter(message, rng);
        let edited_digest = digest_hex(hasher, edited_message.as_bytes());
        let edited_signature = self.codec.encode_digest(&edited_digest)?;
        info!(%edited_message, "edited message signed");

        Ok(WalkthroughReport {
            p: key.p().clone(),
            q: key.q().clone(),
            modulus: key.modulus().clone(),
            public_exponent: key.public_exponent().clone(),
            message: message.to_string(),
            encrypted,
            decrypted,
            digest,
            signature,
            recovered_digest,
            edited_message,
            edited_digest,
            edited_signature,
        })
    }
}

fn join(values: &[ToyInt]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

impl fmt::Display for WalkthroughReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Primes: p={}, q={}", self.p, self.q)?;
        writeln!(f, "Public key: (n={}, e={})", self.modulus, self.public_exponent)?;
        writeln!(f)?;
        writeln!(f, "Plain-text message: {}", self.message)?;
        writeln!(f, "Encrypted message: {}", join(&self.encrypted))?;
        writeln!(f, "Decrypted message: {}", self.decrypted)?;
        writeln!(f)?;
        writeln!(f, "Message hash: {}", self.digest)?;
        writeln!(f, "Message signature: {}", join(&self.signature))?;
        writeln!(f, "Hash derived from the signature: {}", self.recovered_digest)?;
        writeln!(f)?;
        writeln!(f, "Message with one character appended: {}", self.edited_message)?;
        writeln!(f, "Edited message hash: {}", self.edited_digest)?;
        write!(f, "Edited message signature: {}", join(&self.edited_signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::{CryptoError, Cryptosystem};
    use crate::util::digest::Sha256Hasher;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn codec() -> MessageCodec {
        MessageCodec::new(Cryptosystem::from_primes(53, 59).unwrap())
    }

    #[test]
    fn test_walkthrough_round_trips() {
        let codec = codec();
        let mut rng = StdRng::seed_from_u64(1);
        let report = Walkthrough::new(&codec).run("hello", &Sha256Hasher, &mut rng).unwrap();

        assert!(report.round_trips());
        assert_eq!(report.p, ToyInt::from(53u32));
        assert_eq!(report.q, ToyInt::from(59u32));
        assert_eq!(report.modulus, ToyInt::from(3127u32));
        assert_eq!(report.public_exponent, ToyInt::from(3u32));
        assert_eq!(report.encrypted.len(), 5);
        assert_eq!(
            report.digest,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(report.signature.len(), 64);
        assert_eq!(report.edited_signature.len(), 64);
        assert!(report.edited_message.starts_with("hello"));
        assert_eq!(report.edited_message.len(), 6);
        assert_ne!(report.digest, report.edited_digest);
        assert_ne!(report.signature, report.edited_signature);
    }

    #[test]
    fn test_walkthrough_is_reproducible_with_seed() {
        let codec = codec();
        let first = Walkthrough::new(&codec)
            .run("seeded", &Sha256Hasher, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let second = Walkthrough::new(&codec)
            .run("seeded", &Sha256Hasher, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walkthrough_rejects_wide_characters() {
        let codec = codec();
        let result =
            Walkthrough::new(&codec).run("☃", &Sha256Hasher, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(CryptoError::CharacterOverflow { .. })));
    }

    #[test]
    fn test_report_display() {
        let codec = codec();
        let report = Walkthrough::new(&codec)
            .run("Hi", &Sha256Hasher, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let text = report.to_string();
        assert!(text.contains("Primes: p=53, q=59"));
        assert!(text.contains("Public key: (n=3127, e=3)"));
        assert!(text.contains("Encrypted message: [1135 635]"));
        assert!(text.contains("Decrypted message: Hi"));
    }
}

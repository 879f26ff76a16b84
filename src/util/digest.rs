// Message Digest and Randomness Helpers
// The hash collaborator used before signing, and the single-letter edit

use rand::Rng;
use sha2::{Digest, Sha256};

/// A hash function: bytes in, fixed-length digest out
pub trait MessageHasher {
    fn hash(&self, bytes: &[u8]) -> Vec<u8>;
}

/// SHA-256 hasher
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl MessageHasher for Sha256Hasher {
    fn hash(&self, bytes: &[u8]) -> Vec<u8> {
        Sha256::digest(bytes).to_vec()
    }
}

/// Hash bytes and render the digest as lowercase hex
pub fn digest_hex<H: MessageHasher + ?Sized>(hasher: &H, bytes: &[u8]) -> String {
    hex::encode(hasher.hash(bytes))
}

/// Append one uniformly chosen letter in 'A'..='Z'
pub fn append_random_letter<R: Rng>(message: &str, rng: &mut R) -> String {
    let letter = char::from(rng.gen_range(b'A'..=b'Z'));
    let mut edited = String::with_capacity(message.len() + 1);
    edited.push_str(message);
    edited.push(letter);
    edited
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            digest_hex(&Sha256Hasher, b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(
            digest_hex(&Sha256Hasher, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_length_is_fixed() {
        for input in [&b""[..], b"a", b"hello world, a longer message"] {
            assert_eq!(digest_hex(&Sha256Hasher, input).len(), 64);
        }
    }

    #[test]
    fn test_append_random_letter() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let edited = append_random_letter("hello", &mut rng);
            assert_eq!(edited.len(), 6);
            assert!(edited.starts_with("hello"));
            assert!(edited.chars().last().unwrap().is_ascii_uppercase());
        }
    }

    #[test]
    fn test_append_random_letter_is_seeded() {
        let a = append_random_letter("x", &mut StdRng::seed_from_u64(99));
        let b = append_random_letter("x", &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}

// Utility Module
// Engine configuration and the hashing/randomness collaborators

pub mod config;
pub mod digest;

pub use config::EngineConfig;
pub use digest::{append_random_letter, digest_hex, MessageHasher, Sha256Hasher};

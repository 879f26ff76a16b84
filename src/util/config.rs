// Engine Configuration
// Bounds for the brute-force exponent searches

use tracing::debug;

/// Environment variable overriding the search limit
pub const SEARCH_LIMIT_ENV: &str = "TOY_RSA_SEARCH_LIMIT";

/// Configuration for key derivation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of candidates each exponent search may test
    pub search_limit: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_limit: 10_000_000,
        }
    }
}

impl EngineConfig {
    /// Default configuration, with the search limit taken from
    /// `TOY_RSA_SEARCH_LIMIT` when it holds a positive integer
    pub fn from_env() -> Self {
        let value = std::env::var(SEARCH_LIMIT_ENV).ok();
        match parse_limit(value.as_deref()) {
            Some(limit) => {
                debug!(limit, "search limit taken from environment");
                Self::default().with_search_limit(limit)
            }
            None => Self::default(),
        }
    }

    pub fn with_search_limit(mut self, limit: u64) -> Self {
        self.search_limit = limit;
        self
    }
}

/// Parse a search limit override; unset, unparseable and zero values are ignored
fn parse_limit(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|limit| *limit > 0)
}

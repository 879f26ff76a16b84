// RSA Key Material
// Holds the two primes, modulus and totient, and derives the exponents

use num_traits::{One, Zero};
use tracing::debug;

use super::bigint::{from_u64, gcd, ToyInt};
use super::error::{CryptoError, Exponent, Result};
use crate::util::config::EngineConfig;

/// Key material built from two caller-supplied primes.
///
/// The primes are not checked for primality. Both exponents are derived
/// once at construction; `e` is the smallest integer in `[2, t)` coprime to
/// `t` and `d` the smallest non-negative integer with `d * e ≡ 1 (mod t)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    p: ToyInt,
    q: ToyInt,
    n: ToyInt,
    pub(crate) t: ToyInt,
    e: ToyInt,
    d: ToyInt,
}

impl KeyMaterial {
    /// Build key material from two primes with the default search limit
    pub fn new(p: u64, q: u64) -> Result<Self> {
        Self::with_config(p, q, &EngineConfig::default())
    }

    /// Build key material from two primes with an explicit configuration
    pub fn with_config(p: u64, q: u64, config: &EngineConfig) -> Result<Self> {
        Self::from_factors(from_u64(p), from_u64(q), config)
    }

    /// Build key material from arbitrary-precision factors
    pub fn from_factors(p: ToyInt, q: ToyInt, config: &EngineConfig) -> Result<Self> {
        let n = &p * &q;

        // p or q of 0 or 1 collapses the totient to 0
        let t = if p.is_zero() || q.is_zero() {
            ToyInt::zero()
        } else {
            (&p - 1u8) * (&q - 1u8)
        };

        if t <= from_u64(2) {
            return Err(CryptoError::DegenerateModulus { p, q, totient: t });
        }

        let e = find_public_exponent(&t, config.search_limit)?;
        let d = find_private_exponent(&e, &t, config.search_limit)?;

        debug!(%p, %q, %n, %e, "derived key material");

        Ok(Self { p, q, n, t, e, d })
    }

    /// The first prime factor
    pub fn p(&self) -> &ToyInt {
        &self.p
    }

    /// The second prime factor
    pub fn q(&self) -> &ToyInt {
        &self.q
    }

    /// The modulus n = p * q
    pub fn modulus(&self) -> &ToyInt {
        &self.n
    }

    /// The public exponent e
    pub fn public_exponent(&self) -> &ToyInt {
        &self.e
    }

    /// The private exponent d
    pub fn private_exponent(&self) -> &ToyInt {
        &self.d
    }
}

/// Scan e upward from 2 and return the first e < t with gcd(e, t) = 1.
///
/// At most `limit` candidates are tested.
pub fn find_public_exponent(t: &ToyInt, limit: u64) -> Result<ToyInt> {
    let one = ToyInt::one();
    let mut e = from_u64(2);
    let mut searched = 0u64;

    while &e < t {
        if searched == limit {
            break;
        }
        if gcd(&e, t) == one {
            return Ok(e);
        }
        e += 1u8;
        searched += 1;
    }

    Err(CryptoError::ExponentSearchExhausted {
        exponent: Exponent::Public,
        searched,
    })
}

/// Scan d upward from 0 and return the first d with (d * e) mod t = 1.
///
/// The smallest such d is always below t, so the scan stops there or after
/// `limit` candidates, whichever comes first.
pub fn find_private_exponent(e: &ToyInt, t: &ToyInt, limit: u64) -> Result<ToyInt> {
    let one = ToyInt::one();
    let mut d = ToyInt::zero();
    let mut searched = 0u64;

    while &d < t && searched < limit {
        if (&d * e) % t == one {
            return Ok(d);
        }
        d += 1u8;
        searched += 1;
    }

    Err(CryptoError::ExponentSearchExhausted {
        exponent: Exponent::Private,
        searched,
    })
}

// RSA Big Integer Operations
// Wrapper around num-bigint for the modular arithmetic the toy cryptosystem needs

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Toy RSA integer type alias
pub type ToyInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> ToyInt {
    ToyInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &ToyInt, exp: &ToyInt, modulus: &ToyInt) -> ToyInt {
    if modulus.is_one() {
        return ToyInt::zero();
    }

    let mut result = ToyInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor
pub fn gcd(a: &ToyInt, b: &ToyInt) -> ToyInt {
    a.gcd(b)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns the smallest non-negative inverse, or None if it doesn't exist
pub fn mod_inverse(a: &ToyInt, m: &ToyInt) -> Option<ToyInt> {
    if m.is_zero() {
        return None;
    }

    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());
    let egcd = a.extended_gcd(&m);

    if !egcd.gcd.is_one() {
        return None;
    }

    // mod_floor keeps the result in [0, m)
    egcd.x.mod_floor(&m).to_biguint()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let result = mod_pow(&from_u64(3), &from_u64(5), &from_u64(7));
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_edge_cases() {
        assert_eq!(mod_pow(&from_u64(12), &from_u64(0), &from_u64(7)), from_u64(1));
        assert_eq!(mod_pow(&from_u64(12), &from_u64(9), &from_u64(1)), from_u64(0));
        assert_eq!(mod_pow(&from_u64(0), &from_u64(9), &from_u64(11)), from_u64(0));
        assert_eq!(mod_pow(&from_u64(89), &from_u64(3), &from_u64(3127)), from_u64(1394));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&from_u64(3016), &from_u64(3)), from_u64(1));
        assert_eq!(gcd(&from_u64(3016), &from_u64(2)), from_u64(2));
        assert_eq!(gcd(&from_u64(48), &from_u64(18)), from_u64(6));
        assert_eq!(gcd(&from_u64(0), &from_u64(5)), from_u64(5));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let inv = mod_inverse(&from_u64(3), &from_u64(7)).unwrap();
        assert_eq!(inv, from_u64(5));

        let inv = mod_inverse(&from_u64(3), &from_u64(3016)).unwrap();
        assert_eq!(inv, from_u64(2011));
    }

    #[test]
    fn test_mod_inverse_relation() {
        let m = from_u64(3120);
        for a in 1..200u64 {
            let a = from_u64(a);
            match mod_inverse(&a, &m) {
                Some(inv) => {
                    assert!(inv < m);
                    assert_eq!((&a * &inv) % &m, from_u64(1));
                }
                None => assert_ne!(gcd(&a, &m), from_u64(1)),
            }
        }
    }

    #[test]
    fn test_mod_inverse_missing() {
        assert!(mod_inverse(&from_u64(2), &from_u64(3016)).is_none());
        assert!(mod_inverse(&from_u64(3), &from_u64(0)).is_none());
    }
}

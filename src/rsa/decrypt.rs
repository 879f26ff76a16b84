// RSA Private-Exponent Operations
// Textbook decryption and signing: x^d mod n

use super::bigint::{mod_pow, ToyInt};
use super::encrypt::check_operand;
use super::error::Result;
use super::keygen::KeyMaterial;

/// Decrypt an integer: m = c^d mod n
pub fn decrypt_integer(c: &ToyInt, key: &KeyMaterial) -> Result<ToyInt> {
    check_operand(c, key)?;
    Ok(mod_pow(c, key.private_exponent(), key.modulus()))
}

/// Sign an integer: s = h^d mod n
pub fn sign_integer(h: &ToyInt, key: &KeyMaterial) -> Result<ToyInt> {
    check_operand(h, key)?;
    Ok(mod_pow(h, key.private_exponent(), key.modulus()))
}

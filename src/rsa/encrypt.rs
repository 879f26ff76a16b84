// RSA Public-Exponent Operations
// Textbook encryption and signature verification: x^e mod n

use super::bigint::{mod_pow, ToyInt};
use super::error::{CryptoError, Result};
use super::keygen::KeyMaterial;

/// Reject operands outside [0, n)
pub(crate) fn check_operand(value: &ToyInt, key: &KeyMaterial) -> Result<()> {
    if value >= key.modulus() {
        return Err(CryptoError::OperandOutOfRange {
            value: value.clone(),
            modulus: key.modulus().clone(),
        });
    }
    Ok(())
}

/// Encrypt an integer: c = m^e mod n
pub fn encrypt_integer(m: &ToyInt, key: &KeyMaterial) -> Result<ToyInt> {
    check_operand(m, key)?;
    Ok(mod_pow(m, key.public_exponent(), key.modulus()))
}

/// Recover the signed value from a signature: h = s^e mod n
pub fn verify_integer(s: &ToyInt, key: &KeyMaterial) -> Result<ToyInt> {
    check_operand(s, key)?;
    Ok(mod_pow(s, key.public_exponent(), key.modulus()))
}

//! The scheme's message digest

use crate::arith::modpow;
use num_bigint::BigUint;

/// Fold a byte sequence into a residue modulo `q`.
///
/// Starts from the fixed seed 100 and folds every byte in order with
/// `H = (H + b)^2 mod q`. The result is order- and length-sensitive but
/// in no way collision-resistant; the scheme's test vectors depend on
/// this exact definition, so it must not be swapped for a real hash.
pub fn digest(message: &[u8], q: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    let mut h = BigUint::from(100u32);

    for &byte in message {
        h += byte;
        h = modpow(&h, &two, q);
    }

    h
}

//! Signature generation

use crate::arith::modpow;
use crate::digest::digest;
use crate::error::SignatureError;
use crate::params::{biguint_serde, DomainParameters};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A generated signature together with the values a caller usually wants
/// to display or persist alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// First signature component, `0 < r < q`
    #[serde(with = "biguint_serde")]
    pub r: BigUint,

    /// Second signature component, `0 < s < q`
    #[serde(with = "biguint_serde")]
    pub s: BigUint,

    /// Digest of the signed message
    #[serde(with = "biguint_serde")]
    pub hash: BigUint,

    /// Generator used, copied from the parameter set
    #[serde(with = "biguint_serde")]
    pub g: BigUint,

    /// Public key used, copied from the parameter set
    #[serde(with = "biguint_serde")]
    pub y: BigUint,
}

/// Sign a message under the given parameter set.
///
/// Computes `r = (g^k mod p) mod q` and
/// `s = k^(-1) (hash + x r) mod q`, with the inverse of `k` taken via
/// Fermat's little theorem (`q` is prime and `0 < k < q`).
///
/// Fails with [`SignatureError::ZeroR`] or [`SignatureError::ZeroS`]
/// when the nonce degenerates; there is no internal retry, the caller
/// picks a new `k` and rebuilds the parameter set.
pub fn generate(params: &DomainParameters, message: &[u8]) -> Result<Signature, SignatureError> {
    let hash = digest(message, &params.q);

    let r = modpow(&params.g, &params.k, &params.p) % &params.q;
    if r.is_zero() {
        return Err(SignatureError::ZeroR);
    }

    let two = BigUint::from(2u32);
    let k_inv = modpow(&params.k, &(&params.q - &two), &params.q);
    let xr = (&params.x * &r) % &params.q;
    let s = (&k_inv * ((&hash + &xr) % &params.q)) % &params.q;
    if s.is_zero() {
        return Err(SignatureError::ZeroS);
    }

    debug!(%r, %s, %hash, "signature generated");

    Ok(Signature {
        r,
        s,
        hash,
        g: params.g.clone(),
        y: params.y.clone(),
    })
}

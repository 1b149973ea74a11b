//! Domain-parameter validation and key derivation

use crate::arith::{is_prime, modpow};
use crate::error::ParameterError;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One validated scheme instance.
///
/// Built only by [`DomainParameters::new`] and immutable afterwards; a
/// caller that wants different parameters constructs a new value rather
/// than mutating this one. `p`, `q`, `g` and `y` are public, `x` (the
/// signing key) and `k` (the per-signature nonce) are secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParameters {
    /// Prime modulus
    #[serde(with = "biguint_serde")]
    pub p: BigUint,

    /// Prime group order, divides `p - 1`
    #[serde(with = "biguint_serde")]
    pub q: BigUint,

    /// Generator seed supplied by the caller, `1 < h < p`
    #[serde(with = "biguint_serde")]
    pub h: BigUint,

    /// Secret signing key, `0 < x < q`
    #[serde(with = "biguint_serde")]
    pub x: BigUint,

    /// Per-signature secret nonce, `0 < k < q`
    #[serde(with = "biguint_serde")]
    pub k: BigUint,

    /// Derived generator `h^((p-1)/q) mod p`
    #[serde(with = "biguint_serde")]
    pub g: BigUint,

    /// Derived public key `g^x mod p`
    #[serde(with = "biguint_serde")]
    pub y: BigUint,
}

impl DomainParameters {
    /// Validate a caller-supplied `(p, q, h, x, k)` tuple and derive the
    /// generator `g` and public key `y`.
    ///
    /// Checks run in order: primality of `p` and `q`, divisibility of
    /// `p - 1` by `q`, then the range constraints on `h`, `x` and `k`.
    /// The first violated rule is returned and no partial parameter set
    /// is ever produced.
    pub fn new(
        p: BigUint,
        q: BigUint,
        h: BigUint,
        x: BigUint,
        k: BigUint,
    ) -> Result<Self, ParameterError> {
        if !is_prime(&p) {
            return Err(ParameterError::PNotPrime);
        }
        if !is_prime(&q) {
            return Err(ParameterError::QNotPrime);
        }

        let one = BigUint::one();
        let p_minus_one = &p - &one;
        if !(&p_minus_one % &q).is_zero() {
            return Err(ParameterError::QDoesNotDivide);
        }
        if h <= one || h >= p {
            return Err(ParameterError::HOutOfRange);
        }
        if x.is_zero() || x >= q {
            return Err(ParameterError::XOutOfRange);
        }
        if k.is_zero() || k >= q {
            return Err(ParameterError::KOutOfRange);
        }

        let g = modpow(&h, &(&p_minus_one / &q), &p);
        let y = modpow(&g, &x, &p);

        debug!(%p, %q, %g, %y, "domain parameters validated");

        Ok(Self { p, q, h, x, k, g, y })
    }
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for DomainParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainParameters")
            .field("p", &self.p)
            .field("q", &self.q)
            .field("h", &self.h)
            .field("x", &"<secret>")
            .field("k", &"<secret>")
            .field("g", &self.g)
            .field("y", &self.y)
            .finish()
    }
}

/// Serde adapter storing a `BigUint` as a decimal string.
pub(crate) mod biguint_serde {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BigUint::from_str(&s).map_err(de::Error::custom)
    }
}

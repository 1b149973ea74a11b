//! Signature verification

use crate::arith::modpow;
use crate::digest::digest;
use crate::params::{biguint_serde, DomainParameters};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full trace of one verification run.
///
/// A bad signature is a normal outcome here, never an error: an
/// out-of-range `(r, s)` yields `in_bounds = false` with every numeric
/// field zeroed, and a non-matching one yields `matched = false` with
/// the intermediates populated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Digest of the message under `q`
    #[serde(with = "biguint_serde")]
    pub hash: BigUint,

    /// Modular inverse of `s`
    #[serde(with = "biguint_serde")]
    pub w: BigUint,

    /// `hash * w mod q`
    #[serde(with = "biguint_serde")]
    pub u1: BigUint,

    /// `r * w mod q`
    #[serde(with = "biguint_serde")]
    pub u2: BigUint,

    /// Recomputed check value, compared against `r`
    #[serde(with = "biguint_serde")]
    pub v: BigUint,

    /// `v == r`
    pub matched: bool,

    /// Whether `r` and `s` passed the `(0, q)` range check
    pub in_bounds: bool,
}

impl VerificationOutcome {
    /// Outcome for a signature rejected by the range check.
    fn rejected() -> Self {
        Self {
            hash: BigUint::zero(),
            w: BigUint::zero(),
            u1: BigUint::zero(),
            u2: BigUint::zero(),
            v: BigUint::zero(),
            matched: false,
            in_bounds: false,
        }
    }
}

/// Check a signature `(r, s)` over a message.
///
/// Out-of-range components short-circuit before any digest work. In
/// bounds, the verification equation
/// `v = (g^u1 * y^u2 mod p) mod q` is recomputed and compared to `r`.
/// The result does not depend on how or where the signature was
/// generated, only on the parameter set.
pub fn verify(
    params: &DomainParameters,
    message: &[u8],
    r: &BigUint,
    s: &BigUint,
) -> VerificationOutcome {
    if r.is_zero() || *r >= params.q || s.is_zero() || *s >= params.q {
        debug!("signature out of bounds");
        return VerificationOutcome::rejected();
    }

    let hash = digest(message, &params.q);

    let two = BigUint::from(2u32);
    let w = modpow(s, &(&params.q - &two), &params.q);
    let u1 = (&hash * &w) % &params.q;
    let u2 = (r * &w) % &params.q;
    let v = modpow(&params.g, &u1, &params.p) * modpow(&params.y, &u2, &params.p)
        % &params.p
        % &params.q;

    let matched = v == *r;
    debug!(%v, %r, matched, "signature checked");

    VerificationOutcome {
        hash,
        w,
        u1,
        u2,
        v,
        matched,
        in_bounds: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::generate;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn reference_params() -> DomainParameters {
        DomainParameters::new(big(23), big(11), big(2), big(3), big(7)).unwrap()
    }

    #[test]
    fn reference_vector() {
        let outcome = verify(&reference_params(), &[65], &big(8), &big(5));
        assert!(outcome.in_bounds);
        assert_eq!(outcome.hash, big(0));
        assert_eq!(outcome.w, big(9));
        assert_eq!(outcome.u1, big(0));
        assert_eq!(outcome.u2, big(6));
        assert_eq!(outcome.v, big(8));
        assert!(outcome.matched);
    }

    #[test]
    fn round_trip() {
        let params = reference_params();
        for message in [&b"A"[..], &b"hello world"[..], &b""[..], &b"\x00\xff\x00"[..]] {
            let sig = match generate(&params, message) {
                Ok(sig) => sig,
                Err(_) => continue,
            };
            let outcome = verify(&params, message, &sig.r, &sig.s);
            assert!(outcome.in_bounds, "message {message:?}");
            assert!(outcome.matched, "message {message:?}");
        }
    }

    #[test]
    fn round_trip_across_parameter_sets() {
        // p = 59, q = 29 also satisfies (p-1) % q == 0.
        let cases = [(23u64, 11u64, 5u64, 4u64, 9u64), (59, 29, 3, 12, 17)];
        for (p, q, h, x, k) in cases {
            let params =
                DomainParameters::new(big(p), big(q), big(h), big(x), big(k)).unwrap();
            let sig = generate(&params, b"cross-set").unwrap();
            assert!(verify(&params, b"cross-set", &sig.r, &sig.s).matched);
        }
    }

    #[test]
    fn tampered_message_does_not_match() {
        let params = reference_params();
        let sig = generate(&params, b"pay 10 coins").unwrap();
        let outcome = verify(&params, b"pay 99 coins", &sig.r, &sig.s);
        assert!(outcome.in_bounds);
        assert!(!outcome.matched);
    }

    #[test]
    fn out_of_bounds_short_circuits() {
        let params = reference_params();
        for (r, s) in [(0u64, 5u64), (8, 0), (11, 5), (8, 11), (12, 99)] {
            let outcome = verify(&params, &[65], &big(r), &big(s));
            assert!(!outcome.in_bounds, "r={r} s={s}");
            assert!(!outcome.matched, "r={r} s={s}");
            assert_eq!(outcome.hash, big(0));
            assert_eq!(outcome.v, big(0));
        }
    }

    #[test]
    fn foreign_signature_verifies() {
        // (r, s) computed independently of this process's generator.
        let params = reference_params();
        let outcome = verify(&params, &[65], &big(8), &big(5));
        assert!(outcome.matched);
    }
}

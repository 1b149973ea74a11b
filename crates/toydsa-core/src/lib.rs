//! # Toy DSA Core
//!
//! A parameterized DSA-style signature engine over arbitrary-precision
//! integers: domain-parameter validation, key derivation, message
//! digesting, signature generation and signature verification.
//!
//! The scheme is deliberately pedagogical. The primality test is plain
//! trial division and the digest is a simple squaring fold, neither of
//! which is suitable for real cryptography. Do not use this crate to
//! protect anything; use it to study how DSA fits together.
//!
//! ## Example
//!
//! ```rust,ignore
//! use toydsa_core::{generate, verify, DomainParameters};
//!
//! let params = DomainParameters::new(p, q, h, x, k)?;
//! let sig = generate(&params, message)?;
//! let outcome = verify(&params, message, &sig.r, &sig.s);
//! assert!(outcome.matched);
//! ```

pub mod arith;
pub mod digest;
pub mod error;
pub mod params;
pub mod sign;
pub mod verify;

pub use arith::{is_prime, modpow};
pub use digest::digest;
pub use error::{ParameterError, SignatureError};
pub use params::DomainParameters;
pub use sign::{generate, Signature};
pub use verify::{verify, VerificationOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

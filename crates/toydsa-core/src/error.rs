//! Error types for the signature engine

use thiserror::Error;

/// Errors raised while validating a domain-parameter tuple.
///
/// Checks run in a fixed order and the first violated rule is reported.
/// None of these are retryable without new inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// `p` failed the primality test
    #[error("p must be prime")]
    PNotPrime,

    /// `q` failed the primality test
    #[error("q must be prime")]
    QNotPrime,

    /// `q` is not a divisor of `p - 1`
    #[error("q must divide p - 1")]
    QDoesNotDivide,

    /// `h` outside the open interval `(1, p)`
    #[error("h must lie strictly between 1 and p")]
    HOutOfRange,

    /// Secret key `x` outside the open interval `(0, q)`
    #[error("x must lie strictly between 0 and q")]
    XOutOfRange,

    /// Nonce `k` outside the open interval `(0, q)`
    #[error("k must lie strictly between 0 and q")]
    KOutOfRange,
}

/// Errors raised while generating a signature.
///
/// Both mean the supplied nonce produced a degenerate signature
/// component. Recovery is caller-driven: pick a different `k`, rebuild
/// the parameter set and sign again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// `r` reduced to zero for the supplied `k`
    #[error("r = 0, choose a different k")]
    ZeroR,

    /// `s` reduced to zero for the supplied `k`
    #[error("s = 0, choose a different k")]
    ZeroS,
}

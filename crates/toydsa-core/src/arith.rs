//! Modular arithmetic primitives

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Compute `base^exponent mod modulus` by square-and-multiply.
///
/// `exponent == 0` yields 1 for any base, per the usual convention.
/// The modulus must be greater than 1.
///
/// Cost is `O(log exponent)` modular multiplications.
pub fn modpow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(*modulus > BigUint::one(), "modulus must be > 1");

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (&result * &base) % modulus;
        }
        exponent >>= 1;
        base = (&base * &base) % modulus;
    }

    result
}

/// Deterministic trial-division primality test.
///
/// Divides by every odd integer up to `sqrt(n)`, so the cost is
/// `O(sqrt(n))` divisions. Fine for classroom-sized numbers, hopeless
/// for cryptographically sized primes.
pub fn is_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = &one + &one;

    if *n <= one {
        return false;
    }
    if *n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let mut i = BigUint::from(3u32);
    while &i * &i <= *n {
        if (n % &i).is_zero() {
            return false;
        }
        i += 2u32;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn modpow_zero_exponent_is_one() {
        assert_eq!(modpow(&big(0), &big(0), &big(7)), big(1));
        assert_eq!(modpow(&big(5), &big(0), &big(7)), big(1));
        assert_eq!(modpow(&big(123456), &big(0), &big(2)), big(1));
    }

    #[test]
    fn modpow_known_values() {
        // 2^10 mod 1000 = 24
        assert_eq!(modpow(&big(2), &big(10), &big(1000)), big(24));
        // 4^7 mod 23 = 8
        assert_eq!(modpow(&big(4), &big(7), &big(23)), big(8));
        // base reduced before exponentiation
        assert_eq!(modpow(&big(25), &big(3), &big(23)), modpow(&big(2), &big(3), &big(23)));
    }

    #[test]
    fn modpow_matches_naive() {
        let m = big(97);
        for base in 0..20u64 {
            let mut expected = big(1);
            for e in 0..12u64 {
                assert_eq!(modpow(&big(base), &big(e), &m), expected, "{base}^{e} mod 97");
                expected = expected * big(base) % &m;
            }
        }
    }

    #[test]
    fn primality_small_table() {
        assert!(!is_prime(&big(0)));
        assert!(!is_prime(&big(1)));
        assert!(is_prime(&big(2)));
        assert!(is_prime(&big(3)));
        assert!(!is_prime(&big(4)));
        assert!(!is_prime(&big(9)));
        assert!(is_prime(&big(11)));
        assert!(is_prime(&big(23)));
        assert!(!is_prime(&big(25)));
        assert!(!is_prime(&big(100)));
        assert!(is_prime(&big(7919)));
        assert!(!is_prime(&big(7917)));
    }
}

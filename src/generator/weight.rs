//! Multinomial weighting of a satisfying composition: the number of
//! distinct strings of length `L` that use exactly `c_i` characters from
//! each alphabet `A_i`, `w(c) = L! * Π|A_i|^{c_i} / Π c_i!`. Grounded in
//! `examples/original_source/passgen/passgen.go`'s `resultWeight`/`fac`/
//! `pow`, which use `math/big` for the same reason: `L!` overflows any
//! fixed-width integer well before realistic password lengths (20! alone
//! exceeds `u64::MAX`).

use num_bigint::BigUint;
use num_traits::One;

pub fn factorial(n: u64) -> BigUint {
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }
    acc
}

fn pow(base: u64, exp: u64) -> BigUint {
    BigUint::from(base).pow(exp as u32)
}

/// `counts` and `alphabet_sizes` are parallel slices; `counts` must sum to
/// `length`. Always an exact non-negative integer: the multinomial
/// coefficient counts arrangements of the chosen characters, and the power
/// term counts the character choices within each arrangement slot.
pub fn composition_weight(length: u64, counts: &[u64], alphabet_sizes: &[u64]) -> BigUint {
    let mut weight = factorial(length);
    for &c in counts {
        weight /= factorial(c);
    }
    for (&c, &size) in counts.iter().zip(alphabet_sizes) {
        weight *= pow(size, c);
    }
    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_matches_known_values() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(5), BigUint::from(120u32));
    }

    #[test]
    fn single_alphabet_weight_is_just_the_power() {
        // One alphabet, whole length drawn from it: L!/L! * size^L == size^L.
        let w = composition_weight(4, &[4], &[26]);
        assert_eq!(w, BigUint::from(26u64.pow(4)));
    }

    #[test]
    fn two_equal_alphabets_weight_includes_binomial() {
        // length 2, one char from each of two size-1 alphabets: 2!/(1!1!) * 1^1*1^1 = 2.
        let w = composition_weight(2, &[1, 1], &[1, 1]);
        assert_eq!(w, BigUint::from(2u32));
    }
}

//! Bounded-sum composition enumeration. The original generator hands this
//! constraint — "each alphabet variable in `[min_i, max_i]`, summing to a
//! fixed length" — to a generic finite-domain solver
//! (`bitbucket.org/gofd/gofd`, via `passgen.go`'s `Generate`, which builds
//! one `IntVar` per alphabet plus a `Sum` propagator and labels with
//! `SmallestDomainFirst`/`InDomainMin`). No Rust crate in the pack or a
//! reasonable vendor candidate solves finite-domain CSPs, and the shape
//! here is narrow enough not to need one: this enumerates every
//! non-negative integer composition bounded per-slot that sums to a target
//! length, which is exactly what the original's solver computes for this
//! constraint graph.

use crate::error::{Error, Result};
use crate::generator::alphabet::Alphabet;

/// Every length in `[min_length, max_length]` for which at least one
/// alphabet assignment satisfies every `[min_i, max_i]` bound and sums to
/// that length.
pub fn satisfiable_lengths(alphabets: &[Alphabet], min_length: usize, max_length: usize) -> Vec<usize> {
    (min_length..=max_length)
        .filter(|&length| has_composition(alphabets, length))
        .collect()
}

fn bounds_for(alphabets: &[Alphabet], length: usize) -> Vec<(usize, usize)> {
    alphabets
        .iter()
        .map(|a| (a.min, a.effective_max(length)))
        .collect()
}

fn has_composition(alphabets: &[Alphabet], length: usize) -> bool {
    let bounds = bounds_for(alphabets, length);
    let min_sum: usize = bounds.iter().map(|(min, _)| min).sum();
    let max_sum: usize = bounds.iter().map(|(_, max)| max).sum();
    if min_sum > length || max_sum < length {
        return false;
    }
    !enumerate(&bounds, length).is_empty()
}

/// All non-negative-integer compositions respecting `bounds[i] = (min, max)`
/// per slot that sum exactly to `length`.
pub fn enumerate(bounds: &[(usize, usize)], length: usize) -> Vec<Vec<usize>> {
    fn go(bounds: &[(usize, usize)], remaining: usize, out: &mut Vec<Vec<usize>>, acc: &mut Vec<usize>) {
        if bounds.is_empty() {
            if remaining == 0 {
                out.push(acc.clone());
            }
            return;
        }
        let (min, max) = bounds[0];
        let rest = &bounds[1..];
        let rest_min: usize = rest.iter().map(|(m, _)| m).sum();
        let rest_max: usize = rest.iter().map(|(_, m)| m).sum();
        let lo = min;
        let hi = max.min(remaining);
        for c in lo..=hi {
            if remaining < c {
                continue;
            }
            let left = remaining - c;
            if left < rest_min || left > rest_max {
                continue;
            }
            acc.push(c);
            go(rest, left, out, acc);
            acc.pop();
        }
    }

    let mut out = Vec::new();
    let mut acc = Vec::new();
    go(bounds, length, &mut out, &mut acc);
    out
}

pub fn require_satisfiable(alphabets: &[Alphabet], min_length: usize, max_length: usize) -> Result<Vec<usize>> {
    if alphabets.is_empty() {
        return Err(Error::NoAlphabets);
    }
    if min_length == 0 && max_length == 0 {
        return Err(Error::NoLength);
    }
    if min_length > max_length {
        return Err(Error::NoLength);
    }
    let lengths = satisfiable_lengths(alphabets, min_length, max_length);
    if lengths.is_empty() {
        return Err(Error::Unsatisfiable);
    }
    Ok(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(min: usize, max: Option<usize>) -> Alphabet {
        Alphabet::new("x", "ab", min, max)
    }

    #[test]
    fn enumerate_respects_bounds_and_sum() {
        let bounds = vec![(1, 3), (0, 2)];
        let comps = enumerate(&bounds, 4);
        for c in &comps {
            assert_eq!(c.iter().sum::<usize>(), 4);
            assert!(c[0] >= 1 && c[0] <= 3);
            assert!(c[1] <= 2);
        }
        assert!(!comps.is_empty());
    }

    #[test]
    fn unsatisfiable_when_mins_exceed_length() {
        let alphabets = vec![alpha(5, None), alpha(5, None)];
        assert!(require_satisfiable(&alphabets, 1, 4).is_err());
    }

    #[test]
    fn satisfiable_lengths_found_in_range() {
        let alphabets = vec![alpha(1, None)];
        let lengths = satisfiable_lengths(&alphabets, 1, 5);
        assert_eq!(lengths, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_alphabets_is_an_error() {
        assert!(matches!(
            require_satisfiable(&[], 8, 16),
            Err(Error::NoAlphabets)
        ));
    }
}

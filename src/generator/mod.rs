//! Constrained password generator (§4.4): pick a length, pick a composition
//! weighted by how many distinct strings it represents, draw characters
//! uniformly per alphabet, shuffle. Grounded end-to-end in
//! `examples/original_source/passgen/passgen.go`'s `Generate`/`shuffle`/
//! `randBytes`, with the finite-domain solve reimplemented directly
//! (`solver`) instead of vendoring a constraint library, and RNG calls
//! following the `SecureEngine` idiom in `crate::rng`.

pub mod alphabet;
mod solver;
mod weight;

use num_traits::ToPrimitive;
use rand::Rng;

pub use alphabet::Alphabet;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Spec {
    pub alphabets: Vec<Alphabet>,
    pub min_length: usize,
    pub max_length: usize,
    pub exclude: String,
}

impl Spec {
    /// Apply the exclude-string filter to every alphabet before solving,
    /// matching `passgen.go`'s `exclude()` running ahead of `Generate()`.
    fn filtered_alphabets(&self) -> Vec<Alphabet> {
        let mut alphabets = self.alphabets.clone();
        for a in &mut alphabets {
            a.filter_out(&self.exclude);
        }
        alphabets
    }
}

/// Generate one password satisfying `spec`, drawing randomness from `rng`.
pub fn generate<R: Rng + ?Sized>(spec: &Spec, rng: &mut R) -> Result<String> {
    let alphabets = spec.filtered_alphabets();
    if alphabets.is_empty() {
        return Err(Error::NoAlphabets);
    }

    // A fully-excluded alphabet is only fatal if it still must contribute
    // at least one character (§4.4: "every character of some alphabet
    // excluded while that alphabet has min_i > 0 -> Unsatisfiable"); an
    // excluded alphabet with min == 0 is simply never drawn from, which
    // `Alphabet::effective_max` enforces by capping its bound to zero.
    if alphabets
        .iter()
        .any(|a| a.size() == 0 && a.min > 0)
    {
        return Err(Error::Unsatisfiable);
    }

    let lengths = solver::require_satisfiable(&alphabets, spec.min_length, spec.max_length)?;

    // Length chosen uniformly among satisfiable lengths.
    let length = lengths[rng.random_range(0..lengths.len())];

    let bounds: Vec<(usize, usize)> = alphabets
        .iter()
        .map(|a| (a.min, a.effective_max(length)))
        .collect();
    let compositions = solver::enumerate(&bounds, length);
    if compositions.is_empty() {
        return Err(Error::Unsatisfiable);
    }

    let sizes: Vec<u64> = alphabets.iter().map(|a| a.size() as u64).collect();
    let weights: Vec<_> = compositions
        .iter()
        .map(|c| {
            let counts: Vec<u64> = c.iter().map(|&x| x as u64).collect();
            weight::composition_weight(length as u64, &counts, &sizes)
        })
        .collect();

    let chosen = weighted_pick(&weights, rng);
    let counts = &compositions[chosen];

    // Characters drawn uniformly per alphabet, then one Fisher-Yates
    // shuffle over the pooled result (passgen.go's `shuffle`).
    let mut pool: Vec<char> = Vec::with_capacity(length);
    for (alphabet, &count) in alphabets.iter().zip(counts) {
        for _ in 0..count {
            let idx = rng.random_range(0..alphabet.size());
            pool.push(alphabet.chars[idx]);
        }
    }
    fisher_yates_shuffle(&mut pool, rng);

    Ok(pool.into_iter().collect())
}

/// Weighted-random index pick over exact (arbitrary-precision) weights,
/// done in the log domain so very large compositions (long passwords with
/// many alphabets) never overflow an `f64`.
fn weighted_pick<R: Rng + ?Sized>(weights: &[num_bigint::BigUint], rng: &mut R) -> usize {
    let log_weights: Vec<f64> = weights
        .iter()
        .map(|w| w.to_f64().map(|f| f.ln()).unwrap_or(f64::MAX))
        .collect();
    let max_log = log_weights.iter().cloned().fold(f64::MIN, f64::max);
    let relative: Vec<f64> = log_weights.iter().map(|lw| (lw - max_log).exp()).collect();
    let total: f64 = relative.iter().sum();

    let mut target = rng.random::<f64>() * total;
    for (i, r) in relative.iter().enumerate() {
        if target < *r {
            return i;
        }
        target -= r;
    }
    relative.len() - 1
}

fn fisher_yates_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn spec(alphabets: Vec<Alphabet>, min_length: usize, max_length: usize) -> Spec {
        Spec {
            alphabets,
            min_length,
            max_length,
            exclude: String::new(),
        }
    }

    #[test]
    fn generated_password_matches_exact_composition_bounds() {
        let alphabets = vec![
            Alphabet::new("upper", alphabet::UPPER, 2, Some(4)),
            Alphabet::new("digit", alphabet::DIGIT, 2, Some(4)),
        ];
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..50 {
            let pw = generate(&spec(alphabets.clone(), 6, 6), &mut rng).unwrap();
            assert_eq!(pw.len(), 6);
            let uppers = pw.chars().filter(|c| c.is_ascii_uppercase()).count();
            let digits = pw.chars().filter(|c| c.is_ascii_digit()).count();
            assert!((2..=4).contains(&uppers));
            assert!((2..=4).contains(&digits));
            assert_eq!(uppers + digits, 6);
        }
    }

    #[test]
    fn unsatisfiable_constraints_error() {
        let alphabets = vec![Alphabet::new("upper", alphabet::UPPER, 10, Some(10))];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(matches!(
            generate(&spec(alphabets, 1, 5), &mut rng),
            Err(Error::Unsatisfiable)
        ));
    }

    #[test]
    fn exclude_string_removes_characters() {
        let alphabets = vec![Alphabet::new("digit", "01", 4, Some(4))];
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let mut s = spec(alphabets, 4, 4);
        s.exclude = "0".to_string();
        let pw = generate(&s, &mut rng).unwrap();
        assert!(!pw.contains('0'));
        assert_eq!(pw, "1111");
    }

    #[test]
    fn fully_excluded_alphabet_with_required_min_is_unsatisfiable() {
        let alphabets = vec![
            Alphabet::new("digit", "01", 1, Some(4)),
            Alphabet::new("lower", alphabet::LOWER, 0, None),
        ];
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut s = spec(alphabets, 4, 4);
        s.exclude = "01".to_string();
        assert!(matches!(generate(&s, &mut rng), Err(Error::Unsatisfiable)));
    }

    #[test]
    fn fully_excluded_alphabet_with_zero_min_is_fine() {
        // "digit" is wholly excluded but not required (min 0); "lower" must
        // still satisfy the full password, per §4.4's exclude-interaction
        // rule distinguishing this from the `min > 0` case above.
        let alphabets = vec![
            Alphabet::new("digit", "01", 0, Some(4)),
            Alphabet::new("lower", "a", 4, Some(4)),
        ];
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut s = spec(alphabets, 4, 4);
        s.exclude = "01".to_string();
        let pw = generate(&s, &mut rng).unwrap();
        assert_eq!(pw, "aaaa");
    }

    #[test]
    fn empty_alphabets_is_an_error() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(matches!(
            generate(&spec(vec![], 8, 16), &mut rng),
            Err(Error::NoAlphabets)
        ));
    }
}

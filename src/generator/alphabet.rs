//! Character classes the generator draws from. Literal character sets and
//! the "similar-looking characters" list are grounded in
//! `examples/original_source/ward/add.go`'s `addCommand` flag definitions.

pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT: &str = "0123456789";
pub const SYMBOL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
pub const SIMILAR: &str = "5SB8|1IiLl0Oo";

/// One named character class with an occurrence-count bound. `max` of
/// `None` means "no explicit upper bound" — resolved to the chosen
/// password length at solve time, matching the original's `-1`/unset
/// sentinel in `passgen.go`'s `SetMax`.
#[derive(Debug, Clone)]
pub struct Alphabet {
    pub name: String,
    pub chars: Vec<char>,
    pub min: usize,
    pub max: Option<usize>,
}

impl Alphabet {
    pub fn new(name: impl Into<String>, charset: &str, min: usize, max: Option<usize>) -> Self {
        Self {
            name: name.into(),
            chars: charset.chars().collect(),
            min,
            max,
        }
    }

    /// Remove every character in `exclude` (and, optionally, the
    /// look-alike set) from this alphabet.
    pub fn filter_out(&mut self, exclude: &str) {
        let blocked: Vec<char> = exclude.chars().collect();
        self.chars.retain(|c| !blocked.contains(c));
    }

    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// The effective upper bound once a concrete password length `length`
    /// is known: explicit `max` if set, else `length` itself. An alphabet
    /// with no characters left (fully excluded) can never contribute a
    /// character, so its effective bound collapses to zero regardless of
    /// `max` — the composition search then either skips it (`min == 0`) or
    /// reports `Unsatisfiable` (`min > 0`), per §4.4's exclude-interaction
    /// rule rather than a blanket `NoAlphabets`.
    pub fn effective_max(&self, length: usize) -> usize {
        if self.chars.is_empty() {
            return 0;
        }
        self.max.unwrap_or(length).min(length)
    }
}

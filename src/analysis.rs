use std::collections::HashMap;
use std::hash::Hash;

use lazy_static::lazy_static;

pub mod attack;

pub use attack::{rank_affine_keys, rank_shift_keys, Score};

/// Occurrence counts in descending order; ties keep first-appearance order,
/// so the table reads the way the sequence does.
pub fn frequencies<T: Eq + Hash>(seq: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (pos, item) in seq.into_iter().enumerate() {
        let entry = counts.entry(item).or_insert((pos, 0));
        entry.1 += 1;
    }
    let mut table: Vec<(T, (usize, usize))> = counts.into_iter().collect();
    table.sort_by(|(_, (p1, c1)), (_, (p2, c2))| c2.cmp(c1).then(p1.cmp(p2)));
    table.into_iter().map(|(item, (_, count))| (item, count)).collect()
}

/// Counts of every overlapping window of `n` characters. No wraparound:
/// a text shorter than `n` has no windows.
pub fn ngrams(text: &str, n: usize) -> Vec<(String, usize)> {
    let chars: Vec<char> = text.chars().collect();
    if n == 0 || chars.len() < n {
        return Vec::new();
    }
    frequencies(chars.windows(n).map(|w| w.iter().collect::<String>()))
}

/// Normalized letter frequencies of a text, folded to lowercase; the
/// comparable shape for scoring against a language profile.
pub fn letter_profile(text: &str) -> HashMap<char, f64> {
    let letters: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let total = letters.len() as f64;
    frequencies(letters)
        .into_iter()
        .map(|(c, count)| (c, count as f64 / total))
        .collect()
}

// Letter weights per ten thousand of running French text
static FRENCH_LETTER_WEIGHTS: [(char, u32); 26] = [
    ('a', 0764),
    ('b', 0090),
    ('c', 0326),
    ('d', 0367),
    ('e', 1472),
    ('f', 0107),
    ('g', 0087),
    ('h', 0074),
    ('i', 0753),
    ('j', 0061),
    ('k', 0005),
    ('l', 0546),
    ('m', 0297),
    ('n', 0710),
    ('o', 0580),
    ('p', 0252),
    ('q', 0136),
    ('r', 0669),
    ('s', 0795),
    ('t', 0724),
    ('u', 0631),
    ('v', 0184),
    ('w', 0007),
    ('x', 0043),
    ('y', 0013),
    ('z', 0033),
];

lazy_static! {
    // A HashMap still cannot be built in a const context
    static ref FRENCH_PROFILE: HashMap<char, f64> = {
        let total: f64 = FRENCH_LETTER_WEIGHTS.iter().map(|&(_, w)| w as f64).sum();
        FRENCH_LETTER_WEIGHTS
            .iter()
            .map(|&(c, w)| (c, w as f64 / total))
            .collect()
    };
}

pub fn french_profile() -> &'static HashMap<char, f64> {
    &FRENCH_PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies_descend_with_stable_ties() {
        assert_eq!(frequencies("AAAB".chars()), vec![('A', 3), ('B', 1)]);
        assert_eq!(frequencies("ABAB".chars()), vec![('A', 2), ('B', 2)]);
        assert_eq!(frequencies("BAAB".chars()), vec![('B', 2), ('A', 2)]);
    }

    #[test]
    fn test_frequencies_over_ring_elements() {
        assert_eq!(frequencies(vec![4u32, 4, 11, 4]), vec![(4, 3), (11, 1)]);
    }

    #[test]
    fn test_digram_counts() {
        assert_eq!(
            ngrams("ABAB", 2),
            vec![("AB".to_string(), 2), ("BA".to_string(), 1)]
        );
    }

    #[test]
    fn test_ngrams_of_degenerate_inputs_are_empty() {
        assert_eq!(ngrams("AB", 3), Vec::new());
        assert_eq!(ngrams("AB", 0), Vec::new());
    }

    #[test]
    fn test_most_frequent_letter_of_a_caesar_ciphertext() {
        // E shifted by K is O, and E dominates French
        let table = frequencies("VYXQDOWZCTOWOCESCMYEMRONOLYXXOROEBO".chars());
        assert_eq!(table[0].0, 'O');
    }

    #[test]
    fn test_letter_profile_normalizes_and_folds_case() {
        let profile = letter_profile("AAab");
        assert_eq!(profile.get(&'a'), Some(&0.75));
        assert_eq!(profile.get(&'b'), Some(&0.25));
    }

    #[test]
    fn test_french_profile_is_normalized_and_led_by_e() {
        let profile = french_profile();
        let total: f64 = profile.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(profile[&'e'] > profile[&'a']);
    }
}

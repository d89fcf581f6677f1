use std::collections::HashMap;

use itertools::{iproduct, Itertools};
use log::{debug, trace};
use num::integer::gcd;

use crate::analysis::letter_profile;
use crate::cipher::{Affine, Shift, SymbolCipher};
use crate::code::Alphabet;

/// Statistical distance between a candidate's letter profile and a
/// reference language profile; lower means more plausible. Both measures
/// in `stats` have this shape, and callers can bring their own.
pub type Score = fn(&HashMap<char, f64>, &HashMap<char, f64>) -> f64;

/// Tries every shift of the alphabet against a ciphertext and ranks the
/// candidate keys by ascending score.
pub fn rank_shift_keys(
    cipher: &str,
    reference: &HashMap<char, f64>,
    score: Score,
) -> Vec<(u32, f64)> {
    let n = Alphabet::latin().modulus();
    let ranked: Vec<(u32, f64)> = (0..n)
        .filter_map(|k| {
            let candidate = Shift::from_offset(k).decrypt(cipher).ok()?;
            let s = score(&letter_profile(&candidate), reference);
            trace!("shift key {} scores {}", k, s);
            Some((k, s))
        })
        // f64 does not implement Ord
        .sorted_by(|(_, s1), (_, s2)| s1.partial_cmp(s2).unwrap())
        .collect();
    if let Some(&(best, s)) = ranked.first() {
        debug!("best shift key {} with score {}", best, s);
    }
    ranked
}

/// Exhausts the affine key space: every multiplier coprime to the modulus,
/// every offset. Ranked ascending like `rank_shift_keys`.
pub fn rank_affine_keys(
    cipher: &str,
    reference: &HashMap<char, f64>,
    score: Score,
) -> Vec<((u32, u32), f64)> {
    let n = Alphabet::latin().modulus();
    let multipliers: Vec<u32> = (1..n).filter(|&a| gcd(a, n) == 1).collect();
    let ranked: Vec<((u32, u32), f64)> = iproduct!(multipliers, 0..n)
        .filter_map(|(a, b)| {
            let candidate = Affine::new(a, b).ok()?.decrypt(cipher).ok()?;
            Some(((a, b), score(&letter_profile(&candidate), reference)))
        })
        .sorted_by(|(_, s1), (_, s2)| s1.partial_cmp(s2).unwrap())
        .collect();
    if let Some(&((a, b), s)) = ranked.first() {
        debug!("best affine key ({}, {}) with score {}", a, b, s);
    }
    ranked
}

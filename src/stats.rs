use std::collections::HashMap;
use std::hash::Hash;

// The key space of `reference` is taken as the space of categories
pub fn sum_squares<T: Eq + Hash>(observed: &HashMap<T, f64>, reference: &HashMap<T, f64>) -> f64 {
    reference
        .iter()
        .fold(0f64, |a, (i, r)| {
            let &o = observed
                .get(i)
                .unwrap_or(&0f64);
            a + (o - r).powi(2)
        })
}

// Renormalized variant of the sum of squares: each deviation is taken
// relative to the reference frequency. Categories with a zero reference
// frequency are skipped so the ratio is always defined.
pub fn chi_squared<T: Eq + Hash>(observed: &HashMap<T, f64>, reference: &HashMap<T, f64>) -> f64 {
    reference
        .iter()
        .filter(|&(_, &r)| r != 0f64)
        .fold(0f64, |a, (i, r)| {
            let &o = observed
                .get(i)
                .unwrap_or(&0f64);
            a + (1f64 - o / r).powi(2)
        })
}

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::cipher::SymbolCipher;
use crate::code::Alphabet;
use crate::error::Error;

/// Monoalphabetic substitution through an arbitrary permutation of the
/// ring. The inverse table is precomputed so both directions are a lookup.
#[derive(Debug, Clone)]
pub struct Substitution {
    alphabet: Alphabet,
    table: Vec<u32>,
    inverse: Vec<u32>,
}

impl Substitution {
    pub fn new(table: Vec<u32>) -> Result<Self, Error> {
        Self::with_alphabet(Alphabet::latin(), table)
    }

    pub fn with_alphabet(alphabet: Alphabet, table: Vec<u32>) -> Result<Self, Error> {
        let n = alphabet.modulus();
        if table.len() != n as usize {
            return Err(Error::KeyLength { expected: n as usize, got: table.len() });
        }
        let mut inverse = vec![n; n as usize];
        for (m, &c) in table.iter().enumerate() {
            if c >= n || inverse[c as usize] != n {
                return Err(Error::KeyNotBijective { modulus: n });
            }
            inverse[c as usize] = m as u32;
        }
        Ok(Self { alphabet, table, inverse })
    }

    /// Draws a uniformly random permutation of the ring from the given
    /// generator (Fisher-Yates via `shuffle`).
    pub fn random(rng: &mut impl Rng) -> Self {
        let alphabet = Alphabet::latin();
        let n = alphabet.modulus();
        let mut table: Vec<u32> = (0..n).collect();
        table.shuffle(rng);
        let mut inverse = vec![0u32; n as usize];
        for (m, &c) in table.iter().enumerate() {
            inverse[c as usize] = m as u32;
        }
        Self { alphabet, table, inverse }
    }

    /// Deterministic draw; the same seed reproduces the same key.
    pub fn from_seed(seed: u64) -> Self {
        Self::random(&mut StdRng::seed_from_u64(seed))
    }

    pub fn table(&self) -> &[u32] {
        &self.table
    }
}

impl SymbolCipher for Substitution {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn forward(&self, m: u32) -> u32 {
        self.table[m as usize]
    }

    fn inverse(&self, c: u32) -> u32 {
        self.inverse[c as usize]
    }
}

use crate::cipher::BlockCipher;
use crate::code::{Alphabet, Blocks};
use crate::error::Error;

/// Vigenere's cipher: a Caesar shift per position, i.e. elementwise block
/// addition of the key word. A trailing short block is shifted by the key's
/// prefix (the zip truncates), which inverts the same way.
#[derive(Debug, Clone)]
pub struct Vigenere {
    blocks: Blocks,
    key: Vec<u32>,
}

impl Vigenere {
    pub fn new(key: &str) -> Result<Self, Error> {
        Self::with_alphabet(Alphabet::latin(), key)
    }

    pub fn with_alphabet(alphabet: Alphabet, key: &str) -> Result<Self, Error> {
        let coded = alphabet.encode(key);
        let blocks = Blocks::new(alphabet, coded.len())?;
        Ok(Self { blocks, key: coded })
    }

    pub fn key(&self) -> &[u32] {
        &self.key
    }
}

impl BlockCipher for Vigenere {
    fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    fn forward(&self, m: &[u32]) -> Vec<u32> {
        let n = self.blocks.alphabet().modulus();
        m.iter().zip(&self.key).map(|(&x, &k)| (x + k) % n).collect()
    }

    fn inverse(&self, c: &[u32]) -> Vec<u32> {
        let n = self.blocks.alphabet().modulus();
        c.iter().zip(&self.key).map(|(&x, &k)| (x + n - k) % n).collect()
    }
}

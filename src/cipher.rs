use crate::code::{Alphabet, Blocks};
use crate::error::Error;

pub mod affine;
pub mod chain;
pub mod hill;
pub mod shift;
pub mod substitution;
pub mod vigenere;

pub use affine::Affine;
pub use chain::Chained;
pub use hill::Hill;
pub use shift::Shift;
pub use substitution::Substitution;
pub use vigenere::Vigenere;

/// A cipher acting on one symbol at a time. Implementors supply the
/// alphabet and a forward/inverse pair that must be a bijection of the
/// ring; encryption and decryption are then the same three-step pipeline:
/// code the text onto the ring, map every element, decode the result.
pub trait SymbolCipher {
    fn alphabet(&self) -> &Alphabet;
    fn forward(&self, m: u32) -> u32;
    fn inverse(&self, c: u32) -> u32;

    fn encrypt(&self, plain: &str) -> Result<String, Error> {
        let coded: Vec<u32> = self
            .alphabet()
            .encode(plain)
            .iter()
            .map(|&m| self.forward(m))
            .collect();
        self.alphabet().decode(&coded)
    }

    fn decrypt(&self, cipher: &str) -> Result<String, Error> {
        let coded: Vec<u32> = self
            .alphabet()
            .encode(cipher)
            .iter()
            .map(|&c| self.inverse(c))
            .collect();
        self.alphabet().decode(&coded)
    }
}

/// A cipher acting on fixed-size blocks of ring elements. Same pipeline as
/// `SymbolCipher` with the block grouping as the unit; the trailing block
/// may be shorter than the block length and each transform documents how it
/// handles that.
pub trait BlockCipher {
    fn blocks(&self) -> &Blocks;
    fn forward(&self, m: &[u32]) -> Vec<u32>;
    fn inverse(&self, c: &[u32]) -> Vec<u32>;

    fn encrypt(&self, plain: &str) -> Result<String, Error> {
        let coded: Vec<Vec<u32>> = self
            .blocks()
            .encode(plain)
            .iter()
            .map(|m| self.forward(m))
            .collect();
        self.blocks().decode(&coded)
    }

    fn decrypt(&self, cipher: &str) -> Result<String, Error> {
        let coded: Vec<Vec<u32>> = self
            .blocks()
            .encode(cipher)
            .iter()
            .map(|c| self.inverse(c))
            .collect();
        self.blocks().decode(&coded)
    }
}

#[cfg(test)]
mod generic_tests {
    use crate::cipher::*;

    const PLAIN: &str = "longtempsjemesuiscouchedebonneheure";
    const UPPER: &str = "LONGTEMPSJEMESUISCOUCHEDEBONNEHEURE";

    #[test]
    fn test_every_symbol_cipher_round_trips() {
        let ciphers: Vec<Box<dyn SymbolCipher>> = vec![
            Box::new(Shift::new('k').unwrap()),
            Box::new(Affine::new(3, 12).unwrap()),
            Box::new(Substitution::from_seed(7)),
        ];
        for cipher in &ciphers {
            let encrypted = cipher.encrypt(PLAIN).unwrap();
            assert_eq!(cipher.decrypt(&encrypted).unwrap(), UPPER);
        }
    }

    #[test]
    fn test_every_block_cipher_round_trips() {
        let ciphers: Vec<Box<dyn BlockCipher>> = vec![
            Box::new(Vigenere::new("clef").unwrap()),
            Box::new(Hill::new(3, "gybnqkurp").unwrap()),
        ];
        for cipher in &ciphers {
            let encrypted = cipher.encrypt(PLAIN).unwrap();
            assert_eq!(cipher.decrypt(&encrypted).unwrap(), UPPER);
        }
    }

    #[test]
    fn test_round_trip_loses_only_case_and_foreign_chars() {
        let cipher = Shift::new('c').unwrap();
        let encrypted = cipher.encrypt("Longtemps, je me suis couche...").unwrap();
        assert_eq!(
            cipher.decrypt(&encrypted).unwrap(),
            "LONGTEMPSJEMESUISCOUCHE"
        );
    }
}

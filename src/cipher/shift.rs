use crate::cipher::SymbolCipher;
use crate::code::Alphabet;
use crate::error::Error;

/// Caesar's cipher: adds a fixed offset to every symbol.
#[derive(Debug, Clone)]
pub struct Shift {
    alphabet: Alphabet,
    offset: u32,
}

impl Shift {
    /// Keyed by a symbol of the alphabet, as tradition demands.
    pub fn new(key: char) -> Result<Self, Error> {
        Self::with_alphabet(Alphabet::latin(), key)
    }

    pub fn with_alphabet(alphabet: Alphabet, key: char) -> Result<Self, Error> {
        let coded = alphabet.encode(&key.to_string());
        match coded.first() {
            Some(&offset) => Ok(Self { alphabet, offset }),
            None => Err(Error::KeyLength { expected: 1, got: 0 }),
        }
    }

    /// Keyed by a raw ring element, for sweeping the whole key space.
    pub fn from_offset(offset: u32) -> Self {
        let alphabet = Alphabet::latin();
        let offset = offset % alphabet.modulus();
        Self { alphabet, offset }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl SymbolCipher for Shift {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn forward(&self, m: u32) -> u32 {
        (m + self.offset) % self.alphabet.modulus()
    }

    fn inverse(&self, c: u32) -> u32 {
        let n = self.alphabet.modulus();
        (c + n - self.offset) % n
    }
}

#[test]
fn test_shift_known_vector() {
    let cipher = Shift::new('K').unwrap();
    assert_eq!(
        cipher.encrypt("longtempsjemesuiscouchedebonneheure").unwrap(),
        "VYXQDOWZCTOWOCESCMYEMRONOLYXXOROEBO"
    );
}

#[test]
fn test_shift_decrypts_known_vector() {
    let cipher = Shift::new('K').unwrap();
    assert_eq!(
        cipher.decrypt("VYXQDOWZCTOWOCESCMYEMRONOLYXXOROEBO").unwrap(),
        "LONGTEMPSJEMESUISCOUCHEDEBONNEHEURE"
    );
}

#[test]
fn test_shift_key_is_case_insensitive() {
    let lower = Shift::new('k').unwrap();
    let upper = Shift::new('K').unwrap();
    assert_eq!(lower.offset(), upper.offset());
}

#[test]
fn test_shift_rejects_a_key_outside_the_alphabet() {
    assert_eq!(
        Shift::new('!').err(),
        Some(Error::KeyLength { expected: 1, got: 0 })
    );
}

#[test]
fn test_from_offset_reduces_modulo_the_alphabet() {
    assert_eq!(Shift::from_offset(36).offset(), 10);
}

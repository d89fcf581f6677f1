use crate::cipher::SymbolCipher;
use crate::code::Alphabet;
use crate::error::Error;
use crate::util::mod_inverse;

/// The affine cipher m -> a*m + b. The multiplier must be coprime to the
/// modulus or the map is not a bijection; the inverse multiplier is derived
/// once at construction and decryption is c -> a^-1 * (c - b).
#[derive(Debug, Clone)]
pub struct Affine {
    alphabet: Alphabet,
    a: u32,
    b: u32,
    a_inv: u32,
}

impl Affine {
    pub fn new(a: u32, b: u32) -> Result<Self, Error> {
        Self::with_alphabet(Alphabet::latin(), a, b)
    }

    pub fn with_alphabet(alphabet: Alphabet, a: u32, b: u32) -> Result<Self, Error> {
        let n = alphabet.modulus();
        let a_inv = mod_inverse(a as i64, n as i64)
            .ok_or(Error::KeyNotInvertible { modulus: n })? as u32;
        Ok(Self { alphabet, a: a % n, b: b % n, a_inv })
    }

    pub fn key(&self) -> (u32, u32) {
        (self.a, self.b)
    }
}

impl SymbolCipher for Affine {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn forward(&self, m: u32) -> u32 {
        let n = self.alphabet.modulus();
        (self.a * m + self.b) % n
    }

    fn inverse(&self, c: u32) -> u32 {
        let n = self.alphabet.modulus();
        (self.a_inv * ((c + n - self.b) % n)) % n
    }
}

#[test]
fn test_affine_known_vector() {
    let cipher = Affine::new(3, 12).unwrap();
    assert_eq!(
        cipher.encrypt("longtempsjemesuiscouchedebonneheure").unwrap(),
        "TCZERYWFONYWYOUKOSCUSHYVYPCZZYHYULY"
    );
}

#[test]
fn test_affine_round_trip_with_derived_inverse() {
    // 3 * 9 = 27 = 1 mod 26
    let cipher = Affine::new(3, 12).unwrap();
    let encrypted = cipher.encrypt("lavillesendormait").unwrap();
    assert_eq!(cipher.decrypt(&encrypted).unwrap(), "LAVILLESENDORMAIT");
}

#[test]
fn test_affine_rejects_a_multiplier_sharing_a_factor_with_the_modulus() {
    assert_eq!(
        Affine::new(2, 5).err(),
        Some(Error::KeyNotInvertible { modulus: 26 })
    );
    assert_eq!(
        Affine::new(13, 0).err(),
        Some(Error::KeyNotInvertible { modulus: 26 })
    );
}

#[test]
fn test_affine_with_unit_multiplier_degenerates_to_a_shift() {
    use crate::cipher::Shift;
    let affine = Affine::new(1, 10).unwrap();
    let shift = Shift::new('k').unwrap();
    let plain = "lebonlabruteetletruan";
    assert_eq!(affine.encrypt(plain).unwrap(), shift.encrypt(plain).unwrap());
}

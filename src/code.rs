use std::collections::HashMap;

use crate::error::Error;

/// Bijection between an ordered set of symbols and the ring 0..N.
///
/// Encoding is case-insensitive (ASCII fold) and silently drops characters
/// outside the alphabet; decoding is total over 0..N and rejects anything
/// else. The round trip loses only case and the dropped characters.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, u32>,
}

impl Alphabet {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols
            .into_iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let mut index = HashMap::new();
        for (i, &c) in symbols.iter().enumerate() {
            if index.insert(c, i as u32).is_some() {
                return Err(Error::DuplicateSymbol { symbol: c });
            }
        }
        Ok(Self { symbols, index })
    }

    /// The standard 26-letter alphabet A-Z over Z/26.
    pub fn latin() -> Self {
        let symbols: Vec<char> = ('A'..='Z').collect();
        let index = symbols.iter().enumerate().map(|(i, &c)| (c, i as u32)).collect();
        Self { symbols, index }
    }

    pub fn modulus(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub fn encode(&self, text: &str) -> Vec<u32> {
        text.chars()
            .filter_map(|c| self.index.get(&c.to_ascii_uppercase()).copied())
            .collect()
    }

    pub fn decode(&self, seq: &[u32]) -> Result<String, Error> {
        self.decode_with(seq, "")
    }

    pub fn decode_with(&self, seq: &[u32], joiner: &str) -> Result<String, Error> {
        let symbols = seq
            .iter()
            .map(|&v| {
                self.symbols
                    .get(v as usize)
                    .map(|c| c.to_string())
                    .ok_or(Error::AlphabetMismatch { value: v, modulus: self.modulus() })
            })
            .collect::<Result<Vec<String>, Error>>()?;
        Ok(symbols.join(joiner))
    }
}

#[test]
fn test_encode_folds_case_and_drops_foreign_chars() {
    let az = Alphabet::latin();
    assert_eq!(az.encode("Abc"), vec![0, 1, 2]);
    assert_eq!(az.encode("a b-c, d!"), vec![0, 1, 2, 3]);
    assert_eq!(az.encode("123 ..."), Vec::<u32>::new());
}

#[test]
fn test_decode_round_trip() {
    let az = Alphabet::latin();
    let coded = az.encode("Le Lievre et la Tortue");
    assert_eq!(az.decode(&coded), Ok("LELIEVREETLATORTUE".to_string()));
}

#[test]
fn test_decode_with_joiner() {
    let az = Alphabet::latin();
    assert_eq!(az.decode_with(&[0, 1, 2], " "), Ok("A B C".to_string()));
}

#[test]
fn test_decode_rejects_out_of_ring_values() {
    let az = Alphabet::latin();
    assert_eq!(
        az.decode(&[0, 26]),
        Err(Error::AlphabetMismatch { value: 26, modulus: 26 })
    );
}

#[test]
fn test_duplicate_symbols_rejected() {
    assert_eq!(
        Alphabet::new("ABA".chars()).err(),
        Some(Error::DuplicateSymbol { symbol: 'A' })
    );
    // Case folding makes 'a' collide with 'A'
    assert_eq!(
        Alphabet::new("Aa".chars()).err(),
        Some(Error::DuplicateSymbol { symbol: 'A' })
    );
}

/// An alphabet coding grouped into fixed-size tuples of ring elements.
///
/// The trailing block may be shorter than the block length; nothing is
/// padded, so flattening the blocks reproduces the plain encoding exactly.
#[derive(Debug, Clone)]
pub struct Blocks {
    alphabet: Alphabet,
    len: usize,
}

impl Blocks {
    pub fn new(alphabet: Alphabet, len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::EmptyBlock);
        }
        Ok(Self { alphabet, len })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn encode(&self, text: &str) -> Vec<Vec<u32>> {
        self.alphabet
            .encode(text)
            .chunks(self.len)
            .map(<[u32]>::to_vec)
            .collect()
    }

    pub fn decode(&self, blocks: &[Vec<u32>]) -> Result<String, Error> {
        self.alphabet.decode(&blocks.concat())
    }
}

#[test]
fn test_blocks_group_in_order_with_short_tail() {
    let code = Blocks::new(Alphabet::latin(), 3).unwrap();
    assert_eq!(
        code.encode("abcdefgh"),
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7]]
    );
}

#[test]
fn test_blocks_flatten_to_the_plain_coding() {
    let az = Alphabet::latin();
    let code = Blocks::new(az.clone(), 4).unwrap();
    let text = "D'un pas tardif, et qui ne se trainait qu'avec peine";
    assert_eq!(code.encode(text).concat(), az.encode(text));
    assert_eq!(code.decode(&code.encode(text)), az.decode(&az.encode(text)));
}

#[test]
fn test_zero_length_blocks_rejected() {
    assert_eq!(Blocks::new(Alphabet::latin(), 0).err(), Some(Error::EmptyBlock));
}

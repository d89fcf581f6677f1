use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum Error {
    /// The key's forward map is not a bijection of the ring: an affine
    /// multiplier or a matrix determinant that shares a factor with the
    /// modulus. Caught at construction so a lossy cipher is never built.
    #[snafu(display("key is not invertible modulo {modulus}"))]
    KeyNotInvertible { modulus: u32 },

    #[snafu(display("substitution table is not a permutation of 0..{modulus}"))]
    KeyNotBijective { modulus: u32 },

    #[snafu(display("key has {got} usable symbols, expected {expected}"))]
    KeyLength { expected: usize, got: usize },

    /// Decoding refuses values outside the ring rather than wrapping them;
    /// silent wraparound would mask a key/alphabet size mismatch.
    #[snafu(display("value {value} is outside the ring 0..{modulus}"))]
    AlphabetMismatch { value: u32, modulus: u32 },

    #[snafu(display("alphabet contains duplicate symbol {symbol:?}"))]
    DuplicateSymbol { symbol: char },

    #[snafu(display("block length must be at least 1"))]
    EmptyBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key_not_invertible() {
        let err = Error::KeyNotInvertible { modulus: 26 };
        assert_eq!(format!("{}", err), "key is not invertible modulo 26");
    }

    #[test]
    fn test_display_alphabet_mismatch() {
        let err = Error::AlphabetMismatch { value: 31, modulus: 26 };
        assert_eq!(format!("{}", err), "value 31 is outside the ring 0..26");
    }
}

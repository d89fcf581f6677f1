use crate::cipher::BlockCipher;
use crate::code::{Alphabet, Blocks};
use crate::error::Error;
use crate::util::mod_inverse;

/// Hill's cipher: blocks are column vectors and the key is a square matrix
/// over the ring, applied by modular matrix-vector product. The key must be
/// invertible (determinant coprime to the modulus); the inverse matrix is
/// computed at construction through the adjugate.
///
/// A trailing block shorter than the matrix passes through unchanged: a
/// rectangular slice of the key is not invertible, and the grouping does
/// not pad.
#[derive(Debug, Clone)]
pub struct Hill {
    blocks: Blocks,
    matrix: Vec<Vec<u32>>,
    matrix_inv: Vec<Vec<u32>>,
}

impl Hill {
    /// Key text read row by row, as in `Hill::new(3, "baaabaaab")` for the
    /// 3x3 identity. The text must code to exactly length^2 ring elements.
    pub fn new(length: usize, key: &str) -> Result<Self, Error> {
        if length == 0 {
            return Err(Error::EmptyBlock);
        }
        let alphabet = Alphabet::latin();
        let coded = alphabet.encode(key);
        if coded.len() != length * length {
            return Err(Error::KeyLength { expected: length * length, got: coded.len() });
        }
        let matrix = coded.chunks(length).map(<[u32]>::to_vec).collect();
        Self::from_matrix(alphabet, matrix)
    }

    pub fn from_matrix(alphabet: Alphabet, matrix: Vec<Vec<u32>>) -> Result<Self, Error> {
        let n = alphabet.modulus();
        let length = matrix.len();
        if length == 0 || matrix.iter().any(|row| row.len() != length) {
            return Err(Error::EmptyBlock);
        }
        let matrix: Vec<Vec<u32>> = matrix
            .iter()
            .map(|row| row.iter().map(|&x| x % n).collect())
            .collect();
        let matrix_inv = invert(&matrix, n)?;
        let blocks = Blocks::new(alphabet, length)?;
        Ok(Self { blocks, matrix, matrix_inv })
    }

    pub fn matrix(&self) -> &[Vec<u32>] {
        &self.matrix
    }

    fn apply(&self, matrix: &[Vec<u32>], block: &[u32]) -> Vec<u32> {
        if block.len() < self.blocks.len() {
            return block.to_vec();
        }
        let n = self.blocks.alphabet().modulus();
        matrix
            .iter()
            .map(|row| row.iter().zip(block).map(|(&k, &x)| k * x).sum::<u32>() % n)
            .collect()
    }
}

impl BlockCipher for Hill {
    fn blocks(&self) -> &Blocks {
        &self.blocks
    }

    fn forward(&self, m: &[u32]) -> Vec<u32> {
        self.apply(&self.matrix, m)
    }

    fn inverse(&self, c: &[u32]) -> Vec<u32> {
        self.apply(&self.matrix_inv, c)
    }
}

fn minor(m: &[Vec<i64>], row: usize, col: usize) -> Vec<Vec<i64>> {
    m.iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &x)| x)
                .collect()
        })
        .collect()
}

fn det(m: &[Vec<i64>]) -> i64 {
    match m.len() {
        0 => 1,
        1 => m[0][0],
        _ => (0..m.len())
            .map(|j| {
                let sign = if j % 2 == 0 { 1 } else { -1 };
                sign * m[0][j] * det(&minor(m, 0, j))
            })
            .sum(),
    }
}

// Inverse by the adjugate: inv[j][i] = det^-1 * cofactor(i, j). Cofactor
// expansion is exponential in the block length, which stays small for any
// key a human would carry.
fn invert(matrix: &[Vec<u32>], n: u32) -> Result<Vec<Vec<u32>>, Error> {
    let length = matrix.len();
    let signed: Vec<Vec<i64>> = matrix
        .iter()
        .map(|row| row.iter().map(|&x| x as i64).collect())
        .collect();
    let d_inv = mod_inverse(det(&signed), n as i64)
        .ok_or(Error::KeyNotInvertible { modulus: n })?;
    let mut out = vec![vec![0u32; length]; length];
    for i in 0..length {
        for j in 0..length {
            let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
            let cofactor = sign * det(&minor(&signed, i, j));
            out[j][i] = (d_inv * cofactor).rem_euclid(n as i64) as u32;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_key_text_builds_the_identity_matrix() {
        let cipher = Hill::new(3, "baaabaaab").unwrap();
        assert_eq!(
            cipher.matrix(),
            &[vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_identity_key_leaves_the_text_alone() {
        // 31 letters: the trailing one-letter block passes through
        let cipher = Hill::new(3, "baaabaaab").unwrap();
        assert_eq!(
            cipher.encrypt("lavillesendormaitjenoublielenom").unwrap(),
            "LAVILLESENDORMAITJENOUBLIELENOM"
        );
    }

    #[test]
    fn test_hill_round_trips() {
        // [[3, 3], [2, 5]]: det = 9, coprime to 26
        let cipher = Hill::new(2, "ddcf").unwrap();
        let plain = "lavillesendormaitjenoublielenom";
        let encrypted = cipher.encrypt(plain).unwrap();
        assert_ne!(encrypted, plain.to_uppercase());
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), plain.to_uppercase());
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        assert_eq!(
            Hill::new(2, "bbbb").err(),
            Some(Error::KeyNotInvertible { modulus: 26 })
        );
        // det("vxbufacri") = -2510 = 12 mod 26, which shares a factor with 26
        assert_eq!(
            Hill::new(3, "vxbufacri").err(),
            Some(Error::KeyNotInvertible { modulus: 26 })
        );
    }

    #[test]
    fn test_key_text_of_the_wrong_size_is_rejected() {
        assert_eq!(
            Hill::new(3, "baaab").err(),
            Some(Error::KeyLength { expected: 9, got: 5 })
        );
    }

    #[test]
    fn test_inverse_matrix_of_the_classic_key() {
        // The textbook 3x3 key GYBNQKURP and its published inverse
        let cipher = Hill::new(3, "gybnqkurp").unwrap();
        assert_eq!(
            super::invert(cipher.matrix(), 26).unwrap(),
            vec![vec![8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]]
        );
    }
}

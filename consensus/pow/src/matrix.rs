use crate::xoshiro::XoShiRo256PlusPlus;
use koda_hashes::{Hash, KHeavyHash};
use log::trace;

const EPS: f64 = 1e-9;

/// 64x64 mixing matrix of 4-bit values held in 16-bit cells. Always full
/// rank over the reals under the consensus rank predicate.
pub struct Matrix([[u16; 64]; 64]);

impl Matrix {
    /// Draws candidate matrices from the hash-seeded PRNG until one of full
    /// rank comes up. The stream continues across rejected candidates;
    /// reseeding would change which matrix is accepted.
    pub fn generate(hash: Hash) -> Self {
        let mut generator = XoShiRo256PlusPlus::new(hash);
        loop {
            let matrix = Self::rand_matrix(&mut generator);
            if matrix.compute_rank() == 64 {
                return matrix;
            }
            trace!("discarding rank-deficient matrix candidate");
        }
    }

    fn rand_matrix(generator: &mut XoShiRo256PlusPlus) -> Self {
        let mut cells = [[0u16; 64]; 64];
        for row in cells.iter_mut() {
            for chunk in row.chunks_exact_mut(16) {
                let word = generator.u64();
                for (shift, cell) in chunk.iter_mut().enumerate() {
                    *cell = ((word >> (4 * shift)) & 0x0F) as u16;
                }
            }
        }
        Self(cells)
    }

    /// Rank over the reals, computed by Gauss-Jordan elimination on an
    /// IEEE-754 f64 copy with strict `abs > 1e-9` pivot predicates.
    ///
    /// The accept/reject decision is consensus-critical: the arithmetic
    /// must stay in double precision, in this exact order, with no FMA
    /// contraction and no fast-math reassociation.
    fn compute_rank(&self) -> usize {
        let mut b = [[0f64; 64]; 64];
        for (i, row) in self.0.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                b[i][j] = cell as f64;
            }
        }
        let mut rank = 0;
        let mut row_selected = [false; 64];
        for i in 0..64 {
            if let Some(j) = (0..64).find(|&j| !row_selected[j] && b[j][i].abs() > EPS) {
                rank += 1;
                row_selected[j] = true;
                for p in (i + 1)..64 {
                    b[j][p] /= b[j][i];
                }
                for k in 0..64 {
                    if k != j && b[k][i].abs() > EPS {
                        for p in (i + 1)..64 {
                            b[k][p] -= b[j][p] * b[k][i];
                        }
                    }
                }
            }
        }
        rank
    }

    /// The Pyrinhash (v1) transform: matrix-vector multiply over the hash
    /// nibbles, folded back into the hash bytes and finalized under the
    /// HeavyHash personalization.
    pub fn heavy_hash(&self, hash: Hash) -> Hash {
        KHeavyHash::hash(Hash::from_bytes(self.mix(hash)))
    }

    /// The Kodahash (v2) post-chain transform. Same mix as
    /// [`Self::heavy_hash`], applied to the chained hash; kept as its own
    /// entry point because the two algorithms may diverge independently.
    pub fn heavy_koda_hash(&self, hash: Hash) -> Hash {
        KHeavyHash::hash(Hash::from_bytes(self.mix(hash)))
    }

    fn mix(&self, hash: Hash) -> [u8; 32] {
        let hash_bytes = hash.as_bytes();
        let mut vector = [0u16; 64];
        for (i, &byte) in hash_bytes.iter().enumerate() {
            vector[2 * i] = (byte >> 4) as u16;
            vector[2 * i + 1] = (byte & 0x0F) as u16;
        }

        // Matrix-vector multiplication in 16-bit wrapping arithmetic,
        // keeping only the top 4 bits of each sum.
        let mut product = [0u16; 64];
        for (i, row) in self.0.iter().enumerate() {
            let mut sum = 0u16;
            for (j, &cell) in row.iter().enumerate() {
                sum = sum.wrapping_add(cell.wrapping_mul(vector[j]));
            }
            product[i] = sum >> 10;
        }

        // Repack two product nibbles per byte and fold into the input.
        let mut res = [0u8; 32];
        for (i, byte) in res.iter_mut().enumerate() {
            *byte = hash_bytes[i] ^ (((product[2 * i] << 4) as u8) | (product[2 * i + 1] as u8));
        }
        res
    }
}

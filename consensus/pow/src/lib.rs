// public for benchmarks
#[doc(hidden)]
pub mod matrix;
#[doc(hidden)]
pub mod xoshiro;

use std::cmp::max;

use crate::matrix::Matrix;
use consensus_core::{constants, hashing, header::Header, BlockLevel};
use koda_hashes::{Hash, KodaPowHash, PowHash};
use primitive_types::U256;
use sha3::{Digest, Sha3_256};
use skein::digest::consts::U32;
use skein::Skein512;

/// Which hashing algorithm a header's version selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PowAlgorithm {
    Pyrinhash,
    Kodahash,
}

/// State is an intermediate data structure with pre-computed values to
/// speed up mining.
pub struct State {
    pub(crate) matrix: Matrix,
    pub target: U256,
    pub pre_pow_hash: Hash,
    pub timestamp: i64,
    pub nonce: u64,
    algorithm: PowAlgorithm,
}

impl State {
    #[inline]
    pub fn new(header: &Header) -> Self {
        let target = compact_to_target(header.bits);
        // Hash with the timestamp and nonce zeroed to get the pre-pow hash;
        // the header itself stays untouched.
        let pre_pow_hash = hashing::header::hash_override_nonce_time(header, 0, 0);
        let matrix = Matrix::generate(pre_pow_hash);
        let algorithm = match header.version {
            constants::BLOCK_VERSION_KODAHASH => PowAlgorithm::Kodahash,
            // Unknown versions hash like the oldest algorithm.
            _ => PowAlgorithm::Pyrinhash,
        };
        Self { matrix, target, pre_pow_hash, timestamp: header.timestamp, nonce: header.nonce, algorithm }
    }

    #[inline]
    fn calculate_pow_pyrinhash(&self) -> U256 {
        // PRE_POW_HASH || TIME || 32 zero byte padding || NONCE
        let pow_hash = PowHash::new(self.pre_pow_hash, self.timestamp).finalize_with_nonce(self.nonce);
        let heavy_hash = self.matrix.heavy_hash(pow_hash);
        U256::from_little_endian(heavy_hash.as_bytes())
    }

    #[inline]
    fn calculate_pow_kodahash(&self) -> U256 {
        // Same pre-image, compressed under the HeavyHash personalization.
        let pow_hash = KodaPowHash::new(self.pre_pow_hash, self.timestamp).finalize_with_nonce(self.nonce);
        let chained = chain_hash(pow_hash);
        let mixed = self.matrix.heavy_koda_hash(chained);
        U256::from_little_endian(mixed.as_bytes())
    }

    /// The PoW value for the current (timestamp, nonce) pair, reading the
    /// final hash as a little-endian 256-bit integer.
    #[inline]
    #[must_use]
    pub fn calculate_pow_value(&self) -> U256 {
        match self.algorithm {
            PowAlgorithm::Pyrinhash => self.calculate_pow_pyrinhash(),
            PowAlgorithm::Kodahash => self.calculate_pow_kodahash(),
        }
    }

    /// Advances the nonce by one. Wrap-around is the caller's invariant to
    /// keep; miners re-template long before the nonce space is exhausted.
    #[inline]
    pub fn increment_nonce(&mut self) {
        self.nonce += 1;
    }

    #[inline]
    #[must_use]
    pub fn check_pow(&self) -> bool {
        // The pow value must be less or equal than the claimed target.
        self.calculate_pow_value() <= self.target
    }
}

/// BLAKE2b-256, then Skein, then SHA3-256: the Kodahash chain between the
/// pre-image compressor and the matrix mix. The Skein step is Skein-512
/// truncated to a 256-bit output, matching the reference.
fn chain_hash(pow_hash: Hash) -> Hash {
    let blake_step = blake2b_simd::Params::new().hash_length(32).hash(pow_hash.as_bytes());
    let skein_step: [u8; 32] = Skein512::<U32>::digest(blake_step.as_bytes()).into();
    let sha3_step: [u8; 32] = Sha3_256::digest(skein_step).into();
    Hash::from_bytes(sha3_step)
}

/// Decodes a compact-form difficulty (1-byte exponent, 3-byte mantissa with
/// the sign bit masked off) into the full 256-bit target.
pub fn compact_to_target(bits: u32) -> U256 {
    let size = (bits >> 24) as usize;
    let word = bits & 0x007fffff;
    if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3))
    }
}

/// Verifies the header's PoW against the target encoded in its own bits
/// field.
pub fn check_pow_by_bits(header: &Header) -> bool {
    State::new(header).check_pow()
}

pub fn calc_block_level(header: &Header, max_block_level: BlockLevel) -> BlockLevel {
    let (block_level, _) = calc_block_level_check_pow(header, max_block_level);
    block_level
}

pub fn calc_block_level_check_pow(header: &Header, max_block_level: BlockLevel) -> (BlockLevel, bool) {
    if header.direct_parents().is_empty() {
        return (max_block_level, true); // Genesis has the max block level
    }

    let state = State::new(header);
    let pow = state.calculate_pow_value();
    let passed = pow <= state.target;
    (calc_level_from_pow(pow, max_block_level), passed)
}

pub fn calc_level_from_pow(pow: U256, max_block_level: BlockLevel) -> BlockLevel {
    let signed_block_level = max_block_level as i64 - pow.bits() as i64;
    max(signed_block_level, 0) as BlockLevel
}

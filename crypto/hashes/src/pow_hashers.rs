use crate::Hash;

const PROOF_OF_WORK_DOMAIN: &[u8] = b"ProofOfWorkHash";
const HEAVY_HASH_DOMAIN: &[u8] = b"HeavyHash";

/// Pre-image compressor for the v1 (Pyrinhash) proof-of-work. Keyed
/// blake2b-256 with the `ProofOfWorkHash` personalization over
/// PRE_POW_HASH || TIME || 32 zero byte padding || NONCE.
#[derive(Clone)]
pub struct PowHash(blake2b_simd::State);

/// Pre-image compressor for the v2 (Kodahash) proof-of-work. Same pre-image
/// layout as [`PowHash`] but keyed with the `HeavyHash` personalization.
/// The two keys must never be interchanged.
#[derive(Clone)]
pub struct KodaPowHash(blake2b_simd::State);

/// Finalizer of the matrix-mix step, keyed with the `HeavyHash`
/// personalization.
#[derive(Clone)]
pub struct KHeavyHash;

impl PowHash {
    #[inline]
    pub fn new(pre_pow_hash: Hash, timestamp: i64) -> Self {
        let mut hasher = blake2b_simd::Params::new().hash_length(32).key(PROOF_OF_WORK_DOMAIN).to_state();
        hasher.update(pre_pow_hash.as_bytes()).update(&timestamp.to_le_bytes()).update(&[0u8; 32]);
        Self(hasher)
    }

    #[inline(always)]
    pub fn finalize_with_nonce(mut self, nonce: u64) -> Hash {
        self.0.update(&nonce.to_le_bytes());
        Hash::from_bytes(self.0.finalize().as_bytes().try_into().expect("blake2b-256 outputs 32 bytes"))
    }
}

impl KodaPowHash {
    #[inline]
    pub fn new(pre_pow_hash: Hash, timestamp: i64) -> Self {
        let mut hasher = blake2b_simd::Params::new().hash_length(32).key(HEAVY_HASH_DOMAIN).to_state();
        hasher.update(pre_pow_hash.as_bytes()).update(&timestamp.to_le_bytes()).update(&[0u8; 32]);
        Self(hasher)
    }

    #[inline(always)]
    pub fn finalize_with_nonce(mut self, nonce: u64) -> Hash {
        self.0.update(&nonce.to_le_bytes());
        Hash::from_bytes(self.0.finalize().as_bytes().try_into().expect("blake2b-256 outputs 32 bytes"))
    }
}

impl KHeavyHash {
    #[inline]
    pub fn hash(in_hash: Hash) -> Hash {
        let hash = blake2b_simd::Params::new().hash_length(32).key(HEAVY_HASH_DOMAIN).hash(in_hash.as_bytes());
        Hash::from_bytes(hash.as_bytes().try_into().expect("blake2b-256 outputs 32 bytes"))
    }
}

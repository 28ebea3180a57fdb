use crate::Hash;

const BLOCK_HASH_DOMAIN: &[u8] = b"BlockHash";

/// Base trait for hashers, allowing data updates.
pub trait HasherBase {
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self;
}

/// Trait for hashers with finalize, reset, and one-shot hash functionality.
pub trait Hasher: HasherBase + Clone + Default {
    fn finalize(self) -> Hash;
    fn reset(&mut self);
    #[inline(always)]
    fn hash<A: AsRef<[u8]>>(data: A) -> Hash {
        let mut hasher = Self::default();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Canonical block header hash writer. Keyed blake2b-256 with the
/// `BlockHash` personalization; the key bytes are part of the wire format.
#[derive(Clone)]
pub struct BlockHash(blake2b_simd::State);

impl BlockHash {
    #[inline(always)]
    pub fn new() -> Self {
        Self(blake2b_simd::Params::new().hash_length(32).key(BLOCK_HASH_DOMAIN).to_state())
    }

    pub fn write<A: AsRef<[u8]>>(&mut self, data: A) {
        self.0.update(data.as_ref());
    }

    #[inline(always)]
    pub fn finalize(self) -> Hash {
        let hash = self.0.finalize();
        Hash::from_bytes(hash.as_bytes().try_into().expect("blake2b-256 outputs 32 bytes"))
    }
}

impl HasherBase for BlockHash {
    #[inline(always)]
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
        self.write(data);
        self
    }
}

impl Hasher for BlockHash {
    #[inline(always)]
    fn finalize(self) -> Hash {
        BlockHash::finalize(self)
    }

    #[inline(always)]
    fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for BlockHash {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockHash, Hasher, HasherBase};

    #[test]
    fn block_hash_is_keyed() {
        // Keyed blake2b must not collide with the unkeyed hash of the same data.
        let keyed = BlockHash::hash(b"header bytes");
        let unkeyed = blake2b_simd::Params::new().hash_length(32).hash(b"header bytes");
        assert_ne!(keyed.as_bytes(), unkeyed.as_bytes());
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut hasher = BlockHash::new();
        hasher.update(b"header").update(b" bytes");
        assert_eq!(hasher.finalize(), BlockHash::hash(b"header bytes"));
    }
}

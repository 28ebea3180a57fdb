pub mod hashers;
pub mod pow_hashers;

pub use hashers::{BlockHash, Hasher, HasherBase};
pub use pow_hashers::{KHeavyHash, KodaPowHash, PowHash};

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const HASH_SIZE: usize = 32;

/// A 32-byte domain hash. Displayed as hex in byte order; the PoW code
/// interprets the same bytes as a little-endian integer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self([0; HASH_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; HASH_SIZE]
    }

    /// Builds a hash from four little-endian u64 words, lowest word first.
    pub const fn from_le_u64(words: [u64; 4]) -> Self {
        let mut bytes = [0u8; HASH_SIZE];
        let mut i = 0;
        while i < 4 {
            let le = words[i].to_le_bytes();
            let mut k = 0;
            while k < 8 {
                bytes[i * 8 + k] = le[k];
                k += 1;
            }
            i += 1;
        }
        Self(bytes)
    }

    /// Reads the hash back as four little-endian u64 words.
    pub fn to_le_u64(&self) -> [u64; 4] {
        let mut words = [0u64; 4];
        for (i, word) in words.iter_mut().enumerate() {
            *word = u64::from_le_bytes(self.0[i * 8..(i + 1) * 8].try_into().unwrap());
        }
        words
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; HASH_SIZE] {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&faster_hex::hex_string(&self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Hash {
    type Err = faster_hex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_SIZE];
        faster_hex::hex_decode(s.as_bytes(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::Hash;
    use std::str::FromStr;

    #[test]
    fn le_u64_roundtrip() {
        let hash = Hash::from_le_u64([1, 2, 3, 4]);
        assert_eq!(&hash.as_bytes()[0..8], &1u64.to_le_bytes());
        assert_eq!(&hash.as_bytes()[24..32], &4u64.to_le_bytes());
        assert_eq!(hash.to_le_u64(), [1, 2, 3, 4]);
    }

    #[test]
    fn hex_roundtrip() {
        let hex = "80cc12c3f0fb4500a1a9a20cbc54f0f849323183f6ca4f1d1cbcb9b27c0b8caa";
        let hash = Hash::from_str(hex).unwrap();
        assert_eq!(hash.to_string(), hex);
        assert!(Hash::from_str("deadbeef").is_err());
    }
}

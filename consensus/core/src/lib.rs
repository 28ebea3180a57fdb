pub mod constants;
pub mod hashing;
pub mod header;

pub use koda_hashes::Hash;

/// Accumulated blue work of a header chain.
pub type BlueWorkType = koda_math::Uint192;

/// PoW level of a header in the pruning-proof hierarchy. Bounded by the hash
/// length, so a byte is plenty.
pub type BlockLevel = u8;

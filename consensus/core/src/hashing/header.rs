use crate::header::Header;
use koda_hashes::{BlockHash, Hash, HasherBase};

/// Canonical hash of the header, timestamp and nonce included.
pub fn hash(header: &Header) -> Hash {
    hash_override_nonce_time(header, header.nonce, header.timestamp)
}

/// Canonical hash of the header with the nonce and timestamp fields replaced
/// by the given values. Passing zeros yields the pre-pow hash; the header
/// itself is never touched.
pub fn hash_override_nonce_time(header: &Header, nonce: u64, timestamp: i64) -> Hash {
    let mut hasher = BlockHash::new();
    hasher
        .update(header.version.to_le_bytes())
        .update((header.parents_by_level.len() as u64).to_le_bytes());
    for level in &header.parents_by_level {
        hasher.update((level.len() as u64).to_le_bytes());
        for parent in level {
            hasher.update(parent);
        }
    }
    hasher
        .update(header.hash_merkle_root)
        .update(header.accepted_id_merkle_root)
        .update(header.utxo_commitment)
        .update(timestamp.to_le_bytes())
        .update(header.bits.to_le_bytes())
        .update(nonce.to_le_bytes())
        .update(header.daa_score.to_le_bytes())
        .update(header.blue_score.to_le_bytes());

    // Blue work is written as its minimal big-endian byte string, length
    // prefixed, so that leading zero limbs do not enter the hash.
    let be = header.blue_work.to_be_bytes();
    let start = be.iter().position(|&byte| byte != 0).unwrap_or(be.len());
    let trimmed = &be[start..];
    hasher.update((trimmed.len() as u64).to_le_bytes()).update(trimmed);

    hasher.update(header.pruning_point);
    hasher.finalize()
}

use crate::BlueWorkType;
use borsh::{BorshDeserialize, BorshSerialize};
use koda_hashes::Hash;
use serde::{Deserialize, Serialize};

/// Block header. All fields except `timestamp` and `nonce` are fixed once
/// the header enters PoW evaluation; those two are owned by the miner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub version: u16,
    /// Parent hashes grouped by block level, lowest level first.
    pub parents_by_level: Vec<Vec<Hash>>,
    pub hash_merkle_root: Hash,
    pub accepted_id_merkle_root: Hash,
    pub utxo_commitment: Hash,
    /// Timestamp in milliseconds since the UNIX epoch.
    pub timestamp: i64,
    /// Difficulty target in compact form.
    pub bits: u32,
    pub nonce: u64,
    pub daa_score: u64,
    pub blue_score: u64,
    pub blue_work: BlueWorkType,
    pub pruning_point: Hash,
}

impl Header {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        version: u16,
        parents_by_level: Vec<Vec<Hash>>,
        hash_merkle_root: Hash,
        accepted_id_merkle_root: Hash,
        utxo_commitment: Hash,
        timestamp: i64,
        bits: u32,
        nonce: u64,
        daa_score: u64,
        blue_score: u64,
        blue_work: BlueWorkType,
        pruning_point: Hash,
    ) -> Self {
        Self {
            version,
            parents_by_level,
            hash_merkle_root,
            accepted_id_merkle_root,
            utxo_commitment,
            timestamp,
            bits,
            nonce,
            daa_score,
            blue_score,
            blue_work,
            pruning_point,
        }
    }

    /// Parents at the lowest level. Empty only for genesis.
    pub fn direct_parents(&self) -> &[Hash] {
        self.parents_by_level.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

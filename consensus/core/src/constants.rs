/// Current block version.
pub const BLOCK_VERSION: u16 = 1;

/// Block version hashed with the Pyrinhash algorithm.
pub const BLOCK_VERSION_PYRINHASH: u16 = 1;

/// Block version hashed with the Kodahash algorithm.
pub const BLOCK_VERSION_KODAHASH: u16 = 2;

/// The current latest supported transaction version.
pub const MAX_TRANSACTION_VERSION: u16 = 0;

/// The current latest supported public key script version.
pub const MAX_SCRIPT_PUBLIC_KEY_VERSION: u16 = 0;

/// Number of leor in one kobra (1 KODA).
pub const LEOR_PER_KOBRA: u64 = 100_000_000;

/// Maximum transaction amount allowed in leor.
pub const MAX_LEOR: u64 = 1_000_000_000 * LEOR_PER_KOBRA;

/// Maximum sequence number a transaction input can carry.
pub const MAX_TX_IN_SEQUENCE_NUM: u64 = u64::MAX;

/// If set on an input's sequence number, the sequence number is not
/// interpreted as a relative locktime.
pub const SEQUENCE_LOCK_TIME_DISABLED: u64 = 1 << 63;

/// Extracts the relative locktime when masked against an input sequence
/// number.
pub const SEQUENCE_LOCK_TIME_MASK: u64 = 0x00000000ffffffff;

/// Lock times below this threshold are interpreted as a DAA score.
pub const LOCK_TIME_THRESHOLD: u64 = 500_000_000_000; // Tue Nov 5 00:53:20 1985 UTC

/// DAA score tag for UTXO entries created by not-yet-accepted transactions,
/// e.g. in the mempool.
pub const UNACCEPTED_DAA_SCORE: u64 = u64::MAX;

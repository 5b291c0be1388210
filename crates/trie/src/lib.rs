//! The claim trie: a persistent, Merkleized radix trie over name claims.
//!
//! [`ClaimTrie`] tracks the set of currently-valid claims and supports,
//! runs the per-block takeover state machine that decides which claim
//! controls each name, and produces the 32-byte root digest embedded in
//! block headers. Blocks are applied with [`ClaimTrie::increment_block`]
//! and fully reversed with [`ClaimTrie::decrement_block`] and
//! [`ClaimTrie::finalize_decrement`] using the undo buckets the increment
//! produced.
//!
//! Mutation is single-writer: the caller serializes all block-processing
//! calls, and the backing store transaction is the serialization point.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod block;
mod merkle;
mod proof;
mod structure;
mod takeover;
mod trie;

pub use proof::{verify_proof, Proof, ProofNode};
pub use trie::ClaimTrie;

pub use claimtrie_forks::ForkRules;
pub use claimtrie_store::{SqliteStore, StateStore, StoreError};
pub use claimtrie_types::{
    ActivationUndo, BlockUndo, Claim, ClaimAndSupports, ClaimId, ClaimsForName, ExpiredClaimUndo,
    ExpiredSupportUndo, NodeHash, OutPoint, Support, TakeoverUndo, TxId,
};

/// Error raised by trie operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing store failed; the current block must be rolled back.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Malformed input crossing the API boundary; no side effect occurred.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A stored hash did not match its recomputed value.
    #[error("claim trie state is inconsistent")]
    Inconsistent,
}

/// Trie result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

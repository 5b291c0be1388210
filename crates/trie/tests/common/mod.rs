//! Shared helpers for the integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use claimtrie_trie::{BlockUndo, ClaimId, ClaimTrie, ForkRules, OutPoint, SqliteStore, TxId};

/// Fork schedule with every fork far out of the way and a claim lifetime
/// long enough that test claims never expire by accident.
pub fn quiet_forks() -> ForkRules {
    ForkRules {
        normalization_fork_height: 10_000,
        original_expiration_time: 5_000,
        extended_expiration_time: 10_000,
        extended_expiration_fork_height: 10_000,
        all_claims_in_merkle_fork_height: 10_000,
        proportional_delay_factor: 32,
    }
}

pub fn trie(forks: ForkRules, height: u32) -> ClaimTrie<SqliteStore> {
    ClaimTrie::in_memory(forks, height).expect("in-memory store")
}

pub fn outpoint(tag: u8, index: u32) -> OutPoint {
    OutPoint::new(TxId::new([tag; 32]), index)
}

pub fn claim_id(tag: u8) -> ClaimId {
    ClaimId::new([tag; 20])
}

/// Applies `blocks` empty blocks, discarding their undo data.
pub fn advance(trie: &mut ClaimTrie<SqliteStore>, blocks: u32) {
    for _ in 0..blocks {
        let mut undo = BlockUndo::default();
        trie.increment_block(&mut undo).expect("increment");
    }
}

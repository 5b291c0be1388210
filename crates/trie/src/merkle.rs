//! Lazy Merkle-hash computation over the trie.
//!
//! Dirtiness is a null stored hash; any structural or claim change nulls
//! the affected node and the nulls are propagated to the root before
//! recomputation. Only dirty subtrees are re-hashed.

use crate::{ClaimTrie, Result};
use claimtrie_hash::{complete_hash, sha256d, value_hash};
use claimtrie_store::StateStore;
use claimtrie_types::NodeHash;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Counters for one hash recomputation.
#[derive(Debug, Default)]
struct HashStats {
    /// Nodes whose hash was recomputed.
    nodes: u64,
    /// Value hashes that entered node buffers.
    values: u64,
}

impl<S: StateStore> ClaimTrie<S> {
    /// Root hash of the trie, recomputing dirty subtrees if needed.
    pub fn get_merkle_hash(&mut self) -> Result<NodeHash> {
        self.ensure_tree_structure_is_up_to_date()?;
        let Some((stored, takeover_height)) = self.store.node_hash(b"")? else {
            return Ok(NodeHash::EMPTY_TRIE);
        };
        if let Some(hash) = stored {
            return Ok(hash);
        }
        let started = Instant::now();
        let mut stats = HashStats::default();
        let root = self.recursive_compute_merkle_hash(b"", takeover_height, false, &mut stats)?;
        trace!(
            target: "claimtrie::merkle",
            %root,
            nodes = stats.nodes,
            values = stats.values,
            duration = ?started.elapsed(),
            "recomputed merkle root"
        );
        Ok(root)
    }

    /// Recomputes the hash of `name`, recursing into dirty children.
    ///
    /// Each child contributes its first edge byte followed by its hash
    /// lifted through the remaining edge bytes; the node's own claims
    /// contribute value hashes keyed by `takeover_height`. An empty buffer
    /// hashes to the sentinel.
    fn recursive_compute_merkle_hash(
        &mut self,
        name: &[u8],
        takeover_height: u32,
        check_only: bool,
        stats: &mut HashStats,
    ) -> Result<NodeHash> {
        let pos = name.len();
        let mut buf = Vec::new();
        for (child_name, stored, child_takeover) in self.store.child_hashes(name)? {
            let hash = match stored {
                Some(hash) => hash,
                None => {
                    self.recursive_compute_merkle_hash(&child_name, child_takeover, check_only, stats)?
                }
            };
            let lifted = complete_hash(hash, &child_name, pos);
            buf.push(child_name[pos]);
            buf.extend_from_slice(lifted.as_slice());
        }

        if self.forks.all_claims_in_merkle(self.next_height) {
            for (claim, _) in self.store.claims_by_effective_rank(name, self.next_height)? {
                stats.values += 1;
                buf.extend_from_slice(value_hash(&claim.outpoint, takeover_height).as_slice());
            }
        } else if let Some((claim, _)) = self.store.best_claim(name, self.next_height)? {
            stats.values += 1;
            buf.extend_from_slice(value_hash(&claim.outpoint, takeover_height).as_slice());
        }

        stats.nodes += 1;
        let computed = if buf.is_empty() {
            NodeHash::EMPTY_TRIE
        } else {
            sha256d([buf.as_slice()])
        };
        if !check_only {
            self.store.set_node_hash(name, &computed)?;
        }
        Ok(computed)
    }

    /// Recomputes every node hash and compares it to the stored value.
    pub fn check_consistency(&mut self) -> Result<bool> {
        let mut stats = HashStats::default();
        for (name, stored, takeover_height) in self.store.all_nodes()? {
            let Some(stored) = stored else { return Ok(false) };
            if self.recursive_compute_merkle_hash(&name, takeover_height, true, &mut stats)? != stored
            {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Verifies stored hashes and compares the root against `expected`.
    pub fn validate_db(&mut self, expected: &NodeHash) -> Result<bool> {
        debug!(target: "claimtrie::merkle", "checking claim trie consistency");
        if !self.check_consistency()? {
            warn!(target: "claimtrie::merkle", "claim trie is inconsistent");
            return Ok(false);
        }
        if self.get_merkle_hash()? != *expected {
            warn!(
                target: "claimtrie::merkle",
                "persisted claim root does not match the block header root"
            );
            return Ok(false);
        }
        Ok(true)
    }
}

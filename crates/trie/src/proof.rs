//! Merkle inclusion proofs.
//!
//! A proof lists one node per step of the path from the root to the
//! target, each carrying the folded hashes of its off-path children.
//! The on-path child appears as a placeholder, and radix edges longer
//! than one byte are expanded into synthetic single-child nodes so the
//! verifier can fold the deeper hash through each byte exactly as the
//! hash computation does.

use crate::{ClaimTrie, Error, Result};
use claimtrie_hash::{complete_hash, sha256d, value_hash};
use claimtrie_store::StateStore;
use claimtrie_types::{ClaimId, NodeHash, OutPoint};

/// One step of a proof path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofNode {
    /// `(edge byte, folded child hash)` pairs in ascending byte order;
    /// the child on the path to the target carries `None`.
    pub children: Vec<(u8, Option<NodeHash>)>,
    /// True if the node has a winning claim.
    pub has_value: bool,
    /// Value hash of the winning claim; absent for the target node, whose
    /// value the verifier recomputes from the proof commitment.
    pub value_hash: Option<NodeHash>,
}

/// Inclusion proof for a name, verifiable against the trie root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Proof {
    /// Proof nodes ordered root first, target last.
    pub nodes: Vec<ProofNode>,
    /// True if the target's winning claim matches the requested claim id.
    pub has_value: bool,
    /// Outpoint of the target's winning claim when `has_value`.
    pub outpoint: Option<OutPoint>,
    /// Takeover height committed by the target's value hash.
    pub last_takeover_height: u32,
}

impl<S: StateStore> ClaimTrie<S> {
    /// Builds the inclusion proof for `name`, committing to `final_claim`
    /// as the expected winner.
    pub fn get_proof_for_name(&mut self, name: &[u8], final_claim: &ClaimId) -> Result<Proof> {
        let name = self.lookup_name(name).into_owned();
        // resolve every dirty hash first so child hashes can be copied out
        self.get_merkle_hash()?;

        let mut proof = Proof::default();
        for (key, takeover_height) in self.store.nodes_on_path(&name)? {
            let node_claim = self.info_for_node(&key, self.next_height)?;
            let has_value = node_claim.is_some();
            let mut vhash = node_claim
                .as_ref()
                .map(|(claim, _)| value_hash(&claim.outpoint, takeover_height));

            let pos = key.len();
            let mut children: Vec<(u8, Option<NodeHash>)> = Vec::new();
            let mut edge_tail: &[u8] = &[];
            for (child_key, child_hash, _) in self.store.child_hashes(&key)? {
                if name.starts_with(&child_key) {
                    // the path continues through this child; its first
                    // edge byte is the placeholder, the rest become
                    // synthetic nodes below
                    children.push((child_key[pos], None));
                    let (head, tail) = name.split_at(pos + 1);
                    edge_tail = &tail[..child_key.len() - head.len()];
                    continue;
                }
                let hash = child_hash.ok_or(Error::Inconsistent)?;
                let lifted = complete_hash(hash, &child_key, pos);
                children.push((child_key[pos], Some(lifted)));
            }

            if key == name {
                proof.has_value = matches!(&node_claim, Some((claim, _)) if claim.claim_id == *final_claim);
                if proof.has_value {
                    proof.outpoint = node_claim.as_ref().map(|(claim, _)| claim.outpoint);
                    proof.last_takeover_height = takeover_height;
                }
                vhash = None;
            }
            proof.nodes.push(ProofNode {
                children,
                has_value,
                value_hash: vhash,
            });
            for &byte in edge_tail {
                proof.nodes.push(ProofNode {
                    children: vec![(byte, None)],
                    has_value: false,
                    value_hash: None,
                });
            }
        }
        Ok(proof)
    }
}

/// Folds a proof back into a root hash and compares it to `expected_root`.
///
/// The reverse of proof generation: entries are consumed target first,
/// each placeholder child absorbing the hash computed one level deeper.
pub fn verify_proof(proof: &Proof, expected_root: &NodeHash) -> bool {
    let mut computed: Option<NodeHash> = None;
    for (index, node) in proof.nodes.iter().enumerate().rev() {
        let is_target = index == proof.nodes.len() - 1;
        let mut buf = Vec::new();
        let mut placeholder_used = false;
        for (byte, hash) in &node.children {
            buf.push(*byte);
            match hash {
                Some(hash) => buf.extend_from_slice(hash.as_slice()),
                None => {
                    // exactly one on-path child, and never below the target
                    let Some(below) = computed else { return false };
                    if placeholder_used {
                        return false;
                    }
                    placeholder_used = true;
                    buf.extend_from_slice(below.as_slice());
                }
            }
        }
        if is_target && proof.has_value {
            let Some(outpoint) = &proof.outpoint else { return false };
            buf.extend_from_slice(value_hash(outpoint, proof.last_takeover_height).as_slice());
        } else if node.has_value {
            match &node.value_hash {
                Some(vhash) => buf.extend_from_slice(vhash.as_slice()),
                None => return false,
            }
        }
        computed = Some(if buf.is_empty() {
            NodeHash::EMPTY_TRIE
        } else {
            sha256d([buf.as_slice()])
        });
    }
    computed.is_some_and(|root| root == *expected_root)
}

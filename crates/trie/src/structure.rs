//! Radix-trie structure maintenance.
//!
//! Claim inserts and removals only touch claim rows and dirty their node;
//! the node table is reconciled lazily, right before hashes are computed.
//! Reconciliation collapses claimless chains, finds the correct parent for
//! every surviving dirty node, and creates split nodes where a sibling
//! shares a longer prefix.

use crate::{ClaimTrie, Result};
use claimtrie_store::StateStore;
use claimtrie_types::lossy_name;
use tracing::{debug, trace};

/// Outcome of trying to delete one node.
enum NodeRemoval {
    /// The node was deleted; its parent may now be collapsible too.
    Deleted { parent: Vec<u8> },
    /// The node stays, with this many active claims on it.
    Kept { active_claims: i64 },
}

impl<S: StateStore> ClaimTrie<S> {
    /// Reconciles the node table with the current claim set.
    ///
    /// Must run inside the block transaction; a read-only trie has nothing
    /// to reconcile.
    pub(crate) fn ensure_tree_structure_is_up_to_date(&mut self) -> Result<()> {
        if !self.transacting {
            return Ok(());
        }
        let mut names = self.store.dirty_node_names()?;
        if names.is_empty() {
            return Ok(());
        }
        names.sort();

        for name in names {
            // collapse the chain of claimless single-child nodes upward
            let mut node = name.clone();
            let active_claims;
            loop {
                match self.delete_node_if_possible(&node)? {
                    NodeRemoval::Deleted { parent } => node = parent,
                    NodeRemoval::Kept { active_claims: count } => {
                        active_claims = count;
                        break;
                    }
                }
            }
            if node != name || name.is_empty() || active_claims <= 0 {
                // nothing was deleted but there are no claims either: the
                // node must be holding legitimate children, leave it
                continue;
            }

            let mut parent = self
                .store
                .deepest_ancestor(&name[..name.len() - 1])?
                .unwrap_or_default();

            // a sibling sharing a longer prefix than the parent forces a
            // split node between them
            let prefix_len = parent.len() + 1;
            for sibling in self.store.children_of(&parent)? {
                if sibling.len() >= prefix_len && sibling[..prefix_len] == name[..prefix_len] {
                    let mut split = prefix_len;
                    while split < sibling.len() && split < name.len() && sibling[split] == name[split]
                    {
                        split += 1;
                    }
                    let split_name = name[..split].to_vec();
                    self.store.set_node_parent(&sibling, &split_name)?;
                    if split == name.len() {
                        // the split node is the node being inserted
                        break;
                    }
                    debug!(
                        target: "claimtrie::structure",
                        node = %lossy_name(&split_name),
                        near = %lossy_name(&sibling),
                        parent = %lossy_name(&parent),
                        "inserting split node"
                    );
                    self.store.insert_or_dirty_node_with_parent(&split_name, &parent)?;
                    parent = split_name;
                    break;
                }
            }

            trace!(
                target: "claimtrie::structure",
                node = %lossy_name(&name),
                parent = %lossy_name(&parent),
                "inserting or updating node"
            );
            self.store.insert_or_dirty_node_with_parent(&name, &parent)?;
        }

        self.store.propagate_dirty_upwards()?;
        Ok(())
    }

    /// Deletes `name` if it has no active claims and at most one child,
    /// reparenting a single child to the grandparent.
    fn delete_node_if_possible(&mut self, name: &[u8]) -> Result<NodeRemoval> {
        if name.is_empty() {
            return Ok(NodeRemoval::Kept { active_claims: 0 });
        }
        let active_claims = self.store.active_claim_count(name, self.next_height)?;
        if active_claims > 0 {
            return Ok(NodeRemoval::Kept { active_claims });
        }
        let (children, last_child) = self.store.child_count_and_last(name)?;
        if children > 1 {
            return Ok(NodeRemoval::Kept { active_claims: 0 });
        }
        let Some(parent) = self.store.node_parent(name)? else {
            // already gone; whoever deleted it rewired the children
            return Ok(NodeRemoval::Deleted { parent: Vec::new() });
        };
        if !self.store.delete_node(name)? {
            return Ok(NodeRemoval::Kept { active_claims: 0 });
        }
        debug!(
            target: "claimtrie::structure",
            node = %lossy_name(name),
            children,
            "removed node"
        );
        if children == 1 {
            if let Some(child) = last_child {
                self.store.set_node_parent(&child, &parent)?;
            }
        }
        self.store.dirty_node(&parent)?;
        Ok(NodeRemoval::Deleted { parent })
    }
}

//! Block stepping: increment, decrement, and the commit path.

use crate::{ClaimTrie, Error, Result};
use claimtrie_store::StateStore;
use claimtrie_types::{BlockUndo, ExpiredClaimUndo, ExpiredSupportUndo};
use std::{thread, time::Duration};
use tracing::{trace, warn};

/// Bound on commit retries when the store reports transient contention.
const MAX_COMMIT_RETRIES: u32 = 30;

impl<S: StateStore> ClaimTrie<S> {
    /// Applies one block at the current height, filling `undo` with the
    /// records needed to reverse it.
    ///
    /// Per-block phase order: fork transitions, activation, expiration,
    /// then the takeover pass over every dirty node.
    pub fn increment_block(&mut self, undo: &mut BlockUndo) -> Result<()> {
        debug_assert!(undo.is_empty());
        self.begin()?;

        if self.next_height == self.forks.normalization_fork_height {
            self.store.apply_name_normalization(self.next_height)?;
        }
        if self.next_height == self.forks.extended_expiration_fork_height {
            self.store
                .shift_pending_expirations(i64::from(self.forks.expiration_extension()), self.next_height)?;
        }
        if self.next_height + 1 == self.forks.all_claims_in_merkle_fork_height {
            // every node hash changes meaning once the next computation
            // runs at the fork height, so force a full re-hash now
            self.store.null_all_node_hashes()?;
        }

        // claims and supports that become valid this block dirty their nodes
        self.store.dirty_nodes_for_activating_claims(self.next_height)?;
        self.store.dirty_nodes_for_activating_supports(self.next_height)?;

        // expiring rows stay in the store, hidden by the expiration-height
        // filter in every query, so a decrement can resurrect them
        for claim in self.store.expiring_claims(self.next_height)? {
            trace!(
                target: "claimtrie::block",
                name = %claimtrie_types::lossy_name(&claim.node_name),
                outpoint = %claim.outpoint,
                "claim expires"
            );
            undo.expired_claims.push(ExpiredClaimUndo {
                name: claim.node_name.clone(),
                claim,
            });
        }
        self.store.dirty_nodes_for_expiring_claims(self.next_height)?;

        for support in self.store.expiring_supports(self.next_height)? {
            undo.expired_supports.push(ExpiredSupportUndo {
                name: support.node_name.clone(),
                support,
            });
        }
        self.store.dirty_nodes_for_expiring_supports(self.next_height)?;

        self.run_takeover_pass(undo)?;

        self.next_height += 1;
        Ok(())
    }

    /// Reverses the effects of the last incremented block using its undo
    /// buckets, replaying each list back to front.
    ///
    /// The caller is expected to follow up by undoing the block's claim
    /// and support mutations (re-adding spent rows, removing added ones)
    /// and then calling [`Self::finalize_decrement`].
    pub fn decrement_block(&mut self, undo: &BlockUndo) -> Result<()> {
        if self.next_height == 0 {
            return Err(Error::InvalidArgument("cannot decrement below genesis"));
        }
        self.begin()?;
        self.next_height -= 1;

        for expired in undo.expired_supports.iter().rev() {
            self.store.insert_or_dirty_node(&expired.name)?;
        }
        for expired in undo.expired_claims.iter().rev() {
            self.store.insert_or_dirty_node(&expired.name)?;
        }
        for activated in undo.activated_supports.iter().rev() {
            trace!(
                target: "claimtrie::block",
                name = %claimtrie_types::lossy_name(&activated.name),
                valid_height = activated.prior_valid_height,
                "restoring support valid height"
            );
            self.store
                .reset_support_valid_height(&activated.outpoint, activated.prior_valid_height)?;
            self.store.insert_or_dirty_node(&activated.name)?;
        }
        for activated in undo.activated_claims.iter().rev() {
            trace!(
                target: "claimtrie::block",
                name = %claimtrie_types::lossy_name(&activated.name),
                valid_height = activated.prior_valid_height,
                "restoring claim valid height"
            );
            self.store.reset_claim_valid_height(
                &activated.name,
                &activated.outpoint,
                activated.prior_valid_height,
            )?;
            self.store.insert_or_dirty_node(&activated.name)?;
        }

        if self.next_height == self.forks.extended_expiration_fork_height {
            self.store.shift_pending_expirations(
                -i64::from(self.forks.expiration_extension()),
                self.next_height,
            )?;
        }
        if self.next_height == self.forks.normalization_fork_height {
            self.store.revert_name_normalization()?;
        }
        if self.next_height + 1 == self.forks.all_claims_in_merkle_fork_height {
            // hashes computed under the all-claims rule are invalid again
            self.store.null_all_node_hashes()?;
        }
        Ok(())
    }

    /// Second decrement sweep, run after the caller has undone the
    /// block's claim and support mutations: re-dirties every node with an
    /// entry becoming visible at the restored height and puts takeover
    /// records back, newest first.
    pub fn finalize_decrement(&mut self, undo: &BlockUndo) -> Result<()> {
        self.store.dirty_nodes_for_valid_claims_at(self.next_height)?;
        self.store.dirty_nodes_for_valid_supports_at(self.next_height)?;

        for takeover in undo.takeovers.iter().rev() {
            self.store.restore_takeover(
                &takeover.name,
                takeover.prior.as_ref().map(|(height, id)| (*height, id)),
            )?;
        }
        Ok(())
    }

    /// Resolves dirty hashes and commits the block transaction.
    ///
    /// Transient busy/locked errors are retried with one-second backoff a
    /// bounded number of times. The removal-workaround set only survives
    /// within a block.
    pub fn flush(&mut self) -> Result<()> {
        if self.transacting {
            self.get_merkle_hash()?;
            let mut attempts = 0;
            loop {
                match self.store.commit() {
                    Ok(()) => break,
                    Err(error) if error.is_busy() && attempts < MAX_COMMIT_RETRIES => {
                        attempts += 1;
                        warn!(
                            target: "claimtrie::block",
                            %error,
                            attempts,
                            "commit contention, retrying in one second"
                        );
                        thread::sleep(Duration::from_secs(1));
                    }
                    Err(error) => return Err(error.into()),
                }
            }
            self.transacting = false;
        }
        self.removal_workaround.clear();
        Ok(())
    }

    /// Aborts the open block transaction, if any.
    pub fn rollback(&mut self) -> Result<()> {
        if self.transacting {
            self.store.rollback()?;
            self.transacting = false;
        }
        Ok(())
    }
}

//! Per-name takeover detection and the early-activation sweep.

use crate::{ClaimTrie, Result};
use claimtrie_forks::{takeover_workaround_exists, TAKEOVER_WORKAROUND_CUTOFF};
use claimtrie_store::StateStore;
use claimtrie_types::{lossy_name, ActivationUndo, BlockUndo, TakeoverUndo};
use tracing::{debug, trace};

impl<S: StateStore> ClaimTrie<S> {
    /// Runs takeover detection for every dirty node.
    ///
    /// The winner is evaluated one block ahead so that claims activating
    /// this block are counted. A takeover happens when the node loses its
    /// last claim or when the prospective winner differs from the recorded
    /// controller; a first-ever winner records the takeover without the
    /// sweep (nothing can be pending on a name that was never owned).
    pub(crate) fn run_takeover_pass(&mut self, undo: &mut BlockUndo) -> Result<()> {
        let mut names = self.store.dirty_node_names()?;
        names.sort();

        for name in names {
            let mut candidate = self.info_for_node(&name, self.next_height + 1)?;
            let (existing_height, existing_id) = self.store.takeover(&name)?.unwrap_or((0, None));
            let has_been_set = existing_id.is_some();

            let mut happening = match (&existing_id, &candidate) {
                (_, None) => true,
                (Some(id), Some((winner, _))) => *id != winner.claim_id,
                (None, Some(_)) => false,
            };

            // if somebody activates on this block and becomes the new
            // best, then everybody activates on this block
            if happening && self.activate_all_for(undo, &name)? {
                candidate = self.info_for_node(&name, self.next_height + 1)?;
            }

            // historical consensus data; see claimtrie-forks::workarounds
            if self.next_height < TAKEOVER_WORKAROUND_CUTOFF
                && takeover_workaround_exists(self.next_height, &name)
            {
                happening = true;
            }

            trace!(
                target: "claimtrie::takeover",
                name = %lossy_name(&name),
                height = self.next_height,
                happening,
                was_set = has_been_set,
                "takeover check"
            );

            if happening || !has_been_set {
                undo.takeovers.push(TakeoverUndo {
                    name: name.clone(),
                    prior: existing_id.map(|id| (existing_height, id)),
                });
                let takeover = candidate
                    .as_ref()
                    .map(|(winner, _)| (self.next_height, &winner.claim_id));
                self.store.set_takeover(&name, takeover)?;
            }
        }
        Ok(())
    }

    /// Rewrites every pending claim and support on `name` to become valid
    /// at the current height, recording prior valid heights for undo.
    fn activate_all_for(&mut self, undo: &mut BlockUndo, name: &[u8]) -> Result<bool> {
        let mut changed = false;

        for (outpoint, prior_valid_height) in self.store.pending_claims(name, self.next_height)? {
            debug!(
                target: "claimtrie::takeover",
                name = %lossy_name(name),
                %outpoint,
                height = self.next_height,
                "early activation of claim"
            );
            undo.activated_claims.push(ActivationUndo {
                name: name.to_vec(),
                outpoint,
                prior_valid_height,
            });
        }
        changed |= self.store.activate_pending_claims(name, self.next_height)? > 0;

        for (outpoint, prior_valid_height) in self.store.pending_supports(name, self.next_height)? {
            debug!(
                target: "claimtrie::takeover",
                name = %lossy_name(name),
                %outpoint,
                height = self.next_height,
                "early activation of support"
            );
            undo.activated_supports.push(ActivationUndo {
                name: name.to_vec(),
                outpoint,
                prior_valid_height,
            });
        }
        changed |= self.store.activate_pending_supports(name, self.next_height)? > 0;

        Ok(changed)
    }
}

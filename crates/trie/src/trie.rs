use crate::{Error, Result};
use claimtrie_forks::{normalize_name, ForkRules, MAX_ACTIVATION_DELAY};
use claimtrie_store::{SqliteStore, StateStore};
use claimtrie_types::{
    lossy_name, winner_order, Claim, ClaimAndSupports, ClaimId, ClaimsForName, OutPoint, Support,
};
use std::{borrow::Cow, collections::HashSet, path::Path};
use tracing::trace;

/// The claim trie core.
///
/// `next_height` is the height of the block currently being worked on,
/// one greater than the height of the chain tip. The first mutation of a
/// block lazily opens the store transaction; `flush` resolves dirty
/// hashes and commits it.
pub struct ClaimTrie<S = SqliteStore> {
    pub(crate) store: S,
    pub(crate) forks: ForkRules,
    pub(crate) next_height: u32,
    pub(crate) transacting: bool,
    /// Node names that must hand out a zero activation delay on the next
    /// claim insert. See `remove_claim` for how names get here.
    pub(crate) removal_workaround: HashSet<Vec<u8>>,
}

impl<S> std::fmt::Debug for ClaimTrie<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimTrie")
            .field("next_height", &self.next_height)
            .field("transacting", &self.transacting)
            .finish_non_exhaustive()
    }
}

impl ClaimTrie<SqliteStore> {
    /// Opens the trie backed by `data_dir/claims.sqlite`.
    ///
    /// `height` is the height of the next block to process; `wipe` clears
    /// any persisted state first.
    pub fn open(data_dir: impl AsRef<Path>, forks: ForkRules, height: u32, wipe: bool) -> Result<Self> {
        let store = SqliteStore::open(data_dir.as_ref().join("claims.sqlite"), wipe)?;
        Ok(Self::new(store, forks, height))
    }

    /// Opens a transient in-memory trie, mainly for tests and tooling.
    pub fn in_memory(forks: ForkRules, height: u32) -> Result<Self> {
        Ok(Self::new(SqliteStore::in_memory()?, forks, height))
    }
}

impl<S: StateStore> ClaimTrie<S> {
    /// Wraps an already-open store.
    pub fn new(store: S, forks: ForkRules, height: u32) -> Self {
        Self {
            store,
            forks,
            next_height: height,
            transacting: false,
            removal_workaround: HashSet::new(),
        }
    }

    /// Height of the block currently being worked on.
    pub const fn height(&self) -> u32 {
        self.next_height
    }

    /// The fork schedule the trie was opened with.
    pub const fn fork_rules(&self) -> &ForkRules {
        &self.forks
    }

    /// Direct access to the backing store, for tooling and tests.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Best-effort flush of committed data to durable storage.
    pub fn sync_to_disk(&self) -> Result<()> {
        Ok(self.store.sync_to_disk()?)
    }

    /// Closes the trie, aborting any uncommitted block.
    pub fn close(mut self) -> Result<()> {
        self.rollback()
    }

    /// True if no claim is active at the current height.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.store.total_claims(self.next_height)? == 0)
    }

    pub(crate) fn begin(&mut self) -> Result<()> {
        if !self.transacting {
            self.store.begin()?;
            self.transacting = true;
        }
        Ok(())
    }

    /// Trie key a lookup for `name` resolves to at the current height.
    pub(crate) fn lookup_name<'a>(&self, name: &'a [u8]) -> Cow<'a, [u8]> {
        if self.forks.should_normalize(self.next_height) {
            Cow::Owned(normalize_name(name))
        } else {
            Cow::Borrowed(name)
        }
    }

    /// Trie key for a claim or support that becomes valid at `valid_height`.
    fn node_name_for_valid_height<'a>(&self, name: &'a [u8], valid_height: u32) -> Cow<'a, [u8]> {
        if valid_height > self.forks.normalization_fork_height {
            Cow::Owned(normalize_name(name))
        } else {
            Cow::Borrowed(name)
        }
    }

    /// Inserts a claim.
    ///
    /// When `valid_height` is `None` the activation delay is computed from
    /// the name's takeover history; callers re-adding a previously spent
    /// claim pass the original valid height instead.
    #[allow(clippy::too_many_arguments)]
    pub fn add_claim(
        &mut self,
        name: &[u8],
        outpoint: OutPoint,
        claim_id: ClaimId,
        amount: u64,
        height: u32,
        valid_height: Option<u32>,
        metadata: Vec<u8>,
    ) -> Result<()> {
        self.begin()?;
        let valid_height = match valid_height {
            Some(valid) => valid,
            None => height + self.delay_for_node(name, &claim_id)?,
        };
        let node_name = self.node_name_for_valid_height(name, valid_height).into_owned();
        let expiration_height = height + self.forks.expiration_time(self.next_height);
        trace!(
            target: "claimtrie::trie",
            name = %lossy_name(name),
            %outpoint,
            %claim_id,
            amount,
            valid_height,
            "adding claim"
        );
        let claim = Claim {
            claim_id,
            name: name.to_vec(),
            node_name: node_name.clone(),
            outpoint,
            amount,
            block_height: height,
            valid_height,
            expiration_height,
            metadata,
        };
        self.store.insert_claim(&claim)?;
        if valid_height < self.next_height {
            self.store.insert_or_dirty_node(&node_name)?;
        }
        Ok(())
    }

    /// Inserts a support for `supported_claim_id`.
    ///
    /// Supports never create trie nodes; a support on a claimless name
    /// only takes effect once a claim brings the node into existence.
    #[allow(clippy::too_many_arguments)]
    pub fn add_support(
        &mut self,
        name: &[u8],
        outpoint: OutPoint,
        supported_claim_id: ClaimId,
        amount: u64,
        height: u32,
        valid_height: Option<u32>,
        metadata: Vec<u8>,
    ) -> Result<()> {
        if !metadata.is_empty() && !self.forks.allow_support_metadata(self.next_height) {
            return Err(Error::InvalidArgument("support metadata is not allowed yet"));
        }
        self.begin()?;
        let valid_height = match valid_height {
            Some(valid) => valid,
            None => height + self.delay_for_node(name, &supported_claim_id)?,
        };
        let node_name = self.node_name_for_valid_height(name, valid_height).into_owned();
        let expiration_height = height + self.forks.expiration_time(self.next_height);
        trace!(
            target: "claimtrie::trie",
            name = %lossy_name(name),
            %outpoint,
            claim_id = %supported_claim_id,
            amount,
            valid_height,
            "adding support"
        );
        let support = Support {
            supported_claim_id,
            name: name.to_vec(),
            node_name: node_name.clone(),
            outpoint,
            amount,
            block_height: height,
            valid_height,
            expiration_height,
            metadata,
        };
        self.store.insert_support(&support)?;
        if valid_height < self.next_height {
            self.store.dirty_node(&node_name)?;
        }
        Ok(())
    }

    /// Removes the claim at `(claim_id, outpoint)`, returning the node
    /// name it lived under and its valid height, or `None` if there was
    /// no such claim.
    pub fn remove_claim(
        &mut self,
        claim_id: &ClaimId,
        outpoint: &OutPoint,
    ) -> Result<Option<(Vec<u8>, u32)>> {
        self.begin()?;
        let Some((node_name, valid_height)) = self.store.claim_location(claim_id, outpoint)? else {
            return Ok(None);
        };
        if !self.store.delete_claim(claim_id, outpoint)? {
            return Ok(None);
        }
        self.store.dirty_node(&node_name)?;
        trace!(
            target: "claimtrie::trie",
            name = %lossy_name(&node_name),
            %outpoint,
            "removed claim"
        );

        // Legacy bug kept for compatibility: when the node survives the
        // removal because longer names still hold claims beneath it, the
        // next claim inserted at this exact name activates with no delay.
        if let Some(shortest) = self
            .store
            .first_active_name_with_prefix(&node_name, self.next_height)?
        {
            if shortest != node_name {
                self.removal_workaround.insert(node_name.clone());
            }
        }
        Ok(Some((node_name, valid_height)))
    }

    /// Removes the support at `outpoint`, returning the node name it
    /// lived under and its valid height.
    pub fn remove_support(&mut self, outpoint: &OutPoint) -> Result<Option<(Vec<u8>, u32)>> {
        self.begin()?;
        let Some((node_name, valid_height)) = self.store.support_location(outpoint)? else {
            return Ok(None);
        };
        self.store.delete_support(outpoint)?;
        self.store.dirty_node(&node_name)?;
        Ok(Some((node_name, valid_height)))
    }

    /// Activation delay for a new claim of `claim_id` on `name`.
    pub fn get_delay_for_name(&mut self, name: &[u8], claim_id: &ClaimId) -> Result<u32> {
        self.delay_for_node(name, claim_id)
    }

    fn delay_for_node(&mut self, name: &[u8], claim_id: &ClaimId) -> Result<u32> {
        let node_name = self.lookup_name(name).into_owned();
        let last_takeover = self.store.last_takeover(&node_name)?;
        if let Some((winner, _)) = &last_takeover {
            if winner == claim_id {
                // updating the current controller never waits
                return Ok(0);
            }
        }
        if self.removal_workaround.remove(&node_name) {
            return Ok(0);
        }
        Ok(match last_takeover {
            Some((_, takeover_height)) => ((self.next_height - takeover_height)
                / self.forks.proportional_delay_factor)
                .min(MAX_ACTIVATION_DELAY),
            None => 0,
        })
    }

    /// Best active claim on `name` with its effective amount.
    pub fn get_info_for_name(&self, name: &[u8]) -> Result<Option<(Claim, u64)>> {
        let node_name = self.lookup_name(name);
        self.info_for_node(&node_name, self.next_height)
    }

    pub(crate) fn info_for_node(&self, node_name: &[u8], height: u32) -> Result<Option<(Claim, u64)>> {
        Ok(self.store.best_claim(node_name, height)?)
    }

    /// Every unexpired claim on `name` in winner order, with matched
    /// supports and the node's last takeover height.
    pub fn get_claims_for_name(&self, name: &[u8]) -> Result<ClaimsForName> {
        let node_name = self.lookup_name(name).into_owned();
        let last_takeover_height = self
            .store
            .takeover(&node_name)?
            .map(|(height, _)| height)
            .unwrap_or_default();

        let claims = self.store.claims_for_node(&node_name, self.next_height)?;
        let mut supports = self.store.supports_for_node(&node_name, self.next_height)?;

        let mut matched = Vec::with_capacity(claims.len());
        for claim in claims {
            // a pending claim shows an effective amount of zero, but its
            // already-active supports still count
            let mut effective = if claim.valid_height < self.next_height {
                claim.amount
            } else {
                0
            };
            let mut mine = Vec::new();
            let mut i = 0;
            while i < supports.len() {
                if supports[i].supported_claim_id == claim.claim_id {
                    let support = supports.remove(i);
                    if support.valid_height < self.next_height {
                        effective += support.amount;
                    }
                    mine.push(support);
                } else {
                    i += 1;
                }
            }
            matched.push(ClaimAndSupports {
                claim,
                effective_amount: effective,
                supports: mine,
            });
        }
        matched.sort_by(|a, b| {
            winner_order(
                (&a.claim, a.effective_amount),
                (&b.claim, b.effective_amount),
            )
        });

        Ok(ClaimsForName {
            node_name,
            last_takeover_height,
            claims: matched,
            unmatched_supports: supports,
        })
    }

    /// Claim id and height of the last takeover recorded for `name`.
    pub fn get_last_takeover_for_name(&self, name: &[u8]) -> Result<Option<(ClaimId, u32)>> {
        let node_name = self.lookup_name(name);
        Ok(self.store.last_takeover(&node_name)?)
    }

    /// True if an active claim sits at `(name, outpoint)`.
    pub fn have_claim(&self, name: &[u8], outpoint: &OutPoint) -> Result<bool> {
        let node_name = self.lookup_name(name);
        Ok(self.store.has_claim(&node_name, outpoint, self.next_height)?)
    }

    /// True if an active support sits at `(name, outpoint)`.
    pub fn have_support(&self, name: &[u8], outpoint: &OutPoint) -> Result<bool> {
        let node_name = self.lookup_name(name);
        Ok(self.store.has_support(&node_name, outpoint, self.next_height)?)
    }

    /// Valid height of a queued (not yet active) claim at `(name, outpoint)`.
    pub fn have_claim_in_queue(&self, name: &[u8], outpoint: &OutPoint) -> Result<Option<u32>> {
        let node_name = self.lookup_name(name);
        Ok(self.store.claim_in_queue(&node_name, outpoint, self.next_height)?)
    }

    /// Valid height of a queued (not yet active) support at `(name, outpoint)`.
    pub fn have_support_in_queue(&self, name: &[u8], outpoint: &OutPoint) -> Result<Option<u32>> {
        let node_name = self.lookup_name(name);
        Ok(self.store.support_in_queue(&node_name, outpoint, self.next_height)?)
    }

    /// Number of distinct names with an active claim.
    pub fn get_total_names_in_trie(&self) -> Result<u64> {
        Ok(self.store.total_names(self.next_height)?)
    }

    /// Number of active claims.
    pub fn get_total_claims_in_trie(&self) -> Result<u64> {
        Ok(self.store.total_claims(self.next_height)?)
    }

    /// Sum of all active claim amounts and their matched active supports.
    pub fn get_total_value_of_claims_in_trie(&self) -> Result<u64> {
        Ok(self.store.total_value(self.next_height)?)
    }

    /// Finds the unique active claim whose id starts with `claim_id_prefix`.
    ///
    /// Returns `None` when no claim or more than one claim matches.
    pub fn find_name_for_claim(&self, claim_id_prefix: &[u8]) -> Result<Option<(Vec<u8>, Claim)>> {
        if claim_id_prefix.len() > 20 {
            return Err(Error::InvalidArgument("claim id prefix longer than 20 bytes"));
        }
        let mut hits = self
            .store
            .claims_by_id_prefix(claim_id_prefix, self.next_height, 2)?;
        Ok(match (hits.pop(), hits.pop()) {
            (Some(claim), None) => Some((claim.node_name.clone(), claim)),
            _ => None,
        })
    }

    /// Invokes `visitor` with every name that currently has an active claim.
    pub fn get_names_in_trie(&self, mut visitor: impl FnMut(&[u8])) -> Result<()> {
        Ok(self
            .store
            .for_each_active_node_name(self.next_height, &mut visitor)?)
    }
}

//! Transactional persistence for the claim trie.
//!
//! [`StateStore`] is the seam between the trie core and its backing
//! storage: four logical relations (nodes, claims, supports, with takeover
//! columns merged into nodes) behind a transaction boundary. [`SqliteStore`]
//! is the shipped implementation.
//!
//! Every query that asks for "active" rows applies the visibility
//! predicate `valid_height < h && expiration_height >= h`; expired rows are
//! hidden rather than deleted so that block decrements can resurrect them
//! by height alone.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod sqlite;

pub use sqlite::SqliteStore;

use claimtrie_types::{Claim, ClaimId, NodeHash, OutPoint, Support};

/// Error raised by the backing store. Fatal to the current block; the
/// caller is expected to roll back and retry from a clean state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Error reported by the SQLite backend.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
    /// Filesystem error while opening the store.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True for transient lock contention worth retrying with backoff.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if matches!(e.code, rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
        )
    }
}

/// Store result type.
pub type Result<T, E = StoreError> = core::result::Result<T, E>;

/// Transactional state behind the claim trie.
///
/// Node, claim, and support rows are exclusively owned by the store; the
/// trie core addresses them through logical identifiers (names, outpoints,
/// claim ids) only. Heights are the `h` of the visibility predicate.
#[auto_impl::auto_impl(&mut, Box)]
pub trait StateStore {
    // --- transactions -----------------------------------------------------

    /// Opens the block transaction.
    fn begin(&mut self) -> Result<()>;
    /// Commits the block transaction.
    fn commit(&mut self) -> Result<()>;
    /// Aborts the block transaction.
    fn rollback(&mut self) -> Result<()>;
    /// Best-effort flush of committed data to durable storage.
    fn sync_to_disk(&self) -> Result<()>;

    // --- nodes ------------------------------------------------------------

    /// Creates the node if missing, otherwise marks it dirty.
    fn insert_or_dirty_node(&mut self, name: &[u8]) -> Result<()>;
    /// Creates or re-parents the node and marks it dirty.
    fn insert_or_dirty_node_with_parent(&mut self, name: &[u8], parent: &[u8]) -> Result<()>;
    /// Marks an existing node dirty; false if there is no such node.
    fn dirty_node(&mut self, name: &[u8]) -> Result<bool>;
    /// Deletes the node row; false if there was none.
    fn delete_node(&mut self, name: &[u8]) -> Result<bool>;
    /// Rewrites the node's parent pointer.
    fn set_node_parent(&mut self, name: &[u8], parent: &[u8]) -> Result<()>;
    /// Parent of the node, or `None` if the row is missing.
    fn node_parent(&self, name: &[u8]) -> Result<Option<Vec<u8>>>;
    /// Number of children under `parent` and the bytewise-greatest child.
    fn child_count_and_last(&self, parent: &[u8]) -> Result<(i64, Option<Vec<u8>>)>;
    /// Child names under `parent`, bytewise ascending.
    fn children_of(&self, parent: &[u8]) -> Result<Vec<Vec<u8>>>;
    /// Children with their stored hashes and takeover heights, ascending.
    fn child_hashes(&self, parent: &[u8]) -> Result<Vec<(Vec<u8>, Option<NodeHash>, u32)>>;
    /// Names of every dirty node (stored hash is null).
    fn dirty_node_names(&self) -> Result<Vec<Vec<u8>>>;
    /// Deepest existing node whose name is a prefix of `name` (inclusive).
    fn deepest_ancestor(&self, name: &[u8]) -> Result<Option<Vec<u8>>>;
    /// Marks every ancestor of a dirty node dirty.
    fn propagate_dirty_upwards(&mut self) -> Result<()>;
    /// Stored hash and takeover height of the node, if it exists.
    fn node_hash(&self, name: &[u8]) -> Result<Option<(Option<NodeHash>, u32)>>;
    /// Persists a freshly computed node hash.
    fn set_node_hash(&mut self, name: &[u8], hash: &NodeHash) -> Result<()>;
    /// Existing nodes on the path from the root to `name`, ascending.
    fn nodes_on_path(&self, name: &[u8]) -> Result<Vec<(Vec<u8>, u32)>>;
    /// Every node row with its hash and takeover height.
    fn all_nodes(&self) -> Result<Vec<(Vec<u8>, Option<NodeHash>, u32)>>;
    /// Raw takeover columns: `(height-or-zero, id)`. `None` if no node.
    fn takeover(&self, name: &[u8]) -> Result<Option<(u32, Option<ClaimId>)>>;
    /// Takeover of the node when one has been recorded.
    fn last_takeover(&self, name: &[u8]) -> Result<Option<(ClaimId, u32)>>;
    /// Rewrites the node takeover columns; `None` clears them.
    fn set_takeover(&mut self, name: &[u8], takeover: Option<(u32, &ClaimId)>) -> Result<()>;
    /// As [`Self::set_takeover`], additionally marking the node dirty.
    fn restore_takeover(&mut self, name: &[u8], takeover: Option<(u32, &ClaimId)>) -> Result<()>;
    /// Nulls every stored node hash, forcing a full re-hash.
    fn null_all_node_hashes(&mut self) -> Result<()>;

    // --- claims -----------------------------------------------------------

    /// Inserts a claim row.
    fn insert_claim(&mut self, claim: &Claim) -> Result<()>;
    /// `(node_name, valid_height)` of the claim row, if present.
    fn claim_location(&self, claim_id: &ClaimId, outpoint: &OutPoint) -> Result<Option<(Vec<u8>, u32)>>;
    /// Deletes the claim row; false if there was none.
    fn delete_claim(&mut self, claim_id: &ClaimId, outpoint: &OutPoint) -> Result<bool>;
    /// True if an active claim sits at `(node_name, outpoint)`.
    fn has_claim(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<bool>;
    /// Valid height of a not-yet-active claim at `(node_name, outpoint)`.
    fn claim_in_queue(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<Option<u32>>;
    /// Number of active claims on the node.
    fn active_claim_count(&self, node_name: &[u8], height: u32) -> Result<i64>;
    /// Best active claim on the node with its effective amount.
    fn best_claim(&self, node_name: &[u8], height: u32) -> Result<Option<(Claim, u64)>>;
    /// Active claims on the node in winner order with effective amounts.
    fn claims_by_effective_rank(&self, node_name: &[u8], height: u32) -> Result<Vec<(Claim, u64)>>;
    /// Every unexpired claim on the node, active or not, unordered.
    fn claims_for_node(&self, node_name: &[u8], height: u32) -> Result<Vec<Claim>>;
    /// Bytewise-smallest active node name starting with `prefix`.
    fn first_active_name_with_prefix(&self, prefix: &[u8], height: u32) -> Result<Option<Vec<u8>>>;
    /// Creates-or-dirties the node of every claim activating at `height`.
    fn dirty_nodes_for_activating_claims(&mut self, height: u32) -> Result<()>;
    /// Claims whose expiration height is exactly `height`.
    fn expiring_claims(&self, height: u32) -> Result<Vec<Claim>>;
    /// Dirties the node of every claim expiring at `height`.
    fn dirty_nodes_for_expiring_claims(&mut self, height: u32) -> Result<()>;
    /// Outpoints and valid heights of unexpired claims on the node whose
    /// activation is still pending at `height`.
    fn pending_claims(&self, node_name: &[u8], height: u32) -> Result<Vec<(OutPoint, u32)>>;
    /// Rewrites pending claims on the node to activate at `height`.
    fn activate_pending_claims(&mut self, node_name: &[u8], height: u32) -> Result<usize>;
    /// Restores a claim's valid height after an undone sweep.
    fn reset_claim_valid_height(&mut self, node_name: &[u8], outpoint: &OutPoint, valid_height: u32) -> Result<()>;
    /// Dirties the node of every claim whose valid height is `height`.
    fn dirty_nodes_for_valid_claims_at(&mut self, height: u32) -> Result<()>;
    /// Number of distinct active node names.
    fn total_names(&self, height: u32) -> Result<u64>;
    /// Number of active claims.
    fn total_claims(&self, height: u32) -> Result<u64>;
    /// Sum of active claim amounts and their matched active supports.
    fn total_value(&self, height: u32) -> Result<u64>;
    /// Active claims whose id starts with `prefix`, at most `limit` rows.
    fn claims_by_id_prefix(&self, prefix: &[u8], height: u32, limit: usize) -> Result<Vec<Claim>>;
    /// Invokes `f` with every distinct active node name, ascending.
    fn for_each_active_node_name(&self, height: u32, f: &mut dyn FnMut(&[u8])) -> Result<()>;

    // --- supports ---------------------------------------------------------

    /// Inserts a support row.
    fn insert_support(&mut self, support: &Support) -> Result<()>;
    /// `(node_name, valid_height)` of the support row, if present.
    fn support_location(&self, outpoint: &OutPoint) -> Result<Option<(Vec<u8>, u32)>>;
    /// Deletes the support row; false if there was none.
    fn delete_support(&mut self, outpoint: &OutPoint) -> Result<bool>;
    /// True if an active support sits at `(node_name, outpoint)`.
    fn has_support(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<bool>;
    /// Valid height of a not-yet-active support at `(node_name, outpoint)`.
    fn support_in_queue(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<Option<u32>>;
    /// Every unexpired support on the node, active or not.
    fn supports_for_node(&self, node_name: &[u8], height: u32) -> Result<Vec<Support>>;
    /// Dirties the node of every support activating at `height`.
    fn dirty_nodes_for_activating_supports(&mut self, height: u32) -> Result<()>;
    /// Supports whose expiration height is exactly `height`.
    fn expiring_supports(&self, height: u32) -> Result<Vec<Support>>;
    /// Dirties the node of every support expiring at `height`.
    fn dirty_nodes_for_expiring_supports(&mut self, height: u32) -> Result<()>;
    /// Outpoints and valid heights of unexpired supports on the node whose
    /// activation is still pending at `height`.
    fn pending_supports(&self, node_name: &[u8], height: u32) -> Result<Vec<(OutPoint, u32)>>;
    /// Rewrites pending supports on the node to activate at `height`.
    fn activate_pending_supports(&mut self, node_name: &[u8], height: u32) -> Result<usize>;
    /// Restores a support's valid height after an undone sweep.
    fn reset_support_valid_height(&mut self, outpoint: &OutPoint, valid_height: u32) -> Result<()>;
    /// Dirties the node of every support whose valid height is `height`.
    fn dirty_nodes_for_valid_supports_at(&mut self, height: u32) -> Result<()>;

    // --- fork transitions -------------------------------------------------

    /// Shifts every pending expiration by `delta` blocks. A negative delta
    /// reverts a previous shift and only touches rows that were shifted.
    fn shift_pending_expirations(&mut self, delta: i64, height: u32) -> Result<()>;
    /// Rewrites the node name of every unexpired row to its normalized
    /// form, creating and dirtying the affected nodes.
    fn apply_name_normalization(&mut self, height: u32) -> Result<()>;
    /// Rewrites every row back to `node_name = name`, dirtying the
    /// affected nodes. Pre-fork rows always satisfied that identity.
    fn revert_name_normalization(&mut self) -> Result<()>;
}

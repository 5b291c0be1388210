use crate::{Claim, ClaimId, OutPoint, Support};

/// Undo record for a claim or support whose valid height was rewritten
/// during an early-activation sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationUndo {
    /// Node name the entry lives under.
    pub name: Vec<u8>,
    /// Output carrying the entry.
    pub outpoint: OutPoint,
    /// Valid height before the sweep.
    pub prior_valid_height: u32,
}

/// Undo record for a claim hidden by expiration.
///
/// The row itself is never deleted; undo only needs to re-dirty the node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpiredClaimUndo {
    /// Node name the claim lived under.
    pub name: Vec<u8>,
    /// The expired claim.
    pub claim: Claim,
}

/// Undo record for a support hidden by expiration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpiredSupportUndo {
    /// Node name the support lived under.
    pub name: Vec<u8>,
    /// The expired support.
    pub support: Support,
}

/// Undo record for a rewritten node takeover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakeoverUndo {
    /// Node name whose takeover was rewritten.
    pub name: Vec<u8>,
    /// Prior `(height, claim_id)`, or `None` if the node had no takeover.
    pub prior: Option<(u32, ClaimId)>,
}

/// Per-block undo buckets produced by `increment_block` and replayed in
/// reverse by `decrement_block` / `finalize_decrement`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockUndo {
    /// Claims early-activated by a takeover.
    pub activated_claims: Vec<ActivationUndo>,
    /// Claims that expired this block.
    pub expired_claims: Vec<ExpiredClaimUndo>,
    /// Supports early-activated by a takeover.
    pub activated_supports: Vec<ActivationUndo>,
    /// Supports that expired this block.
    pub expired_supports: Vec<ExpiredSupportUndo>,
    /// Takeover rewrites, in the order they were applied.
    pub takeovers: Vec<TakeoverUndo>,
}

impl BlockUndo {
    /// True if no bucket holds any record.
    pub fn is_empty(&self) -> bool {
        self.activated_claims.is_empty()
            && self.expired_claims.is_empty()
            && self.activated_supports.is_empty()
            && self.expired_supports.is_empty()
            && self.takeovers.is_empty()
    }
}

use crate::{ClaimId, OutPoint};

/// A support output that augments the effective amount of a claim.
///
/// A support counts toward a claim only while both are active on the same
/// node name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Support {
    /// Identifier of the claim being supported.
    pub supported_claim_id: ClaimId,
    /// Name as it appeared on chain.
    pub name: Vec<u8>,
    /// Trie key the support lives under.
    pub node_name: Vec<u8>,
    /// Output that carries the support.
    pub outpoint: OutPoint,
    /// Staked amount in base units.
    pub amount: u64,
    /// Height of the block that included the support.
    pub block_height: u32,
    /// First height at which the support counts toward its claim.
    pub valid_height: u32,
    /// Height at which the support stops being visible.
    pub expiration_height: u32,
    /// Opaque metadata; empty before the metadata fork gate.
    pub metadata: Vec<u8>,
}

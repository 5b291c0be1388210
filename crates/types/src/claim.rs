use crate::{ClaimId, OutPoint, Support};
use core::cmp::Ordering;

/// A name claim as stored in the claims relation.
///
/// `name` is the name as it appeared on chain; `node_name` is the trie key
/// the claim lives under. They differ only for claims touched by the
/// normalization fork.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    /// Identifier carried forward across claim updates.
    pub claim_id: ClaimId,
    /// Name as it appeared on chain.
    pub name: Vec<u8>,
    /// Trie key the claim lives under.
    pub node_name: Vec<u8>,
    /// Output that carries the claim.
    pub outpoint: OutPoint,
    /// Staked amount in base units.
    pub amount: u64,
    /// Height of the block that included the claim.
    pub block_height: u32,
    /// First height at which the claim participates in winner selection.
    pub valid_height: u32,
    /// Height at which the claim stops being visible.
    pub expiration_height: u32,
    /// Opaque metadata attached to the claim.
    pub metadata: Vec<u8>,
}

/// Strict weak order over claims with their effective amounts, best first.
///
/// A greater effective amount wins; ties go to the lower block height, then
/// to the lexicographically smaller transaction hash, then to the smaller
/// output index.
pub fn winner_order((a, ea): (&Claim, u64), (b, eb): (&Claim, u64)) -> Ordering {
    eb.cmp(&ea)
        .then_with(|| a.block_height.cmp(&b.block_height))
        .then_with(|| a.outpoint.txid.cmp(&b.outpoint.txid))
        .then_with(|| a.outpoint.index.cmp(&b.outpoint.index))
}

/// A claim together with its effective amount and matched supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimAndSupports {
    /// The claim itself.
    pub claim: Claim,
    /// Claim amount plus the amounts of all matched active supports.
    ///
    /// Zero-based when the claim itself is not yet active.
    pub effective_amount: u64,
    /// All unexpired supports naming this claim, active or not.
    pub supports: Vec<Support>,
}

/// Every unexpired claim on a node, best first, with matched supports.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimsForName {
    /// The trie key that was queried.
    pub node_name: Vec<u8>,
    /// Height of the last takeover on this node, zero if none.
    pub last_takeover_height: u32,
    /// Claims in winner order with their supports.
    pub claims: Vec<ClaimAndSupports>,
    /// Supports whose claim id matches no unexpired claim on this node.
    pub unmatched_supports: Vec<Support>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TxId;

    fn claim(amount: u64, block_height: u32, txid: u8, index: u32) -> Claim {
        Claim {
            claim_id: ClaimId::default(),
            name: b"a".to_vec(),
            node_name: b"a".to_vec(),
            outpoint: OutPoint::new(TxId::new([txid; 32]), index),
            amount,
            block_height,
            valid_height: block_height,
            expiration_height: u32::MAX,
            metadata: Vec::new(),
        }
    }

    #[test]
    fn bigger_effective_amount_wins() {
        let a = claim(10, 5, 1, 0);
        let b = claim(99, 1, 2, 0);
        assert_eq!(winner_order((&a, 100), (&b, 99)), Ordering::Less);
        assert_eq!(winner_order((&b, 99), (&a, 100)), Ordering::Greater);
    }

    #[test]
    fn ties_go_to_the_older_claim_then_smaller_outpoint() {
        let older = claim(10, 1, 9, 0);
        let newer = claim(10, 2, 1, 0);
        assert_eq!(winner_order((&older, 10), (&newer, 10)), Ordering::Less);

        let small_tx = claim(10, 1, 1, 7);
        let big_tx = claim(10, 1, 2, 0);
        assert_eq!(winner_order((&small_tx, 10), (&big_tx, 10)), Ordering::Less);

        let low_index = claim(10, 1, 1, 0);
        let high_index = claim(10, 1, 1, 1);
        assert_eq!(winner_order((&low_index, 10), (&high_index, 10)), Ordering::Less);
    }
}

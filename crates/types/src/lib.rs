//! Domain types shared across the claim trie crates.
//!
//! Names and node names are raw byte strings throughout; a claim name is
//! only interpreted as Unicode by the normalization fork, and everything
//! else (trie edges, sibling ordering, hashing) is bytewise.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod claim;
mod primitives;
#[cfg(feature = "sql")]
mod sql;
mod support;
mod undo;

pub use claim::{winner_order, Claim, ClaimAndSupports, ClaimsForName};
pub use primitives::{lossy_name, ClaimId, NodeHash, OutPoint, TxId};
pub use support::Support;
pub use undo::{ActivationUndo, BlockUndo, ExpiredClaimUndo, ExpiredSupportUndo, TakeoverUndo};

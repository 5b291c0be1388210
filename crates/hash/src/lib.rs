//! Hashing primitives for the claim trie.
//!
//! Everything here is a pure function over bytes: double SHA-256 for node
//! and value hashes, RIPEMD-160 over double SHA-256 for claim ids, and the
//! single-byte fold used to lift child hashes through radix-trie edges.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use claimtrie_types::{ClaimId, NodeHash, OutPoint};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Double SHA-256 over the concatenation of the given byte ranges.
pub fn sha256d<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> NodeHash {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let once = hasher.finalize();
    let twice = Sha256::digest(once);
    NodeHash::new(twice.into())
}

/// Hash committing a node's winning outpoint and its takeover height.
///
/// The height is hashed as eight big-endian bytes whose high four bytes
/// are always zero; both halves of the historic format are load-bearing.
pub fn value_hash(outpoint: &OutPoint, takeover_height: u32) -> NodeHash {
    let h1 = sha256d([outpoint.txid.as_slice()]);
    let index = outpoint.index.to_string();
    let h2 = sha256d([index.as_bytes()]);
    let h3 = sha256d([height_bytes(takeover_height).as_slice()]);
    sha256d([h1.as_slice(), h2.as_slice(), h3.as_slice()])
}

/// Lifts a child hash through the edge bytes between a parent at length
/// `pos` and the child named `key`.
///
/// Bytes are folded from the last one down to index `pos + 1`; the byte at
/// `pos` itself is emitted separately into the parent's buffer.
pub fn complete_hash(mut partial: NodeHash, key: &[u8], pos: usize) -> NodeHash {
    for i in (pos + 1..key.len()).rev() {
        partial = sha256d([&key[i..=i], partial.as_slice()]);
    }
    partial
}

/// Derives the identifier of a freshly created claim from its outpoint.
pub fn claim_id_for_outpoint(outpoint: &OutPoint) -> ClaimId {
    let mut hasher = Sha256::new();
    hasher.update(outpoint.txid.as_slice());
    hasher.update(outpoint.index.to_le_bytes());
    let once = hasher.finalize();
    let twice = Sha256::digest(once);
    let digest = Ripemd160::digest(twice);
    ClaimId::new(digest.into())
}

fn height_bytes(height: u32) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[4..].copy_from_slice(&height.to_be_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimtrie_types::TxId;
    use hex_literal::hex;

    #[test]
    fn sha256d_of_nothing_matches_the_known_vector() {
        assert_eq!(
            sha256d([b"".as_slice()]),
            NodeHash::new(hex!(
                "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
            ))
        );
    }

    #[test]
    fn complete_hash_is_identity_for_a_single_byte_edge() {
        let partial = sha256d([b"x".as_slice()]);
        assert_eq!(complete_hash(partial, b"abc", 2), partial);
    }

    #[test]
    fn complete_hash_folds_each_trailing_byte() {
        let leaf = sha256d([b"leaf".as_slice()]);
        let expected = sha256d([&b"abc"[1..2], sha256d([&b"abc"[2..3], leaf.as_slice()]).as_slice()]);
        assert_eq!(complete_hash(leaf, b"abc", 0), expected);
    }

    #[test]
    fn value_hash_mixes_outpoint_and_height() {
        let outpoint = OutPoint::new(TxId::new([0x11; 32]), 1);
        let h1 = sha256d([outpoint.txid.as_slice()]);
        let h2 = sha256d([b"1".as_slice()]);
        let h3 = sha256d([[0u8, 0, 0, 0, 0, 0, 0, 7].as_slice()]);
        assert_eq!(
            value_hash(&outpoint, 7),
            sha256d([h1.as_slice(), h2.as_slice(), h3.as_slice()])
        );
        assert_ne!(value_hash(&outpoint, 7), value_hash(&outpoint, 8));
    }

    #[test]
    fn claim_ids_differ_per_outpoint() {
        let a = claim_id_for_outpoint(&OutPoint::new(TxId::new([1; 32]), 0));
        let b = claim_id_for_outpoint(&OutPoint::new(TxId::new([1; 32]), 1));
        assert_ne!(a, b);
        assert_eq!(a, claim_id_for_outpoint(&OutPoint::new(TxId::new([1; 32]), 0)));
    }
}

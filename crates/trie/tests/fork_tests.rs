//! Behaviour at the three consensus fork boundaries.

mod common;

use claimtrie_hash::{complete_hash, sha256d, value_hash};
use claimtrie_trie::{BlockUndo, StateStore};
use common::{advance, claim_id, outpoint, quiet_forks, trie};

#[test]
fn pending_expirations_are_extended_at_the_fork_and_retracted_on_decrement() {
    let mut forks = quiet_forks();
    forks.original_expiration_time = 100;
    forks.extended_expiration_time = 200;
    forks.extended_expiration_fork_height = 50;
    let mut trie = trie(forks, 0);

    trie.add_claim(b"a", outpoint(1, 0), claim_id(1), 10, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 50); // processes blocks 0..=49

    let mut undo_fork = BlockUndo::default();
    trie.increment_block(&mut undo_fork).unwrap(); // block 50, the fork
    trie.flush().unwrap();
    assert_eq!(
        trie.store().claims_for_node(b"a", 0).unwrap()[0].expiration_height,
        200
    );

    // the claim survives past its original lifetime
    let mut undos = Vec::new();
    while trie.height() < 150 {
        let mut undo = BlockUndo::default();
        trie.increment_block(&mut undo).unwrap();
        undos.push(undo);
    }
    trie.flush().unwrap();
    assert!(trie.have_claim(b"a", &outpoint(1, 0)).unwrap());

    // unwinding back across the fork restores the original schedule
    for undo in undos.iter().rev() {
        trie.decrement_block(undo).unwrap();
        trie.finalize_decrement(undo).unwrap();
    }
    trie.decrement_block(&undo_fork).unwrap();
    trie.finalize_decrement(&undo_fork).unwrap();
    trie.flush().unwrap();
    assert_eq!(trie.height(), 50);
    assert_eq!(
        trie.store().claims_for_node(b"a", 0).unwrap()[0].expiration_height,
        100
    );
}

#[test]
fn names_are_normalized_in_bulk_at_the_fork_block() {
    let mut forks = quiet_forks();
    forks.normalization_fork_height = 10;
    let mut trie = trie(forks, 0);

    let op = outpoint(1, 0);
    let id = claim_id(1);
    trie.add_claim(b"Apple", op, id, 10, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 10); // processes blocks 0..=9
    trie.flush().unwrap();
    let pre_fork_root = trie.get_merkle_hash().unwrap();
    assert_eq!(trie.get_last_takeover_for_name(b"Apple").unwrap(), Some((id, 0)));
    // before the fork, lookups are byte-exact
    assert!(trie.get_info_for_name(b"APPLE").unwrap().is_none());

    let mut undo_fork = BlockUndo::default();
    trie.increment_block(&mut undo_fork).unwrap(); // block 10, the fork
    trie.flush().unwrap();

    // the claim now lives under its normalized key and lookups normalize
    // the queried name; the rehomed node starts a fresh takeover history
    let (winner, _) = trie.get_info_for_name(b"APPLE").unwrap().unwrap();
    assert_eq!(winner.node_name, b"apple");
    assert_eq!(winner.name, b"Apple");
    assert_eq!(trie.get_last_takeover_for_name(b"Apple").unwrap(), Some((id, 10)));
    assert_ne!(trie.get_merkle_hash().unwrap(), pre_fork_root);
    assert!(trie.store().node_hash(b"Apple").unwrap().is_none());

    // unwinding the fork block puts everything back
    trie.decrement_block(&undo_fork).unwrap();
    trie.finalize_decrement(&undo_fork).unwrap();
    trie.flush().unwrap();
    assert_eq!(trie.get_last_takeover_for_name(b"Apple").unwrap(), Some((id, 0)));
    assert_eq!(
        trie.get_info_for_name(b"Apple").unwrap().unwrap().0.node_name,
        b"Apple"
    );
    assert_eq!(trie.get_merkle_hash().unwrap(), pre_fork_root);
}

#[test]
fn support_metadata_is_rejected_before_its_fork_gate() {
    let mut forks = quiet_forks();
    forks.all_claims_in_merkle_fork_height = 20;
    let mut trie = trie(forks, 0);
    trie.add_claim(b"a", outpoint(1, 0), claim_id(1), 10, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);

    let err = trie
        .add_support(b"a", outpoint(9, 0), claim_id(1), 5, 1, None, vec![1, 2, 3])
        .unwrap_err();
    assert!(matches!(err, claimtrie_trie::Error::InvalidArgument(_)));

    advance(&mut trie, 19); // past the gate
    trie.add_support(b"a", outpoint(9, 0), claim_id(1), 5, 20, None, vec![1, 2, 3])
        .unwrap();
}

#[test]
fn all_active_claims_enter_the_merkle_hash_at_the_fork() {
    let mut forks = quiet_forks();
    forks.all_claims_in_merkle_fork_height = 20;
    let mut trie = trie(forks, 0);

    let op1 = outpoint(1, 0);
    let op2 = outpoint(2, 0);
    trie.add_claim(b"a", op1, claim_id(1), 100, 0, None, Vec::new()).unwrap();
    trie.add_claim(b"a", op2, claim_id(2), 50, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 19); // processes blocks 0..=18
    trie.flush().unwrap();
    let pre_fork_root = trie.get_merkle_hash().unwrap();

    // block 19 is the transition block: the root its flush produces is
    // the first one computed at the fork height
    let mut undo_fork = BlockUndo::default();
    trie.increment_block(&mut undo_fork).unwrap();
    trie.flush().unwrap();
    let post_fork_root = trie.get_merkle_hash().unwrap();
    assert_ne!(post_fork_root, pre_fork_root);

    // the leaf now carries both value hashes, best claim first
    let leaf = sha256d([value_hash(&op1, 0).as_slice(), value_hash(&op2, 0).as_slice()]);
    let folded = complete_hash(leaf, b"a", 0);
    let expected = sha256d([[b'a'].as_slice(), folded.as_slice()]);
    assert_eq!(post_fork_root, expected);

    // decrementing across the fork re-hashes under the old rule
    trie.decrement_block(&undo_fork).unwrap();
    trie.finalize_decrement(&undo_fork).unwrap();
    trie.flush().unwrap();
    assert_eq!(trie.get_merkle_hash().unwrap(), pre_fork_root);
}

//! End-to-end scenarios over the public trie API.

mod common;

use claimtrie_hash::{complete_hash, sha256d, value_hash};
use claimtrie_trie::{verify_proof, BlockUndo, NodeHash, StateStore};
use common::{advance, claim_id, outpoint, quiet_forks, trie};

#[test]
fn empty_trie_hashes_to_the_sentinel() {
    let mut trie = trie(quiet_forks(), 0);
    let root = trie.get_merkle_hash().unwrap();
    assert_eq!(root, NodeHash::EMPTY_TRIE);
    assert_eq!(
        root.to_string(),
        "0000000000000000000000000000000000000000000000000000000000000001"
    );
    assert!(trie.is_empty().unwrap());
}

#[test]
fn single_claim_controls_its_name_and_shapes_the_root() {
    let mut trie = trie(quiet_forks(), 1);
    let op = outpoint(0x11, 0);
    let id = claim_id(1);
    trie.add_claim(b"hello", op, id, 100, 1, None, Vec::new()).unwrap();

    let mut undo = BlockUndo::default();
    trie.increment_block(&mut undo).unwrap();
    trie.flush().unwrap();

    let (winner, effective) = trie.get_info_for_name(b"hello").unwrap().unwrap();
    assert_eq!(winner.claim_id, id);
    assert_eq!(winner.outpoint, op);
    assert_eq!(effective, 100);
    assert_eq!(trie.get_last_takeover_for_name(b"hello").unwrap(), Some((id, 1)));

    // the leaf at "hello" hashes its value, and the root lifts that hash
    // through the edge bytes before prefixing the first byte
    let leaf = sha256d([value_hash(&op, 1).as_slice()]);
    let folded = complete_hash(leaf, b"hello", 0);
    let expected = sha256d([[b'h'].as_slice(), folded.as_slice()]);
    assert_eq!(trie.get_merkle_hash().unwrap(), expected);

    assert!(trie.have_claim(b"hello", &op).unwrap());
    assert_eq!(trie.get_total_names_in_trie().unwrap(), 1);
    assert_eq!(trie.get_total_claims_in_trie().unwrap(), 1);
    assert_eq!(trie.get_total_value_of_claims_in_trie().unwrap(), 100);

    let (name, found) = trie.find_name_for_claim(&id.as_slice()[..4]).unwrap().unwrap();
    assert_eq!(name, b"hello");
    assert_eq!(found.outpoint, op);

    let mut names = Vec::new();
    trie.get_names_in_trie(|name| names.push(name.to_vec())).unwrap();
    assert_eq!(names, vec![b"hello".to_vec()]);

    assert!(trie.check_consistency().unwrap());
    assert!(trie.validate_db(&expected).unwrap());
}

#[test]
fn higher_bid_takes_over_after_the_proportional_delay() {
    let mut trie = trie(quiet_forks(), 1);
    let op1 = outpoint(0x11, 0);
    let id1 = claim_id(1);
    trie.add_claim(b"hello", op1, id1, 100, 1, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();

    advance(&mut trie, 99); // next height is now 101
    assert_eq!(trie.height(), 101);

    let op2 = outpoint(0x22, 0);
    let id2 = claim_id(2);
    trie.add_claim(b"hello", op2, id2, 1000, 101, None, Vec::new()).unwrap();
    advance(&mut trie, 1);

    // delay is (101 - 1) / 32 = 3 blocks; the old winner holds on
    assert_eq!(trie.have_claim_in_queue(b"hello", &op2).unwrap(), Some(104));
    assert_eq!(trie.get_info_for_name(b"hello").unwrap().unwrap().0.claim_id, id1);
    assert_eq!(trie.get_last_takeover_for_name(b"hello").unwrap(), Some((id1, 1)));

    advance(&mut trie, 3); // processes blocks 102..=104
    trie.flush().unwrap();

    assert_eq!(trie.height(), 105);
    assert_eq!(trie.get_last_takeover_for_name(b"hello").unwrap(), Some((id2, 104)));
    assert_eq!(trie.get_info_for_name(b"hello").unwrap().unwrap().0.claim_id, id2);
}

#[test]
fn updating_the_controlling_claim_has_zero_delay_and_no_takeover() {
    let mut trie = trie(quiet_forks(), 1);
    let op1 = outpoint(0x11, 0);
    let id1 = claim_id(1);
    let op2 = outpoint(0x22, 0);
    let id2 = claim_id(2);
    trie.add_claim(b"hello", op1, id1, 100, 1, None, Vec::new()).unwrap();
    advance(&mut trie, 100);
    trie.add_claim(b"hello", op2, id2, 1000, 101, None, Vec::new()).unwrap();
    advance(&mut trie, 4); // id2 takes over at 104
    trie.flush().unwrap();
    assert_eq!(trie.get_last_takeover_for_name(b"hello").unwrap(), Some((id2, 104)));

    advance(&mut trie, 49);
    assert_eq!(trie.height(), 154);

    // spending the winner and re-claiming under the same id is an update
    let (node_name, prior_valid) = trie.remove_claim(&id2, &op2).unwrap().unwrap();
    assert_eq!(node_name, b"hello");
    assert_eq!(prior_valid, 104);

    let op3 = outpoint(0x33, 0);
    assert_eq!(trie.get_delay_for_name(b"hello", &id2).unwrap(), 0);
    trie.add_claim(b"hello", op3, id2, 1500, 154, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();

    let (winner, _) = trie.get_info_for_name(b"hello").unwrap().unwrap();
    assert_eq!(winner.outpoint, op3);
    assert_eq!(winner.valid_height, 154);
    // same claim id, so the takeover record is untouched
    assert_eq!(trie.get_last_takeover_for_name(b"hello").unwrap(), Some((id2, 104)));
}

#[test]
fn expiration_clears_ownership_and_decrement_restores_it() {
    let mut forks = quiet_forks();
    forks.original_expiration_time = 50;
    let mut trie = trie(forks, 0);

    let op_a = outpoint(0x0a, 0);
    let id_a = claim_id(0xa);
    trie.add_claim(b"name", op_a, id_a, 10, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);

    let op_b = outpoint(0x0b, 0);
    let id_b = claim_id(0xb);
    trie.add_claim(b"name", op_b, id_b, 1000, 1, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();
    assert_eq!(trie.get_last_takeover_for_name(b"name").unwrap(), Some((id_b, 1)));

    // claim A expires at block 50 while B keeps the name
    advance(&mut trie, 48);
    let mut undo_50 = BlockUndo::default();
    trie.increment_block(&mut undo_50).unwrap();
    trie.flush().unwrap();
    assert_eq!(undo_50.expired_claims.len(), 1);
    assert_eq!(undo_50.expired_claims[0].claim.claim_id, id_a);
    assert_eq!(trie.get_last_takeover_for_name(b"name").unwrap(), Some((id_b, 1)));
    let root_before_b_expires = trie.get_merkle_hash().unwrap();

    // B expires at block 51 and nobody is left to own the name
    let mut undo_51 = BlockUndo::default();
    trie.increment_block(&mut undo_51).unwrap();
    trie.flush().unwrap();
    assert_eq!(undo_51.expired_claims.len(), 1);
    assert_eq!(undo_51.expired_claims[0].claim.claim_id, id_b);
    assert_eq!(trie.get_last_takeover_for_name(b"name").unwrap(), None);
    assert!(trie.get_info_for_name(b"name").unwrap().is_none());

    // unwinding that block resurrects B and its takeover record
    trie.decrement_block(&undo_51).unwrap();
    trie.finalize_decrement(&undo_51).unwrap();
    trie.flush().unwrap();
    assert_eq!(trie.get_last_takeover_for_name(b"name").unwrap(), Some((id_b, 1)));
    assert_eq!(trie.get_info_for_name(b"name").unwrap().unwrap().0.claim_id, id_b);
    assert_eq!(trie.get_merkle_hash().unwrap(), root_before_b_expires);
}

#[test]
fn supports_shift_control_and_detach_cleanly() {
    let mut trie = trie(quiet_forks(), 0);
    let id_x = claim_id(1);
    let id_y = claim_id(2);
    trie.add_claim(b"name", outpoint(1, 0), id_x, 100, 0, None, Vec::new()).unwrap();
    trie.add_claim(b"name", outpoint(2, 0), id_y, 80, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();
    assert_eq!(trie.get_last_takeover_for_name(b"name").unwrap(), Some((id_x, 0)));

    advance(&mut trie, 99);
    assert_eq!(trie.height(), 100);

    // a support for the losing claim waits out the proportional delay
    let op_s = outpoint(9, 0);
    trie.add_support(b"name", op_s, id_y, 50, 100, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    assert_eq!(trie.have_support_in_queue(b"name", &op_s).unwrap(), Some(103));
    assert_eq!(trie.get_info_for_name(b"name").unwrap().unwrap().0.claim_id, id_x);

    advance(&mut trie, 3); // blocks 101..=103; the support lands at 103
    trie.flush().unwrap();
    assert!(trie.have_support(b"name", &op_s).unwrap());
    let (winner, effective) = trie.get_info_for_name(b"name").unwrap().unwrap();
    assert_eq!(winner.claim_id, id_y);
    assert_eq!(effective, 130);
    assert_eq!(trie.get_last_takeover_for_name(b"name").unwrap(), Some((id_y, 103)));

    let all = trie.get_claims_for_name(b"name").unwrap();
    assert_eq!(all.last_takeover_height, 103);
    assert_eq!(all.claims.len(), 2);
    assert_eq!(all.claims[0].claim.claim_id, id_y);
    assert_eq!(all.claims[0].supports.len(), 1);
    assert_eq!(all.claims[1].claim.claim_id, id_x);
    assert!(all.unmatched_supports.is_empty());

    // dropping the support hands the name back on the next block
    trie.remove_support(&op_s).unwrap().unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();
    assert_eq!(trie.get_info_for_name(b"name").unwrap().unwrap().0.claim_id, id_x);
    assert_eq!(trie.get_last_takeover_for_name(b"name").unwrap(), Some((id_x, 104)));
}

#[test]
fn proof_round_trips_for_sibling_names() {
    let mut trie = trie(quiet_forks(), 0);
    let claims = [(&b"a"[..], 1u8), (&b"ab"[..], 2), (&b"ac"[..], 3)];
    for (name, tag) in claims {
        trie.add_claim(name, outpoint(tag, 0), claim_id(tag), u64::from(tag) * 10, 0, None, Vec::new())
            .unwrap();
    }
    advance(&mut trie, 1);
    trie.flush().unwrap();
    let root = trie.get_merkle_hash().unwrap();

    let proof = trie.get_proof_for_name(b"ab", &claim_id(2)).unwrap();
    assert!(proof.has_value);
    assert_eq!(proof.outpoint, Some(outpoint(2, 0)));
    assert!(verify_proof(&proof, &root));

    // root, "a", then the target "ab"
    assert_eq!(proof.nodes.len(), 3);
    let a_node = &proof.nodes[1];
    assert!(a_node.has_value);
    assert!(a_node.value_hash.is_some());
    assert_eq!(a_node.children.len(), 2);
    assert_eq!(a_node.children[0], (b'b', None));
    assert!(matches!(a_node.children[1], (b'c', Some(_))));

    // tampering with any byte must break verification
    let mut tampered = proof.clone();
    let (_, hash) = &mut tampered.nodes[1].children[1];
    let mut bytes = *hash.as_ref().unwrap();
    bytes.0 .0[7] ^= 0x01;
    *hash = Some(bytes);
    assert!(!verify_proof(&tampered, &root));

    // a committed claim id that is not the winner cannot verify
    let wrong = trie.get_proof_for_name(b"ab", &claim_id(9)).unwrap();
    assert!(!wrong.has_value);

    // proving the parent name works too
    let proof_a = trie.get_proof_for_name(b"a", &claim_id(1)).unwrap();
    assert!(proof_a.has_value);
    assert!(verify_proof(&proof_a, &root));
}

#[test]
fn proofs_synthesize_nodes_for_multi_byte_edges() {
    let mut trie = trie(quiet_forks(), 0);
    trie.add_claim(b"a", outpoint(1, 0), claim_id(1), 10, 0, None, Vec::new()).unwrap();
    trie.add_claim(b"abc", outpoint(2, 0), claim_id(2), 20, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();
    let root = trie.get_merkle_hash().unwrap();

    let proof = trie.get_proof_for_name(b"abc", &claim_id(2)).unwrap();
    // root, "a", a synthetic step for the skipped 'c', then "abc"
    assert_eq!(proof.nodes.len(), 4);
    let synthetic = &proof.nodes[2];
    assert_eq!(synthetic.children, vec![(b'c', None)]);
    assert!(!synthetic.has_value);
    assert!(verify_proof(&proof, &root));
}

#[test]
fn proofs_cover_deep_chains_and_absent_names() {
    let mut trie = trie(quiet_forks(), 0);
    let chain: &[&[u8]] = &[b"a", b"ab", b"abc", b"abcd"];
    for (i, name) in chain.iter().enumerate() {
        let tag = i as u8 + 1;
        trie.add_claim(name, outpoint(tag, 0), claim_id(tag), 10 * u64::from(tag), 0, None, Vec::new())
            .unwrap();
    }
    trie.add_claim(b"b", outpoint(9, 0), claim_id(9), 5, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();
    let root = trie.get_merkle_hash().unwrap();

    for (i, name) in chain.iter().enumerate() {
        let proof = trie.get_proof_for_name(name, &claim_id(i as u8 + 1)).unwrap();
        assert!(proof.has_value, "no value for {:?}", name);
        assert!(verify_proof(&proof, &root), "bad proof for {:?}", name);
    }

    // a name with no node still yields a proof of the surrounding state
    let absent = trie.get_proof_for_name(b"abz", &claim_id(42)).unwrap();
    assert!(!absent.has_value);
    assert!(verify_proof(&absent, &root));
}

#[test]
fn collapsing_a_branch_removes_its_joiner_node() {
    let mut trie = trie(quiet_forks(), 0);
    trie.add_claim(b"ab", outpoint(1, 0), claim_id(1), 10, 0, None, Vec::new()).unwrap();
    trie.add_claim(b"ac", outpoint(2, 0), claim_id(2), 20, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();

    // the two names force a claimless split node at "a"
    assert!(trie.store().node_hash(b"a").unwrap().is_some());
    assert_eq!(trie.store().children_of(b"a").unwrap(), vec![b"ab".to_vec(), b"ac".to_vec()]);

    let root_before = trie.get_merkle_hash().unwrap();
    trie.remove_claim(&claim_id(2), &outpoint(2, 0)).unwrap().unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();

    // with one branch gone the joiner collapses and "ab" hangs off the root
    assert!(trie.store().node_hash(b"a").unwrap().is_none());
    assert!(trie.store().node_hash(b"ac").unwrap().is_none());
    assert_eq!(trie.store().node_parent(b"ab").unwrap(), Some(Vec::new()));
    assert_ne!(trie.get_merkle_hash().unwrap(), root_before);
}

#[test]
fn flushed_state_survives_a_reopen_and_rollback_discards_a_block() {
    let dir = tempfile::tempdir().unwrap();
    let forks = quiet_forks();

    let mut trie = claimtrie_trie::ClaimTrie::open(dir.path(), forks, 0, false).unwrap();
    trie.add_claim(b"keep", outpoint(1, 0), claim_id(1), 10, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();
    let root = trie.get_merkle_hash().unwrap();
    // flush is idempotent with no intervening mutation
    trie.flush().unwrap();
    assert_eq!(trie.get_merkle_hash().unwrap(), root);
    trie.sync_to_disk().unwrap();
    trie.close().unwrap();

    let mut trie = claimtrie_trie::ClaimTrie::open(dir.path(), forks, 1, false).unwrap();
    assert_eq!(trie.get_merkle_hash().unwrap(), root);
    assert!(trie.validate_db(&root).unwrap());
    assert!(trie.have_claim(b"keep", &outpoint(1, 0)).unwrap());

    // an uncommitted block disappears on rollback
    trie.add_claim(b"drop", outpoint(2, 0), claim_id(2), 10, 1, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.rollback().unwrap();
    assert_eq!(trie.get_merkle_hash().unwrap(), root);
}

#[test]
fn removal_under_a_live_branch_grants_one_zero_delay_readd() {
    let mut trie = trie(quiet_forks(), 0);
    trie.add_claim(b"a", outpoint(1, 0), claim_id(1), 10, 0, None, Vec::new()).unwrap();
    trie.add_claim(b"ab", outpoint(2, 0), claim_id(2), 10, 0, None, Vec::new()).unwrap();
    advance(&mut trie, 1);
    trie.flush().unwrap();

    advance(&mut trie, 99);
    assert_eq!(trie.height(), 100);

    // an unrelated claim would normally wait (100 - 0) / 32 = 3 blocks
    assert_eq!(trie.get_delay_for_name(b"a", &claim_id(7)).unwrap(), 3);

    // removing the only claim at "a" while "ab" stays live arms the
    // legacy zero-delay workaround for exactly one insert
    trie.remove_claim(&claim_id(1), &outpoint(1, 0)).unwrap().unwrap();
    assert_eq!(trie.get_delay_for_name(b"a", &claim_id(7)).unwrap(), 0);
    assert_eq!(trie.get_delay_for_name(b"a", &claim_id(7)).unwrap(), 3);
}

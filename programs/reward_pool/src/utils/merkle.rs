use anchor_lang::solana_program::hash::hashv;

/// Verifies a merkle proof using sorted-pair hashing.
///
/// Each step hashes the running node with the next proof element, smaller
/// value first, so proofs carry no left/right flags.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let mut computed = leaf;
    for node in proof {
        computed = hash_pair(&computed, node);
    }
    computed == root
}

/// Hashes two sibling nodes in lexicographic order
pub fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    if left <= right {
        hashv(&[left, right]).to_bytes()
    } else {
        hashv(&[right, left]).to_bytes()
    }
}

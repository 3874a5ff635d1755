#![cfg(test)]
#![cfg(feature = "rust-crypto")]

extern crate merkle_proof;

use merkle_proof::hash::{Algorithm, Element};
use merkle_proof::hash_impl::{Blake2b256, Blake2b512, Md5};
use merkle_proof::{Error, MerkleTree, Proof};

const WORDS: [&str; 6] = ["one", "two", "three", "four", "five", "six"];

fn check_root<T: Element, A: Algorithm<T>>(alg: A, expected: &str) {
    let tree = MerkleTree::new(WORDS, alg).unwrap();
    assert_eq!(hex::encode(tree.root()), expected);
    for i in 0..tree.leafs() {
        let p = tree.gen_proof(i).unwrap();
        assert_eq!(tree.validate_proof(&p), Ok(()));
    }
}

#[test]
fn test_blake2b256_root() {
    check_root(
        Blake2b256::new(),
        "4c0f348cf4fd15737f3a2228bd94b8b98273a3b08c19a9137a5a9e3073cf6ef9",
    );
}

#[test]
fn test_blake2b512_root() {
    check_root(
        Blake2b512::new(),
        "8d992c4cab3d74175f0726621815dfe4a89900d0a9a69f0ac5a7d6fbce0b3a6d\
         3c705ef35894578ea92dd477db238d7f1899d621924fd939319001a73f9861cb",
    );
}

#[test]
fn test_md5_root() {
    check_root(Md5::new(), "596a66d7763c03151f2824bc9d13ef87");
}

#[test]
fn test_md5_tamper() {
    let tree = MerkleTree::new(WORDS, Md5::new()).unwrap();
    let (index, leaf, siblings) = tree.gen_proof(4).unwrap().into_parts();
    for s in 0..siblings.len() {
        for b in 0..16 {
            let mut broken = siblings.clone();
            broken[s][b] = !broken[s][b];
            let p = Proof::new(index, leaf, broken);
            assert_eq!(tree.validate_proof(&p), Err(Error::ProofMismatch));
        }
    }
}

#[test]
fn test_from_data_uses_default_instance() {
    let t1 = MerkleTree::new(WORDS, Blake2b256::new()).unwrap();
    let t2: MerkleTree<[u8; 32], Blake2b256> = MerkleTree::from_data(WORDS).unwrap();
    assert_eq!(t1.root(), t2.root());

    let p = t2.gen_proof(2).unwrap();
    let mut a = Blake2b256::default();
    assert_eq!(p.validate_with_data(&mut a, b"three", &t1.root()), Ok(()));
}

//! Binary _Merkle Tree_ with compact inclusion proofs.
//!
//! The tree commits to an ordered list of byte strings of any non-zero
//! length. Leaves hash their content, interior nodes hash the concatenation
//! of their children's hashes, left first:
//!
//! ```text
//! leaf(d)       = ALG(d)
//! node(l, r)    = ALG(l || r)
//! ```
//!
//! When a level has an odd number of nodes the last one is paired with a
//! duplicate of itself, so the shape of the tree is a function of the leaf
//! count only. A proof for leaf `i` is the list of sibling hashes from the
//! leaf up to the root; bit `k` of `i` tells whether the path runs left (0)
//! or right (1) at level `k`.
//!
//! Link: [](https://en.wikipedia.org/wiki/Merkle_tree)
//!
//! # Implementation choices
//!
//! The hash algorithm is an interface: [`Algorithm`] complements
//! [`std::hash::Hasher`] with `hash` and `reset`, and the digest type is a
//! parameter of the tree. Reference algorithms backed by `ring` (SHA-256,
//! SHA-512) and `rust-crypto` (BLAKE2b-256, BLAKE2b-512, MD5) live in
//! [`hash_impl`] behind the features of the same names.
//!
//! Node hashes are computed once, when the node is built, and the tree owns
//! all of its nodes. A built tree is immutable except for [`append`], which
//! rebuilds it from scratch.
//!
//! [`append`]: merkle::MerkleTree::append
//!
//! # Interface
//!
//! ```text
//! - new (items, alg) -> tree
//! - root -> hash
//! - gen_proof (index) -> proof
//! - validate_proof (proof) -> result
//! - append (items)
//! ```
//!
//! # Quick start
//!
//! ```
//! # #[cfg(feature = "ring")]
//! # fn main() -> merkle_proof::Result<()> {
//! use merkle_proof::hash_impl::Sha256;
//! use merkle_proof::MerkleTree;
//!
//! let mut tree = MerkleTree::new(["one", "two", "three"], Sha256::new())?;
//! let proof = tree.gen_proof(2)?;
//! tree.validate_proof(&proof)?;
//!
//! tree.append(["four"])?;
//! assert!(tree.validate_proof(&proof).is_err());
//! tree.validate_proof(&tree.gen_proof(2)?)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "ring"))]
//! # fn main() {}
//! ```

#![deny(
    missing_docs,
    unused_qualifications,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

/// Error type.
pub mod error;
pub use error::{Error, Result};

/// Hash infrastructure for items in Merkle tree.
pub mod hash;
pub use hash::{Algorithm, Element};

/// Reference hash algorithms.
pub mod hash_impl;

/// Tree nodes.
pub mod node;
pub use node::{Leaf, Node};

mod shape;
pub use shape::{left_span, tree_height};

/// Merkle tree inclusion proof.
pub mod proof;
pub use proof::Proof;

/// Merkle tree abstractions, implementation and algorithms.
pub mod merkle;
pub use merkle::MerkleTree;

#[cfg(test)]
mod test_common;

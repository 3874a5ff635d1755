use log::trace;

use crate::error::{Error, Result};
use crate::hash::{Algorithm, Element};

/// Merkle tree inclusion proof for the leaf at `leaf_index`.
///
/// Sibling layout, leaf to root:
///
/// ```text
/// [ s0 s1 s2 ... sN ]
/// ```
///
/// `s0` is the sibling of the leaf itself, `sN` the sibling of the root's
/// child on the path. Bit `i` of `leaf_index` tells on which side the path
/// runs at level `i`: `0` means the path node is the left child, `1` the
/// right one.
///
/// A proof owns copies of the hashes it carries and keeps no reference to
/// the tree. Two proofs are equal when index, leaf hash and every sibling
/// are equal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Proof<T: Element> {
    leaf_index: usize,
    leaf_hash: T,
    siblings: Vec<T>,
}

impl<T: Element> Proof<T> {
    /// Creates new MT inclusion proof.
    pub fn new(leaf_index: usize, leaf_hash: T, siblings: Vec<T>) -> Proof<T> {
        Proof {
            leaf_index,
            leaf_hash,
            siblings,
        }
    }

    /// Index of the proven leaf.
    pub fn leaf_index(&self) -> usize {
        self.leaf_index
    }

    /// Hash of the proven leaf.
    pub fn leaf_hash(&self) -> &T {
        &self.leaf_hash
    }

    /// Sibling hashes, leaf to root.
    pub fn siblings(&self) -> &[T] {
        &self.siblings
    }

    /// Number of siblings, which is the height of the tree.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Returns `true` if the proof carries no siblings.
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Splits the proof into `(leaf_index, leaf_hash, siblings)`.
    pub fn into_parts(self) -> (usize, T, Vec<T>) {
        (self.leaf_index, self.leaf_hash, self.siblings)
    }

    /// Folds the sibling path over the leaf hash and returns the root it
    /// commits to.
    pub fn root<A: Algorithm<T>>(&self, alg: &mut A) -> T {
        let mut h = self.leaf_hash.clone();
        for (level, sibling) in self.siblings.iter().enumerate() {
            // indices are narrower than very long paths, missing bits are 0
            let bit = self
                .leaf_index
                .checked_shr(level as u32)
                .map_or(0, |shifted| shifted & 1);
            h = if bit == 0 {
                alg.node(&h, sibling)
            } else {
                alg.node(sibling, &h)
            };
        }
        h
    }

    /// Verifies MT inclusion proof against a known root hash.
    pub fn validate<A: Algorithm<T>>(&self, alg: &mut A, root: &T) -> Result<()> {
        let computed = self.root(alg);
        if &computed != root {
            trace!(
                "proof for leaf {} recombines to {:?}, expected {:?}",
                self.leaf_index,
                computed,
                root
            );
            return Err(Error::ProofMismatch);
        }
        Ok(())
    }

    /// Verifies MT inclusion proof and that `content` is the original leaf
    /// data for which the proof was generated.
    pub fn validate_with_data<A: Algorithm<T>>(
        &self,
        alg: &mut A,
        content: &[u8],
        root: &T,
    ) -> Result<()> {
        if alg.leaf(content) != self.leaf_hash {
            return Err(Error::LeafHashMismatch {
                index: self.leaf_index,
            });
        }
        self.validate(alg, root)
    }
}

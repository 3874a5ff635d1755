use log::{debug, trace};

use crate::error::{Error, Result};
use crate::hash::{Algorithm, Element};
use crate::node::{Leaf, Node};
use crate::proof::Proof;
use crate::shape::{self, Split, Step};

/// Merkle Tree.
///
/// A merkle tree is a tree in which every non-leaf node is the hash of its
/// children nodes. A diagram depicting how it works:
///
/// ```text
///         root = h1234 = h(h12 + h34)
///        /                           \
///  h12 = h(h1 + h2)            h34 = h(h3 + h4)
///   /            \              /            \
/// h1 = h(tx1)  h2 = h(tx2)    h3 = h(tx3)  h4 = h(tx4)
/// ```
///
/// The number of inputs is not always a power of two. Leaves are paired
/// level by level, left to right; when a level has an odd number of nodes
/// the last one is paired with a duplicate of itself. A duplicated leaf is
/// copied, a duplicated interior node is replaced by a [`Node::Stub`]
/// carrying its hash only. With five leaves:
///
/// ```text
///                 root
///            /            \
///        h1234            h55'
///       /     \          /    \
///    h12      h34      h55   [h55]
///   /   \    /   \    /   \
///  h1   h2  h3   h4  h5   h5
/// ```
///
/// The shape depends on the leaf count only. A lone leaf is paired with
/// itself, so the root is always an interior node.
///
/// The tree owns every node outright. Appending leaves rebuilds the whole
/// tree; batch leaves before appending when that matters.
#[derive(Debug, Clone)]
pub struct MerkleTree<T: Element, A: Algorithm<T>> {
    root: Node<T>,
    leaves: Vec<Leaf<T>>,
    height: usize,
    alg: A,
}

impl<T: Element, A: Algorithm<T>> MerkleTree<T, A> {
    /// Creates new merkle tree from a sequence of leaf contents.
    pub fn new<D, I>(data: I, mut alg: A) -> Result<MerkleTree<T, A>>
    where
        D: AsRef<[u8]>,
        I: IntoIterator<Item = D>,
    {
        let leaves = data
            .into_iter()
            .map(|d| Leaf::new(d.as_ref(), &mut alg))
            .collect();
        Self::from_leaves(leaves, alg)
    }

    /// Creates new merkle tree from already hashed leaves.
    ///
    /// The leaves must have been hashed with an algorithm equivalent to `alg`.
    pub fn from_leaves(leaves: Vec<Leaf<T>>, mut alg: A) -> Result<MerkleTree<T, A>> {
        let (root, height) = Self::build(&leaves, &mut alg)?;
        Ok(MerkleTree {
            root,
            leaves,
            height,
            alg,
        })
    }

    /// Creates new merkle tree from a sequence of leaf contents using the
    /// default instance of the algorithm.
    pub fn from_data<D, I>(data: I) -> Result<MerkleTree<T, A>>
    where
        A: Default,
        D: AsRef<[u8]>,
        I: IntoIterator<Item = D>,
    {
        Self::new(data, A::default())
    }

    fn build(leaves: &[Leaf<T>], alg: &mut A) -> Result<(Node<T>, usize)> {
        if leaves.is_empty() {
            return Err(Error::EmptyInput);
        }
        let height = shape::tree_height(leaves.len());
        debug!("building tree of {} leafs, height {}", leaves.len(), height);
        Ok((Self::build_node(leaves, height, alg), height))
    }

    /// Builds the node at `height` covering `leaves`.
    fn build_node(leaves: &[Leaf<T>], height: usize, alg: &mut A) -> Node<T> {
        if height == 0 {
            debug_assert_eq!(leaves.len(), 1);
            return Node::Leaf(leaves[0].clone());
        }
        match shape::split(leaves.len(), height) {
            Split::Pair { left } => {
                let l = Self::build_node(&leaves[..left], height - 1, alg);
                let r = Self::build_node(&leaves[left..], height - 1, alg);
                Node::internal(l, r, alg)
            }
            Split::Pad => {
                let l = Self::build_node(leaves, height - 1, alg);
                let r = l.duplicate();
                Node::internal(l, r, alg)
            }
        }
    }

    /// Generate merkle tree inclusion proof for leaf `index`.
    pub fn gen_proof(&self, index: usize) -> Result<Proof<T>> {
        let leafs = self.leafs();
        if index >= leafs {
            return Err(Error::IndexOutOfRange { index, leafs });
        }

        // walk down from the root, collecting root-to-leaf, reversed below
        let mut siblings = Vec::with_capacity(self.height);
        let mut node = &self.root;
        let mut width = leafs;
        let mut offset = index;
        let mut height = self.height;
        while let Node::Internal { left, right, .. } = node {
            match shape::locate(width, height, offset) {
                Step::Left {
                    width: w,
                    offset: o,
                } => {
                    siblings.push(right.hash().clone());
                    node = left.as_ref();
                    width = w;
                    offset = o;
                }
                Step::Right {
                    width: w,
                    offset: o,
                } => {
                    siblings.push(left.hash().clone());
                    node = right.as_ref();
                    width = w;
                    offset = o;
                }
            }
            height -= 1;
        }
        debug_assert!(matches!(node, Node::Leaf(_)));
        debug_assert_eq!(siblings.len(), self.height);
        siblings.reverse();

        trace!("generated proof for leaf {} of {}", index, leafs);
        Ok(Proof::new(
            index,
            self.leaves[index].hash().clone(),
            siblings,
        ))
    }

    /// Verifies a proof against this tree.
    ///
    /// Checks, in order, that the proven index exists, that the proof's leaf
    /// hash is the hash of that leaf and that the path recombines to the root.
    pub fn validate_proof(&self, proof: &Proof<T>) -> Result<()> {
        let index = proof.leaf_index();
        let leafs = self.leafs();
        if index >= leafs {
            return Err(Error::IndexOutOfRange { index, leafs });
        }
        if proof.leaf_hash() != self.leaves[index].hash() {
            trace!("proof leaf hash differs from leaf {}", index);
            return Err(Error::LeafHashMismatch { index });
        }
        proof.validate(&mut self.alg.clone(), self.root.hash())
    }

    /// Appends leaf contents and rebuilds the tree.
    pub fn append<D, I>(&mut self, data: I) -> Result<()>
    where
        D: AsRef<[u8]>,
        I: IntoIterator<Item = D>,
    {
        let alg = &mut self.alg;
        let leaves: Vec<Leaf<T>> = data
            .into_iter()
            .map(|d| Leaf::new(d.as_ref(), &mut *alg))
            .collect();
        self.append_leaves(leaves)
    }

    /// Appends already hashed leaves and rebuilds the tree.
    pub fn append_leaves<I: IntoIterator<Item = Leaf<T>>>(&mut self, leaves: I) -> Result<()> {
        let before = self.leaves.len();
        self.leaves.extend(leaves);
        if self.leaves.len() == before {
            return Ok(());
        }
        debug!("appended {} leafs", self.leaves.len() - before);
        let (root, height) = Self::build(&self.leaves, &mut self.alg)?;
        self.root = root;
        self.height = height;
        Ok(())
    }

    /// Returns merkle root.
    pub fn root(&self) -> T {
        self.root.hash().clone()
    }

    /// Returns a reference to the merkle root.
    pub fn root_ref(&self) -> &T {
        self.root.hash()
    }

    /// Returns the root node.
    pub fn root_node(&self) -> &Node<T> {
        &self.root
    }

    /// Returns number of leafs the tree is built upon.
    pub fn leafs(&self) -> usize {
        self.leaves.len()
    }

    /// Returns leaf `index`, if any.
    pub fn leaf(&self, index: usize) -> Option<&Leaf<T>> {
        self.leaves.get(index)
    }

    /// Returns all leaves in insertion order.
    pub fn leaves(&self) -> &[Leaf<T>] {
        &self.leaves
    }

    /// Returns height of the tree, the number of siblings in every proof.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the hash algorithm the tree was built with.
    pub fn algorithm(&self) -> &A {
        &self.alg
    }
}

use crate::hash::{Algorithm, Element};

/// Tree leaf: the original content together with its hash.
///
/// The hash is computed once, at construction, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<T: Element> {
    content: Vec<u8>,
    hash: T,
}

impl<T: Element> Leaf<T> {
    /// Hashes `content` with `alg` and wraps both.
    pub fn new<A: Algorithm<T>>(content: impl Into<Vec<u8>>, alg: &mut A) -> Leaf<T> {
        let content = content.into();
        let hash = alg.leaf(&content);
        Leaf { content, hash }
    }

    /// Original leaf content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Leaf hash, `H(content)`.
    pub fn hash(&self) -> &T {
        &self.hash
    }
}

/// Tree element.
///
/// Every variant carries its hash, computed when the node is built. A `Stub`
/// is the hash-only stand-in used to pad an odd level whose last node is
/// itself an interior node: it duplicates that node's hash without
/// duplicating its subtree and it only ever appears as a right child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<T: Element> {
    /// Leaf node.
    Leaf(Leaf<T>),
    /// Interior node owning both of its children.
    Internal {
        /// Left child.
        left: Box<Node<T>>,
        /// Right child.
        right: Box<Node<T>>,
        /// `H(left.hash || right.hash)`.
        hash: T,
    },
    /// Hash-only duplicate of an interior node.
    Stub(T),
}

impl<T: Element> Node<T> {
    /// Joins two nodes under a new interior node.
    pub(crate) fn internal<A: Algorithm<T>>(left: Node<T>, right: Node<T>, alg: &mut A) -> Node<T> {
        let hash = alg.node(left.hash(), right.hash());
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            hash,
        }
    }

    /// Returns the partner an unpaired node is joined with: a leaf pairs
    /// with a copy of itself, an interior node with a stub of its hash.
    pub(crate) fn duplicate(&self) -> Node<T> {
        match self {
            Node::Leaf(leaf) => Node::Leaf(leaf.clone()),
            _ => Node::Stub(self.hash().clone()),
        }
    }

    /// Node hash.
    pub fn hash(&self) -> &T {
        match self {
            Node::Leaf(leaf) => leaf.hash(),
            Node::Internal { hash, .. } => hash,
            Node::Stub(hash) => hash,
        }
    }

    /// `true` only for a fully formed interior node.
    pub fn has_children(&self) -> bool {
        matches!(self, Node::Internal { .. })
    }

    /// `true` for the hash-only stand-in.
    pub fn is_stub(&self) -> bool {
        matches!(self, Node::Stub(_))
    }
}

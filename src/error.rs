use thiserror::Error;

/// Errors returned by tree construction, proof generation and validation.
///
/// All of them are deterministic: retrying the same call gives the same result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tree construction was attempted with zero leaves.
    #[error("cannot build a merkle tree from an empty leaf set")]
    EmptyInput,

    /// A leaf index outside of `[0, leafs)`.
    #[error("leaf index {index} is out of range for a tree of {leafs} leaves")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of leaves in the tree.
        leafs: usize,
    },

    /// The proof carries a leaf hash that differs from the tree's leaf at that index.
    #[error("proof leaf hash does not match the hash of leaf {index}")]
    LeafHashMismatch {
        /// Index of the leaf being proven.
        index: usize,
    },

    /// Recombining the proof path did not yield the expected root.
    #[error("calculated hash does not match the root hash of the tree")]
    ProofMismatch,
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

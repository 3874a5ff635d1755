//! Hash infrastructure for items in Merkle Tree.

use std::fmt::Debug;
use std::hash::Hasher;

/// Digest type produced by an [`Algorithm`].
///
/// Blanket implemented for anything byte-like that can be cloned and compared,
/// e.g. `[u8; 16]`, `[u8; 32]`, `[u8; 64]` or `Vec<u8>`.
pub trait Element: AsRef<[u8]> + Clone + Eq + Debug {}

impl<T: AsRef<[u8]> + Clone + Eq + Debug> Element for T {}

/// Hashing algorithm type.
///
/// Algorithm conforms standard [`Hasher`] trait and provides methods to return
/// full length hash and reset current state. The tree only ever feeds it raw
/// bytes, so an implementation is a deterministic mapping of the data stream
/// written since the last [`reset`](Algorithm::reset).
///
/// `hash` takes `&mut self` because most digest implementations consume or
/// break their state on finalization.
///
/// ```
/// use std::hash::Hasher;
/// use merkle_proof::hash::Algorithm;
///
/// /// Folds every byte into a single one. Useless, but deterministic.
/// #[derive(Clone, Default)]
/// struct Fold(u8);
///
/// impl Hasher for Fold {
///     fn write(&mut self, bytes: &[u8]) {
///         for b in bytes {
///             self.0 = self.0.rotate_left(3) ^ b;
///         }
///     }
///
///     fn finish(&self) -> u64 {
///         self.0 as u64
///     }
/// }
///
/// impl Algorithm<[u8; 1]> for Fold {
///     fn hash(&mut self) -> [u8; 1] {
///         [self.0]
///     }
///
///     fn reset(&mut self) {
///         self.0 = 0;
///     }
/// }
///
/// let mut a = Fold::default();
/// let l = a.leaf(b"a");
/// let r = a.leaf(b"b");
/// assert_eq!(a.node(&l, &r), { a.reset(); a.write(b"a"); a.write(b"b"); a.hash() });
/// ```
pub trait Algorithm<T: Element>: Hasher + Clone {
    /// Returns the hash value for the data stream written so far.
    fn hash(&mut self) -> T;

    /// Reset Hasher state.
    fn reset(&mut self);

    /// Returns the hash value for MT leaf content: `H(content)`.
    fn leaf(&mut self, content: &[u8]) -> T {
        self.reset();
        self.write(content);
        self.hash()
    }

    /// Returns the hash value for MT interior node: `H(left || right)`.
    fn node(&mut self, left: &T, right: &T) -> T {
        self.reset();
        self.write(left.as_ref());
        self.write(right.as_ref());
        self.hash()
    }
}

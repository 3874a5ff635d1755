//! Tree shape decisions shared by the builder and the proof generator.
//!
//! The shape of the tree depends on nothing but the leaf count. A node at
//! `height` covers up to `2^height` leaves; its left child takes the first
//! [`left_span`] of them and the right child the rest. When nothing is left
//! for the right child the node is padded with a duplicate of the left one.
//! The tree builder and the proof generator both go through [`split`], so
//! pairing and descent always agree.

/// Number of leaves covered by the left child of a node covering `width`
/// leaves: the largest power of two strictly below `width`, which is
/// `width / 2` when `width` is itself a power of two. Zero for `width <= 1`.
pub fn left_span(width: usize) -> usize {
    if width <= 1 {
        return 0;
    }
    let mut power = 1;
    while power <= width / 2 {
        power *= 2;
    }
    if power == width {
        power / 2
    } else {
        power
    }
}

/// Number of levels above the leaves, equal to the length of every proof.
///
/// A single leaf is paired with itself, so the height is never below one.
pub fn tree_height(leafs: usize) -> usize {
    if leafs <= 2 {
        return 1;
    }
    (usize::BITS - (leafs - 1).leading_zeros()) as usize
}

/// How a node divides the leaves it covers between its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Split {
    /// Left child covers `left` leaves, right child the remainder.
    Pair { left: usize },
    /// Left child covers every leaf, right child duplicates it.
    Pad,
}

/// Splits a node at `height` (at least one) covering `width` leaves.
pub(crate) fn split(width: usize, height: usize) -> Split {
    match height.checked_sub(1) {
        Some(below) if width > 1usize << below => {
            let left = left_span(width);
            debug_assert_eq!(left, 1 << below);
            Split::Pair { left }
        }
        _ => Split::Pad,
    }
}

/// Child to descend into when looking for leaf `offset` of a node at
/// `height` covering `width` leaves, with the child's own width and offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Left { width: usize, offset: usize },
    Right { width: usize, offset: usize },
}

pub(crate) fn locate(width: usize, height: usize, offset: usize) -> Step {
    match split(width, height) {
        Split::Pad => Step::Left { width, offset },
        Split::Pair { left } if offset < left => Step::Left {
            width: left,
            offset,
        },
        Split::Pair { left } => Step::Right {
            width: width - left,
            offset: offset - left,
        },
    }
}

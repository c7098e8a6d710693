//! A dense, word-packed membership set over small vertex ids.
//!
//! `VertexSet` is the visited-set storage used by graph traversals: a
//! fixed-capacity bitset over ids `0..capacity`, one bit per vertex, packed
//! into `usize` words. Algorithms that only need membership semantics take a
//! [`VertexMembership`] instead, so callers can substitute any container
//! providing insert/contains over integer keys.

use core::fmt;

const WORD_BITS: usize = usize::BITS as usize;

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, 1usize << (bit % WORD_BITS))
}

/// Minimal membership interface consumed by graph traversals.
///
/// Any container supporting insert/contains over integer keys
/// `0..capacity` is substitutable for [`VertexSet`] here.
pub trait VertexMembership {
    /// Inserts `v`, returning `true` iff it was not already a member.
    fn insert(&mut self, v: usize) -> bool;

    /// Returns whether `v` is a member.
    fn contains(&self, v: usize) -> bool;
}

/// A fixed-capacity set of vertex ids `0..capacity`.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `insert` / `contains` | \(O(1)\) |
/// | `clear` | \(O(capacity / 64)\) |
/// | `iter` | \(O(capacity / 64 + |set|)\) |
#[derive(Clone, PartialEq, Eq)]
pub struct VertexSet {
    capacity: usize,
    members: usize,
    words: Vec<usize>,
}

impl VertexSet {
    /// Creates an empty set admitting ids `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: 0,
            words: vec![0; capacity.div_ceil(WORD_BITS)],
        }
    }

    /// Maximum admissible id plus one.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of members.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.members
    }

    /// Returns whether the set has no members.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Inserts `v`, returning `true` iff it was not already a member.
    ///
    /// # Panics
    /// Panics if `v >= capacity()`.
    pub fn insert(&mut self, v: usize) -> bool {
        assert!(v < self.capacity, "vertex {v} out of bounds");
        let (word, mask) = bit_word_mask(v);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        self.members += usize::from(fresh);
        fresh
    }

    /// Returns whether `v` is a member.
    ///
    /// # Panics
    /// Panics if `v >= capacity()`.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        assert!(v < self.capacity, "vertex {v} out of bounds");
        let (word, mask) = bit_word_mask(v);
        self.words[word] & mask != 0
    }

    /// Removes all members, keeping the capacity.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.members = 0;
    }

    /// Iterates over members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let base = wi * WORD_BITS;
            BitIter { word }.map(move |bit| base + bit)
        })
    }
}

/// Yields the set bit positions of one word, lowest first.
struct BitIter {
    word: usize,
}

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(bit)
    }
}

impl fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl VertexMembership for VertexSet {
    #[inline]
    fn insert(&mut self, v: usize) -> bool {
        VertexSet::insert(self, v)
    }

    #[inline]
    fn contains(&self, v: usize) -> bool {
        VertexSet::contains(self, v)
    }
}

impl VertexMembership for std::collections::HashSet<usize> {
    #[inline]
    fn insert(&mut self, v: usize) -> bool {
        std::collections::HashSet::insert(self, v)
    }

    #[inline]
    fn contains(&self, v: usize) -> bool {
        std::collections::HashSet::contains(self, &v)
    }
}

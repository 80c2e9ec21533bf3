// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Order keys as sequences of alphabet ranks.
//!
//! A key is stored as ranks rather than symbols so that comparison never
//! touches the alphabet. The derived `Ord` on a rank sequence is exactly
//! the ordering keys need: lexicographic by rank, with a missing trailing
//! symbol ranking below any present one (`"a" < "aa"`).
//!
//! Keys are only meaningful together with the alphabet they were built in.
//! Use `Alphabet::parse` and `Alphabet::render` to cross the text boundary.

use smallvec::SmallVec;

/// Inline capacity for key ranks. Most keys stay short.
const INLINE: usize = 16;

/// A sortable order key.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(SmallVec<[u8; INLINE]>);

impl Key {
    /// Create a key from raw ranks.
    ///
    /// Ranks are not checked against any alphabet here. `Alphabet::render`
    /// rejects out-of-range ranks at the boundary.
    pub fn from_ranks(ranks: &[u8]) -> Key {
        return Key(SmallVec::from_slice(ranks));
    }

    /// A key holding one rank.
    pub fn single(rank: u8) -> Key {
        let mut ranks = SmallVec::new();
        ranks.push(rank);
        return Key(ranks);
    }

    /// The ranks of this key, first symbol first.
    #[inline]
    pub fn ranks(&self) -> &[u8] {
        return &self.0;
    }

    /// Rank at `position`, if the key is that long.
    #[inline]
    pub fn get(&self, position: usize) -> Option<u8> {
        return self.0.get(position).copied();
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        return self.0.len();
    }

    /// Check if the key has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }

    pub(crate) fn push(&mut self, rank: u8) {
        self.0.push(rank);
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "Key({:?})", self.ranks());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_prefix_sorts_first() {
        let a = Key::from_ranks(&[10]);
        let aa = Key::from_ranks(&[10, 10]);
        let b = Key::from_ranks(&[11]);
        assert!(a < aa);
        assert!(aa < b);
    }

    #[test]
    fn empty_key_sorts_below_everything() {
        let empty = Key::default();
        assert!(empty.is_empty());
        assert!(empty < Key::single(0));
    }

    #[test]
    fn long_keys_spill_and_still_compare() {
        let long: Vec<u8> = (0..40).map(|i| (i % 36) as u8).collect();
        let mut longer = long.clone();
        longer.push(0);
        let a = Key::from_ranks(&long);
        let b = Key::from_ranks(&longer);
        assert_eq!(a.len(), 40);
        assert_eq!(b.get(40), Some(0));
        assert!(a < b);
    }
}

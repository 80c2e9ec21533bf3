// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Alphabets: the ordered symbol sets keys are drawn from.
//!
//! An alphabet fixes both the digit set and the comparison order of a key
//! space. Every key that is ever compared against another must come from
//! the same alphabet.
//!
//! The rank tables are built once at construction:
//! - Rank to symbol: O(1) (array lookup)
//! - Symbol to rank: O(1) average case (hash map)
//!
//! so parsing and rendering a key costs time linear in its length.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde::Serialize;

use crate::error::AlphabetError;
use crate::error::KeyError;
use crate::key::Key;

/// Digits then lowercase letters, the reference key space.
pub const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Seed symbol of the reference key space.
pub const BASE36_SEED: char = 'm';

/// Ranks are stored in a `u8`.
pub const MAX_SYMBOLS: usize = 256;

/// An ordered, duplicate-free set of at least two symbols.
#[derive(Clone)]
pub struct Alphabet {
    /// Map from rank to symbol.
    symbols: Vec<char>,
    /// Map from symbol to rank.
    ranks: FxHashMap<char, u8>,
    /// Rank of the key handed out for an empty collection.
    seed: u8,
}

/// Textual form of an alphabet, as read from configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetConfig {
    /// Symbols in rank order.
    pub symbols: String,
    /// Seed symbol. Defaults to the symbol at rank `len / 2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<char>,
}

impl Alphabet {
    /// Build an alphabet from symbols listed in rank order.
    ///
    /// The seed defaults to the symbol at rank `len / 2`, which leaves
    /// roughly equal room on either side of the first key.
    pub fn new(symbols: &str) -> Result<Alphabet, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(AlphabetError::TooFewSymbols { count: symbols.len() });
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(AlphabetError::TooManySymbols {
                count: symbols.len(),
                max: MAX_SYMBOLS,
            });
        }

        let mut ranks = FxHashMap::default();
        for (rank, &symbol) in symbols.iter().enumerate() {
            if ranks.insert(symbol, rank as u8).is_some() {
                return Err(AlphabetError::DuplicateSymbol { symbol });
            }
        }

        let seed = (symbols.len() / 2) as u8;
        return Ok(Alphabet { symbols, ranks, seed });
    }

    /// The base-36 reference alphabet (`0-9a-z`) seeded at `m`.
    pub fn base36() -> Alphabet {
        let symbols: Vec<char> = BASE36.chars().collect();
        let ranks = symbols
            .iter()
            .enumerate()
            .map(|(rank, &symbol)| (symbol, rank as u8))
            .collect();
        let seed = (BASE36_SEED as u8) - b'a' + 10;
        return Alphabet { symbols, ranks, seed };
    }

    /// Replace the seed symbol.
    pub fn with_seed(mut self, symbol: char) -> Result<Alphabet, AlphabetError> {
        match self.rank(symbol) {
            Some(rank) => {
                self.seed = rank;
                return Ok(self);
            }
            None => return Err(AlphabetError::UnknownSeed { symbol }),
        }
    }

    /// Build an alphabet from its configuration record.
    pub fn from_config(config: &AlphabetConfig) -> Result<Alphabet, AlphabetError> {
        let alphabet = Alphabet::new(&config.symbols)?;
        return match config.seed {
            Some(seed) => alphabet.with_seed(seed),
            None => Ok(alphabet),
        };
    }

    /// The configuration record that rebuilds this alphabet.
    pub fn to_config(&self) -> AlphabetConfig {
        return AlphabetConfig {
            symbols: self.symbols.iter().collect(),
            seed: Some(self.symbol(self.seed)),
        };
    }

    /// Number of symbols, N.
    #[inline]
    pub fn len(&self) -> usize {
        return self.symbols.len();
    }

    /// Always false; an alphabet has at least two symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.symbols.is_empty();
    }

    /// Rank of a symbol, if it belongs to this alphabet.
    #[inline]
    pub fn rank(&self, symbol: char) -> Option<u8> {
        return self.ranks.get(&symbol).copied();
    }

    /// Symbol at a rank.
    ///
    /// Panics if `rank >= len()`.
    #[inline]
    pub fn symbol(&self, rank: u8) -> char {
        return self.symbols[rank as usize];
    }

    /// Rank of the first symbol.
    #[inline]
    pub fn min_rank(&self) -> u8 {
        return 0;
    }

    /// Rank of the last symbol.
    #[inline]
    pub fn max_rank(&self) -> u8 {
        return (self.symbols.len() - 1) as u8;
    }

    /// Rank of the seed symbol.
    #[inline]
    pub fn seed_rank(&self) -> u8 {
        return self.seed;
    }

    /// Read a textual key.
    pub fn parse(&self, text: &str) -> Result<Key, KeyError> {
        let mut key = Key::default();
        for (position, symbol) in text.chars().enumerate() {
            match self.rank(symbol) {
                Some(rank) => key.push(rank),
                None => return Err(KeyError::UnknownSymbol { symbol, position }),
            }
        }
        return Ok(key);
    }

    /// Write a key as text.
    ///
    /// Panics if the key holds a rank outside this alphabet, which only
    /// happens for keys built by hand with `Key::from_ranks`.
    pub fn render(&self, key: &Key) -> String {
        return key.ranks().iter().map(|&rank| self.symbol(rank)).collect();
    }

    /// Compare two textual keys by rank.
    ///
    /// Agrees with plain string comparison only when the alphabet is listed
    /// in code point order, as `BASE36` is.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering, KeyError> {
        let a = self.parse(a)?;
        let b = self.parse(b)?;
        return Ok(a.cmp(&b));
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        return Alphabet::base36();
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        return self.symbols == other.symbols && self.seed == other.seed;
    }
}

impl Eq for Alphabet {}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        return Alphabet::new(s);
    }
}

impl Serialize for Alphabet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        return self.to_config().serialize(serializer);
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let config = AlphabetConfig::deserialize(deserializer)?;
        return Alphabet::from_config(&config).map_err(serde::de::Error::custom);
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        return Ok(());
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Alphabet({:?}, seed: {:?})", self.to_string(), self.symbol(self.seed));
    }
}

// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Error types for alphabets, keys, and key generation.
//!
//! None of these are retryable: generation is a pure function, so the same
//! inputs fail the same way every time. Callers fix the inputs instead.

use thiserror::Error;

/// Result type for crate-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An alphabet could not be built from the given symbols.
///
/// These are configuration errors, detected once when the alphabet is
/// constructed and never per call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Midpoints need at least two ranks to work with.
    #[error("alphabet needs at least 2 symbols, got {count}")]
    TooFewSymbols {
        /// Number of symbols supplied.
        count: usize,
    },

    /// Ranks are stored in a byte.
    #[error("alphabet has {count} symbols, at most {max} are supported")]
    TooManySymbols {
        /// Number of symbols supplied.
        count: usize,
        /// Maximum supported.
        max: usize,
    },

    /// A symbol appears twice, so its rank is ambiguous.
    #[error("symbol {symbol:?} appears more than once in alphabet")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },

    /// The requested seed is not a member of the alphabet.
    #[error("seed symbol {symbol:?} is not in the alphabet")]
    UnknownSeed {
        /// The rejected seed.
        symbol: char,
    },
}

/// A textual key could not be read in a given alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The key contains a symbol outside the alphabet.
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
        /// Its position in the key, counted in symbols.
        position: usize,
    },
}

/// No key could be generated for the requested gap.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Both bounds were given but `lower >= upper`.
    #[error("invalid interval: lower bound {lower:?} is not below upper bound {upper:?}")]
    InvalidInterval {
        /// Rendered lower bound.
        lower: String,
        /// Rendered upper bound.
        upper: String,
    },

    /// The gap is empty: `upper` extends `lower` with minimum symbols only,
    /// so nothing sorts strictly between them.
    #[error("no key fits between {lower:?} and {upper:?}")]
    NoRoom {
        /// Rendered lower bound, empty when absent.
        lower: String,
        /// Rendered upper bound.
        upper: String,
    },
}

/// Any error produced by this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

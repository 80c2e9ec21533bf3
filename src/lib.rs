// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Ordkey - fractional order keys for reorderable lists.
//!
//! Items in a list carry a sortable string key. Moving an item means
//! generating one new key that sorts between its new neighbors; no other
//! key is rewritten.
//!
//! # Quick Start
//!
//! ```
//! // First item of an empty list.
//! let first = ordkey::generate(None, None).unwrap();
//! assert_eq!(first, "m");
//!
//! // Append after it, then slot one in between.
//! let last = ordkey::generate(Some(&first), None).unwrap();
//! let middle = ordkey::generate(Some(&first), Some(&last)).unwrap();
//! assert!(first < middle && middle < last);
//! ```
//!
//! # Custom alphabets
//!
//! ```
//! use ordkey::{Alphabet, Generator};
//!
//! let generator = Generator::new(Alphabet::new("abcdefgh").unwrap());
//! assert_eq!(generator.between(Some("a"), Some("e")).unwrap(), "c");
//! ```

pub mod alphabet;
pub mod error;
pub mod generator;
pub mod key;

pub use alphabet::Alphabet;
pub use alphabet::AlphabetConfig;
pub use error::AlphabetError;
pub use error::Error;
pub use error::GenerateError;
pub use error::KeyError;
pub use error::Result;
pub use generator::Generator;
pub use generator::generate;
pub use key::Key;

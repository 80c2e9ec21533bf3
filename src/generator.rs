// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Midpoint key generation.
//!
//! Given the keys on either side of a gap, produce a key that sorts
//! strictly between them. Either side may be absent:
//!
//! - No lower bound: the lower key is read as all minimum symbols.
//! - No upper bound: every position of the upper key has rank N, one past
//!   the largest real rank, so there is always room above `lower`.
//! - Neither: the alphabet's seed symbol.
//!
//! # Algorithm
//!
//! Walk both keys one position at a time. While the ranks agree, copy them.
//! At the first position where they differ, take the floor of their mean:
//!
//! ```text
//! lower  a 3        lower  a          lower  a z
//! upper  a 7        upper  b          upper  b
//! result a 5        result a i        result a z i
//! ```
//!
//! If the mean lands strictly above the lower rank, it is the last symbol.
//! Otherwise the ranks are adjacent: the result copies the lower symbol,
//! which already puts it below `upper`, and from then on only `lower`
//! constrains it. The next position then has the whole open top to split,
//! and fits unless the lower symbol there is already the largest one.
//!
//! Each position either terminates or advances, so the result is at most
//! `max(len(lower), len(upper)) + 1` symbols long. The last symbol is never
//! the minimum, so generated keys always leave room below themselves.

use std::sync::LazyLock;

use tracing::trace;

use crate::alphabet::Alphabet;
use crate::error::GenerateError;
use crate::error::Result;
use crate::key::Key;

/// Generates keys in one alphabet.
///
/// Holds no state besides the alphabet; every call is a pure function of
/// its arguments, and a generator can be shared freely across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generator {
    alphabet: Alphabet,
}

static BASE36: LazyLock<Generator> = LazyLock::new(|| Generator::new(Alphabet::base36()));

/// Generate a key between two base-36 textual keys.
///
/// ```
/// assert_eq!(ordkey::generate(None, None).unwrap(), "m");
/// assert_eq!(ordkey::generate(Some("a"), Some("c")).unwrap(), "b");
/// assert_eq!(ordkey::generate(Some("a"), Some("b")).unwrap(), "ai");
/// ```
pub fn generate(lower: Option<&str>, upper: Option<&str>) -> Result<String> {
    return BASE36.between(lower, upper);
}

impl Generator {
    /// Create a generator for an alphabet.
    pub fn new(alphabet: Alphabet) -> Generator {
        return Generator { alphabet };
    }

    /// The alphabet keys are drawn from.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        return &self.alphabet;
    }

    /// Generate a key strictly between `lower` and `upper`.
    ///
    /// Fails with `InvalidInterval` when both bounds are present and
    /// `lower >= upper`, and with `NoRoom` when `upper` is `lower` followed
    /// only by minimum symbols.
    pub fn generate(
        &self,
        lower: Option<&Key>,
        upper: Option<&Key>,
    ) -> std::result::Result<Key, GenerateError> {
        let lower = lower.filter(|key| !key.is_empty());
        let upper = upper.filter(|key| !key.is_empty());

        if lower.is_none() && upper.is_none() {
            return Ok(Key::single(self.alphabet.seed_rank()));
        }

        if let (Some(lo), Some(hi)) = (lower, upper) {
            if lo >= hi {
                return Err(GenerateError::InvalidInterval {
                    lower: self.alphabet.render(lo),
                    upper: self.alphabet.render(hi),
                });
            }
        }

        let empty = Key::default();
        let lo = lower.unwrap_or(&empty);
        let min = self.alphabet.min_rank() as u16;
        let open = self.alphabet.len() as u16;

        let mut result = Key::default();
        let mut bound = upper;
        let mut position = 0;

        loop {
            let a = lo.get(position).map_or(min, u16::from);
            let b = match bound {
                Some(hi) => match hi.get(position) {
                    Some(rank) => rank as u16,
                    // Still equal past the end of `upper`: it is `lower`
                    // padded with minimum symbols.
                    None => {
                        return Err(GenerateError::NoRoom {
                            lower: self.alphabet.render(lo),
                            upper: self.alphabet.render(hi),
                        });
                    }
                },
                None => open,
            };

            if a == b {
                result.push(a as u8);
                position += 1;
                continue;
            }

            let mid = (a + b) / 2;
            if mid > a {
                result.push(mid as u8);
                return Ok(result);
            }

            // Adjacent ranks. Copying `a` keeps the result below `upper`.
            result.push(a as u8);
            if bound.is_some() {
                trace!(position, "adjacent ranks, extending past lower bound");
            }
            bound = None;
            position += 1;
        }
    }

    /// Generate a key between two textual keys.
    ///
    /// An empty string counts as an absent bound.
    pub fn between(&self, lower: Option<&str>, upper: Option<&str>) -> Result<String> {
        let lower = lower.map(|text| self.alphabet.parse(text)).transpose()?;
        let upper = upper.map(|text| self.alphabet.parse(text)).transpose()?;
        let key = self.generate(lower.as_ref(), upper.as_ref())?;
        return Ok(self.alphabet.render(&key));
    }
}

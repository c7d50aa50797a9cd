use std::fmt;

use crate::error::{FibError, Result};

/// The index used when none is given on the command line.
pub const DEFAULT_INDEX: u64 = 40;

/// A validated, non-negative position in the Fibonacci sequence.
///
/// `Index` can only be built from input that has been checked, so negative or
/// non-integer indices are rejected before any computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(u64);

impl Index {
    /// Create an index from an unsigned value.
    pub const fn new(n: u64) -> Self {
        Index(n)
    }

    /// The raw index value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse an index from user input.
    ///
    /// # Examples
    /// ```
    /// use fibbench::Index;
    /// assert_eq!(Index::parse("40").unwrap().get(), 40);
    /// assert!(Index::parse("-3").is_err());
    /// assert!(Index::parse("2.5").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = |reason| FibError::InvalidIndex {
            input: input.to_string(),
            reason,
        };
        if trimmed.is_empty() {
            return Err(invalid("index is empty"));
        }
        if let Some(magnitude) = trimmed.strip_prefix('-') {
            return match magnitude.parse::<u64>() {
                Ok(0) => Ok(Index(0)),
                Ok(_) => Err(invalid("index must not be negative")),
                Err(_) => Err(invalid("index must be an integer")),
            };
        }
        trimmed
            .parse::<u64>()
            .map(Index)
            .map_err(|_| invalid("index must be a non-negative integer"))
    }
}

impl Default for Index {
    fn default() -> Self {
        Index(DEFAULT_INDEX)
    }
}

impl From<u32> for Index {
    fn from(n: u32) -> Self {
        Index(n as u64)
    }
}

impl TryFrom<i64> for Index {
    type Error = FibError;

    fn try_from(n: i64) -> Result<Self> {
        u64::try_from(n).map(Index).map_err(|_| FibError::InvalidIndex {
            input: n.to_string(),
            reason: "index must not be negative",
        })
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_non_negative_integers() {
        assert_eq!(Index::parse("0").unwrap(), Index::new(0));
        assert_eq!(Index::parse(" 40 ").unwrap(), Index::new(40));
        assert_eq!(Index::parse("-0").unwrap(), Index::new(0));
    }

    #[test]
    fn parse_rejects_negative() {
        let err = Index::parse("-5").unwrap_err();
        assert!(matches!(
            err,
            FibError::InvalidIndex {
                reason: "index must not be negative",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid index `-5`: index must not be negative"
        );
    }

    #[test]
    fn parse_rejects_non_integers() {
        for input in ["", "-", "abc", "4.2", "1e3", "-x", "--5"] {
            assert!(
                matches!(Index::parse(input), Err(FibError::InvalidIndex { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn try_from_signed() {
        assert_eq!(Index::try_from(10i64).unwrap().get(), 10);
        assert!(Index::try_from(-1i64).is_err());
    }

    #[test]
    fn default_is_forty() {
        assert_eq!(Index::default().get(), 40);
    }
}

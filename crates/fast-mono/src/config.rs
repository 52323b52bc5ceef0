//! Comparison modes shared by the monotonic trackers.
//!
//! A tracker is configured with a [`Direction`] (which neighbour it looks for)
//! and a [`TieBreak`] (whether equal values count). The sliding window pass
//! takes an [`Extremum`]. All three parse from lower-case names and round-trip
//! through serde, so they can sit in a serialized [`TrackerConfig`]. Serde
//! and `FromStr` accept the same names and reject the rest with
//! [`Error::UnsupportedMode`].
//!
//! # Example
//!
//! ```
//! use fast_mono::config::{Direction, TieBreak, TrackerConfig};
//!
//! let config: TrackerConfig = "greater:inclusive".parse().unwrap();
//! assert_eq!(config.direction, Direction::Greater);
//! assert_eq!(config.tie_break, TieBreak::Inclusive);
//!
//! assert!("sideways".parse::<Direction>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which neighbour a stack query looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    /// The nearest element greater than the current one.
    #[default]
    Greater,
    /// The nearest element smaller than the current one.
    Smaller,
}

/// How equal values are treated by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TieBreak {
    /// Equal values do not qualify ("next greater").
    #[default]
    Strict,
    /// Equal values qualify ("next greater or equal").
    Inclusive,
}

/// Which extremum a sliding window reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Extremum {
    /// Window maximum.
    #[default]
    Max,
    /// Window minimum.
    Min,
}

impl Direction {
    /// Returns the lower-case name used by `FromStr` and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greater => "greater",
            Self::Smaller => "smaller",
        }
    }

    /// Returns true if `candidate` answers a query made from `current`.
    ///
    /// This is also the stack eviction predicate: an index on the stack is
    /// popped when the incoming value qualifies against it.
    #[inline]
    #[must_use]
    pub fn qualifies<T: PartialOrd>(self, current: &T, candidate: &T, tie_break: TieBreak) -> bool {
        match (self, tie_break) {
            (Self::Greater, TieBreak::Strict) => current < candidate,
            (Self::Greater, TieBreak::Inclusive) => current <= candidate,
            (Self::Smaller, TieBreak::Strict) => current > candidate,
            (Self::Smaller, TieBreak::Inclusive) => current >= candidate,
        }
    }
}

impl TieBreak {
    /// Returns the lower-case name used by `FromStr` and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Inclusive => "inclusive",
        }
    }
}

impl Extremum {
    /// Returns the lower-case name used by `FromStr` and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// Returns true if `incoming` weakly dominates `resident`, so `resident`
    /// can never again be a window extremum.
    #[inline]
    #[must_use]
    pub fn dominates<T: PartialOrd>(self, incoming: &T, resident: &T) -> bool {
        match self {
            Self::Max => resident <= incoming,
            Self::Min => resident >= incoming,
        }
    }
}

fn unsupported(mode: &str) -> Error {
    Error::UnsupportedMode {
        mode: mode.to_string(),
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greater" | "gt" => Ok(Self::Greater),
            "smaller" | "lt" => Ok(Self::Smaller),
            _ => Err(unsupported(s)),
        }
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "inclusive" => Ok(Self::Inclusive),
            _ => Err(unsupported(s)),
        }
    }
}

impl FromStr for Extremum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "maximum" => Ok(Self::Max),
            "min" | "minimum" => Ok(Self::Min),
            _ => Err(unsupported(s)),
        }
    }
}

// Deserialization goes through `FromStr`, so aliases and errors match parsing.
impl TryFrom<String> for Direction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for TieBreak {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Extremum {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction and tie-break for a stack-based tracker.
///
/// The textual form is `direction[:tie_break]`, e.g. `"smaller"` or
/// `"greater:inclusive"`; a missing tie-break means [`TieBreak::Strict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Which neighbour to look for.
    pub direction: Direction,
    /// Whether equal values qualify.
    pub tie_break: TieBreak,
}

impl TrackerConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub const fn new(direction: Direction, tie_break: TieBreak) -> Self {
        Self {
            direction,
            tie_break,
        }
    }

    /// Returns true if `candidate` answers a query made from `current`.
    #[inline]
    #[must_use]
    pub fn qualifies<T: PartialOrd>(&self, current: &T, candidate: &T) -> bool {
        self.direction.qualifies(current, candidate, self.tie_break)
    }
}

impl FromStr for TrackerConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (direction, tie_break): (Direction, TieBreak) = match s.split_once(':') {
            Some((direction, tie_break)) => (direction.parse()?, tie_break.parse()?),
            None => (s.parse()?, TieBreak::default()),
        };
        Ok(Self::new(direction, tie_break))
    }
}

impl fmt::Display for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.direction, self.tie_break)
    }
}

//! First-class point events.
//!
//! A point is a domain event, not a side effect: it names the side that won
//! the rally and can be validated, logged and replayed independently of the
//! match it is applied to.

use crate::Side;
use serde::{Deserialize, Serialize};

/// A rally won by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    side: Side,
}

impl Point {
    /// Creates a point won by `side`.
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    /// Side that won the point.
    pub fn side(&self) -> Side {
        self.side
    }
}

impl From<Side> for Point {
    fn from(side: Side) -> Self {
        Self::new(side)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "point to {}", self.side)
    }
}

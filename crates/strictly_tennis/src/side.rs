//! The two competing sides of a singles match.

use crate::ScoringError;
use serde::{Deserialize, Serialize};

/// One of the two player slots in a match.
///
/// Serialized as its player number (`1` or `2`) so persisted payloads
/// match the form fields and state tags used at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(try_from = "u8", into = "u8")]
pub enum Side {
    /// Player 1.
    One,
    /// Player 2.
    Two,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Returns the player number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = ScoringError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            other => Err(ScoringError::InvalidPlayerNumber(other)),
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.number()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Side::One.opponent(), Side::Two);
        assert_eq!(Side::Two.opponent().opponent(), Side::Two);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Side::try_from(1), Ok(Side::One));
        assert_eq!(Side::try_from(2), Ok(Side::Two));
        assert_eq!(Side::try_from(0), Err(ScoringError::InvalidPlayerNumber(0)));
        assert_eq!(Side::try_from(3), Err(ScoringError::InvalidPlayerNumber(3)));
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Side::Two).unwrap(), "2");
        assert!(serde_json::from_str::<Side>("7").is_err());
    }
}

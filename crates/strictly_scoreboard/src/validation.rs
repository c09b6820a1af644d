//! Input validation: player names, page numbers and point form fields.

use std::collections::HashMap;
use strictly_tennis::{ScoringError, Side};
use tracing::{debug, instrument};

/// Form field naming the side that won the point.
pub const PLAYER_ONE_POINT: &str = "player1_point";
/// Form field naming the side that won the point.
pub const PLAYER_TWO_POINT: &str = "player2_point";

/// First page number.
pub const MIN_PAGE: usize = 1;

/// A problem with one of the submitted player names.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NameError {
    /// The name is blank.
    #[display("The name of {} cannot be empty", _0)]
    Empty(Side),
    /// The name contains something other than letters and inner hyphens.
    #[display("The name of {} may only contain letters joined by single hyphens", _0)]
    InvalidCharacters(Side),
    /// The name is longer than allowed.
    #[display("The name of {} must not exceed {} characters", side, max)]
    TooLong {
        /// Offending side.
        side: Side,
        /// Configured maximum length.
        max: usize,
    },
    /// Both players have the same name (ignoring case).
    #[display("Player names must be different")]
    Duplicate,
}

/// Every problem found with a pair of player names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameErrors(Vec<NameError>);

impl NameErrors {
    /// The individual problems, in the order they were found.
    pub fn errors(&self) -> &[NameError] {
        &self.0
    }
}

impl std::fmt::Display for NameErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "Invalid player names: {}", messages.join("; "))
    }
}

impl std::error::Error for NameErrors {}

/// Validates and trims both player names.
///
/// Rules: not empty, different from each other ignoring case, each word made
/// of letters optionally joined by single hyphens, at most `max_length`
/// characters.
///
/// # Errors
///
/// Returns every rule broken, not just the first.
#[instrument]
pub fn player_names(
    player_one: &str,
    player_two: &str,
    max_length: usize,
) -> Result<(String, String), NameErrors> {
    let one = player_one.trim();
    let two = player_two.trim();
    let mut errors = Vec::new();

    for (side, name) in [(Side::One, one), (Side::Two, two)] {
        if name.is_empty() {
            errors.push(NameError::Empty(side));
            continue;
        }
        if !name.split_whitespace().all(is_valid_word) {
            errors.push(NameError::InvalidCharacters(side));
        }
        if name.chars().count() > max_length {
            errors.push(NameError::TooLong {
                side,
                max: max_length,
            });
        }
    }

    if !one.is_empty() && one.to_lowercase() == two.to_lowercase() {
        errors.push(NameError::Duplicate);
    }

    if errors.is_empty() {
        Ok((one.to_string(), two.to_string()))
    } else {
        debug!(count = errors.len(), "Player names rejected");
        Err(NameErrors(errors))
    }
}

/// Letters, optionally joined by single hyphens (`Jean-Luc`, not `-Jean` or `Jean--Luc`).
fn is_valid_word(word: &str) -> bool {
    word.split('-')
        .all(|part| !part.is_empty() && part.chars().all(char::is_alphabetic))
}

/// Number of pages needed for `total` items (at least one).
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(MIN_PAGE)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn correct_page(page: usize, total: usize, per_page: usize) -> usize {
    page.clamp(MIN_PAGE, total_pages(total, per_page))
}

/// Works out which player won the point from submitted form fields.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidPlayerNumber`] (with number 0) when neither
/// field is present.
#[instrument(skip(params), fields(fields = ?params.keys().collect::<Vec<_>>()))]
pub fn player_number(params: &HashMap<String, String>) -> Result<u8, ScoringError> {
    if params.contains_key(PLAYER_ONE_POINT) {
        Ok(Side::One.number())
    } else if params.contains_key(PLAYER_TWO_POINT) {
        Ok(Side::Two.number())
    } else {
        Err(ScoringError::InvalidPlayerNumber(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_are_trimmed() {
        let names = player_names("  Rafael Nadal ", "Jean-Luc", 50).unwrap();
        assert_eq!(names, ("Rafael Nadal".to_string(), "Jean-Luc".to_string()));
    }

    #[test]
    fn test_empty_names() {
        let errors = player_names("", "   ", 50).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[NameError::Empty(Side::One), NameError::Empty(Side::Two)]
        );
    }

    #[test]
    fn test_duplicate_ignores_case() {
        let errors = player_names("Roger", "roger", 50).unwrap_err();
        assert_eq!(errors.errors(), &[NameError::Duplicate]);
    }

    #[test]
    fn test_bad_characters_and_length() {
        let errors = player_names("R2-D2", "Abcdefghijk", 10).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                NameError::InvalidCharacters(Side::One),
                NameError::TooLong {
                    side: Side::Two,
                    max: 10
                },
            ]
        );
    }

    #[test]
    fn test_hyphen_placement() {
        assert!(is_valid_word("Jean-Luc"));
        assert!(is_valid_word("Łukasz"));
        assert!(!is_valid_word("-Jean"));
        assert!(!is_valid_word("Jean--Luc"));
        assert!(!is_valid_word("Jean-"));
    }

    #[test]
    fn test_page_correction() {
        assert_eq!(correct_page(0, 25, 10), 1);
        assert_eq!(correct_page(2, 25, 10), 2);
        assert_eq!(correct_page(9, 25, 10), 3);
        assert_eq!(correct_page(5, 0, 10), 1);
        assert_eq!(total_pages(20, 10), 2);
    }

    #[test]
    fn test_player_number_from_form() {
        let mut params = HashMap::new();
        assert_eq!(player_number(&params), Err(ScoringError::InvalidPlayerNumber(0)));

        params.insert(PLAYER_TWO_POINT.to_string(), String::new());
        assert_eq!(player_number(&params), Ok(2));

        params.insert(PLAYER_ONE_POINT.to_string(), String::new());
        assert_eq!(player_number(&params), Ok(1));
    }
}

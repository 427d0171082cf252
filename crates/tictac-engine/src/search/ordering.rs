//! Candidate move order, which doubles as the tie-break policy.
//!
//! The search keeps the first candidate with a strictly better value, so
//! among equally good squares the one listed earliest here is played.

use std::fmt;
use std::str::FromStr;

use tictac_core::Square;

use crate::error::EngineError;

/// Center, then corners, then edges.
const CENTER_FIRST: [Square; Square::COUNT] = [
    Square::CENTER,
    Square::TOP_LEFT,
    Square::TOP_RIGHT,
    Square::BOTTOM_LEFT,
    Square::BOTTOM_RIGHT,
    Square::TOP,
    Square::LEFT,
    Square::RIGHT,
    Square::BOTTOM,
];

/// The order in which the search tries squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrder {
    /// `4, 0, 2, 6, 8, 1, 3, 5, 7`.
    #[default]
    CenterFirst,
    /// `0, 1, ..., 8`.
    Ascending,
}

impl MoveOrder {
    /// Every square in this order. Callers skip occupied ones.
    #[inline]
    pub const fn squares(self) -> &'static [Square; Square::COUNT] {
        match self {
            MoveOrder::CenterFirst => &CENTER_FIRST,
            MoveOrder::Ascending => &Square::ALL,
        }
    }
}

impl FromStr for MoveOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<MoveOrder, EngineError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center-first" | "center" => Ok(MoveOrder::CenterFirst),
            "ascending" | "index" => Ok(MoveOrder::Ascending),
            other => Err(EngineError::UnknownMoveOrder {
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MoveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOrder::CenterFirst => write!(f, "center-first"),
            MoveOrder::Ascending => write!(f, "ascending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_first_indices() {
        let indices: Vec<usize> = MoveOrder::CenterFirst
            .squares()
            .iter()
            .map(|sq| sq.index())
            .collect();
        assert_eq!(indices, vec![4, 0, 2, 6, 8, 1, 3, 5, 7]);
    }

    #[test]
    fn ascending_indices() {
        let indices: Vec<usize> = MoveOrder::Ascending
            .squares()
            .iter()
            .map(|sq| sq.index())
            .collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn every_order_covers_all_squares() {
        for order in [MoveOrder::CenterFirst, MoveOrder::Ascending] {
            let mut squares = order.squares().to_vec();
            squares.sort();
            assert_eq!(squares, Square::ALL.to_vec(), "{order} is not a permutation");
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("center-first".parse(), Ok(MoveOrder::CenterFirst));
        assert_eq!("Ascending".parse(), Ok(MoveOrder::Ascending));
        assert!("random".parse::<MoveOrder>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for order in [MoveOrder::CenterFirst, MoveOrder::Ascending] {
            assert_eq!(order.to_string().parse(), Ok(order));
        }
    }

    #[test]
    fn default_is_center_first() {
        assert_eq!(MoveOrder::default(), MoveOrder::CenterFirst);
    }
}

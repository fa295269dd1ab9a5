use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A single compass move of the rescuer. There is no diagonal move and no
/// "stop": an agent that has run out of actions simply returns none.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Successor generation order. Kept fixed so that depth-first and
    /// breadth-first results are reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector of the move, with north pointing towards increasing `y`.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Direction::from_str("north").unwrap(), Direction::North);
        assert_eq!(Direction::from_str("WEST").unwrap(), Direction::West);
        assert!(Direction::from_str("stop").is_err());
    }

    #[test]
    fn reverse_cancels_vector() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.vector();
            let (rx, ry) = direction.reverse().vector();
            assert_eq!((dx + rx, dy + ry), (0, 0));
        }
    }
}

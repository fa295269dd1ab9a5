use crate::search::Cost;
use serde::{Deserialize, Serialize};

/// Ground type of a walkable cell. Entering a cell costs its terrain cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Floor,
    Water,
    Rubble,
    Fire,
}

impl Terrain {
    /// Unknown characters are plain floor.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '~' => Terrain::Water,
            '^' => Terrain::Rubble,
            '*' => Terrain::Fire,
            _ => Terrain::Floor,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Terrain::Floor => '.',
            Terrain::Water => '~',
            Terrain::Rubble => '^',
            Terrain::Fire => '*',
        }
    }

    pub fn cost(self) -> Cost {
        match self {
            Terrain::Floor => 1,
            Terrain::Water => 2,
            Terrain::Rubble => 3,
            Terrain::Fire => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_match_symbols() {
        let costs: Vec<Cost> = ". ~^*x"
            .chars()
            .map(|symbol| Terrain::from_symbol(symbol).cost())
            .collect();
        assert_eq!(costs, vec![1, 1, 2, 3, 5, 1]);
    }
}

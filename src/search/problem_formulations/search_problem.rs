use crate::error::ConfigError;
use crate::search::{Cost, Direction, HeuristicCache, TargetSet};
use crate::world::{Located, Position};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{Display, EnumString, VariantNames};

/// A state reachable in one move, the move that reaches it and what the
/// move costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S> {
    pub state: S,
    pub action: Direction,
    pub cost: Cost,
}

/// Everything a search engine needs to know about a problem.
///
/// Goal tests and successor generation take `&mut self` so that problems
/// can keep expansion counts and report visited cells, but that bookkeeping
/// never changes their answers.
pub trait SearchProblem: Debug {
    type State: Clone + Eq + Hash + Debug + Located;

    fn start_state(&self) -> Self::State;

    fn is_goal_state(&mut self, state: &Self::State) -> bool;

    /// Neighbouring states in north, south, east, west order. Moves into
    /// walls are left out.
    fn successors(&mut self, state: &Self::State) -> Vec<Successor<Self::State>>;

    /// Replays `actions` from the start state and sums the step costs.
    /// Returns [`crate::search::INFEASIBLE_COST`] if any action walks into a
    /// wall.
    fn cost_of_actions(&self, actions: &[Direction]) -> Cost;

    /// Number of times [`SearchProblem::successors`] has been called.
    fn expanded(&self) -> usize;
}

/// A search problem on the rescue grid, exposing what the distance based
/// heuristics need.
pub trait GridProblem: SearchProblem {
    /// Targets that still have to be reached from `state`.
    fn remaining_targets(&self, state: &Self::State) -> TargetSet;

    /// The single goal cell, if the problem has one.
    fn goal(&self) -> Option<Position>;

    /// Memoised distances, owned by the problem and dropped with it.
    fn heuristic_cache(&mut self) -> &mut HeuristicCache;

    /// Cells in the order they were first expanded.
    fn visited_cells(&self) -> &[Position];
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProblemName {
    #[clap(help = "Reach the single survivor on the map.")]
    SimpleSurvivor,
    #[clap(help = "Rescue every survivor on the map.")]
    MultiSurvivor,
}

impl ProblemName {
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::from_str(name)
            .map_err(|_| ConfigError::unknown_name("problem", name, Self::VARIANTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_names() {
        assert_eq!(
            ProblemName::from_name("multi-survivor").unwrap(),
            ProblemName::MultiSurvivor
        );
        assert_eq!(ProblemName::SimpleSurvivor.to_string(), "simple-survivor");
        let error = ProblemName::from_name("corners").unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown problem name \"corners\", expected one of: simple-survivor, multi-survivor"
        );
    }
}

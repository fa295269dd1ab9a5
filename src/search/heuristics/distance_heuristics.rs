//! Straight-line estimates to the goal cell. Both are admissible because
//! every move costs at least 1. Problems without a single goal cell get 0.

use crate::search::{GridProblem, Heuristic, HeuristicValue};
use crate::world::Located;

#[derive(Clone, Debug, Default)]
pub struct ManhattanHeuristic {}

impl ManhattanHeuristic {
    pub fn new() -> Self {
        ManhattanHeuristic {}
    }
}

impl<P: GridProblem> Heuristic<P> for ManhattanHeuristic {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        match problem.goal() {
            Some(goal) => f64::from(state.position().manhattan_distance(goal)).into(),
            None => (0.).into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EuclideanHeuristic {}

impl EuclideanHeuristic {
    pub fn new() -> Self {
        EuclideanHeuristic {}
    }
}

impl<P: GridProblem> Heuristic<P> for EuclideanHeuristic {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        match problem.goal() {
            Some(goal) => state.position().euclidean_distance(goal).into(),
            None => (0.).into(),
        }
    }
}

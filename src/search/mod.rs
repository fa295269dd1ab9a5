mod action;
pub mod frontier;
pub mod heuristics;
mod plan;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;

pub use action::Direction;
pub use heuristics::{Heuristic, HeuristicCache, HeuristicName, HeuristicValue};
pub use plan::Plan;
pub use problem_formulations::{
    GridProblem, MultiTargetProblem, MultiTargetState, ProblemName, SearchProblem,
    SingleTargetOptions, SingleTargetProblem, Successor, TargetSet,
};
pub use search_engines::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, Astar, Bfs,
    Dfs, SearchEngine, SearchEngineName, SearchResult, Ucs,
};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;

/// Step and path costs. Every terrain cost is a small positive integer.
pub type Cost = u32;

/// Returned by [`SearchProblem::cost_of_actions`] for a sequence that walks
/// into a wall.
pub const INFEASIBLE_COST: Cost = 999_999;

//! The search engines. Each one is available as a [`SearchEngine`] built
//! from a [`SearchEngineName`], and as a plain function returning the plan.

mod astar;
mod bfs;
mod dfs;
mod search_engine;
mod ucs;

pub use astar::Astar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use ucs::Ucs;

use crate::search::{Heuristic, Plan, SearchProblem};

/// Returns the empty plan if no goal is reachable.
pub fn depth_first_search<P: SearchProblem>(problem: &mut P) -> Plan {
    Dfs::new().search(problem).0.into_plan()
}

/// Returns the empty plan if no goal is reachable.
pub fn breadth_first_search<P: SearchProblem>(problem: &mut P) -> Plan {
    Bfs::new().search(problem).0.into_plan()
}

/// Returns the empty plan if no goal is reachable.
pub fn uniform_cost_search<P: SearchProblem>(problem: &mut P) -> Plan {
    Ucs::new().search(problem).0.into_plan()
}

/// Returns the empty plan if no goal is reachable.
pub fn a_star_search<P: SearchProblem>(problem: &mut P, heuristic: &mut dyn Heuristic<P>) -> Plan {
    astar::a_star(problem, heuristic).0.into_plan()
}

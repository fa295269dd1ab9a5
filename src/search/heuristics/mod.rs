mod distance_heuristics;
mod heuristic;
mod heuristic_cache;
mod survivor_heuristic;
mod zero_heuristic;

pub use distance_heuristics::{EuclideanHeuristic, ManhattanHeuristic};
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use heuristic_cache::HeuristicCache;
pub use survivor_heuristic::{SurvivorHeuristic, TargetCounting};
pub use zero_heuristic::ZeroHeuristic;

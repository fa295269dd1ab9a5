mod multi_target_problem;
mod search_problem;
mod single_target_problem;
mod target_set;

pub use multi_target_problem::{MultiTargetProblem, MultiTargetState};
pub use search_problem::{GridProblem, ProblemName, SearchProblem, Successor};
pub use single_target_problem::{CostFn, SingleTargetOptions, SingleTargetProblem, VisitObserver};
pub use target_set::TargetSet;

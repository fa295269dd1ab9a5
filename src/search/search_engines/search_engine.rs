use crate::error::ConfigError;
use crate::search::search_engines::{Astar, Bfs, Dfs, Ucs};
use crate::search::{Heuristic, NodeId, Plan, SearchProblem, SearchSpace, SearchStatistics};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use strum::VariantNames;
use strum_macros::{Display, EnumString, VariantNames};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// Every reachable state was expanded without finding a goal
    Unsolvable,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The plan found, or the empty plan if there is none.
    pub fn into_plan(self) -> Plan {
        match self {
            SearchResult::Success(plan) => plan,
            SearchResult::Unsolvable => Plan::empty(),
        }
    }
}

pub trait SearchEngine<P: SearchProblem>: Debug {
    fn search(&mut self, problem: &mut P) -> (SearchResult, SearchStatistics);
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
pub enum SearchEngineName {
    #[clap(alias = "depth-first-search", help = "Depth first graph search.")]
    #[strum(to_string = "dfs", serialize = "depth-first-search")]
    #[serde(alias = "depth-first-search")]
    Dfs,
    #[clap(
        alias = "breadth-first-search",
        help = "Breadth first graph search, finds the plan with the fewest moves."
    )]
    #[strum(to_string = "bfs", serialize = "breadth-first-search")]
    #[serde(alias = "breadth-first-search")]
    Bfs,
    #[clap(
        alias = "uniform-cost-search",
        help = "Uniform cost search, finds the cheapest plan."
    )]
    #[strum(to_string = "ucs", serialize = "uniform-cost-search")]
    #[serde(alias = "uniform-cost-search")]
    Ucs,
    #[clap(
        alias = "a-star-search",
        help = "A* search with the chosen heuristic, finds the cheapest plan \
        when the heuristic is admissible."
    )]
    #[strum(to_string = "astar", serialize = "a-star-search")]
    #[serde(alias = "a-star-search")]
    Astar,
}

impl SearchEngineName {
    /// Builds the engine. Only A* uses the heuristic.
    pub fn create<P: SearchProblem + 'static>(
        &self,
        heuristic: Box<dyn Heuristic<P>>,
    ) -> Box<dyn SearchEngine<P>> {
        match self {
            SearchEngineName::Dfs => Box::new(Dfs::new()),
            SearchEngineName::Bfs => Box::new(Bfs::new()),
            SearchEngineName::Ucs => Box::new(Ucs::new()),
            SearchEngineName::Astar => Box::new(Astar::new(heuristic)),
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::from_str(name)
            .map_err(|_| ConfigError::unknown_name("search engine", name, Self::VARIANTS))
    }
}

/// Extracts the plan ending in `goal_id` and closes the statistics.
pub(super) fn solved<P: SearchProblem>(
    problem: &P,
    search_space: &SearchSpace<P::State>,
    goal_id: NodeId,
    mut statistics: SearchStatistics,
) -> (SearchResult, SearchStatistics) {
    let plan = search_space.extract_plan(goal_id);
    statistics.register_plan_cost(problem.cost_of_actions(&plan));
    info!(plan_length = plan.len(), "goal reached");
    statistics.finalise_search();
    (SearchResult::Success(plan), statistics)
}

pub(super) fn unsolvable(mut statistics: SearchStatistics) -> (SearchResult, SearchStatistics) {
    info!("frontier exhausted without reaching a goal");
    statistics.finalise_search();
    (SearchResult::Unsolvable, statistics)
}

//! Uniform cost search

use crate::search::search_engines::search_engine::{solved, unsolvable};
use crate::search::{
    frontier::PriorityFrontier, SearchEngine, SearchNodeStatus, SearchProblem, SearchResult,
    SearchSpace, SearchStatistics,
};

/// Uniform cost search. The frontier holds each state once; finding a
/// cheaper path to a state still in the frontier lowers its priority and
/// moves it under the new parent. The first goal popped is a cheapest one.
#[derive(Debug, Default)]
pub struct Ucs {}

impl Ucs {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for Ucs {
    fn search(&mut self, problem: &mut P) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = PriorityFrontier::new();
        let mut search_space = SearchSpace::new(problem.start_state());
        let root_node = search_space.get_root_node_mut();

        root_node.open(0, (0.).into());
        frontier.push(root_node.get_node_id(), 0);

        while let Some((node_id, g_value)) = frontier.pop() {
            let state = search_space.get_state(node_id).clone();
            if problem.is_goal_state(&state) {
                return solved(problem, &search_space, node_id, statistics);
            }
            search_space.get_node_mut(node_id).close();
            statistics.increment_expanded_nodes();

            for successor in problem.successors(&state) {
                let child_g = g_value + successor.cost;
                let child_node =
                    search_space.insert_or_get_node(successor.state, successor.action, node_id);
                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        child_node.open(child_g, (0.).into());
                        statistics.increment_generated_nodes(1);
                    }
                    SearchNodeStatus::Open if child_g < child_node.get_g() => {
                        child_node.reopen(child_g, node_id, successor.action);
                        statistics.increment_reopened_nodes();
                    }
                    _ => continue,
                }
                frontier.push(child_node.get_node_id(), child_g);
            }
        }

        unsolvable(statistics)
    }
}

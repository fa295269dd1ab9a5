//! Breadth first search

use crate::search::search_engines::search_engine::{solved, unsolvable};
use crate::search::{
    frontier::{Frontier, Queue},
    SearchEngine, SearchNodeStatus, SearchProblem, SearchResult, SearchSpace, SearchStatistics,
};

/// Breadth first graph search. States are marked as seen when they are
/// generated and goal tested at the same time, so the first goal found is
/// one with the fewest moves. Step costs are ignored.
#[derive(Debug, Default)]
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for Bfs {
    fn search(&mut self, problem: &mut P) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut queue = Queue::new();
        let start = problem.start_state();
        let mut search_space = SearchSpace::new(start.clone());
        let root_node = search_space.get_root_node_mut();

        root_node.open(0, (0.).into());
        let root_node_id = root_node.get_node_id();
        queue.push(root_node_id);

        if problem.is_goal_state(&start) {
            return solved(problem, &search_space, root_node_id, statistics);
        }

        while let Some(node_id) = queue.pop() {
            let node = search_space.get_node_mut(node_id);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(node_id).clone();
            for successor in problem.successors(&state) {
                let child_node = search_space.insert_or_get_node(
                    successor.state.clone(),
                    successor.action,
                    node_id,
                );
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                child_node.open(g_value + successor.cost, (0.).into());
                let child_node_id = child_node.get_node_id();
                statistics.increment_generated_nodes(1);

                if problem.is_goal_state(&successor.state) {
                    return solved(problem, &search_space, child_node_id, statistics);
                }
                queue.push(child_node_id);
            }
        }

        unsolvable(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::search_engine_tests::*;
    use crate::search::{SearchEngineName, SingleTargetProblem, Ucs};
    use crate::test_utils::*;

    #[test]
    fn bfs_start_is_goal() {
        test_start_is_goal(SearchEngineName::Bfs);
    }

    #[test]
    fn bfs_open_grid() {
        test_open_grid(SearchEngineName::Bfs);
    }

    #[test]
    fn bfs_unreachable_goal() {
        test_unreachable_goal(SearchEngineName::Bfs);
    }

    #[test]
    fn bfs_walled_survivor() {
        test_walled_survivor(SearchEngineName::Bfs);
    }

    #[test]
    fn bfs_two_survivors() {
        test_two_survivors(SearchEngineName::Bfs);
    }

    #[test]
    fn bfs_and_unit_cost_ucs_agree_on_length() {
        for text in [
            TINY_HOUSE_TEXT,
            OPEN_GRID_TEXT,
            WALLED_SURVIVOR_TEXT,
            FIRE_CORRIDOR_TEXT,
        ] {
            let state = initial_state(text);
            let mut bfs_problem = SingleTargetProblem::new(&state).with_cost_fn(|_| 1);
            let mut ucs_problem = SingleTargetProblem::new(&state).with_cost_fn(|_| 1);
            let bfs = Bfs::new().search(&mut bfs_problem).0.into_plan();
            let ucs = Ucs::new().search(&mut ucs_problem).0.into_plan();
            assert_eq!(bfs.len(), ucs.len());
        }
    }

    #[test]
    fn bfs_ignores_terrain() {
        let mut problem = SingleTargetProblem::new(&initial_state(FIRE_CORRIDOR_TEXT));
        let plan = Bfs::new().search(&mut problem).0.into_plan();
        assert_eq!(plan.len(), 4);
        assert_eq!(problem.cost_of_actions(&plan), 16);
    }
}

//! Depth first search

use crate::search::search_engines::search_engine::{solved, unsolvable};
use crate::search::{
    frontier::{Frontier, Stack},
    SearchEngine, SearchNodeStatus, SearchProblem, SearchResult, SearchSpace, SearchStatistics,
};

/// Depth first graph search. Successors are pushed in reverse so that they
/// are explored in successor order. A state keeps the parent that first
/// generated it; an open state that is generated again is pushed again so
/// it is explored from the newer branch, but no state is expanded twice.
#[derive(Debug, Default)]
pub struct Dfs {}

impl Dfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for Dfs {
    fn search(&mut self, problem: &mut P) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut stack = Stack::new();
        let mut search_space = SearchSpace::new(problem.start_state());
        let root_node = search_space.get_root_node_mut();

        root_node.open(0, (0.).into());
        stack.push(root_node.get_node_id());

        while let Some(node_id) = stack.pop() {
            let node = search_space.get_node(node_id);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            let g_value = node.get_g();

            let state = search_space.get_state(node_id).clone();
            if problem.is_goal_state(&state) {
                return solved(problem, &search_space, node_id, statistics);
            }
            search_space.get_node_mut(node_id).close();
            statistics.increment_expanded_nodes();

            let mut new_nodes = 0;
            for successor in problem.successors(&state).into_iter().rev() {
                let child_node =
                    search_space.insert_or_get_node(successor.state, successor.action, node_id);
                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        child_node.open(g_value + successor.cost, (0.).into());
                        new_nodes += 1;
                    }
                    SearchNodeStatus::Open => {}
                    SearchNodeStatus::Closed => continue,
                }
                stack.push(child_node.get_node_id());
            }
            statistics.increment_generated_nodes(new_nodes);
        }

        unsolvable(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::search_engine_tests::*;
    use crate::search::{
        depth_first_search, Direction, GridProblem, SearchEngineName, SingleTargetProblem,
    };
    use crate::test_utils::*;
    use std::collections::HashSet;
    use Direction::*;

    #[test]
    fn dfs_start_is_goal() {
        test_start_is_goal(SearchEngineName::Dfs);
    }

    #[test]
    fn dfs_open_grid() {
        test_open_grid(SearchEngineName::Dfs);
    }

    #[test]
    fn dfs_unreachable_goal() {
        test_unreachable_goal(SearchEngineName::Dfs);
    }

    #[test]
    fn dfs_walled_survivor() {
        test_walled_survivor(SearchEngineName::Dfs);
    }

    #[test]
    fn dfs_open_grid_goes_north_then_east() {
        let plan = depth_first_search(&mut SingleTargetProblem::new(&initial_state(
            OPEN_GRID_TEXT,
        )));
        assert_eq!(
            plan.steps(),
            &[North, North, North, North, East, East, East, East]
        );
    }

    #[test]
    fn dfs_walks_into_the_fire() {
        // Every fire cell is first generated from its western neighbour, so
        // the plan runs straight through the fire.
        let mut problem = SingleTargetProblem::new(&initial_state(FIRE_CORRIDOR_TEXT));
        let (result, _) = Dfs::new().search(&mut problem);
        let plan = result.into_plan();
        assert_eq!(plan.len(), 4);
        assert_eq!(problem.cost_of_actions(&plan), 16);
    }

    #[test]
    fn dfs_never_expands_a_state_twice() {
        let mut problem = SingleTargetProblem::new(&initial_state(OPEN_GRID_TEXT));
        let (_, statistics) = Dfs::new().search(&mut problem);
        let cells: HashSet<_> = problem.visited_cells().iter().collect();
        assert_eq!(problem.expanded(), statistics.expanded_nodes());
        assert_eq!(cells.len(), problem.visited_cells().len());
        // every expanded cell plus the goal
        assert_eq!(problem.expanded() + 1, cells.len());
    }
}

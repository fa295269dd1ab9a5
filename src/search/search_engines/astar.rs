//! A* search

use crate::search::search_engines::search_engine::{solved, unsolvable};
use crate::search::{
    frontier::HeapFrontier, Heuristic, SearchEngine, SearchNodeStatus, SearchProblem,
    SearchResult, SearchSpace, SearchStatistics,
};
use std::fmt::{self, Debug};

/// A* search ordered by `g + h`. A cheaper path to an open state pushes a
/// second frontier entry; entries whose `g` no longer matches the best
/// known `g` of their state are dropped when popped. Expanded states are
/// never reopened, which keeps plans optimal for consistent heuristics.
pub struct Astar<P: SearchProblem> {
    heuristic: Box<dyn Heuristic<P>>,
}

impl<P: SearchProblem> Astar<P> {
    pub fn new(heuristic: Box<dyn Heuristic<P>>) -> Self {
        Self { heuristic }
    }
}

impl<P: SearchProblem> Debug for Astar<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Astar")
            .field("heuristic", &self.heuristic)
            .finish()
    }
}

impl<P: SearchProblem> SearchEngine<P> for Astar<P> {
    fn search(&mut self, problem: &mut P) -> (SearchResult, SearchStatistics) {
        a_star(problem, self.heuristic.as_mut())
    }
}

pub(super) fn a_star<P: SearchProblem>(
    problem: &mut P,
    heuristic: &mut dyn Heuristic<P>,
) -> (SearchResult, SearchStatistics) {
    let mut statistics = SearchStatistics::new();
    let mut frontier = HeapFrontier::new();
    let start = problem.start_state();
    let mut search_space = SearchSpace::new(start.clone());

    let h_value = heuristic.evaluate(&start, problem);
    statistics.increment_evaluated_nodes();
    statistics.register_heuristic_value(h_value);
    let root_node = search_space.get_root_node_mut();
    root_node.open(0, h_value);
    frontier.push((root_node.get_node_id(), 0), root_node.get_f());

    while let Some(((node_id, g_value), _)) = frontier.pop() {
        let node = search_space.get_node(node_id);
        if node.get_status() == SearchNodeStatus::Closed || node.get_g() != g_value {
            continue;
        }

        let state = search_space.get_state(node_id).clone();
        if problem.is_goal_state(&state) {
            return solved(problem, &search_space, node_id, statistics);
        }
        search_space.get_node_mut(node_id).close();
        statistics.increment_expanded_nodes();

        for successor in problem.successors(&state) {
            let child_g = g_value + successor.cost;
            let child_node = search_space.insert_or_get_node(
                successor.state.clone(),
                successor.action,
                node_id,
            );
            let child_node_id = child_node.get_node_id();
            match child_node.get_status() {
                SearchNodeStatus::New => {
                    let h_value = heuristic.evaluate(&successor.state, problem);
                    statistics.increment_evaluated_nodes();
                    statistics.increment_generated_nodes(1);
                    statistics.register_heuristic_value(h_value);
                    search_space
                        .get_node_mut(child_node_id)
                        .open(child_g, h_value);
                }
                SearchNodeStatus::Open if child_g < child_node.get_g() => {
                    child_node.reopen(child_g, node_id, successor.action);
                    statistics.increment_reopened_nodes();
                }
                _ => continue,
            }
            let f_value = search_space.get_node(child_node_id).get_f();
            frontier.push((child_node_id, child_g), f_value);
        }
    }

    unsolvable(statistics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::{ManhattanHeuristic, SurvivorHeuristic, ZeroHeuristic};
    use crate::search::search_engines::search_engine_tests::*;
    use crate::search::{MultiTargetProblem, SearchEngineName, SingleTargetProblem};
    use crate::test_utils::*;
    use crate::world::Position;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn astar_start_is_goal() {
        test_start_is_goal(SearchEngineName::Astar);
    }

    #[test]
    fn astar_open_grid() {
        test_open_grid(SearchEngineName::Astar);
    }

    #[test]
    fn astar_unreachable_goal() {
        test_unreachable_goal(SearchEngineName::Astar);
    }

    #[test]
    fn astar_walled_survivor() {
        test_walled_survivor(SearchEngineName::Astar);
    }

    #[test]
    fn astar_two_survivors() {
        test_two_survivors(SearchEngineName::Astar);
    }

    #[test]
    fn astar_matches_brute_force() {
        for text in [OPEN_GRID_TEXT, WALLED_SURVIVOR_TEXT, FIRE_CORRIDOR_TEXT] {
            test_matches_brute_force(SearchEngineName::Astar, text);
        }
    }

    /// Runs A* with `heuristic` and returns the plan cost and the set of
    /// cells the problem reported as expanded.
    fn expanded_cells(
        text: &str,
        heuristic: Box<dyn Heuristic<SingleTargetProblem>>,
    ) -> (u32, HashSet<Position>) {
        let cells = Rc::new(RefCell::new(HashSet::new()));
        let sink = cells.clone();
        let mut problem = SingleTargetProblem::new(&initial_state(text))
            .with_observer(move |position| {
                sink.borrow_mut().insert(position);
            });
        let plan = Astar::new(heuristic).search(&mut problem).0.into_plan();
        let cost = problem.cost_of_actions(&plan);
        drop(problem);
        let cells = cells.borrow().clone();
        (cost, cells)
    }

    #[test]
    fn zero_heuristic_expands_a_superset_of_manhattan() {
        for text in [
            WALLED_SURVIVOR_TEXT,
            FIRE_CORRIDOR_TEXT,
            OPEN_GRID_TEXT,
            TINY_HOUSE_TEXT,
        ] {
            let (zero_cost, zero_cells) = expanded_cells(text, Box::new(ZeroHeuristic::new()));
            let (manhattan_cost, manhattan_cells) =
                expanded_cells(text, Box::new(ManhattanHeuristic::new()));
            assert_eq!(zero_cost, manhattan_cost);
            assert!(zero_cells.is_superset(&manhattan_cells));
        }
    }

    #[test]
    fn survivor_heuristic_saves_expansions() {
        let state = initial_state(SCATTERED_SURVIVORS_TEXT);

        let mut blind = MultiTargetProblem::new(&state);
        let (blind_result, blind_statistics) =
            Astar::new(Box::new(ZeroHeuristic::new())).search(&mut blind);

        let mut informed = MultiTargetProblem::new(&state);
        let (informed_result, informed_statistics) =
            Astar::new(Box::new(SurvivorHeuristic::new())).search(&mut informed);

        let blind_cost = blind.cost_of_actions(&blind_result.into_plan());
        let informed_cost = informed.cost_of_actions(&informed_result.into_plan());
        assert_eq!(blind_cost, 20);
        assert_eq!(informed_cost, 20);
        assert!(informed_statistics.expanded_nodes() < blind_statistics.expanded_nodes());
    }
}

use crate::search::{GridProblem, Heuristic, HeuristicValue};
use crate::world::Located;

/// Distance to the nearest remaining survivor plus the cost of a minimum
/// spanning tree over all remaining survivors, both in Manhattan distance.
///
/// The rescuer has to reach some survivor first, and any walk through the
/// rest costs at least a spanning tree over them. The estimate is admissible
/// and consistent.
#[derive(Clone, Debug, Default)]
pub struct SurvivorHeuristic {}

impl SurvivorHeuristic {
    pub fn new() -> Self {
        SurvivorHeuristic {}
    }
}

impl<P: GridProblem> Heuristic<P> for SurvivorHeuristic {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        let targets = problem.remaining_targets(state);
        let cache = problem.heuristic_cache();
        let Some(nearest) = cache.nearest_distance(state.position(), &targets) else {
            return (0.).into();
        };
        f64::from(nearest + cache.spanning_tree_cost(&targets)).into()
    }
}

/// Number of survivors still waiting. Every rescue takes at least one move
/// of cost 1 or more.
#[derive(Clone, Debug, Default)]
pub struct TargetCounting {}

impl TargetCounting {
    pub fn new() -> Self {
        TargetCounting {}
    }
}

impl<P: GridProblem> Heuristic<P> for TargetCounting {
    fn evaluate(&mut self, state: &P::State, problem: &mut P) -> HeuristicValue {
        (problem.remaining_targets(state).len() as f64).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{MultiTargetProblem, MultiTargetState, SearchProblem, TargetSet};
    use crate::test_utils::*;
    use crate::world::Position;
    use itertools::Itertools;
    use std::collections::{HashMap, HashSet, VecDeque};

    #[test]
    fn nearest_plus_spanning_tree() {
        let mut problem = MultiTargetProblem::new(&initial_state(TWO_SURVIVORS_TEXT));
        let start = problem.start_state();
        let mut heuristic = SurvivorHeuristic::new();
        assert_eq!(heuristic.evaluate(&start, &mut problem).into_inner(), 12.);

        let one_left = MultiTargetState::new(Position::new(0, 0), start.targets().clone());
        assert_eq!(heuristic.evaluate(&one_left, &mut problem).into_inner(), 8.);

        let done = MultiTargetState::new(Position::new(1, 1), TargetSet::empty());
        assert_eq!(heuristic.evaluate(&done, &mut problem).into_inner(), 0.);
    }

    #[test]
    fn caches_live_in_the_problem() {
        let mut problem = MultiTargetProblem::new(&initial_state(SCATTERED_SURVIVORS_TEXT));
        let start = problem.start_state();
        let mut heuristic = SurvivorHeuristic::new();
        let first = heuristic.evaluate(&start, &mut problem);
        let trees = problem.heuristic_cache().cached_spanning_trees();
        let hits = problem.heuristic_cache().hits();

        assert_eq!(SurvivorHeuristic::new().evaluate(&start, &mut problem), first);
        assert_eq!(problem.heuristic_cache().cached_spanning_trees(), trees);
        assert!(problem.heuristic_cache().hits() > hits);

        let mut fresh = MultiTargetProblem::new(&initial_state(SCATTERED_SURVIVORS_TEXT));
        assert_eq!(fresh.heuristic_cache().cached_spanning_trees(), 0);
    }

    #[test]
    fn target_counting() {
        let mut problem = MultiTargetProblem::new(&initial_state(SMALL_RESCUE_TEXT));
        let start = problem.start_state();
        assert_eq!(
            TargetCounting::new()
                .evaluate(&start, &mut problem)
                .into_inner(),
            3.
        );
    }

    /// Exact remaining cost of every reachable state: the cheapest order of
    /// visiting the remaining targets, using true shortest path costs.
    fn assert_admissible(text: &str, heuristic: &mut dyn Heuristic<MultiTargetProblem>) {
        let state = initial_state(text);
        let layout = state.layout().clone();
        let mut problem = MultiTargetProblem::new(&state);

        let mut distances: HashMap<Position, HashMap<Position, u32>> = HashMap::new();
        let mut seen = HashSet::from([problem.start_state()]);
        let mut queue = VecDeque::from([problem.start_state()]);
        while let Some(state) = queue.pop_front() {
            let mut cells = vec![state.position()];
            cells.extend(state.targets().iter());
            for cell in cells {
                distances
                    .entry(cell)
                    .or_insert_with(|| shortest_distances(&layout, cell));
            }

            let exact = state
                .targets()
                .iter()
                .permutations(state.targets().len())
                .map(|order| {
                    let mut at = state.position();
                    let mut total = 0;
                    for target in order {
                        total += distances[&at][&target];
                        at = target;
                    }
                    total
                })
                .min()
                .unwrap_or(0);
            let estimate = heuristic.evaluate(&state, &mut problem).into_inner();
            assert!(
                estimate <= f64::from(exact),
                "h = {} exceeds {} at {:?}",
                estimate,
                exact,
                state
            );

            for successor in problem.successors(&state) {
                if seen.insert(successor.state.clone()) {
                    queue.push_back(successor.state);
                }
            }
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn survivor_heuristic_is_admissible() {
        for text in [
            TWO_SURVIVORS_TEXT,
            SMALL_RESCUE_TEXT,
            SCATTERED_SURVIVORS_TEXT,
        ] {
            assert_admissible(text, &mut SurvivorHeuristic::new());
        }
    }

    #[test]
    fn target_counting_is_admissible() {
        assert_admissible(SCATTERED_SURVIVORS_TEXT, &mut TargetCounting::new());
    }
}

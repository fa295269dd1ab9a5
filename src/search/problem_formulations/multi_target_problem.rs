use crate::search::problem_formulations::VisitObserver;
use crate::search::{
    Cost, Direction, GridProblem, HeuristicCache, SearchProblem, Successor, TargetSet,
    INFEASIBLE_COST,
};
use crate::world::{Located, Position, RescueLayout, RescueState};
use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::rc::Rc;

/// Rescuer position together with the survivors not yet rescued.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiTargetState {
    position: Position,
    targets: TargetSet,
}

impl MultiTargetState {
    /// Entering a cell rescues whoever is there, so a target at `position`
    /// is dropped.
    pub fn new(position: Position, targets: TargetSet) -> Self {
        Self {
            position,
            targets: targets.without(position),
        }
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }
}

impl Located for MultiTargetState {
    fn position(&self) -> Position {
        self.position
    }
}

/// Rescue every survivor. Step costs are the terrain costs the mission
/// will charge.
pub struct MultiTargetProblem {
    layout: Rc<RescueLayout>,
    start: MultiTargetState,
    visited: HashSet<Position>,
    visited_list: Vec<Position>,
    expanded: usize,
    observer: Option<VisitObserver>,
    heuristic_cache: HeuristicCache,
}

impl MultiTargetProblem {
    pub fn new(state: &RescueState) -> Self {
        Self {
            layout: state.layout().clone(),
            start: MultiTargetState::new(
                state.rescuer_position(),
                state.survivors_as_list().into_iter().collect(),
            ),
            visited: HashSet::new(),
            visited_list: vec![],
            expanded: 0,
            observer: None,
            heuristic_cache: HeuristicCache::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl FnMut(Position) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }
}

impl Debug for MultiTargetProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiTargetProblem")
            .field("start", &self.start)
            .field("expanded", &self.expanded)
            .finish_non_exhaustive()
    }
}

impl SearchProblem for MultiTargetProblem {
    type State = MultiTargetState;

    fn start_state(&self) -> MultiTargetState {
        self.start.clone()
    }

    fn is_goal_state(&mut self, state: &MultiTargetState) -> bool {
        state.targets.is_empty()
    }

    fn successors(&mut self, state: &MultiTargetState) -> Vec<Successor<MultiTargetState>> {
        self.expanded += 1;
        if self.visited.insert(state.position) {
            self.visited_list.push(state.position);
            if let Some(observer) = self.observer.as_mut() {
                observer(state.position);
            }
        }

        Direction::ALL
            .into_iter()
            .map(|action| (action, state.position.step(action)))
            .filter(|&(_, next)| !self.layout.is_wall(next))
            .map(|(action, next)| Successor {
                state: MultiTargetState::new(next, state.targets.clone()),
                action,
                cost: self.layout.terrain_cost(next),
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        let mut position = self.start.position;
        let mut cost = 0;
        for &action in actions {
            position = position.step(action);
            if self.layout.is_wall(position) {
                return INFEASIBLE_COST;
            }
            cost += self.layout.terrain_cost(position);
        }
        cost
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}

impl GridProblem for MultiTargetProblem {
    fn remaining_targets(&self, state: &MultiTargetState) -> TargetSet {
        state.targets.clone()
    }

    fn goal(&self) -> Option<Position> {
        None
    }

    fn heuristic_cache(&mut self) -> &mut HeuristicCache {
        &mut self.heuristic_cache
    }

    fn visited_cells(&self) -> &[Position] {
        &self.visited_list
    }
}

use crate::search::{
    Cost, Direction, GridProblem, HeuristicCache, SearchProblem, Successor, TargetSet,
    INFEASIBLE_COST,
};
use crate::world::{Position, RescueLayout, RescueState};
use std::collections::HashSet;
use std::fmt::{self, Debug};
use std::rc::Rc;
use tracing::warn;

/// Cost of entering a cell.
pub type CostFn = Box<dyn Fn(Position) -> Cost>;

/// Called with each cell the first time it is expanded, and with the goal
/// cell once it is reached.
pub type VisitObserver = Box<dyn FnMut(Position)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleTargetOptions {
    /// Goal used when the map does not hold exactly one survivor.
    pub fallback_goal: Position,
    /// Overrides the rescuer position as start state.
    pub start: Option<Position>,
    /// Log a warning when the fallback goal is used.
    pub warn: bool,
    /// Keep the list of visited cells and notify the observer.
    pub visualize: bool,
}

impl Default for SingleTargetOptions {
    fn default() -> Self {
        Self {
            fallback_goal: Position::new(1, 1),
            start: None,
            warn: true,
            visualize: true,
        }
    }
}

/// Reach one survivor. The state is the rescuer position and the goal is
/// the survivor's cell. Step costs are terrain costs unless a custom cost
/// function is given.
pub struct SingleTargetProblem {
    layout: Rc<RescueLayout>,
    start: Position,
    goal: Position,
    targets: TargetSet,
    cost_fn: Option<CostFn>,
    visualize: bool,
    visited: HashSet<Position>,
    visited_list: Vec<Position>,
    expanded: usize,
    observer: Option<VisitObserver>,
    heuristic_cache: HeuristicCache,
}

impl SingleTargetProblem {
    pub fn new(state: &RescueState) -> Self {
        Self::with_options(state, SingleTargetOptions::default())
    }

    pub fn with_options(state: &RescueState, options: SingleTargetOptions) -> Self {
        let survivors = state.survivors_as_list();
        let goal = match survivors.as_slice() {
            [survivor] => *survivor,
            _ => {
                if options.warn {
                    if survivors.is_empty() {
                        warn!(goal = %options.fallback_goal, "no survivors found on the map");
                    } else {
                        warn!(
                            survivors = survivors.len(),
                            goal = %options.fallback_goal,
                            "several survivors found, consider the multi-survivor problem"
                        );
                    }
                }
                options.fallback_goal
            }
        };

        Self {
            layout: state.layout().clone(),
            start: options.start.unwrap_or_else(|| state.rescuer_position()),
            goal,
            targets: TargetSet::new([goal]),
            cost_fn: None,
            visualize: options.visualize,
            visited: HashSet::new(),
            visited_list: vec![],
            expanded: 0,
            observer: None,
            heuristic_cache: HeuristicCache::new(),
        }
    }

    pub fn with_cost_fn(mut self, cost_fn: impl Fn(Position) -> Cost + 'static) -> Self {
        self.cost_fn = Some(Box::new(cost_fn));
        self
    }

    pub fn with_observer(mut self, observer: impl FnMut(Position) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    fn step_cost(&self, position: Position) -> Cost {
        match &self.cost_fn {
            Some(cost_fn) => cost_fn(position),
            None => self.layout.terrain_cost(position),
        }
    }

    fn record_visit(&mut self, position: Position) {
        if !self.visualize {
            return;
        }
        self.visited_list.push(position);
        if let Some(observer) = self.observer.as_mut() {
            observer(position);
        }
    }
}

impl Debug for SingleTargetProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleTargetProblem")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("custom_cost", &self.cost_fn.is_some())
            .field("expanded", &self.expanded)
            .finish_non_exhaustive()
    }
}

impl SearchProblem for SingleTargetProblem {
    type State = Position;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal_state(&mut self, state: &Position) -> bool {
        let is_goal = *state == self.goal;
        if is_goal {
            self.record_visit(*state);
        }
        is_goal
    }

    fn successors(&mut self, state: &Position) -> Vec<Successor<Position>> {
        let successors: Vec<_> = Direction::ALL
            .into_iter()
            .map(|action| (action, state.step(action)))
            .filter(|&(_, next)| !self.layout.is_wall(next))
            .map(|(action, next)| Successor {
                state: next,
                action,
                cost: self.step_cost(next),
            })
            .collect();

        self.expanded += 1;
        if self.visited.insert(*state) {
            self.record_visit(*state);
        }
        successors
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Cost {
        let mut position = self.start;
        let mut cost = 0;
        for &action in actions {
            position = position.step(action);
            if self.layout.is_wall(position) {
                return INFEASIBLE_COST;
            }
            cost += self.step_cost(position);
        }
        cost
    }

    fn expanded(&self) -> usize {
        self.expanded
    }
}

impl GridProblem for SingleTargetProblem {
    fn remaining_targets(&self, state: &Position) -> TargetSet {
        if *state == self.goal {
            TargetSet::empty()
        } else {
            self.targets.clone()
        }
    }

    fn goal(&self) -> Option<Position> {
        Some(self.goal)
    }

    fn heuristic_cache(&mut self) -> &mut HeuristicCache {
        &mut self.heuristic_cache
    }

    fn visited_cells(&self) -> &[Position] {
        &self.visited_list
    }
}

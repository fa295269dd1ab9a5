//! Agents decide which action the rescuer takes on each turn of a mission.

use crate::search::{
    Direction, GridProblem, HeuristicName, MultiTargetProblem, Plan, ProblemName,
    SearchEngineName, SingleTargetProblem,
};
use crate::world::{Position, RescueState};
use std::collections::VecDeque;
use std::fmt::Debug;
use std::time::Duration;
use tracing::{info, warn};

pub trait Agent: Debug {
    /// Called once with the initial state, before the first action is
    /// requested.
    fn register_initial_state(&mut self, _state: &RescueState) {}

    /// The next action, or `None` to stop.
    fn get_action(&mut self, state: &RescueState) -> Option<Direction>;

    /// Cells expanded while planning, in expansion order.
    fn expanded_cells(&self) -> &[Position] {
        &[]
    }
}

/// Plans the whole mission up front with a search engine and then plays
/// the plan back one action per turn.
#[derive(Debug)]
pub struct SearchAgent {
    problem_name: ProblemName,
    search_engine_name: SearchEngineName,
    heuristic_name: HeuristicName,
    time_limit: Option<Duration>,
    actions: VecDeque<Direction>,
    expanded_cells: Vec<Position>,
}

impl SearchAgent {
    pub fn new(
        problem_name: ProblemName,
        search_engine_name: SearchEngineName,
        heuristic_name: HeuristicName,
    ) -> Self {
        Self {
            problem_name,
            search_engine_name,
            heuristic_name,
            time_limit: None,
            actions: VecDeque::new(),
            expanded_cells: vec![],
        }
    }

    /// Discard the plan if searching takes longer than `time_limit`.
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    fn plan<P: GridProblem + 'static>(&mut self, mut problem: P) -> Plan {
        let mut engine = self
            .search_engine_name
            .create::<P>(self.heuristic_name.create());
        let (result, statistics) = engine.search(&mut problem);
        self.expanded_cells = problem.visited_cells().to_vec();

        let plan = result.into_plan();
        info!(
            engine = %self.search_engine_name,
            heuristic = %self.heuristic_name,
            cost = problem.cost_of_actions(&plan),
            expanded = problem.expanded(),
            "path found"
        );
        if let Some(limit) = self.time_limit {
            if statistics.search_duration() > limit {
                warn!(
                    limit = %humantime::format_duration(limit),
                    "planning exceeded the time limit, discarding the plan"
                );
                return Plan::empty();
            }
        }
        plan
    }
}

impl Agent for SearchAgent {
    fn register_initial_state(&mut self, state: &RescueState) {
        let plan = match self.problem_name {
            ProblemName::SimpleSurvivor => self.plan(SingleTargetProblem::new(state)),
            ProblemName::MultiSurvivor => self.plan(MultiTargetProblem::new(state)),
        };
        self.actions = plan.into_iter().collect();
    }

    fn get_action(&mut self, _state: &RescueState) -> Option<Direction> {
        self.actions.pop_front()
    }

    fn expanded_cells(&self) -> &[Position] {
        &self.expanded_cells
    }
}

/// Plays a fixed list of actions.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    actions: VecDeque<Direction>,
}

impl ScriptedAgent {
    pub fn new(actions: Vec<Direction>) -> Self {
        Self {
            actions: actions.into(),
        }
    }
}

impl Agent for ScriptedAgent {
    fn get_action(&mut self, _state: &RescueState) -> Option<Direction> {
        self.actions.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::world::{NullDisplay, RescueMission};
    use Direction::*;

    #[test]
    fn search_agent_rescues_the_tiny_house_survivor() {
        let mut mission = RescueMission::new(layout(TINY_HOUSE_TEXT));
        let mut agent = SearchAgent::new(
            ProblemName::SimpleSurvivor,
            SearchEngineName::Astar,
            HeuristicName::Manhattan,
        );
        let outcome = mission.run(&mut agent, &mut NullDisplay);
        assert!(outcome.won);
        assert_eq!(outcome.cumulative_cost, 8);
        assert!(!agent.expanded_cells().is_empty());
    }

    #[test]
    fn search_agent_rescues_every_survivor() {
        let mut mission = RescueMission::new(layout(TWO_SURVIVORS_TEXT));
        let mut agent = SearchAgent::new(
            ProblemName::MultiSurvivor,
            SearchEngineName::Astar,
            HeuristicName::Survivor,
        );
        let outcome = mission.run(&mut agent, &mut NullDisplay);
        assert!(outcome.won);
        assert_eq!(outcome.rescued, 2);
        assert_eq!(outcome.cumulative_cost, 12);
    }

    #[test]
    fn unreachable_survivor_stops_the_agent() {
        let mut agent = SearchAgent::new(
            ProblemName::SimpleSurvivor,
            SearchEngineName::Bfs,
            HeuristicName::Zero,
        );
        let state = initial_state(SEALED_ROOM_TEXT);
        agent.register_initial_state(&state);
        assert_eq!(agent.get_action(&state), None);
    }

    #[test]
    fn zero_time_limit_discards_the_plan() {
        let mut agent = SearchAgent::new(
            ProblemName::MultiSurvivor,
            SearchEngineName::Ucs,
            HeuristicName::Zero,
        )
        .with_time_limit(Some(Duration::ZERO));
        let state = initial_state(SCATTERED_SURVIVORS_TEXT);
        agent.register_initial_state(&state);
        assert_eq!(agent.get_action(&state), None);
    }

    #[test]
    fn scripted_agent_plays_its_actions_in_order() {
        let state = initial_state(TINY_HOUSE_TEXT);
        let mut agent = ScriptedAgent::new(vec![South, West]);
        agent.register_initial_state(&state);
        assert_eq!(agent.get_action(&state), Some(South));
        assert_eq!(agent.get_action(&state), Some(West));
        assert_eq!(agent.get_action(&state), None);
        assert!(agent.expanded_cells().is_empty());
    }
}

use crate::agents::Agent;
use crate::error::MissionError;
use crate::search::{Cost, Direction};
use crate::world::{MissionDisplay, RescueLayout, RescueState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;
use tracing::{info, warn};

/// Drives one agent through a rescue mission, one action per turn.
#[derive(Debug)]
pub struct RescueMission {
    initial_state: RescueState,
    state: RescueState,
    history: Vec<Direction>,
    move_limit: Option<usize>,
}

/// How a mission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionOutcome {
    pub won: bool,
    pub cumulative_cost: Cost,
    pub rescued: usize,
    pub remaining: usize,
    pub moves: Vec<Direction>,
    /// Set when the agent attempted an illegal action.
    pub failure: Option<MissionError>,
}

/// A replayable record of a mission, written as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub layout: Vec<String>,
    pub actions: Vec<Direction>,
    pub cumulative_cost: Cost,
    pub won: bool,
}

impl RescueMission {
    pub fn new(layout: Rc<RescueLayout>) -> Self {
        let state = RescueState::new(layout);
        Self {
            initial_state: state.clone(),
            state,
            history: vec![],
            move_limit: None,
        }
    }

    /// Stops the mission after `limit` moves even if the agent has more to
    /// say.
    pub fn with_move_limit(mut self, limit: usize) -> Self {
        self.move_limit = Some(limit);
        self
    }

    pub fn state(&self) -> &RescueState {
        &self.state
    }

    /// Fraction of the initial survivors that have been rescued.
    pub fn progress(&self) -> f64 {
        let total = self.initial_state.num_survivors();
        if total == 0 {
            return 1.0;
        }
        self.state.rescued_count() as f64 / total as f64
    }

    /// Every survivor is rescued. A map without survivors is won from the
    /// start.
    pub fn is_won(&self) -> bool {
        self.state.is_win() || self.state.num_survivors() == 0
    }

    pub fn run(
        &mut self,
        agent: &mut dyn Agent,
        display: &mut dyn MissionDisplay,
    ) -> MissionOutcome {
        info!(
            survivors = self.state.num_survivors(),
            rescuer = %self.state.rescuer_position(),
            "starting mission"
        );
        display.initialize(&self.state);
        agent.register_initial_state(&self.state);
        display.draw_expanded_cells(agent.expanded_cells());

        let mut failure = None;
        while !self.state.is_over() {
            if self
                .move_limit
                .is_some_and(|limit| self.history.len() >= limit)
            {
                warn!(moves = self.history.len(), "move limit reached");
                break;
            }
            let Some(action) = agent.get_action(&self.state) else {
                break;
            };
            self.history.push(action);
            match self.state.generate_successor(action) {
                Ok(next) => self.state = next,
                Err(error) => {
                    warn!(%error, "agent attempted an illegal action");
                    failure = Some(error);
                    break;
                }
            }
            display.update(&self.state);
        }

        let won = self.is_won();
        if won {
            info!(
                cost = self.state.cumulative_cost(),
                "all survivors rescued"
            );
        } else {
            self.state.mark_lost();
            info!(
                cost = self.state.cumulative_cost(),
                remaining = self.state.num_survivors(),
                progress = self.progress(),
                "mission failed"
            );
        }
        display.finish(&self.state);

        MissionOutcome {
            won,
            cumulative_cost: self.state.cumulative_cost(),
            rescued: self.state.rescued_count(),
            remaining: self.state.num_survivors(),
            moves: self.history.clone(),
            failure,
        }
    }

    pub fn record(&self) -> MissionRecord {
        MissionRecord {
            layout: self.state.layout().text().to_vec(),
            actions: self.history.clone(),
            cumulative_cost: self.state.cumulative_cost(),
            won: self.is_won(),
        }
    }
}

impl MissionRecord {
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    pub fn read_json(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

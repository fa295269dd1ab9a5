use crate::error::MissionError;
use crate::search::{Cost, Direction};
use crate::world::{Grid, Position, RescueLayout};
use std::fmt::{self, Display};
use std::rc::Rc;

/// The state of a mission in progress: where the rescuer is, who is still
/// waiting to be rescued and what the mission has cost so far.
///
/// States are values: [`RescueState::generate_successor`] returns a new state
/// and leaves the original untouched.
#[derive(Debug, Clone)]
pub struct RescueState {
    layout: Rc<RescueLayout>,
    rescuer: Position,
    survivors: Grid<bool>,
    cumulative_cost: Cost,
    rescued: usize,
    won: bool,
    lost: bool,
}

impl RescueState {
    pub fn new(layout: Rc<RescueLayout>) -> Self {
        let rescuer = layout.rescuer_start();
        let survivors = layout.survivors().clone();
        Self {
            layout,
            rescuer,
            survivors,
            cumulative_cost: 0,
            rescued: 0,
            won: false,
            lost: false,
        }
    }

    pub fn layout(&self) -> &Rc<RescueLayout> {
        &self.layout
    }

    /// Moves that do not walk into a wall. Empty once the mission is over.
    pub fn legal_actions(&self) -> Vec<Direction> {
        if self.is_over() {
            return vec![];
        }
        Direction::ALL
            .into_iter()
            .filter(|&direction| !self.layout.is_wall(self.rescuer.step(direction)))
            .collect()
    }

    /// Applies `action`: moves the rescuer, charges the terrain cost of the
    /// entered cell and rescues a survivor found there.
    pub fn generate_successor(&self, action: Direction) -> Result<Self, MissionError> {
        if self.is_over() {
            return Err(MissionError::MissionOver);
        }
        let next = self.rescuer.step(action);
        if self.layout.is_wall(next) {
            return Err(MissionError::IllegalAction {
                action,
                position: self.rescuer,
            });
        }

        let mut successor = self.clone();
        successor.rescuer = next;
        successor.cumulative_cost += self.layout.terrain_cost(next);
        if successor.survivors.is_set(next) {
            successor.survivors[next] = false;
            successor.rescued += 1;
            if successor.survivors.count() == 0 {
                successor.won = true;
            }
        }
        Ok(successor)
    }

    pub fn rescuer_position(&self) -> Position {
        self.rescuer
    }

    pub fn survivors(&self) -> &Grid<bool> {
        &self.survivors
    }

    pub fn survivors_as_list(&self) -> Vec<Position> {
        self.survivors.as_list()
    }

    pub fn num_survivors(&self) -> usize {
        self.survivors.count()
    }

    pub fn has_survivor(&self, position: Position) -> bool {
        self.survivors.is_set(position)
    }

    pub fn has_wall(&self, position: Position) -> bool {
        self.layout.is_wall(position)
    }

    pub fn terrain_cost(&self, position: Position) -> Cost {
        self.layout.terrain_cost(position)
    }

    pub fn cumulative_cost(&self) -> Cost {
        self.cumulative_cost
    }

    pub fn rescued_count(&self) -> usize {
        self.rescued
    }

    pub fn is_win(&self) -> bool {
        self.won
    }

    pub fn is_lose(&self) -> bool {
        self.lost
    }

    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }

    pub(crate) fn mark_lost(&mut self) {
        self.lost = true;
    }
}

impl Display for RescueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.layout.height() as i32).rev() {
            let row: String = (0..self.layout.width() as i32)
                .map(|x| {
                    let position = Position::new(x, y);
                    if position == self.rescuer {
                        'R'
                    } else if self.layout.walls().is_set(position) {
                        '%'
                    } else if self.survivors.is_set(position) {
                        'S'
                    } else {
                        self.layout.terrain(position).symbol()
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        write!(
            f,
            "cost: {}  rescued: {}  remaining: {}",
            self.cumulative_cost,
            self.rescued,
            self.num_survivors()
        )
    }
}

//! The rescue world the planner works in: the map, the live mission state,
//! the turn loop that executes plans, and text rendering.

mod display;
mod grid;
mod layout;
mod mission;
mod position;
mod rescue_state;
mod terrain;

pub use display::{MissionDisplay, NullDisplay, TextDisplay};
pub use grid::Grid;
pub use layout::RescueLayout;
pub use mission::{MissionOutcome, MissionRecord, RescueMission};
pub use position::{Located, Position};
pub use rescue_state::RescueState;
pub use terrain::Terrain;

use crate::world::{Position, RescueState};
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Receives the mission as it unfolds. Every hook is optional.
pub trait MissionDisplay {
    fn initialize(&mut self, _state: &RescueState) {}

    fn update(&mut self, _state: &RescueState) {}

    /// Cells the planner expanded before the first move.
    fn draw_expanded_cells(&mut self, _cells: &[Position]) {}

    fn finish(&mut self, _state: &RescueState) {}
}

/// Shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl MissionDisplay for NullDisplay {}

/// Prints the map after every move.
#[derive(Debug)]
pub struct TextDisplay<W: Write = Stdout> {
    out: W,
    frame_time: Duration,
    turn: usize,
}

impl TextDisplay<Stdout> {
    pub fn new(frame_time: Duration) -> Self {
        Self::with_writer(io::stdout(), frame_time)
    }
}

impl<W: Write> TextDisplay<W> {
    pub fn with_writer(out: W, frame_time: Duration) -> Self {
        Self {
            out,
            frame_time,
            turn: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, header: &str, state: &RescueState) {
        if let Err(error) = writeln!(self.out, "{}\n{}\n", header, state) {
            warn!(%error, "failed to draw mission state");
        }
    }
}

impl<W: Write> MissionDisplay for TextDisplay<W> {
    fn initialize(&mut self, state: &RescueState) {
        self.turn = 0;
        self.draw("start", state);
    }

    fn update(&mut self, state: &RescueState) {
        self.turn += 1;
        let header = format!("turn {}", self.turn);
        self.draw(&header, state);
        if !self.frame_time.is_zero() {
            thread::sleep(self.frame_time);
        }
    }

    fn draw_expanded_cells(&mut self, cells: &[Position]) {
        if let Err(error) = writeln!(self.out, "expanded {} cells", cells.len()) {
            warn!(%error, "failed to draw expanded cells");
        }
    }

    fn finish(&mut self, state: &RescueState) {
        let outcome = if state.is_win() {
            "all survivors rescued"
        } else {
            "mission over"
        };
        if let Err(error) = writeln!(
            self.out,
            "{}, cost {}",
            outcome,
            state.cumulative_cost()
        ) {
            warn!(%error, "failed to draw mission result");
        }
    }
}

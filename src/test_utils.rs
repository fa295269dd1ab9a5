use crate::search::{Cost, Direction};
use crate::world::{Position, RescueLayout, RescueState};
use std::collections::HashMap;
use std::rc::Rc;

pub const TINY_HOUSE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/tinyHouse.lay"));

/// 5x5, no walls, rescuer at (0, 0), survivor at (4, 4).
pub const OPEN_GRID_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/openGrid.lay"));

/// 5x5, no walls, rescuer at (2, 2), survivors at (0, 0) and (4, 4).
pub const TWO_SURVIVORS_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/twoSurvivors.lay"));

/// Survivor at (3, 3) walled in on the north, south and west sides.
pub const WALLED_SURVIVOR_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/walledSurvivor.lay"
));

/// The direct route to the survivor crosses three fire cells.
pub const FIRE_CORRIDOR_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/fireCorridor.lay"));

/// Three survivors and mixed terrain.
pub const SMALL_RESCUE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/layouts/smallRescue.lay"));

/// 8x8, five survivors spread over mixed terrain.
pub const SCATTERED_SURVIVORS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/layouts/scatteredSurvivors.lay"
));

/// The survivor sits in a closed room.
pub const SEALED_ROOM_TEXT: &str = "\
%%%%%%%
%R.%S.%
%..%..%
%%%%%%%
";

pub fn layout(text: &str) -> Rc<RescueLayout> {
    Rc::new(RescueLayout::from_text(text).expect("test layout should parse"))
}

pub fn initial_state(text: &str) -> RescueState {
    RescueState::new(layout(text))
}

/// Cheapest cost of reaching every cell from `source`, computed by
/// relaxing all moves until nothing changes. Slow, but independent of the
/// search engines it is used to check.
pub fn shortest_distances(layout: &RescueLayout, source: Position) -> HashMap<Position, Cost> {
    let mut distances = HashMap::from([(source, 0)]);
    loop {
        let mut changed = false;
        for position in layout.walls().positions() {
            if layout.is_wall(position) {
                continue;
            }
            for direction in Direction::ALL {
                let Some(&from) = distances.get(&position.step(direction)) else {
                    continue;
                };
                let candidate = from + layout.terrain_cost(position);
                if distances.get(&position).map_or(true, |&d| candidate < d) {
                    distances.insert(position, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            return distances;
        }
    }
}

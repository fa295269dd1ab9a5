use crate::error::LayoutError;
use crate::parsers::{parse_layout, LayoutCell};
use crate::search::Cost;
use crate::world::{Grid, Position, Terrain};
use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Static information about a rescue area: walls, terrain, where the
/// survivors start and where the rescuer starts.
#[derive(Debug, Clone)]
pub struct RescueLayout {
    walls: Grid<bool>,
    survivors: Grid<bool>,
    terrain: Grid<Terrain>,
    rescuer_positions: Vec<Position>,
    text: Vec<String>,
}

impl RescueLayout {
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    /// Searches `root` recursively for a layout file called `name` (the
    /// `.lay` extension may be omitted) and loads the first match.
    pub fn find(root: &Path, name: &str) -> Result<Self, LayoutError> {
        let file_name = if name.ends_with(".lay") {
            name.to_owned()
        } else {
            format!("{}.lay", name)
        };
        match find_file(root, &file_name) {
            Some(path) => {
                debug!(layout = %path.display(), "found layout");
                Self::from_path(&path)
            }
            None => Err(LayoutError::NotFound {
                name: name.to_owned(),
                root: root.to_path_buf(),
            }),
        }
    }

    pub fn from_text(text: &str) -> Result<Self, LayoutError> {
        // The row parser accepts every character, so parsing cannot fail
        let rows = parse_layout(text).map(|(_, rows)| rows).unwrap_or_default();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        let mut walls = Grid::new(width, height, false);
        let mut survivors = Grid::new(width, height, false);
        let mut terrain = Grid::new(width, height, Terrain::Floor);
        let mut rescuer_positions = vec![];

        // Text rows run north to south while y grows northwards
        for (row_index, row) in rows.iter().enumerate() {
            let y = (height - 1 - row_index) as i32;
            for (x, cell) in row.iter().enumerate() {
                let position = Position::new(x as i32, y);
                match cell {
                    LayoutCell::Wall => walls[position] = true,
                    LayoutCell::Survivor => survivors[position] = true,
                    LayoutCell::Rescuer => rescuer_positions.push(position),
                    LayoutCell::Ground(ground) => terrain[position] = *ground,
                }
            }
        }
        if rescuer_positions.is_empty() {
            return Err(LayoutError::NoRescuer);
        }
        rescuer_positions.sort();

        let text = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.trim_end().to_owned())
            .collect();

        Ok(Self {
            walls,
            survivors,
            terrain,
            rescuer_positions,
            text,
        })
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    /// Cells outside the layout count as walls.
    pub fn is_wall(&self, position: Position) -> bool {
        !self.walls.contains(position) || self.walls.is_set(position)
    }

    pub fn survivors(&self) -> &Grid<bool> {
        &self.survivors
    }

    pub fn total_survivors(&self) -> usize {
        self.survivors.count()
    }

    pub fn terrain(&self, position: Position) -> Terrain {
        self.terrain.get(position).copied().unwrap_or_default()
    }

    /// Cost of entering the cell at `position`.
    pub fn terrain_cost(&self, position: Position) -> Cost {
        self.terrain(position).cost()
    }

    /// The rescuer starts at the lowest start position if the layout lists
    /// several.
    pub fn rescuer_start(&self) -> Position {
        self.rescuer_positions[0]
    }

    pub fn rescuer_positions(&self) -> &[Position] {
        &self.rescuer_positions
    }

    pub fn text(&self) -> &[String] {
        &self.text
    }
}

impl Display for RescueLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text.join("\n"))
    }
}

fn find_file(root: &Path, file_name: &str) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = fs::read_dir(root)
        .ok()?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .collect();
    entries.sort();

    if let Some(found) = entries
        .iter()
        .find(|path| path.is_file() && path.file_name().is_some_and(|name| name == file_name))
    {
        return Some(found.clone());
    }
    entries
        .iter()
        .filter(|path| path.is_dir())
        .find_map(|dir| find_file(dir, file_name))
}

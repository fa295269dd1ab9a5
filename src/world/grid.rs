use crate::world::Position;
use std::ops::{Index, IndexMut};

/// A dense `width` x `height` array of cells addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, initial_value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![initial_value; width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.index_of(position).is_some()
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.index_of(position).map(|index| &self.cells[index])
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.index_of(position).map(|index| &mut self.cells[index])
    }

    /// All positions of the grid, column by column (increasing `x`, then
    /// increasing `y`).
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let height = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..height).map(move |y| Position::new(x, y)))
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }
}

impl Grid<bool> {
    /// Whether the cell is set. Cells outside the grid are never set.
    pub fn is_set(&self, position: Position) -> bool {
        self.get(position).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Positions of all set cells, in [`Grid::positions`] order.
    pub fn as_list(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.is_set(position))
            .collect()
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, position: Position) -> &Self::Output {
        self.get(position)
            .unwrap_or_else(|| panic!("position {} is outside the grid", position))
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        self.get_mut(position)
            .unwrap_or_else(|| panic!("position {} is outside the grid", position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_as_unset() {
        let mut grid = Grid::new(3, 2, false);
        grid[Position::new(2, 1)] = true;
        assert!(grid.is_set(Position::new(2, 1)));
        assert!(!grid.is_set(Position::new(3, 1)));
        assert!(!grid.is_set(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, 2)));
    }

    #[test]
    fn as_list_is_column_major() {
        let mut grid = Grid::new(2, 2, false);
        grid[Position::new(1, 0)] = true;
        grid[Position::new(0, 1)] = true;
        assert_eq!(
            grid.as_list(),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
        assert_eq!(grid.count(), 2);
    }
}

use crate::Position;
use crate::direction::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Apple,
    /// Part of the snake. Holds the direction the head left this cell in,
    /// which is the way the tail has to go once it gets here.
    Trail(Direction),
}

/// Fixed-size grid, stored row-major.
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width * height >= 2, "board needs room for a snake and an apple");
        Board { width, height, cells: vec![Cell::Empty; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.0 < self.width && pos.1 < self.height
    }

    /// Unchecked by contract: panics if `pos` is off the board.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn try_get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) { Some(self.get(pos)) } else { None }
    }

    /// Unchecked by contract: panics if `pos` is off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// The neighbour of `pos` in `dir`, or `None` if that falls off the board.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.offset();
        let x = pos.0.checked_add_signed(dx)?;
        let y = pos.1.checked_add_signed(dy)?;

        if self.contains((x, y)) { Some((x, y)) } else { None }
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| ((i % width, i / width), *cell))
    }

    /// Number of cells covered by the snake.
    pub fn trail_len(&self) -> usize {
        self.cells.iter().filter(|cell| matches!(cell, Cell::Trail(_))).count()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "{:?} is off a {}x{} board", pos, self.width, self.height);
        pos.1 * self.width + pos.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction::*;

    #[test]
    fn starts_empty() {
        let board = Board::new(4, 3);
        assert_eq!(board.cells().count(), 12);
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
        assert_eq!(board.trail_len(), 0);
    }

    #[test]
    fn set_then_get() {
        let mut board = Board::new(5, 5);
        board.set((4, 2), Cell::Trail(Left));
        board.set((0, 4), Cell::Apple);

        assert_eq!(board.get((4, 2)), Cell::Trail(Left));
        assert_eq!(board.get((0, 4)), Cell::Apple);
        assert_eq!(board.get((2, 4)), Cell::Empty);
        assert_eq!(board.trail_len(), 1);
    }

    #[test]
    fn cells_are_row_major() {
        let mut board = Board::new(3, 2);
        board.set((1, 1), Cell::Apple);

        let positions: Vec<Position> = board.cells().map(|(pos, _)| pos).collect();
        assert_eq!(positions[..4], [(0, 0), (1, 0), (2, 0), (0, 1)]);
        assert_eq!(board.cells().nth(4), Some(((1, 1), Cell::Apple)));
    }

    #[test]
    fn try_get_rejects_outside() {
        let board = Board::new(3, 2);
        assert_eq!(board.try_get((2, 1)), Some(Cell::Empty));
        assert_eq!(board.try_get((3, 0)), None);
        assert_eq!(board.try_get((0, 2)), None);
    }

    #[test]
    fn step_stays_on_board() {
        let board = Board::new(10, 10);
        assert_eq!(board.step((3, 3), Right), Some((4, 3)));
        assert_eq!(board.step((3, 3), Up), Some((3, 2)));
        assert_eq!(board.step((0, 3), Left), None);
        assert_eq!(board.step((3, 0), Up), None);
        assert_eq!(board.step((9, 3), Right), None);
        assert_eq!(board.step((3, 9), Down), None);
    }

    #[test]
    #[should_panic]
    fn too_small() {
        Board::new(1, 1);
    }
}

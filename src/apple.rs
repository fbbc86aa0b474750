use crate::Position;
use crate::board::{Board, Cell};

use rand::Rng;

/// Drops an apple on a free cell and returns where it landed, or `None` if
/// the board has no free cell left.
///
/// Starts from a random cell and walks the board in reading order (forwards
/// or backwards, picked at random) until it finds an empty one, wrapping
/// around rows and from the last row back to the first. Each cell is visited
/// at most once.
pub fn place_apple<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Position> {
    let (width, height) = (board.width(), board.height());
    let mut pos = (rng.gen_range(0..width), rng.gen_range(0..height));
    let forward = rng.gen_bool(0.5);

    for _ in 0..width * height {
        if board.get(pos) == Cell::Empty {
            board.set(pos, Cell::Apple);
            return Some(pos);
        }
        pos = if forward { next_cell(pos, width, height) } else { prev_cell(pos, width, height) };
    }

    None
}

fn next_cell((x, y): Position, width: usize, height: usize) -> Position {
    if x + 1 < width {
        (x + 1, y)
    } else {
        (0, (y + 1) % height)
    }
}

fn prev_cell((x, y): Position, width: usize, height: usize) -> Position {
    if x > 0 {
        (x - 1, y)
    } else {
        (width - 1, (y + height - 1) % height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn lands_on_empty_cell() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let mut board = Board::new(6, 4);
            for x in 0..6 {
                board.set((x, 1), Cell::Trail(Right));
            }
            let before: Vec<_> = board.cells().collect();

            let pos = place_apple(&mut board, &mut rng).unwrap();

            assert_eq!(before.iter().find(|(p, _)| *p == pos).unwrap().1, Cell::Empty);
            assert_eq!(board.get(pos), Cell::Apple);
            assert_eq!(board.cells().filter(|(_, cell)| *cell == Cell::Apple).count(), 1);
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);

        for free in [(0, 0), (4, 2), (2, 1), (4, 0), (0, 2)] {
            let mut board = Board::new(5, 3);
            for (pos, _) in board.cells().collect::<Vec<_>>() {
                if pos != free {
                    board.set(pos, Cell::Trail(Down));
                }
            }

            assert_eq!(place_apple(&mut board, &mut rng), Some(free));
        }
    }

    #[test]
    fn full_board_has_no_room() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(2, 2);
        for pos in [(0, 0), (1, 0), (0, 1)] {
            board.set(pos, Cell::Trail(Up));
        }
        board.set((1, 1), Cell::Apple);

        assert_eq!(place_apple(&mut board, &mut rng), None);
        assert_eq!(board.trail_len(), 3);
    }

    #[test]
    fn raster_wraps_rows() {
        assert_eq!(next_cell((2, 0), 3, 2), (0, 1));
        assert_eq!(next_cell((2, 1), 3, 2), (0, 0));
        assert_eq!(prev_cell((0, 1), 3, 2), (2, 0));
        assert_eq!(prev_cell((0, 0), 3, 2), (2, 1));
        assert_eq!(next_cell((1, 1), 3, 2), (2, 1));
    }
}

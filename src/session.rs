use crate::Position;
use crate::apple::place_apple;
use crate::board::Board;
use crate::direction::Direction;
use crate::snake::{MoveResult, Snake};

use rand::Rng;

/// Number of body colours the renderer cycles through.
pub const TINTS: u8 = 6;

/// Everything that lives for exactly one game.
pub struct GameSession {
    pub board: Board,
    pub snake: Snake,
    pub apple: Position,
    tint: u8,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, start: Position, rng: &mut R) -> Self {
        let mut board = Board::new(width, height);
        let snake = Snake::spawn(&mut board, start, Direction::Right);
        let apple = place_apple(&mut board, rng)
            .expect("a fresh board always has room next to a one-cell snake");

        GameSession { board, snake, apple, tint: 0 }
    }

    /// Advances the game by one step and then re-applies the buffered key press.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MoveResult {
        self.next_tint();

        let res = self.snake.step(&mut self.board, rng);
        if let MoveResult::Moved { new_apple: Some(apple), .. } = res {
            self.apple = apple;
        }

        self.snake.replay_last_press();
        res
    }

    pub fn tint(&self) -> u8 {
        self.tint
    }

    pub fn next_tint(&mut self) -> u8 {
        self.tint = (self.tint + 1) % TINTS;
        self.tint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::direction::Direction::*;
    use crate::snake::Crash;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn setup_places_snake_and_apple() {
        let mut rng = StdRng::seed_from_u64(1);
        let session = GameSession::new(10, 10, (3, 3), &mut rng);

        assert_eq!(session.snake.head(), (3, 3));
        assert_eq!(session.board.get((3, 3)), Cell::Trail(Right));
        assert_ne!(session.apple, (3, 3));
        assert_eq!(session.board.get(session.apple), Cell::Apple);
        assert_eq!(session.board.trail_len(), 1);
    }

    #[test]
    fn tick_tracks_new_apple() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = GameSession::new(10, 10, (3, 3), &mut rng);

        // Move the apple right in front of the snake.
        session.board.set(session.apple, Cell::Empty);
        session.board.set((4, 3), Cell::Apple);
        session.apple = (4, 3);

        let res = session.tick(&mut rng);

        assert!(matches!(res, MoveResult::Moved { new_apple: Some(_), .. }));
        assert_ne!(session.apple, (4, 3));
        assert_eq!(session.board.get(session.apple), Cell::Apple);
        assert_eq!(session.snake.score(), 1);
        assert_eq!(session.board.trail_len(), 2);
    }

    #[test]
    fn tick_replays_buffered_press() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = GameSession::new(10, 10, (3, 3), &mut rng);

        session.snake.steer(Down);
        session.snake.steer(Left);
        session.tick(&mut rng);

        assert_eq!(session.snake.current_direction(), Down);
        assert_eq!(session.snake.pending_direction(), Left);
    }

    #[test]
    fn runs_into_right_wall() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = GameSession::new(6, 6, (3, 3), &mut rng);
        session.board.set(session.apple, Cell::Empty);
        session.board.set((0, 0), Cell::Apple);
        session.apple = (0, 0);

        assert!(matches!(session.tick(&mut rng), MoveResult::Moved { .. }));
        assert!(matches!(session.tick(&mut rng), MoveResult::Moved { .. }));
        assert_eq!(session.tick(&mut rng), MoveResult::Crashed(Crash::Wall));
    }

    #[test]
    fn tint_cycles() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = GameSession::new(10, 10, (3, 3), &mut rng);

        let tints: Vec<u8> = (0..7).map(|_| session.next_tint()).collect();
        assert_eq!(tints, [1, 2, 3, 4, 5, 0, 1]);
    }
}

use crate::Position;
use crate::apple::place_apple;
use crate::board::{Board, Cell};
use crate::direction::Direction;
use MoveResult::*;

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
    /// The snake ate the last apple that fit on the board.
    BoardFull,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Position, old_head: Position, vacated: Option<Position>, new_apple: Option<Position> },
    Crashed(Crash),
}

/// The snake itself is only its two ends; the cells in between live on the
/// board as a chain of trail markers running from tail to head.
pub struct Snake {
    head: Position,
    tail: Position,
    pending: Direction,
    current: Direction,
    last_press: Option<Direction>,
    score: u32,
}

impl Snake {
    pub fn spawn(board: &mut Board, start: Position, direction: Direction) -> Self {
        board.set(start, Cell::Trail(direction));
        Snake { head: start, tail: start, pending: direction, current: direction, last_press: None, score: 0 }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn tail(&self) -> Position {
        self.tail
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_direction(&self) -> Direction {
        self.current
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Queues a turn for the next step. Turning back onto the body is ignored,
    /// but the press is still remembered for `replay_last_press`.
    pub fn steer(&mut self, direction: Direction) {
        self.last_press = Some(direction);
        if direction != self.current.opposite() {
            self.pending = direction;
        }
    }

    /// Re-applies the most recent direction key, so a single press that came
    /// too early (e.g. a reversal mid-turn) still takes effect once it's legal.
    pub fn replay_last_press(&mut self) {
        if let Some(direction) = self.last_press {
            self.steer(direction);
        }
    }

    pub fn step<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> MoveResult {
        self.current = self.pending;
        let old_head = self.head;

        board.set(old_head, Cell::Trail(self.current));

        let new_head = match board.step(old_head, self.current) {
            Some(pos) => pos,
            None => return Crashed(Crash::Wall),
        };

        match board.get(new_head) {
            Cell::Apple => {
                self.score += 1;
                self.head = new_head;
                board.set(new_head, Cell::Trail(self.current));

                match place_apple(board, rng) {
                    Some(apple) => Moved { new_head, old_head, vacated: None, new_apple: Some(apple) },
                    None => Crashed(Crash::BoardFull),
                }
            },
            Cell::Trail(_) => Crashed(Crash::Body),
            Cell::Empty => {
                self.head = new_head;
                board.set(new_head, Cell::Trail(self.current));

                let old_tail = self.tail;
                self.tail = advance_tail(board, old_tail);
                Moved { new_head, old_head, vacated: Some(old_tail), new_apple: None }
            },
        }
    }
}

/// Clears the tail cell and follows the marker it held. Returns the new tail.
pub fn advance_tail(board: &mut Board, tail: Position) -> Position {
    let next = match board.try_get(tail) {
        Some(Cell::Trail(direction)) => board.step(tail, direction),
        _ => None,
    };
    debug_assert!(next.is_some(), "broken snake body at tail {:?}", tail);

    match next {
        Some(next) => {
            board.set(tail, Cell::Empty);
            next
        },
        None => tail,
    }
}

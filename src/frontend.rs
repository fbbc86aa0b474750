use crate::TermInt;
use crate::direction::Direction;

use std::time::Duration;

use anyhow::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Pause,
    Yes,
    No,
    Quit,
    Other,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Palette {
    Border,
    Apple,
    /// Snake segment, cycling through the body colours.
    Body(u8),
    Text,
}

/// What the game needs from a screen and a keyboard.
pub trait Frontend {
    /// Waits at most `timeout` for a key press.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<Key>>;

    fn wait_key(&mut self) -> Result<Key>;

    /// Screen size as (columns, rows).
    fn size(&self) -> Result<(TermInt, TermInt)>;

    fn clear(&mut self) -> Result<()>;

    fn draw(&mut self, col: TermInt, row: TermInt, text: &str, color: Palette) -> Result<()>;

    /// Makes everything drawn since the last call visible.
    fn present(&mut self) -> Result<()>;
}

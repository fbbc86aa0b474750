use crate::Position;

use std::{path::PathBuf, time::Duration};

/// Smallest playable board; the snake needs its start cell plus one step
/// to the right.
pub const MIN_BOARD: (usize, usize) = (5, 4);

#[derive(Clone, Debug)]
pub struct Settings {
    pub tick_interval: Duration,
    /// Extra delay before the first step after resuming from pause.
    pub resume_grace: Duration,
    pub start: Position,
    pub high_score_path: PathBuf,
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            resume_grace: Duration::from_secs(1),
            start: (3, 3),
            high_score_path: PathBuf::from("highscore.txt"),
            log_path: PathBuf::from("snake.log"),
        }
    }
}

/// Board size for a terminal of `cols` x `rows`: every cell is two columns
/// wide and the border takes one line on each side.
pub fn board_size(cols: u16, rows: u16) -> (usize, usize) {
    let width = (cols as usize / 2).saturating_sub(1);
    let height = (rows as usize).saturating_sub(2);
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_columns() {
        assert_eq!(board_size(80, 24), (39, 22));
        assert_eq!(board_size(81, 24), (39, 22));
    }

    #[test]
    fn tiny_terminal_saturates() {
        assert_eq!(board_size(1, 1), (0, 0));
    }

    #[test]
    fn start_fits_minimum_board() {
        let settings = Settings::default();
        assert!(settings.start.0 + 1 < MIN_BOARD.0 && settings.start.1 < MIN_BOARD.1);
    }
}

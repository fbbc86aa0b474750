use std::time::Instant;

use crate::clock::TickClock;
use crate::frontend::{Frontend, Key};
use crate::highscore::HighScoreStore;
use crate::render;
use crate::session::GameSession;
use crate::settings::{MIN_BOARD, Settings, board_size};
use crate::snake::MoveResult;

use anyhow::{Result, bail};
use log::{debug, error, info};
use rand::rngs::StdRng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The snake crashed; carries the final score.
    Finished(u32),
    Quit,
}

pub struct SnakeGame<F: Frontend> {
    frontend: F,
    settings: Settings,
    store: HighScoreStore,
    high_score: u32,
    rng: StdRng,
}

impl<F: Frontend> SnakeGame<F> {
    pub fn new(frontend: F, settings: Settings, store: HighScoreStore, high_score: u32, rng: StdRng) -> Self {
        SnakeGame { frontend, settings, store, high_score, rng }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Plays games until the player declines another one or quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let score = match self.play()? {
                Outcome::Finished(score) => score,
                Outcome::Quit => break,
            };

            if !self.scoreboard(score)? {
                break;
            }
        }

        Ok(())
    }

    pub fn play(&mut self) -> Result<Outcome> {
        let (cols, rows) = self.frontend.size()?;
        let (width, height) = board_size(cols, rows);
        if width < MIN_BOARD.0 || height < MIN_BOARD.1 {
            bail!(
                "terminal too small: {}x{}, need at least {}x{}",
                cols, rows, (MIN_BOARD.0 + 1) * 2, MIN_BOARD.1 + 2
            );
        }

        info!("new game on a {}x{} board", width, height);
        let mut session = GameSession::new(width, height, self.settings.start, &mut self.rng);
        render::draw_session(&mut self.frontend, &mut session)?;

        let mut clock = TickClock::new(self.settings.tick_interval, Instant::now());

        loop {
            let timeout = clock.until_due(Instant::now());
            match self.frontend.poll_key(timeout)? {
                Some(Key::Quit) => return Ok(Outcome::Quit),
                Some(Key::Pause) => {
                    if !self.pause(&mut session, &mut clock)? {
                        return Ok(Outcome::Quit);
                    }
                },
                Some(key) => {
                    if let Some(dir) = key.direction() {
                        session.snake.steer(dir);
                    }
                },
                None => {},
            }

            let now = Instant::now();
            if !clock.is_due(now) {
                continue;
            }
            clock.mark(now);

            match session.tick(&mut self.rng) {
                MoveResult::Crashed(crash) => {
                    let score = session.snake.score();
                    info!("game over ({:?}) with score {}, length {}", crash, score, session.board.trail_len());
                    debug!(
                        "head {:?} tail {:?} heading {:?}",
                        session.snake.head(), session.snake.tail(), session.snake.current_direction()
                    );
                    return Ok(Outcome::Finished(score));
                },
                res => {
                    if let MoveResult::Moved { new_apple: Some(apple), .. } = &res {
                        debug!("apple eaten, next one at {:?}", apple);
                    }
                    render::draw_step(&mut self.frontend, &session, &res)?
                },
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Blocks until the pause key comes again. Returns false if the player
    /// quit instead.
    fn pause(&mut self, session: &mut GameSession, clock: &mut TickClock) -> Result<bool> {
        info!("paused");
        debug!(
            "heading {:?}, next {:?}",
            session.snake.current_direction(), session.snake.pending_direction()
        );
        render::draw_paused(&mut self.frontend, session.board.width(), session.board.height())?;

        loop {
            match self.frontend.wait_key()? {
                Key::Pause => break,
                Key::Quit => return Ok(false),
                _ => {},
            }
        }

        render::draw_session(&mut self.frontend, session)?;
        clock.reset(Instant::now(), self.settings.resume_grace);
        info!("resumed");
        Ok(true)
    }

    /// Shows the result and asks for another round.
    fn scoreboard(&mut self, score: u32) -> Result<bool> {
        let new_high = score > self.high_score;
        if new_high {
            info!("new high score {} (was {})", score, self.high_score);
            self.high_score = score;

            if let Err(err) = self.store.save(score) {
                error!("could not save high score: {:#}", err);
            }
        }

        render::draw_scoreboard(&mut self.frontend, score, self.high_score, new_high)?;

        loop {
            match self.frontend.wait_key()? {
                Key::Yes => return Ok(true),
                Key::No | Key::Quit => return Ok(false),
                _ => {},
            }
        }
    }
}

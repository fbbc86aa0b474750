mod apple;
mod board;
mod clock;
mod direction;
mod frontend;
mod game;
mod highscore;
mod render;
mod session;
mod settings;
mod snake;
mod term;

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use rand::{SeedableRng, rngs::StdRng};
use simplelog::{Config, WriteLogger};

pub type TermInt = u16;
/// Board cell as (x, y), origin at the top left.
pub type Position = (usize, usize);

fn main() -> Result<()> {
    let settings = settings::Settings::default();

    // The terminal belongs to the game while it runs, so logs go to a file.
    if let Err(err) = init_logging(&settings.log_path) {
        eprintln!("logging disabled: {:#}", err);
    }
    info!("starting snake");

    let store = highscore::HighScoreStore::new(&settings.high_score_path);
    let high_score = store.load_or_zero();
    info!("high score so far: {} ({})", high_score, store.path().display());

    let mut term = term::TermManager::new();
    term.setup()?;

    let mut game = game::SnakeGame::new(term, settings, store, high_score, StdRng::from_entropy());
    let res = game.run();
    info!("exiting with high score {}", game.high_score());

    // Dropping the game hands the terminal back before any error is printed.
    drop(game);
    res
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), file)?;
    Ok(())
}

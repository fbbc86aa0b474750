use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};

/// Flat file holding the best score as plain decimal digits.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let score = text.trim().parse()
            .with_context(|| format!("parsing high score {:?} from {}", text.trim(), self.path.display()))?;
        Ok(score)
    }

    /// Like `load`, but a missing or broken file just means nobody has scored yet.
    pub fn load_or_zero(&self) -> u32 {
        match self.load() {
            Ok(score) => score,
            Err(err) => {
                log::warn!("high score unavailable, starting from 0: {:#}", err);
                eprintln!("Highscore file unreadable: {:#}", err);
                0
            }
        }
    }

    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

use log::{error, info};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Best of the current score and the previous best.
pub fn update_best(current: u32, previous_best: u32) -> u32 {
    current.max(previous_best)
}

/// Where the best score lives between runs.
pub trait BestScoreStore {
    /// Stored best score, 0 when nothing has been stored yet.
    fn get(&self) -> u32;
    fn set(&mut self, score: u32);
}

/// Keeps the best score as a bare integer in a text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    fn read(&self) -> io::Result<u32> {
        let text = fs::read_to_string(&self.path)?;
        text.trim()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl BestScoreStore for FileStore {
    fn get(&self) -> u32 {
        match self.read() {
            Ok(score) => score,
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                error!("Error loading best score from {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn set(&mut self, score: u32) {
        if let Err(e) = fs::write(&self.path, score.to_string()) {
            error!("Error saving best score to {}: {}", self.path.display(), e);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    score: Option<u32>,
}

impl BestScoreStore for MemoryStore {
    fn get(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn set(&mut self, score: u32) {
        self.score = Some(score);
    }
}

/// Best score across sessions, backed by a store.
///
/// The store is read once on construction and written only when a session
/// beats the best.
pub struct Scoreboard<S> {
    best: u32,
    store: S,
}

impl<S: BestScoreStore> Scoreboard<S> {
    pub fn new(store: S) -> Self {
        let best = store.get();
        info!("Loaded best score {}", best);
        Scoreboard { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Folds in the current session's score and returns the (possibly new) best.
    pub fn record(&mut self, current: u32) -> u32 {
        let best = update_best(current, self.best);
        if best > self.best {
            self.best = best;
            self.store.set(best);
        }
        self.best
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

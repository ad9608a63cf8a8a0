//! Movie watchlist: a [`Queue`] of movies to watch and a [`Stack`] of
//! movies already watched, persisted one title per line.

pub mod config;
pub mod session;

use std::path::{Path, PathBuf};

pub use config::{CliAction, ConfigError, WatchlistConfig};
pub use session::{Command, SessionError, run};

use crate::{
    collections::{OutOfRangeError, Queue, Stack},
    persist::PersistError,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    queue: Queue<String>,
    history: Stack<String>,
}

/// A loaded watchlist plus the input files that did not exist.
#[derive(Debug)]
pub struct Loaded {
    pub watchlist: Watchlist,
    pub missing: Vec<PathBuf>,
}

impl Watchlist {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_parts(queue: Queue<String>, history: Stack<String>) -> Self {
        Self { queue, history }
    }

    /// Missing files leave the matching container empty and are reported in
    /// [`Loaded::missing`]; every other failure is returned.
    pub fn load(config: &WatchlistConfig) -> Result<Loaded, PersistError> {
        let mut watchlist = Self::new();
        let mut missing = Vec::new();
        let mut note_missing = |result: Result<(), PersistError>, path: &Path| match result {
            Err(err) if err.is_not_found() => {
                missing.push(path.to_path_buf());
                Ok(())
            }
            other => other,
        };
        note_missing(
            watchlist.queue.restore(&config.queue_path),
            &config.queue_path,
        )?;
        note_missing(
            watchlist.history.restore(&config.history_path),
            &config.history_path,
        )?;
        Ok(Loaded { watchlist, missing })
    }

    pub fn save(&self, config: &WatchlistConfig) -> Result<(), PersistError> {
        self.queue.save(&config.queue_out_path)?;
        self.history.save(&config.history_out_path)
    }

    #[inline]
    pub fn queue(&self) -> &Queue<String> {
        &self.queue
    }

    #[inline]
    pub fn history(&self) -> &Stack<String> {
        &self.history
    }

    #[inline]
    pub fn add(&mut self, title: impl Into<String>) {
        self.queue.enqueue(title.into())
    }

    /// Moves the next movie from the queue onto the history.
    pub fn watch(&mut self) -> Result<&str, OutOfRangeError> {
        let title = self.queue.dequeue()?;
        self.history.push(title);
        self.history.top().map(String::as_str)
    }

    /// Drops the next movie without recording it.
    #[inline]
    pub fn delete(&mut self) -> Result<String, OutOfRangeError> {
        self.queue.dequeue()
    }

    #[inline]
    pub fn next(&self) -> Result<&str, OutOfRangeError> {
        self.queue.front().map(String::as_str)
    }

    #[inline]
    pub fn recent(&self) -> Result<&str, OutOfRangeError> {
        self.history.top().map(String::as_str)
    }
}

use std::path::PathBuf;

use getopts::Options;

pub const DEFAULT_QUEUE_FILE: &str = "movie_queue.txt";
pub const DEFAULT_HISTORY_FILE: &str = "movie_history.txt";
pub const DEFAULT_QUEUE_OUT_FILE: &str = "movie_queue_updated.txt";
pub const DEFAULT_HISTORY_OUT_FILE: &str = "movie_history_updated.txt";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    Options(#[from] getopts::Fail),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Where the watchlist is loaded from and saved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistConfig {
    pub queue_path: PathBuf,
    pub history_path: PathBuf,
    pub queue_out_path: PathBuf,
    pub history_out_path: PathBuf,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            queue_path: DEFAULT_QUEUE_FILE.into(),
            history_path: DEFAULT_HISTORY_FILE.into(),
            queue_out_path: DEFAULT_QUEUE_OUT_FILE.into(),
            history_out_path: DEFAULT_HISTORY_OUT_FILE.into(),
        }
    }
}

/// Outcome of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(WatchlistConfig),
    Help(String),
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("q", "queue", "file to load the movie queue from", "FILE");
    opts.optopt("H", "history", "file to load the watch history from", "FILE");
    opts.optopt("", "queue-out", "file to save the movie queue to", "FILE");
    opts.optopt("", "history-out", "file to save the watch history to", "FILE");
    opts.optflag("h", "help", "print this help menu");
    opts
}

impl WatchlistConfig {
    /// Parses the arguments following the program name.
    pub fn from_args<I, S>(program: &str, args: I) -> Result<CliAction, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let opts = options();
        let matches = opts.parse(args)?;

        if matches.opt_present("h") {
            let brief = format!("Usage: {program} [options]");
            return Ok(CliAction::Help(opts.usage(&brief)));
        }
        if let Some(arg) = matches.free.first() {
            return Err(ConfigError::UnexpectedArgument(arg.clone()));
        }

        let defaults = Self::default();
        let path_or = |name: &str, default: PathBuf| {
            matches.opt_str(name).map(PathBuf::from).unwrap_or(default)
        };
        Ok(CliAction::Run(Self {
            queue_path: path_or("queue", defaults.queue_path),
            history_path: path_or("history", defaults.history_path),
            queue_out_path: path_or("queue-out", defaults.queue_out_path),
            history_out_path: path_or("history-out", defaults.history_out_path),
        }))
    }
}

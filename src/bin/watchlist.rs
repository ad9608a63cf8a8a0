use std::io;

use anyhow::Context;
use watchlist::watchlist::{CliAction, Loaded, Watchlist, WatchlistConfig, run};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "watchlist".to_string());

    let config = match WatchlistConfig::from_args(&program, args)? {
        CliAction::Run(config) => config,
        CliAction::Help(usage) => {
            print!("{usage}");
            return Ok(());
        }
    };

    let Loaded {
        watchlist: mut list,
        missing,
    } = Watchlist::load(&config).context("failed to load watchlist")?;
    for path in missing {
        eprintln!(
            "warning: {} not found, starting with an empty list",
            path.display()
        );
    }

    run(&mut list, io::stdin().lock(), io::stdout().lock())
        .context("watchlist session failed")?;

    list.save(&config).with_context(|| {
        format!(
            "failed to save watchlist to {} and {}",
            config.queue_out_path.display(),
            config.history_out_path.display()
        )
    })
}

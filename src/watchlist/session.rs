use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::watchlist::Watchlist;

const MENU: &str = "\
Movie Watchlist
  a - add a movie to the queue
  w - watch the next movie
  d - delete the next movie
  h - show watch history
  r - show the most recently watched movie
  q - show the movie queue
  n - show the next movie
  x - save and exit
";

const EMPTY_QUEUE: &str = "The movie queue is empty.";
const EMPTY_HISTORY: &str = "No movies watched yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Watch,
    Delete,
    History,
    Recent,
    Queue,
    Next,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command `{0}`")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s.trim().to_ascii_lowercase().as_str() {
            "a" => Command::Add,
            "w" => Command::Watch,
            "d" => Command::Delete,
            "h" => Command::History,
            "r" => Command::Recent,
            "q" => Command::Queue,
            "n" => Command::Next,
            "x" => Command::Exit,
            _ => return Err(UnknownCommand(s.trim().to_string())),
        };
        Ok(command)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Reads one line without its terminator; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

/// Runs commands from `input` until `x` or end of input.
///
/// Saving is left to the caller so the session can be driven without
/// touching the filesystem.
pub fn run<R, W>(
    watchlist: &mut Watchlist,
    mut input: R,
    mut output: W,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{MENU}Choice: ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        match command {
            Command::Add => {
                write!(output, "Title: ")?;
                output.flush()?;
                match read_line(&mut input)? {
                    Some(title) if !title.trim().is_empty() => {
                        let title = title.trim();
                        writeln!(output, "Added \"{title}\" to the queue.")?;
                        watchlist.add(title);
                    }
                    _ => writeln!(output, "No title entered.")?,
                }
            }
            Command::Watch => match watchlist.watch() {
                Ok(title) => writeln!(output, "Now watching: {title}")?,
                Err(_) => writeln!(output, "{EMPTY_QUEUE}")?,
            },
            Command::Delete => match watchlist.delete() {
                Ok(title) => writeln!(output, "Deleted: {title}")?,
                Err(_) => writeln!(output, "{EMPTY_QUEUE}")?,
            },
            Command::History if watchlist.history().is_empty() => {
                writeln!(output, "{EMPTY_HISTORY}")?
            }
            Command::History => watchlist.history().write_to(&mut output)?,
            Command::Recent => match watchlist.recent() {
                Ok(title) => writeln!(output, "Most recently watched: {title}")?,
                Err(_) => writeln!(output, "{EMPTY_HISTORY}")?,
            },
            Command::Queue if watchlist.queue().is_empty() => writeln!(output, "{EMPTY_QUEUE}")?,
            Command::Queue => watchlist.queue().write_to(&mut output)?,
            Command::Next => match watchlist.next() {
                Ok(title) => writeln!(output, "Next up: {title}")?,
                Err(_) => writeln!(output, "{EMPTY_QUEUE}")?,
            },
            Command::Exit => break,
        }
    }
    Ok(())
}

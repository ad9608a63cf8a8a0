//! Line-oriented text persistence: one element per line, no header.

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("line {line}: cannot parse {text:?}: {message}")]
    Parse {
        line: usize,
        text: String,
        message: String,
    },
    #[error("element {index} renders across multiple lines")]
    MultilineElement { index: usize },
}

impl PersistError {
    /// `true` when the file (or its directory) does not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        match self {
            PersistError::Io(err) | PersistError::File { source: err, .. } => {
                err.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Attaches `path` to a bare I/O error.
    fn in_file(self, path: &Path) -> Self {
        match self {
            PersistError::Io(source) => PersistError::File {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

fn render_lines<'a, T, I>(items: I) -> Result<Vec<String>, PersistError>
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let line = item.to_string();
            if line.contains(['\n', '\r']) {
                Err(PersistError::MultilineElement { index })
            } else {
                Ok(line)
            }
        })
        .collect()
}

fn write_rendered(mut writer: impl Write, lines: &[String]) -> Result<(), PersistError> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes each element's `Display` rendering on its own line.
///
/// Every element is rendered before the first byte is written, so nothing
/// reaches `writer` when one of them spans more than one line.
pub fn write_lines<'a, T, I, W>(writer: W, items: I) -> Result<(), PersistError>
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let lines = render_lines(items)?;
    write_rendered(writer, &lines)
}

pub fn read_lines<T, R>(reader: R) -> Result<Vec<T>, PersistError>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
{
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let text = line?;
            text.parse::<T>().map_err(|err: T::Err| PersistError::Parse {
                line: index + 1,
                message: err.to_string(),
                text,
            })
        })
        .collect()
}

pub fn save_lines<'a, T, I>(path: impl AsRef<Path>, items: I) -> Result<(), PersistError>
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let path = path.as_ref();
    // render first so an existing file is not truncated on error
    let lines = render_lines(items)?;
    File::create(path)
        .map_err(PersistError::from)
        .and_then(|file| write_rendered(BufWriter::new(file), &lines))
        .map_err(|err| err.in_file(path))
}

pub fn restore_lines<T>(path: impl AsRef<Path>) -> Result<Vec<T>, PersistError>
where
    T: FromStr,
    T::Err: Display,
{
    let path = path.as_ref();
    File::open(path)
        .map_err(PersistError::from)
        .and_then(|file| read_lines(BufReader::new(file)))
        .map_err(|err| err.in_file(path))
}

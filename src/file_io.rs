//! Line-based load and save of the edited file.

use crate::error::{EditorError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read `path` as a sequence of lines with their terminators stripped.
///
/// A file that cannot be opened or read yields an empty sequence; the caller
/// then starts from a single empty row.
pub fn load_lines<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    match read_lines(path) {
        Ok(lines) => {
            tracing::info!("Loaded {} lines from {}", lines.len(), path.display());
            lines
        }
        Err(e) => {
            tracing::warn!("Could not read {}: {}; starting empty", path.display(), e);
            Vec::new()
        }
    }
}

/// Invalid UTF-8 is replaced rather than failing the whole load
fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? > 0 {
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
        buf.clear();
    }
    Ok(lines)
}

/// Write each line followed by `\n` to `path`, replacing its contents
pub fn save_lines<P, S>(path: P, lines: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    write_lines(path, lines).map_err(|source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Saved {} lines to {}", lines.len(), path.display());
    Ok(())
}

fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

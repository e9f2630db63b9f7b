//! Input collaborators: file reading, console prompting, output routing.
//!
//! The engine itself never touches IO; this module supplies it with two
//! ordered sequences of lines and routes rendered reports. File errors stay
//! here and never reach the engine.

mod output;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};

use crate::error::{DiffError, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const INVALID_VALUE: &str = "Invalid value";

/// Read a file as an ordered sequence of lines.
///
/// The path must name an existing regular file. No normalization is applied
/// beyond line splitting; trailing line terminators are not part of the
/// elements.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(DiffError::invalid_argument(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    tracing::debug!("Reading lines from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| DiffError::io(path, e))?;
    Ok(content.lines().map(ToString::to_string).collect())
}

/// Prompt on stdin/stderr until the input names an existing regular file.
pub fn prompt_path(message: &str) -> io::Result<PathBuf> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt = io::stderr();
    let answer = request_string(&mut input, &mut prompt, message, |s| {
        Path::new(s).is_file()
    })?;
    Ok(PathBuf::from(answer))
}

/// Interactive prompt loop: print `message`, read a line, and re-ask with
/// "Invalid value" until `validate` accepts the trimmed input.
///
/// Split out from [`prompt_path`] so the loop can be driven by any
/// reader/writer pair in tests.
pub fn request_string<R, W, V>(
    input: &mut R,
    prompt: &mut W,
    message: &str,
    validate: V,
) -> io::Result<String>
where
    R: BufRead,
    W: Write,
    V: Fn(&str) -> bool,
{
    loop {
        writeln!(prompt, "{message}")?;
        prompt.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            ));
        }
        let trimmed = line.trim_end_matches(|c| c == '\r' || c == '\n');
        if validate(trimmed) {
            return Ok(trimmed.to_string());
        }
        writeln!(prompt, "{INVALID_VALUE}")?;
    }
}

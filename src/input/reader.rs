use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Largest input accepted from a file or stdin.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Where one-shot input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line.
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Inline text wins over a file, which wins over stdin.
    pub fn select(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }
}

pub struct InputReader;

impl InputReader {
    pub fn read(source: &InputSource) -> Result<String> {
        match source {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => Self::read_file(path),
            InputSource::Stdin => Self::read_stream(io::stdin().lock(), "stdin"),
        }
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > MAX_INPUT_SIZE {
            bail!(too_large(size, "file"));
        }

        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Reads `reader` to the end, giving up as soon as it passes the size limit.
    pub fn read_stream<R: Read>(reader: R, name: &str) -> Result<String> {
        let mut buffer = Vec::new();
        // One extra byte tells "exactly at the limit" apart from "over it".
        let limit = MAX_INPUT_SIZE as u64 + 1;
        reader
            .take(limit)
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read from {name}"))?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(too_large(buffer.len(), "input"));
        }

        String::from_utf8(buffer).with_context(|| format!("Input from {name} is not valid UTF-8"))
    }
}

fn too_large(size: usize, what: &str) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the {what} into smaller parts.",
        size as f64 / 1024.0 / 1024.0
    )
}

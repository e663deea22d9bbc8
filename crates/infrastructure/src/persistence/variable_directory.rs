//! Variable file reader.

use std::fs;
use std::io;
use std::path::PathBuf;

use reqcheck_application::ports::VariableFiles;

/// Reads `[filename]` variable targets from a directory.
///
/// Reads are synchronous: they happen during resolution, which runs on
/// the coordinating loop before a send is spawned.
#[derive(Debug, Clone)]
pub struct DirectoryVariableFiles {
    dir: PathBuf,
}

impl DirectoryVariableFiles {
    /// Creates a reader over `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl VariableFiles for DirectoryVariableFiles {
    fn read(&self, filename: &str) -> io::Result<Option<String>> {
        let path = self.dir.join(filename);
        if !path.exists() {
            return Ok(None);
        }
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

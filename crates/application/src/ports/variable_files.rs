//! Variable file port
//!
//! Read-only access to the directory that backs `[filename]` variable values.

use std::io;

/// Source of file content for indirection values.
pub trait VariableFiles: Send + Sync {
    /// Reads the full text of `filename`.
    ///
    /// # Returns
    /// `Ok(None)` if no such file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read as text.
    fn read(&self, filename: &str) -> io::Result<Option<String>>;
}

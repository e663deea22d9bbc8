//! File-backed persistence adapters.
//!
//! Everything lives under the workspace directory:
//! - the store file (`saved_requests.json` by default)
//! - one text file per response in the history directory
//! - files referenced by `[filename]` variable values in the variables directory

mod history_directory;
mod json_store;
mod variable_directory;

pub use history_directory::FileHistoryStore;
pub use json_store::JsonFileStore;
pub use variable_directory::DirectoryVariableFiles;

//! Variable resolution module
//!
//! Provides parsing and resolution of `{{variable}}` syntax in template text.
//!
//! # Usage
//!
//! ```
//! use std::io;
//! use reqcheck_application::ports::VariableFiles;
//! use reqcheck_application::variable_resolver::TemplateResolver;
//! use reqcheck_domain::VariableStore;
//!
//! struct NoFiles;
//! impl VariableFiles for NoFiles {
//!     fn read(&self, _: &str) -> io::Result<Option<String>> {
//!         Ok(None)
//!     }
//! }
//!
//! let mut variables = VariableStore::new();
//! variables.set("host", "localhost").unwrap();
//!
//! let resolver = TemplateResolver::new(&variables, &NoFiles);
//! let result = resolver.resolve("http://{{host}}/api").unwrap();
//! assert_eq!(result.text, "http://localhost/api");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{ResolutionWarning, Resolution, ResolveError, ResolvedRequest, TemplateResolver};
pub use parser::{Placeholder, parse_placeholders};

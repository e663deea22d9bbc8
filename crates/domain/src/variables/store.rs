//! Variable store
//!
//! Process-wide name to value mapping shared by every template.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Named variables in insertion order.
///
/// Serializes as a plain JSON object (`global_variables` in the store file).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableStore {
    variables: IndexMap<String, String>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Inserts or replaces a variable.
    ///
    /// Name and value are trimmed. Replacing keeps the variable's original
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyVariableName` if the trimmed name is empty.
    pub fn set(&mut self, name: &str, value: &str) -> DomainResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyVariableName);
        }
        self.variables.insert(name.to_string(), value.trim().to_string());
        Ok(())
    }

    /// Removes a variable, returning its value if it existed.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        self.variables.shift_remove(name)
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

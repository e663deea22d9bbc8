//! Template resolution engine
//!
//! Substitutes `{{name}}` placeholders with variable values. Resolution is
//! all-or-nothing: the first undefined name aborts and no partial text is
//! returned.

use std::fmt;

use reqcheck_domain::{Indirection, RequestTemplate, VariableStore};
use thiserror::Error;

use super::parser::parse_placeholders;
use crate::ports::VariableFiles;

/// Error raised when a placeholder names an unknown variable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No variable with this name exists.
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
}

/// A file indirection that could not be read.
///
/// The raw bracketed value was substituted instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionWarning {
    /// Variable whose value pointed at the file.
    pub variable: String,
    /// File that was looked up.
    pub filename: String,
    /// Reason the read failed.
    pub reason: String,
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading file {}: {}", self.filename, self.reason)
    }
}

/// Result of resolving a single text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The text with every placeholder substituted.
    pub text: String,
    /// Indirection reads that failed and fell back to the raw value.
    pub warnings: Vec<ResolutionWarning>,
}

/// The three resolved text fields of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Resolved URL.
    pub url: String,
    /// Resolved header block.
    pub headers: String,
    /// Resolved body.
    pub body: String,
    /// Warnings collected across all three fields.
    pub warnings: Vec<ResolutionWarning>,
}

/// Resolves placeholders against a variable store.
pub struct TemplateResolver<'a> {
    variables: &'a VariableStore,
    files: &'a dyn VariableFiles,
}

impl<'a> TemplateResolver<'a> {
    /// Creates a resolver over the given variables and file source.
    #[must_use]
    pub fn new(variables: &'a VariableStore, files: &'a dyn VariableFiles) -> Self {
        Self { variables, files }
    }

    /// Resolves all placeholders in `text`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UndefinedVariable` for the first placeholder, in
    /// order of appearance, whose name is not defined.
    pub fn resolve(&self, text: &str) -> Result<Resolution, ResolveError> {
        let placeholders = parse_placeholders(text);
        if placeholders.is_empty() {
            return Ok(Resolution {
                text: text.to_string(),
                warnings: Vec::new(),
            });
        }

        let mut warnings = Vec::new();
        let mut result = String::with_capacity(text.len());
        let mut last_end = 0;

        for placeholder in &placeholders {
            let Some(raw) = self.variables.get(&placeholder.name) else {
                return Err(ResolveError::UndefinedVariable(placeholder.name.clone()));
            };

            result.push_str(&text[last_end..placeholder.span.start]);
            match self.effective_value(raw) {
                Ok(value) => result.push_str(&value),
                Err(reason) => {
                    tracing::warn!(
                        variable = %placeholder.name,
                        value = raw,
                        %reason,
                        "variable file could not be read, using raw value"
                    );
                    warnings.push(ResolutionWarning {
                        variable: placeholder.name.clone(),
                        filename: Indirection::parse(raw)
                            .map(|ind| ind.filename().to_string())
                            .unwrap_or_default(),
                        reason,
                    });
                    result.push_str(raw);
                }
            }
            last_end = placeholder.span.end;
        }

        result.push_str(&text[last_end..]);
        Ok(Resolution {
            text: result,
            warnings,
        })
    }

    /// Resolves URL, headers and body in that order, stopping at the first
    /// undefined variable.
    ///
    /// # Errors
    ///
    /// Returns the first `ResolveError` encountered.
    pub fn resolve_template(&self, template: &RequestTemplate) -> Result<ResolvedRequest, ResolveError> {
        let url = self.resolve(&template.url)?;
        let headers = self.resolve(&template.headers)?;
        let body = self.resolve(&template.body)?;

        let mut warnings = url.warnings;
        warnings.extend(headers.warnings);
        warnings.extend(body.warnings);

        Ok(ResolvedRequest {
            url: url.text,
            headers: headers.text,
            body: body.text,
            warnings,
        })
    }

    /// Applies the indirection rule to a stored value.
    ///
    /// Returns the file content for an existing `[filename]`, the raw value
    /// for a missing file or a plain value, and `Err(reason)` when the file
    /// exists but cannot be read.
    fn effective_value(&self, raw: &str) -> Result<String, String> {
        let Some(indirection) = Indirection::parse(raw) else {
            return Ok(raw.to_string());
        };
        match self.files.read(indirection.filename()) {
            Ok(Some(content)) => Ok(content),
            Ok(None) => Ok(raw.to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}

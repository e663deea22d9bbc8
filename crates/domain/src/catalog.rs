//! Ordered collection of saved request templates.
//!
//! A template's identity is its position. Deleting shifts every later
//! template down by one.

use crate::error::{DomainError, DomainResult};
use crate::request::RequestTemplate;

/// In-memory catalog of request templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCatalog {
    templates: Vec<RequestTemplate>,
}

impl RequestCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from templates in stored order.
    #[must_use]
    pub const fn from_templates(templates: Vec<RequestTemplate>) -> Self {
        Self { templates }
    }

    /// Appends a template and returns its index.
    pub fn add(&mut self, template: RequestTemplate) -> usize {
        self.templates.push(template);
        self.templates.len() - 1
    }

    /// Replaces the template at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndexOutOfRange` if no template is stored there.
    pub fn update(&mut self, index: usize, template: RequestTemplate) -> DomainResult<()> {
        let len = self.templates.len();
        let slot = self
            .templates
            .get_mut(index)
            .ok_or(DomainError::IndexOutOfRange { index, len })?;
        *slot = template;
        Ok(())
    }

    /// Removes the template at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndexOutOfRange` if no template is stored there.
    pub fn delete_at(&mut self, index: usize) -> DomainResult<RequestTemplate> {
        if index >= self.templates.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.templates.len(),
            });
        }
        Ok(self.templates.remove(index))
    }

    /// Returns the template at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RequestTemplate> {
        self.templates.get(index)
    }

    /// All templates in order.
    #[must_use]
    pub fn list(&self) -> &[RequestTemplate] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

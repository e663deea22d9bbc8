//! Editing session
//!
//! Owns the request catalog and the variable store on the coordinating
//! thread, keeps them in sync with the workspace store, and prepares sends.
//! Every mutation is persisted immediately; a failed save is reported and
//! the mutation stands.

use std::sync::Arc;

use reqcheck_domain::{
    DomainError, DomainResult, RequestCatalog, RequestTemplate, StoreDocument, VariableStore,
};

use crate::dispatch::OutgoingRequest;
use crate::error::{SendError, SendResult};
use crate::ports::{Clock, Notice, Notifier, StoreError, VariableFiles, WorkspaceStore};
use crate::use_cases::PreparedSend;
use crate::variable_resolver::{ResolvedRequest, TemplateResolver};

/// The ports a session talks to.
#[derive(Clone)]
pub struct SessionPorts {
    /// Store holding templates and variables.
    pub store: Arc<dyn WorkspaceStore>,
    /// Source for `[filename]` variable values.
    pub files: Arc<dyn VariableFiles>,
    /// User-facing notices.
    pub notifier: Arc<dyn Notifier>,
    /// Time source for request timestamps.
    pub clock: Arc<dyn Clock>,
}

/// Catalog and variables for one running instance.
pub struct Session {
    catalog: RequestCatalog,
    variables: VariableStore,
    ports: SessionPorts,
}

impl Session {
    /// Creates an empty session. Call `load_from_store` to populate it.
    #[must_use]
    pub fn new(ports: SessionPorts) -> Self {
        Self {
            catalog: RequestCatalog::new(),
            variables: VariableStore::new(),
            ports,
        }
    }

    /// Saved templates.
    #[must_use]
    pub const fn catalog(&self) -> &RequestCatalog {
        &self.catalog
    }

    /// Global variables.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// A resolver over the current variables.
    #[must_use]
    pub fn resolver(&self) -> TemplateResolver<'_> {
        TemplateResolver::new(&self.variables, self.ports.files.as_ref())
    }

    /// Replaces catalog and variables with the stored document.
    ///
    /// A missing store leaves both empty. A malformed or unreadable store
    /// also leaves both empty; the error is reported and returned.
    ///
    /// # Errors
    ///
    /// Returns the store error after the collections have been reset.
    pub async fn load_from_store(&mut self) -> Result<(), StoreError> {
        match self.ports.store.load().await {
            Ok(Some(document)) => {
                (self.catalog, self.variables) = document.into_parts();
                tracing::info!(
                    requests = self.catalog.len(),
                    variables = self.variables.len(),
                    "store loaded"
                );
                Ok(())
            }
            Ok(None) => {
                tracing::info!("no store file, starting empty");
                self.reset();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "store could not be loaded, starting empty");
                self.reset();
                self.ports
                    .notifier
                    .notify(Notice::error(format!("Error loading requests: {e}")));
                Err(e)
            }
        }
    }

    /// Writes catalog and variables to the store.
    ///
    /// # Errors
    ///
    /// Returns the store error; it has already been reported.
    pub async fn persist_to_store(&self) -> Result<(), StoreError> {
        let document = StoreDocument::snapshot(&self.catalog, &self.variables);
        match self.ports.store.save(&document).await {
            Ok(()) => {
                tracing::debug!(requests = document.requests.len(), "store saved");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "store could not be saved");
                self.ports
                    .notifier
                    .notify(Notice::error(format!("Error saving requests: {e}")));
                Err(e)
            }
        }
    }

    /// Adds or updates a variable and saves.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyVariableName` for a blank name.
    pub async fn set_variable(&mut self, name: &str, value: &str) -> DomainResult<()> {
        if let Err(e) = self.variables.set(name, value) {
            self.ports.notifier.notify(Notice::error(e.to_string()));
            return Err(e);
        }
        self.persist_reported().await;
        Ok(())
    }

    /// Removes a variable and saves. Returns the removed value.
    pub async fn delete_variable(&mut self, name: &str) -> Option<String> {
        let removed = self.variables.delete(name);
        if removed.is_some() {
            self.persist_reported().await;
        }
        removed
    }

    /// Removes the template at `index` and saves.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IndexOutOfRange` if no template is stored there.
    pub async fn delete_request(&mut self, index: usize) -> DomainResult<RequestTemplate> {
        let removed = self.catalog.delete_at(index)?;
        self.persist_reported().await;
        Ok(removed)
    }

    /// Validates, resolves and records a template ahead of sending it.
    ///
    /// With `selection` set, the template at that index is replaced;
    /// otherwise the template is appended. The raw template (placeholders
    /// intact) is what gets stored. Nothing is stored when this fails.
    ///
    /// # Errors
    ///
    /// - `SendError::EmptyUrl` if the URL is blank
    /// - `SendError::Catalog` if `selection` is out of range
    /// - `SendError::Resolve` for the first undefined variable
    pub async fn prepare_send(
        &mut self,
        selection: Option<usize>,
        template: RequestTemplate,
    ) -> SendResult<PreparedSend> {
        match self.check_and_resolve(selection, &template) {
            Ok((resolved, request)) => {
                let index = match selection {
                    Some(index) => {
                        self.catalog.update(index, template.clone())?;
                        index
                    }
                    None => self.catalog.add(template.clone()),
                };
                self.persist_reported().await;

                Ok(PreparedSend {
                    index,
                    method: template.method,
                    description: template.description,
                    resolved,
                    request,
                    request_time: self.ports.clock.now(),
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "send refused");
                self.ports.notifier.notify(Notice::error(e.to_string()));
                Err(e)
            }
        }
    }

    fn check_and_resolve(
        &self,
        selection: Option<usize>,
        template: &RequestTemplate,
    ) -> SendResult<(ResolvedRequest, OutgoingRequest)> {
        if template.has_blank_url() {
            return Err(SendError::EmptyUrl);
        }
        if let Some(index) = selection
            && index >= self.catalog.len()
        {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.catalog.len(),
            }
            .into());
        }

        let resolved = self.resolver().resolve_template(template)?;
        for warning in &resolved.warnings {
            self.ports
                .notifier
                .notify(Notice::warning(warning.to_string()));
        }

        let request = OutgoingRequest::from_resolved(
            template.method,
            &resolved.url,
            &resolved.headers,
            &resolved.body,
        );
        Ok((resolved, request))
    }

    async fn persist_reported(&self) {
        // Failures are reported by persist_to_store; the edit stands.
        let _ = self.persist_to_store().await;
    }

    fn reset(&mut self) {
        self.catalog = RequestCatalog::new();
        self.variables = VariableStore::new();
    }
}

//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod history_store;
mod http_transport;
mod notifier;
mod variable_files;
mod workspace_store;

pub use clock::Clock;
pub use history_store::{HistoryError, HistoryStore};
pub use http_transport::{HttpTransport, TransportError, TransportResponse};
pub use notifier::{Notice, NoticeLevel, Notifier};
pub use variable_files::VariableFiles;
pub use workspace_store::{StoreError, WorkspaceStore};

//! Reqcheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::{DEFAULT_USER_AGENT, ReqwestTransport, SystemClock, TracingNotifier};
pub use config::{AppConfig, ConfigError, ConfigLoader, ConfigOverrides};
pub use persistence::{DirectoryVariableFiles, FileHistoryStore, JsonFileStore};
pub use serialization::{SerializationError, from_json_bytes, to_json_pretty, to_json_pretty_bytes};

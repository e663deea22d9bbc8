//! Port adapters backed by external libraries and the system.

mod reqwest_transport;
mod system_clock;
mod tracing_notifier;

pub use reqwest_transport::{DEFAULT_USER_AGENT, ReqwestTransport};
pub use system_clock::SystemClock;
pub use tracing_notifier::TracingNotifier;

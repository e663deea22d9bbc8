//! Notifier that logs notices through `tracing`.

use reqcheck_application::ports::{Notice, NoticeLevel, Notifier};

/// Logs every notice at the level matching its severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::error!(target: "reqcheck::notice", "{notice}"),
            NoticeLevel::Warning => tracing::warn!(target: "reqcheck::notice", "{notice}"),
        }
    }
}

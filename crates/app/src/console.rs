//! Notifier for terminal use.

use reqcheck_application::ports::{Notice, NoticeLevel, Notifier};
use reqcheck_infrastructure::TracingNotifier;

/// Prints notices to stderr and logs them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    log: TracingNotifier,
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let label = match notice.level {
            NoticeLevel::Error => "error",
            NoticeLevel::Warning => "warning",
        };
        eprintln!("{label}: {notice}");
        self.log.notify(notice);
    }
}

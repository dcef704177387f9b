use tracing::warn;

use crate::ports::Notifier;

/// Notifier that writes user-facing messages to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn report_error(&self, message: &str) {
        warn!(message, "Cart notification");
    }
}

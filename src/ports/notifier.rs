/// Sink for user-facing failure messages.
///
/// Reports are fire-and-forget: implementations must return quickly and
/// spawn a task for anything slow.
pub trait Notifier: Send + Sync {
    fn report_error(&self, message: &str);
}

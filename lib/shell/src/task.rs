//! Background work mounted alongside the shell.

/// A collaborator the shell starts once and otherwise ignores.
///
/// Tasks take no input from the navigation model and report nothing back to
/// the shell. Implementations spawn whatever they need in `start` and own
/// their own error handling.
pub trait BackgroundTask {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Starts the task. Called at most once per shell lifetime.
    fn start(&self);
}

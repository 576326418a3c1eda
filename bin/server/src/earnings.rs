//! The provider earnings processor mounted by the shell.

use leptos::task::spawn_local;
use skill_time_shell::BackgroundTask;

use crate::user::process_provider_earnings;

/// Asks the backend to settle the signed-in provider's pending earnings.
///
/// Guests are a no-op on the server side. Failures are logged and dropped;
/// the shell never learns about them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarningsProcessor;

impl BackgroundTask for EarningsProcessor {
    fn name(&self) -> &str {
        "provider-earnings"
    }

    fn start(&self) {
        spawn_local(async {
            if let Err(e) = process_provider_earnings().await {
                leptos::logging::warn!("provider earnings processing failed: {e}");
            }
        });
    }
}

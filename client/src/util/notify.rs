//! Blocking browser notices.
//!
//! Requires a browser environment; outside one the notice is only logged.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::state::signup_flow::Notifier;

/// [`Notifier`] that raises a native `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        alert(message);
    }
}

/// Show `message` in a native alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.alert_with_message(message) {
                    log::warn!("alert failed: {err:?}");
                }
            }
            None => log::warn!("alert skipped, no window: {message}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("notice: {message}");
    }
}

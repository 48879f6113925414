//! Transient Notices
//!
//! Success and error messages surfaced through the toast layer, with timed
//! auto-clear.

use leptos::*;

/// Toast message state provided to all components
#[derive(Clone, Copy)]
pub struct Notices {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message to display
    pub success: RwSignal<Option<String>>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Provide the notices state to the component tree
pub fn provide_notices() {
    provide_context(Notices::new());
}

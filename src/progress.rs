//! Spinner for blocking operations
//!
//! The spinner is tied to a scope: it starts when [`with_spinner`] is
//! entered and is cleared when the closure returns, errors or unwinds.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Clears its spinner on drop
struct SpinnerGuard {
    bar: ProgressBar,
}

impl SpinnerGuard {
    fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style.tick_chars("⣾⣷⣯⣟⡿⢿⣻⣽ "));
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK);
        Self { bar }
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Run `operation` with a spinner showing `message`
pub fn with_spinner<T>(message: &str, operation: impl FnOnce() -> T) -> T {
    let _guard = SpinnerGuard::start(message);
    operation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_operation_result() {
        let value = with_spinner("working", || 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_error_passes_through() {
        let result: anyhow::Result<()> = with_spinner("working", || anyhow::bail!("boom"));
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }

    #[test]
    fn test_spinner_cleared_on_drop() {
        let guard = SpinnerGuard::start("working");
        let bar = guard.bar.clone();
        drop(guard);
        assert!(bar.is_finished());
    }
}

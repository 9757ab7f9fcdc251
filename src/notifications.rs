/// Desktop notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when the countdown reaches zero
pub fn notify_finished(duration_label: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{} is up" with title "Tomato - Time's up""#,
            duration_label.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::warn!(error = %e, "failed to send notification");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // Fall back to the terminal bell
        tracing::debug!(duration = duration_label, "notification: bell");
        print!("\x07");
    }
}

//! # Collaborator capabilities
//!
//! This module contains the traits which describe the user-facing
//! collaborators of a submission: the notification sink, the confirmation
//! prompt and the refresh signal.
//!
//! The client never owns the lifecycle of these collaborators, it only invokes
//! them. Each trait is implemented for plain closures, so most callers don't
//! need their own types.

use std::fmt::Display;

/// Severity of the user-visible notification.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Operation completed.
    Success,

    /// Operation failed or could not be performed.
    Danger,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Severity::Success => "success",
                Severity::Danger => "danger",
            }
        )
    }
}

/// Destination for user-visible success / failure messages.
///
/// # Examples
/// ```
/// use submitter::core::{NotificationSink, Severity};
///
/// struct Console;
///
/// impl NotificationSink for Console {
///     fn notify(&self, message: &str, severity: Severity) {
///         println!("[{severity}] {message}");
///     }
/// }
/// ```
pub trait NotificationSink: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, message: &str, severity: Severity);
}

impl<F> NotificationSink for F
where
    F: Fn(&str, Severity) + Send + Sync,
{
    fn notify(&self, message: &str, severity: Severity) {
        self(message, severity)
    }
}

/// Confirmation step in front of destructive actions.
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the user whether the item identified by `label` may be removed.
    ///
    /// Returns `true` when the user agreed.
    fn confirm(&self, label: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, label: &str) -> bool {
        self(label)
    }
}

/// Signal which tells the caller to reload / refresh its view.
pub trait RefreshSignal: Send + Sync {
    /// Refresh the view.
    fn refresh(&self);
}

impl<F> RefreshSignal for F
where
    F: Fn() + Send + Sync,
{
    fn refresh(&self) {
        self()
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn forward_notification_to_closure() {
        let received = Mutex::new(Vec::new());
        let sink = |message: &str, severity: Severity| {
            received.lock().unwrap().push((message.to_string(), severity));
        };

        sink.notify("saved", Severity::Success);

        assert_eq!(
            received.into_inner().unwrap(),
            vec![("saved".to_string(), Severity::Success)]
        );
    }

    #[test]
    fn forward_label_to_prompt() {
        let prompt = |label: &str| label == "Post 5";

        assert!(prompt.confirm("Post 5"));
        assert!(!prompt.confirm("Post 6"));
    }

    #[test]
    fn display_severity_in_lower_case() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Danger.to_string(), "danger");
    }
}

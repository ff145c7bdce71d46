//! User-facing notification channel
//!
//! Notifications are short, severity-tagged messages shown to the user
//! as the planner works: progress, success, degraded-mode warnings, and
//! errors. They never carry raw API bodies or parser output; those go to
//! the tracing log instead.

use colored::Colorize;
use std::fmt;

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral progress information
    Info,
    /// The requested operation completed
    Success,
    /// Degraded but functional (e.g. fallback mode)
    Warning,
    /// The operation failed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Success => write!(f, "OK"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl Severity {
    /// Get a colored tag representation of this severity
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::notify::Severity;
    ///
    /// let tag = Severity::Warning.colored_tag();
    /// assert!(tag.contains("WARN"));
    /// ```
    pub fn colored_tag(&self) -> String {
        match self {
            Self::Info => format!("[{}]", "INFO".cyan()),
            Self::Success => format!("[{}]", "OK".green()),
            Self::Warning => format!("[{}]", "WARN".yellow()),
            Self::Error => format!("[{}]", "ERROR".red()),
        }
    }
}

/// Sink for user-facing notifications
///
/// The controller talks to the user exclusively through this trait so the
/// presentation (terminal, test recorder) stays out of the orchestration
/// logic. A new notification conceptually replaces the previous one; the
/// terminal implementation just prints each in turn.
pub trait Notifier: Send + Sync {
    /// Show a notification to the user
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that prints colored tags to stdout
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        println!("{} {}", severity.colored_tag(), message);
        match severity {
            Severity::Warning => tracing::warn!("{}", message),
            Severity::Error => tracing::error!("{}", message),
            _ => tracing::info!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Success.to_string(), "OK");
        assert_eq!(Severity::Warning.to_string(), "WARN");
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_colored_tags_contain_severity_names() {
        assert!(Severity::Info.colored_tag().contains("INFO"));
        assert!(Severity::Success.colored_tag().contains("OK"));
        assert!(Severity::Warning.colored_tag().contains("WARN"));
        assert!(Severity::Error.colored_tag().contains("ERROR"));
    }

    #[test]
    fn test_terminal_notifier_is_usable_as_trait_object() {
        let notifier: Box<dyn Notifier> = Box::<TerminalNotifier>::default();
        notifier.notify(Severity::Info, "hello");
    }
}

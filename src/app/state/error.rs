use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// git refused, but nothing is wrong with the repository
    Warning,
    Error,
}

impl ErrorSeverity {
    pub fn label(self) -> &'static str {
        match self {
            ErrorSeverity::Warning => "WARNING",
            ErrorSeverity::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
    pub suggestions: Vec<String>,
}

impl ErrorState {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let severity = crate::app::recovery::get_severity(&message);
        let suggestions = crate::app::recovery::get_suggestions(&message);
        Self {
            message,
            timestamp: Local::now(),
            severity,
            suggestions,
        }
    }
}

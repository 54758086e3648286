use std::fmt;

/// The fixed set of operations offered by the menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    CheckStatus,
    StageAll,
    Commit,
    Push,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::CheckStatus,
        MenuAction::StageAll,
        MenuAction::Commit,
        MenuAction::Push,
        MenuAction::Exit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::CheckStatus => "Check repository status",
            MenuAction::StageAll => "Add changes",
            MenuAction::Commit => "Commit changes",
            MenuAction::Push => "Push to master branch",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one external command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub output: String,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            succeeded: true,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            succeeded: false,
            error_message: Some(message.into()),
        }
    }

    /// Error text for a failed result, empty for a successful one.
    #[must_use]
    pub fn error_text(&self) -> &str {
        self.error_message.as_deref().unwrap_or_default()
    }
}

impl From<anyhow::Result<String>> for CommandResult {
    fn from(result: anyhow::Result<String>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_in_display_order() {
        let labels: Vec<_> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Check repository status",
                "Add changes",
                "Commit changes",
                "Push to master branch",
                "Exit",
            ]
        );
    }

    #[test]
    fn test_command_result_from_anyhow() {
        let ok: CommandResult = Ok::<_, anyhow::Error>("clean".to_string()).into();
        assert!(ok.succeeded);
        assert_eq!(ok.output, "clean");
        assert_eq!(ok.error_text(), "");

        let err: CommandResult = Err::<String, _>(anyhow::anyhow!("boom")).into();
        assert!(!err.succeeded);
        assert_eq!(err.error_text(), "boom");
    }
}

use crate::app::state::ErrorSeverity;

/// A refusal that leaves the repository untouched is a warning; anything else
/// is an error.
#[must_use]
pub fn get_severity(msg: &str) -> ErrorSeverity {
    let msg_lower = msg.to_lowercase();
    if msg_lower.contains("nothing to commit")
        || msg_lower.contains("no changes added to commit")
        || msg_lower.contains("nothing added to commit")
    {
        ErrorSeverity::Warning
    } else {
        ErrorSeverity::Error
    }
}

/// Hints for common git failures, matched on the error text.
#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("nothing to commit") || msg_lower.contains("no changes added to commit")
    {
        suggestions.push("Stage your changes first with \"Add changes\"".to_string());
    }

    if msg_lower.contains("please tell me who you are") {
        suggestions.push(
            "Try running: git config --global user.name \"Your Name\" and user.email".to_string(),
        );
    }

    if msg_lower.contains("rejected") || msg_lower.contains("non-fast-forward") {
        suggestions.push("Try running: git pull origin master (then push again)".to_string());
    }

    if msg_lower.contains("src refspec master does not match any") {
        suggestions.push("The local branch is not named master, or has no commits yet".to_string());
    }

    if msg_lower.contains("does not appear to be a git repository")
        || msg_lower.contains("no such remote")
    {
        suggestions.push("Try running: git remote add origin <url>".to_string());
    }

    if msg_lower.contains("could not read username")
        || msg_lower.contains("authentication failed")
        || msg_lower.contains("permission denied (publickey)")
    {
        suggestions.push("Check your credentials or SSH key for the remote".to_string());
    }

    if msg_lower.contains("not a git repository") {
        suggestions.push("Run the assistant from the root of a git repository".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions("nothing to commit, working tree clean");
        assert!(s.contains(&"Stage your changes first with \"Add changes\"".to_string()));

        let s = get_suggestions(" ! [rejected]        master -> master (fetch first)");
        assert!(s.contains(&"Try running: git pull origin master (then push again)".to_string()));

        let s = get_suggestions("error: src refspec master does not match any");
        assert_eq!(s.len(), 1);

        let s = get_suggestions("fatal: 'origin' does not appear to be a git repository");
        assert!(s.contains(&"Try running: git remote add origin <url>".to_string()));

        assert!(get_suggestions("something unexpected").is_empty());
    }

    #[test]
    fn test_severity() {
        assert_eq!(
            get_severity("On branch master\nnothing to commit, working tree clean"),
            ErrorSeverity::Warning
        );
        assert_eq!(
            get_severity("no changes added to commit (use \"git add\")"),
            ErrorSeverity::Warning
        );
        assert_eq!(
            get_severity("fatal: Unable to create '.git/index.lock': File exists."),
            ErrorSeverity::Error
        );
    }
}

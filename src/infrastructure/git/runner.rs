use crate::domain::models::CommandResult;
use std::path::Path;
use tokio::process::Command;

/// Runs `program` with `args` in `cwd` and waits for it to exit.
///
/// Arguments are handed to the OS as a vector, never through a shell, so
/// user-supplied text (such as a commit message) reaches the program verbatim.
/// On success the trimmed stdout is returned. On failure the error message is
/// the trimmed stderr, falling back to stdout and then to a description of the
/// exit status.
///
/// Dropping the returned future does not kill the child. git is left to finish
/// so it never leaves a stale `.git/index.lock` behind.
pub async fn run(program: &str, args: &[&str], cwd: &Path) -> CommandResult {
    log::debug!("running {} {:?} in {}", program, args, cwd.display());

    let output = match Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            log::warn!("failed to spawn {program}: {e}");
            return CommandResult::failure(format!("Failed to run {program}: {e}"));
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if output.status.success() {
        return CommandResult::success(stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let message = if !stderr.is_empty() {
        stderr
    } else if !stdout.is_empty() {
        stdout
    } else {
        format!(
            "Command failed: {} ({})",
            std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" "),
            output.status
        )
    };
    log::warn!("{program} {args:?} failed: {message}");
    CommandResult::failure(message)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_trims_stdout() {
        let cwd = std::env::temp_dir();
        let result = run("sh", &["-c", "printf '  hello\\n\\n'"], &cwd).await;
        assert!(result.succeeded);
        assert_eq!(result.output, "hello");
        assert!(result.error_message.is_none());
    }

    #[tokio::test]
    async fn test_failure_prefers_stderr() {
        let cwd = std::env::temp_dir();
        let result = run("sh", &["-c", "echo out; echo 'fatal: oops' >&2; exit 3"], &cwd).await;
        assert!(!result.succeeded);
        assert_eq!(result.error_text(), "fatal: oops");
    }

    #[tokio::test]
    async fn test_failure_without_output_describes_status() {
        let cwd = std::env::temp_dir();
        let result = run("sh", &["-c", "exit 2"], &cwd).await;
        assert!(!result.succeeded);
        assert!(result.error_text().starts_with("Command failed: sh -c exit 2"));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let cwd = std::env::temp_dir();
        let result = run("definitely-not-a-real-program-xyz", &[], &cwd).await;
        assert!(!result.succeeded);
        assert!(result
            .error_text()
            .starts_with("Failed to run definitely-not-a-real-program-xyz"));
    }

    #[tokio::test]
    async fn test_abandoned_command_still_finishes() {
        let dir = tempfile::tempdir().unwrap();
        let abandoned = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            run("sh", &["-c", "sleep 0.3; touch finished"], dir.path()),
        )
        .await;
        assert!(abandoned.is_err());

        let marker = dir.path().join("finished");
        for _ in 0..50 {
            if marker.exists() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let result = run("ls", &[], dir.path()).await;
        assert!(result.succeeded);
        assert!(result.output.contains("marker.txt"));
    }
}

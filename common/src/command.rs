//! Command execution utilities
//!
//! Runs shell command strings against the host's docker and mysql CLIs and
//! captures their output without ever failing the caller.

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

const SHELL: &str = "sh";

/// Result of a shell command execution.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run a command string under `sh -c` and capture its output.
///
/// The string may use pipes, redirections and quoting. This never returns an
/// error: a failure to spawn or collect the subprocess is reported as exit
/// code 1 with the error text on stderr, so callers treat every probe
/// uniformly.
///
/// There is no timeout. A hung command blocks the caller indefinitely.
#[instrument(skip_all, fields(cmd = %cmd))]
pub async fn shell(cmd: &str) -> CommandOutput {
    shell_with(SHELL, cmd).await
}

async fn shell_with(shell: &str, cmd: &str) -> CommandOutput {
    debug!("Running command");

    let result = Command::new(shell)
        .arg("-c")
        .arg(cmd)
        .stdin(Stdio::null())
        .output()
        .await;

    match result {
        Ok(output) => CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            code: output.status.code().unwrap_or(1),
        },
        Err(e) => CommandOutput {
            stdout: String::new(),
            stderr: format!("Failed to execute {}: {}", cmd, e),
            code: 1,
        },
    }
}

/// Run a command inside a running container.
///
/// # Example
/// ```ignore
/// let out = docker_exec("wordpress", "wp core is-installed --allow-root").await;
/// ```
pub async fn docker_exec(container: &str, cmd: &str) -> CommandOutput {
    shell(&format!("docker exec {} {}", container, cmd)).await
}

/// Run a SQL statement through the mysql client inside the database container.
///
/// The statement is passed via `-e` and may contain single quotes.
pub async fn mysql_query(container: &str, sql: &str) -> CommandOutput {
    shell(&format!("docker exec {} mysql -e \"{}\"", container, sql)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout_on_success() {
        let out = shell("echo hello").await;
        assert_eq!(out.code, 0);
        assert!(out.success());
        assert_eq!(out.stdout, "hello");
        assert!(out.stderr.is_empty());
    }

    #[tokio::test]
    async fn captures_exit_code_and_stderr() {
        let out = shell("echo oops >&2; exit 3").await;
        assert_eq!(out.code, 3);
        assert!(!out.success());
        assert_eq!(out.stderr, "oops");
    }

    #[tokio::test]
    async fn supports_pipes() {
        let out = shell("printf 'mysql\ninformation_schema\nwordpress\n' | grep wordpress").await;
        assert!(out.success());
        assert_eq!(out.stdout, "wordpress");
    }

    #[tokio::test]
    async fn spawn_failure_becomes_exit_one() {
        let out = shell_with("/nonexistent/shell", "echo hi").await;
        assert_eq!(out.code, 1);
        assert!(out.stdout.is_empty());
        assert!(!out.stderr.is_empty());
    }
}

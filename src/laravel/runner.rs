//! Shell command execution
//!
//! Commands are run as `cd "<dir>" && <program> <args>` through the system
//! shell. Arguments come straight from user input and are not escaped; only
//! the directory is quoted.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use thiserror::Error;

use super::artisan::ARTISAN;

/// Number of output characters kept for the status line
pub const OUTPUT_PREVIEW_CHARS: usize = 100;

/// Address reported for `php artisan serve`
pub const SERVER_ADDRESS: &str = "http://127.0.0.1:8000";

/// Artisan command that starts the development server
const SERVE_COMMAND: &str = "serve";

/// Directory change understood by the shell; `/d` also switches drives
#[cfg(windows)]
const CHANGE_DIR: &str = "cd /d";

#[cfg(not(windows))]
const CHANGE_DIR: &str = "cd";

/// A single command to execute in a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub directory: PathBuf,
    pub program: String,
    pub args: String,
}

impl Invocation {
    pub fn new(
        directory: impl Into<PathBuf>,
        program: impl Into<String>,
        args: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            program: program.into(),
            args: args.into(),
        }
    }

    /// `php artisan <command>` in a project directory
    pub fn artisan(directory: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self::new(directory, ARTISAN, command)
    }

    /// Command line handed to the shell
    pub fn command_line(&self) -> String {
        let args = self.args.trim();
        if args.is_empty() {
            format!(
                "{} \"{}\" && {}",
                CHANGE_DIR,
                self.directory.display(),
                self.program
            )
        } else {
            format!(
                "{} \"{}\" && {} {}",
                CHANGE_DIR,
                self.directory.display(),
                self.program,
                args
            )
        }
    }

    /// Whether this starts a server that never exits on its own
    pub fn is_server(&self) -> bool {
        self.program == ARTISAN && self.args.split_whitespace().next() == Some(SERVE_COMMAND)
    }
}

/// Captured output of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// What a successful run reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The command exited with status 0
    Completed { message: String },
    /// A server was spawned; its exit is not awaited
    ServerRunning { pid: u32 },
}

impl RunOutcome {
    /// Status line shown to the user
    pub fn message(&self) -> String {
        match self {
            Self::Completed { message } => message.clone(),
            Self::ServerRunning { .. } => format!("Server running at {}", SERVER_ADDRESS),
        }
    }
}

/// Errors from running a command
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Command failed: {command}{}", failure_detail(.stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn failure_detail(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Run an invocation and summarize the result
///
/// Server invocations are spawned and reported as running immediately;
/// everything else is awaited and its stdout previewed.
pub fn run(invocation: &Invocation) -> Result<RunOutcome, RunError> {
    if invocation.is_server() {
        let pid = spawn_detached(invocation)?;
        return Ok(RunOutcome::ServerRunning { pid });
    }

    let output = execute(invocation)?;
    Ok(RunOutcome::Completed {
        message: preview(&output.stdout),
    })
}

/// Run an invocation to completion, failing on a non-zero exit status
pub fn execute(invocation: &Invocation) -> Result<CommandOutput, RunError> {
    let command = invocation.command_line();
    log::debug!("Executing: {}", command);

    let Output {
        status,
        stdout,
        stderr,
    } = shell(&command)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| RunError::Spawn {
            command: command.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&stdout).into_owned();
    let stderr = String::from_utf8_lossy(&stderr).into_owned();
    log::debug!("Exited with {}", status);

    if !status.success() {
        return Err(RunError::Failed {
            command,
            code: status.code(),
            stderr,
        });
    }

    Ok(CommandOutput { stdout, stderr })
}

/// Start an invocation without waiting for it, returning its pid
#[allow(clippy::zombie_processes)]
fn spawn_detached(invocation: &Invocation) -> Result<u32, RunError> {
    let command = invocation.command_line();
    log::debug!("Spawning: {}", command);

    // The child outlives this process.
    let child = shell(&command)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|source| RunError::Spawn { command, source })?;

    Ok(child.id())
}

/// First [`OUTPUT_PREVIEW_CHARS`] characters of `output`, or `Success` if empty
pub fn preview(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return "Success".to_string();
    }
    trimmed.chars().take(OUTPUT_PREVIEW_CHARS).collect()
}

#[cfg(windows)]
fn shell(command_line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command_line);
    cmd
}

#[cfg(not(windows))]
fn shell(command_line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command_line);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_command_line() {
        let invocation = Invocation::artisan("/srv/app", "migrate:fresh --seed");
        assert_eq!(
            invocation.command_line(),
            "cd \"/srv/app\" && php artisan migrate:fresh --seed"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_command_line_without_args() {
        let invocation = Invocation::new("/srv/app", "ls", " ");
        assert_eq!(invocation.command_line(), "cd \"/srv/app\" && ls");
    }

    #[cfg(windows)]
    #[test]
    fn test_command_line_switches_drive() {
        let invocation = Invocation::artisan(r"D:\sites\blog", "migrate");
        assert_eq!(
            invocation.command_line(),
            r#"cd /d "D:\sites\blog" && php artisan migrate"#
        );
    }

    #[test]
    fn test_is_server() {
        assert!(Invocation::artisan("/srv/app", "serve").is_server());
        assert!(Invocation::artisan("/srv/app", "serve --port=9000").is_server());
        assert!(!Invocation::artisan("/srv/app", "queue:work").is_server());
        assert!(!Invocation::new("/srv/app", "echo", "serve").is_server());
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview(""), "Success");
        assert_eq!(preview("  \n"), "Success");
        assert_eq!(preview("Done.\n"), "Done.");

        let long = "a".repeat(150);
        assert_eq!(preview(&long).len(), OUTPUT_PREVIEW_CHARS);
    }

    #[test]
    fn test_preview_multibyte() {
        let long = "é".repeat(150);
        assert_eq!(preview(&long).chars().count(), OUTPUT_PREVIEW_CHARS);
    }

    #[test]
    fn test_server_message() {
        let outcome = RunOutcome::ServerRunning { pid: 42 };
        assert_eq!(outcome.message(), "Server running at http://127.0.0.1:8000");
    }

    #[test]
    fn test_failed_error_message() {
        let err = RunError::Failed {
            command: "cd \"/srv\" && php artisan migrate".to_string(),
            code: Some(1),
            stderr: "SQLSTATE[HY000] [2002] Connection refused\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command failed: cd \"/srv\" && php artisan migrate\nSQLSTATE[HY000] [2002] Connection refused"
        );

        let quiet = RunError::Failed {
            command: "false".to_string(),
            code: Some(1),
            stderr: String::new(),
        };
        assert_eq!(quiet.to_string(), "Command failed: false");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_success_reports_output() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation::new(
            dir.path(),
            "echo",
            "Migrated: 2024_01_01_000000_create_users_table",
        );

        let outcome = run(&invocation).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Completed {
                message: "Migrated: 2024_01_01_000000_create_users_table".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_runs_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("artisan"), "").unwrap();

        let output = execute(&Invocation::new(dir.path(), "ls", "")).unwrap();
        assert!(output.stdout.contains("artisan"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation::new(dir.path(), "echo oops >&2; exit", "1");

        match run(&invocation) {
            Err(RunError::Failed { code, stderr, .. }) => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr.trim(), "oops");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_missing_directory_fails() {
        let invocation = Invocation::new("/nonexistent/path/that/does/not/exist", "echo", "hi");
        assert!(matches!(
            run(&invocation),
            Err(RunError::Failed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_serve_does_not_wait() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation::artisan(dir.path(), "serve");
        let outcome = run(&invocation).unwrap();
        assert!(matches!(outcome, RunOutcome::ServerRunning { .. }));
    }
}

//! External command executor

use crate::error::CommandExecutionError;
use tokio::process::Command;
use tracing::debug;

/// Runs a shell command string and returns its standard output.
#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> Result<String, CommandExecutionError>;
}

/// Runs commands through `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<String, CommandExecutionError> {
        debug!("Running command: {}", command);
        // output() drains both pipes before waiting on the exit status
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CommandExecutionError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandExecutionError::Failed {
                command: command.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

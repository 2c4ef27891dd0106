//! Group membership enumeration

use crate::error::CommandExecutionError;
use crate::executor::CommandRunner;

/// Lists group members, one per output line. Entries are trimmed but empty ones are kept.
pub async fn list_group_members<R: CommandRunner + ?Sized>(
    runner: &R,
    command: &str,
) -> Result<Vec<String>, CommandExecutionError> {
    let output = runner.run(command).await?;
    Ok(output
        .trim()
        .split('\n')
        .map(|name| name.trim().to_string())
        .collect())
}

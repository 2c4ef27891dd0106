//! Fan-out collection over all group members

use crate::collector::{UserStat, UserStatCollector};
use crate::error::CommandExecutionError;
use crate::executor::CommandRunner;
use crate::group::list_group_members;
use std::sync::Arc;
use tracing::{error, info};

/// Collects every user concurrently. Results keep the input order; failed users are left out.
pub async fn collect_all<R>(
    collector: Arc<UserStatCollector<R>>,
    usernames: Vec<String>,
) -> Vec<UserStat>
where
    R: CommandRunner + 'static,
{
    let handles: Vec<_> = usernames
        .into_iter()
        .map(|username| {
            let collector = Arc::clone(&collector);
            let name = username.clone();
            let handle = tokio::spawn(async move { collector.collect(&name).await });
            (handle, username)
        })
        .collect();

    let mut stats = Vec::with_capacity(handles.len());
    for (handle, username) in handles {
        match handle.await {
            Ok(Some(stat)) => stats.push(stat),
            Ok(None) => {}
            Err(e) => error!("Collection task for {:?} failed: {}", username, e),
        }
    }
    stats
}

/// Enumerates the group, then collects all members.
pub async fn run<R>(
    collector: Arc<UserStatCollector<R>>,
) -> Result<Vec<UserStat>, CommandExecutionError>
where
    R: CommandRunner + 'static,
{
    let usernames =
        list_group_members(collector.runner(), &collector.commands().group_members).await?;
    info!("Collecting stats for {} group members", usernames.len());
    Ok(collect_all(collector, usernames).await)
}

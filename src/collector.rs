//! Per-user stat collector

mod ps;

pub use ps::{parse_process_line, parse_process_table, ProcessSample};

use crate::config::CommandsConfig;
use crate::error::CollectError;
use crate::executor::CommandRunner;
use serde::Serialize;
use tracing::{debug, warn};

/// Aggregated process usage for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStat {
    pub username: String,
    #[serde(rename = "upn")]
    pub directory_identity: Option<String>,
    #[serde(rename = "rss_total")]
    pub resident_memory_total: u64,
    #[serde(rename = "pmem_total")]
    pub memory_percent_total: f64,
    #[serde(rename = "pcpu_total")]
    pub cpu_percent_total: f64,
}

impl UserStat {
    /// Sums samples in the order given.
    pub fn from_samples(
        username: &str,
        directory_identity: Option<String>,
        samples: &[ProcessSample],
    ) -> Self {
        let mut stat = UserStat {
            username: username.to_string(),
            directory_identity,
            resident_memory_total: 0,
            memory_percent_total: 0.0,
            cpu_percent_total: 0.0,
        };
        for sample in samples {
            stat.resident_memory_total += sample.rss;
            stat.memory_percent_total += sample.pmem;
            stat.cpu_percent_total += sample.pcpu;
        }
        stat
    }
}

pub struct UserStatCollector<R> {
    runner: R,
    commands: CommandsConfig,
}

impl<R: CommandRunner> UserStatCollector<R> {
    pub fn new(runner: R, commands: CommandsConfig) -> Self {
        Self { runner, commands }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn commands(&self) -> &CommandsConfig {
        &self.commands
    }

    /// Collects stats for `username`, or `None` if the process lookup failed.
    pub async fn collect(&self, username: &str) -> Option<UserStat> {
        match self.try_collect(username).await {
            Ok(stat) => Some(stat),
            Err(e) => {
                warn!("Dropping user {:?}: {}", username, e);
                None
            }
        }
    }

    pub async fn try_collect(&self, username: &str) -> Result<UserStat, CollectError> {
        let identity = self.lookup_identity(username).await;
        let output = self
            .runner
            .run(&self.commands.process_command(username))
            .await?;
        let samples = parse_process_table(&output)?;
        Ok(UserStat::from_samples(username, identity, &samples))
    }

    async fn lookup_identity(&self, username: &str) -> Option<String> {
        match self.runner.run(&self.commands.identity_command(username)).await {
            Ok(out) => {
                let upn = out.trim();
                if upn.is_empty() {
                    None
                } else {
                    Some(upn.to_string())
                }
            }
            Err(e) => {
                debug!("No directory identity for {:?}: {}", username, e);
                None
            }
        }
    }
}

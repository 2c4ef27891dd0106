//! Scripted stand-in for the external tools
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use sys_stat::error::CommandExecutionError;
use sys_stat::executor::CommandRunner;

#[derive(Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, Result<String, String>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, command: &str, stdout: &str) -> Self {
        self.responses.insert(command.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(mut self, command: &str, stderr: &str) -> Self {
        self.responses.insert(command.to_string(), Err(stderr.to_string()));
        self
    }

    pub fn delay(mut self, command: &str, delay: Duration) -> Self {
        self.delays.insert(command.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &str) -> Result<String, CommandExecutionError> {
        self.calls.lock().unwrap().push(command.to_string());
        if let Some(delay) = self.delays.get(command) {
            tokio::time::sleep(*delay).await;
        }
        match self.responses.get(command) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(stderr)) => Err(CommandExecutionError::Failed {
                command: command.to_string(),
                stderr: stderr.clone(),
            }),
            None => Err(CommandExecutionError::Failed {
                command: command.to_string(),
                stderr: "unknown command".to_string(),
            }),
        }
    }
}

pub fn identity(username: &str) -> String {
    format!("adquery user -P {}", username)
}

pub fn process_table(username: &str) -> String {
    format!("ps -hax -o rss,pmem,pcpu -u {}", username)
}

pub const GROUP_MEMBERS: &str = "adquery group -m";

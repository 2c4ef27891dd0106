//! Configuration management (TOML)

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const USERNAME_PLACEHOLDER: &str = "{username}";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub commands: CommandsConfig,
}

/// Command templates for the external tools. `{username}` is substituted verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    pub group_members: String,
    pub identity_lookup: String,
    pub process_table: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        CommandsConfig {
            group_members: "adquery group -m".to_string(),
            identity_lookup: "adquery user -P {username}".to_string(),
            process_table: "ps -hax -o rss,pmem,pcpu -u {username}".to_string(),
        }
    }
}

impl CommandsConfig {
    pub fn identity_command(&self, username: &str) -> String {
        self.identity_lookup.replace(USERNAME_PLACEHOLDER, username)
    }

    pub fn process_command(&self, username: &str) -> String {
        self.process_table.replace(USERNAME_PLACEHOLDER, username)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

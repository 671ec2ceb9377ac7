//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ClientConfig;

/// nextmeetup - When is the next meetup?
#[derive(Debug, Parser)]
#[command(name = "nextmeetup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "NEXTMEETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Meetup group page URL
    #[arg(long)]
    pub url: Option<String>,

    /// Group name shown in the report header
    #[arg(long)]
    pub group_name: Option<String>,

    /// User-Agent header sent with the request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut ClientConfig) {
        if self.debug {
            config.debug = true;
        }
        if let Some(ref url) = self.url {
            config.meetup.url = url.clone();
        }
        if let Some(ref name) = self.group_name {
            config.meetup.group_name = name.clone();
        }
        if let Some(ref agent) = self.user_agent {
            config.meetup.user_agent = agent.clone();
        }
        if let Some(secs) = self.timeout {
            config.meetup.request_timeout_secs = Some(secs);
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

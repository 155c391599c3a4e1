pub mod create;

use std::time::Duration;

use appctl_common::config::{Config, DEFAULT_API_URL, DEFAULT_RETRIES, DEFAULT_TIMEOUT};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "appctl")]
#[command(about = "Manage applications on a remote service.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the management API
    #[arg(long, global = true, env = "APPCTL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout per attempt, in seconds
    #[arg(
        long,
        global = true,
        env = "APPCTL_TIMEOUT",
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs()
    )]
    pub timeout: u64,

    /// Total attempts for a request before giving up
    #[arg(long, global = true, env = "APPCTL_RETRIES", default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Hide headers and progress output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Fail instead of prompting for missing values
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Create a new app
    #[command(alias = "c")]
    Create {
        /// Name of the application
        app_name: Option<String>,
        /// Application type: e2ee or pure
        #[arg(long = "type", value_name = "TYPE")]
        app_type: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            retries: self.retries,
            quiet: self.quiet,
            disable_input: self.no_input,
        }
    }
}

//! Command-line options.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Options for a single update run.
///
/// `-h` is taken by `--hostname`, so help is only available as `--help`.
#[derive(Debug, Clone, Parser)]
#[command(name = "dyndns-update")]
#[command(about = "Push your public IP address to dyndns.it or dynv6.com")]
#[command(version, disable_help_flag = true, arg_required_else_help = true)]
pub struct Options {
    /// The hostname to update
    #[arg(short = 'h', long)]
    pub hostname: String,

    /// The dyndns.it username
    #[arg(short, long, env = "DYNDNS_USERNAME")]
    pub username: Option<String>,

    /// The dyndns.it password
    #[arg(short, long, env = "DYNDNS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// The dynv6.com HTTP token
    #[arg(short, long, env = "DYNDNS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Optional TOML file overriding endpoints and timeout
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Options {
    /// Options for the given hostname with no credentials set.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            username: None,
            password: None,
            token: None,
            config: None,
            help: None,
        }
    }

    /// Token, if given and non-empty.
    pub fn token(&self) -> Option<&str> {
        non_empty(&self.token)
    }

    /// Username, if given and non-empty.
    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    /// Password, if given and non-empty.
    pub fn password(&self) -> Option<&str> {
        non_empty(&self.password)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

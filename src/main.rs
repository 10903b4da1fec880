//! dyndns-update - push your public IP address to a dynamic DNS service.

use clap::error::ErrorKind;
use clap::Parser;
use dyndns_update::providers::UpdateResult;
use dyndns_update::{Config, DdnsError, Options};
use tracing_subscriber::EnvFilter;

/// Exit code for every failed run.
const FAILURE: i32 = -1;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let options = match Options::try_parse() {
        Ok(options) => options,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            println!("{}", parse_failure(&e));
            std::process::exit(FAILURE);
        }
    };

    let code = match cmd_update(options).await {
        Ok(true) => 0,
        Ok(false) => FAILURE,
        Err(e) => {
            println!("{:#}", e);
            FAILURE
        }
    };
    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Stdout text for a command line that could not be parsed.
fn parse_failure(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    if e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand {
        rendered
    } else {
        format!("Errors:\n{}", rendered.trim_end())
    }
}

async fn cmd_update(options: Options) -> anyhow::Result<bool> {
    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    let (lines, success) = report(dyndns_update::run(&options, &config).await);
    for line in &lines {
        println!("{}", line);
    }
    Ok(success)
}

/// Stdout lines for the outcome of a run, and whether it succeeded.
fn report(outcome: dyndns_update::Result<UpdateResult>) -> (Vec<String>, bool) {
    match outcome {
        Ok(result) => {
            let mut lines = addresses(&result);
            lines.push(format!("IP address updated: {}", result.response.trim()));
            (lines, true)
        }
        Err(DdnsError::UpdateRejected(result)) => {
            let mut lines = addresses(&result);
            lines.push(format!("Failed to update IP address: {}", result.response.trim()));
            (lines, false)
        }
        Err(e @ DdnsError::IpDetection(_)) => {
            tracing::debug!("{}", e);
            (vec!["Cannot get public IP address".to_string()], false)
        }
        Err(e @ DdnsError::Network(_)) => {
            (vec![format!("Failed to update IP address: {}", e)], false)
        }
        Err(e) => (vec![e.to_string()], false),
    }
}

fn addresses(result: &UpdateResult) -> Vec<String> {
    let mut lines = vec![format!("Public IP address: {}", result.ipv4)];
    if let Some(ipv6) = &result.ipv6 {
        lines.push(format!("Public IPv6 address: {}", ipv6));
    }
    lines
}

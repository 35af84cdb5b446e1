use std::io::{self, BufRead};
use std::path::PathBuf;

use eyre::{Result, bail};
use log::{debug, info};

mod cli;

use cli::{Cli, OutputFormat};
use narrify::SubmissionState;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("narrify.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("narrify")
        .join("logs")
}

fn build_after_help() -> String {
    let config_path = narrify::config::config_path();
    let config_line = if config_path.exists() {
        format!("  \x1b[32m✅\x1b[0m {}", config_path.display())
    } else {
        format!("  \x1b[33m–\x1b[0m  {} (not found, using defaults)", config_path.display())
    };

    let log_path = log_dir().join("narrify.log");

    format!(
        "\nSUPPORTED URLS:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n\nCONFIG:\n{config_line}\n\nLogs are written to: {}",
        log_path.display()
    )
}

fn parse_format(name: &str) -> Option<OutputFormat> {
    match name.to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = narrify::config::Config::load().unwrap_or_default();

    // CLI flags take priority over config
    let endpoint = config.resolve_endpoint(cli.endpoint.as_deref());
    let timeout = config.resolve_timeout(cli.timeout);
    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(parse_format))
        .unwrap_or(OutputFormat::Text);

    let client = narrify::SummaryClient::with_timeout(endpoint, timeout)?;

    if cli.verbose {
        eprintln!("Endpoint: {}", client.endpoint());
        if let Some(timeout) = timeout {
            eprintln!("Timeout: {}s", timeout.as_secs());
        }
    }
    debug!("Endpoint: {}, timeout: {timeout:?}, format: {format:?}", client.endpoint());

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.iter().all(|u| u.trim().is_empty()) {
        bail!("no URL provided\n\nUsage: narrify <URL>\n       echo <URL> | narrify");
    }

    let mut controller = narrify::Controller::new();
    let mut rendered = Vec::new();
    let mut failures = 0usize;

    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        if cli.verbose {
            eprintln!("Narrifying {url_input} ...");
        }

        match controller.submit(&client, url_input).await {
            SubmissionState::Succeeded => {
                if let Some(result) = controller.state().result() {
                    if cli.verbose {
                        eprintln!("Video: {} ({})", result.title, result.video_id);
                    }
                    rendered.push(match format {
                        OutputFormat::Text => narrify::output::render_text(result),
                        OutputFormat::Json => narrify::output::render_json(result)?,
                    });
                }
            }
            state => {
                failures += 1;
                if let Some(err) = controller.state().error() {
                    eprintln!("{url_input}: {}", narrify::output::render_error(err));
                } else {
                    debug!("Submission ended in unexpected state {state}");
                }
            }
        }
    }

    if !rendered.is_empty() {
        let separator = match format {
            OutputFormat::Text => "\n\n---\n\n",
            OutputFormat::Json => "\n",
        };
        let rendered = rendered.join(separator);

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    if failures > 0 {
        bail!("{failures} submission(s) failed");
    }

    Ok(())
}

mod report;

use cf_core::config::{self, Config, LogConfig};
use cf_core::sample::SampleLoader;
use cf_core::types::ConversionStatus;
use cf_core::{Analytics, EventLoader, FunnelError};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cf", about = "Engagement-to-conversion funnel analytics")]
struct Cli {
    /// TOML config file; missing file means defaults.
    #[arg(long, global = true, env = "CF_CONFIG", default_value = "cf.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the JSON API.
    Serve,
    /// Compute every table for a filter and print it.
    Report(ReportArgs),
    /// Print the select-everything filter as JSON.
    Defaults,
    /// Write the built-in sample dataset as JSON lines.
    Sample,
    /// Print the OpenAPI document.
    Openapi,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long = "channel")]
    channels: Vec<String>,
    #[arg(long = "campaign")]
    campaigns: Vec<String>,
    #[arg(long = "indicator")]
    indicators: Vec<String>,
    /// First send date to include (YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Last send date to include (YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,
    #[arg(long, default_value = "any")]
    status: ConversionStatus,
    /// Print the bundle as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log);

    match run(cli.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: &std::path::Path) -> Result<Config, FunnelError> {
    let mut config = config::load_config(path)?;
    config.apply_env(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry().with(filter);
    if log.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(command: Command, config: Config) -> Result<(), FunnelError> {
    match command {
        Command::Serve => {
            let analytics = load_analytics(&config)?;
            let state = cf_serve::AppState::new(analytics);
            cf_serve::serve(state, config.listen_addr())
                .await
                .map_err(|err| FunnelError::Internal {
                    message: format!("serve error: {err}"),
                })
        }
        Command::Report(args) => {
            let analytics = load_analytics(&config)?;
            let selection = report::Selection {
                channels: args.channels,
                campaigns: args.campaigns,
                indicators: args.indicators,
                from: args.from,
                to: args.to,
                status: args.status,
            };
            let spec = report::build_spec(analytics.default_filter(), &selection);
            let bundle = analytics.compute(&spec)?;
            if args.json {
                println!("{}", to_json(&bundle)?);
            } else {
                print!("{}", report::render(&bundle));
            }
            Ok(())
        }
        Command::Defaults => {
            let analytics = load_analytics(&config)?;
            println!("{}", to_json(&analytics.default_filter())?);
            Ok(())
        }
        Command::Sample => {
            let loader = config
                .data
                .sample_base_date
                .map(SampleLoader::from_date)
                .unwrap_or_default();
            for event in loader.load()? {
                let line = serde_json::to_string(&event).map_err(|err| FunnelError::Internal {
                    message: err.to_string(),
                })?;
                println!("{line}");
            }
            Ok(())
        }
        Command::Openapi => {
            println!("{}", cf_serve::openapi::generate_spec());
            Ok(())
        }
    }
}

fn load_analytics(config: &Config) -> Result<Analytics, FunnelError> {
    let loader = config.loader();
    Analytics::from_loader(loader.as_ref(), config.metric_options())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, FunnelError> {
    serde_json::to_string_pretty(value).map_err(|err| FunnelError::Internal {
        message: err.to_string(),
    })
}

mod cli;
mod config;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let config_path = args
        .global
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_path);
    let loaded = AppConfig::load_or_default(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    //  Logging (stderr, so stdout stays parseable)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if args.global.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    if let Err(e) = &loaded {
        warn!(path = %config_path.display(), "Ignoring unreadable config: {e:#}");
    }

    match args.command {
        cli::Commands::Parse(a) => cli::parse::execute(a, &config),
        cli::Commands::Fmt(a) => cli::fmt::execute(a),
        cli::Commands::Check(a) => cli::check::execute(a),
        cli::Commands::Config(c) => cli::config_cmd::execute(c, &config_path),
    }
}

use std::path::Path;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::AppConfig;

pub fn execute(args: ConfigArgs, path: &Path) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let cfg = AppConfig::load_or_default(path)?;
            println!("{}", serde_json::to_string_pretty(&cfg)?);
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = AppConfig::load_or_default(path)?;
            match key.as_str() {
                "pretty" => cfg.pretty = value.parse()?,
                "log_filter" => cfg.log_filter = value,
                _ => anyhow::bail!("Unknown config key: {key}"),
            }
            cfg.save(path)?;
            println!("Configuration updated.");
        }
    }
    Ok(())
}

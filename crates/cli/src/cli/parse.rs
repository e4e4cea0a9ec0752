use tracing::info;

use crate::cli::{Input, ParseArgs};
use crate::config::AppConfig;

pub fn execute(args: ParseArgs, config: &AppConfig) -> anyhow::Result<()> {
    let input = Input::from_arg(args.path);
    let commands = input.parse()?;
    info!(%input, commands = commands.len(), "Modelfile parsed");

    let json = if args.compact || !config.pretty {
        serde_json::to_string(&commands)?
    } else {
        serde_json::to_string_pretty(&commands)?
    };
    println!("{json}");
    Ok(())
}

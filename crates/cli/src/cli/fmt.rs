use anyhow::Context;
use modelfile_parser::Command;
use tracing::info;

use crate::cli::{FmtArgs, Input};

pub fn execute(args: FmtArgs) -> anyhow::Result<()> {
    let input = Input::from_arg(args.path);
    if args.write && matches!(input, Input::Stdin) {
        anyhow::bail!("--write needs a file path");
    }

    let source = input.read_to_string()?;
    let commands: Vec<Command> = if args.from_json {
        serde_json::from_str(&source)
            .with_context(|| format!("{input} is not a JSON command list"))?
    } else {
        modelfile_parser::parse_str(&source).with_context(|| format!("failed to parse {input}"))?
    };
    let formatted = modelfile_parser::format(&commands);

    if args.check {
        if formatted != source {
            anyhow::bail!("{input} is not formatted");
        }
        info!(%input, "Already formatted");
        return Ok(());
    }

    match &input {
        Input::File(path) if args.write => {
            if formatted == source {
                info!(%input, "Already formatted");
            } else {
                std::fs::write(path, &formatted)
                    .with_context(|| format!("failed to write {input}"))?;
                info!(%input, commands = commands.len(), "Formatted in place");
            }
        }
        _ => print!("{formatted}"),
    }
    Ok(())
}

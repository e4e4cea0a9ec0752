use modelfile_parser::Directive;

use crate::cli::{CheckArgs, Input};

pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let input = Input::from_arg(args.path);
    let commands = input.parse()?;

    let model = commands
        .iter()
        .find(|c| c.is_model())
        .map_or("-", |c| c.args.as_str());
    println!("ok: {} commands, model {model}", commands.len());

    if args.verbose {
        println!("\n{:<10} {:<16} {}", "Directive", "Name", "Value");
        println!("{}", "-".repeat(60));
        for cmd in &commands {
            let directive = Directive::for_command(&cmd.name);
            // Multi-line payloads are cut at the first line.
            let value = match cmd.args.lines().next() {
                Some(first) if first.len() < cmd.args.len() => format!("{first}…"),
                _ => cmd.args.clone(),
            };
            println!("{:<10} {:<16} {}", directive.keyword(), cmd.name, value);
        }
    }
    Ok(())
}

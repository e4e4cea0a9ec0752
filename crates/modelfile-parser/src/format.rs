//! Modelfile formatter — converts parsed commands back into canonical text.
//!
//! The formatter trusts its input: it does not check roles or keys, it
//! only picks the keyword and quotes the payload where needed.

use crate::quote::quote;
use crate::types::{Command, Directive};

/// Format `commands` as a Modelfile, one newline-terminated line each.
pub fn format(commands: &[Command]) -> String {
    let mut out = String::new();
    for cmd in commands {
        out.push_str(&format_command(cmd));
        out.push('\n');
    }
    out
}

/// Format a single command without the trailing newline.
pub fn format_command(cmd: &Command) -> String {
    let directive = Directive::for_command(&cmd.name);
    let keyword = directive.keyword();
    match directive {
        // Model references are written raw.
        Directive::From => format!("{keyword} {}", cmd.args),
        Directive::Message => {
            let (role, content) = cmd.message().unwrap_or((cmd.args.as_str(), ""));
            format!("{keyword} {role} {}", quote(content))
        }
        Directive::Parameter => format!("{keyword} {} {}", cmd.name, quote(&cmd.args)),
        Directive::License | Directive::Template | Directive::System | Directive::Adapter => {
            format!("{keyword} {}", quote(&cmd.args))
        }
    }
}

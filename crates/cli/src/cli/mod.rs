pub mod check;
pub mod config_cmd;
pub mod fmt;
pub mod parse;

use std::fmt as stdfmt;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use modelfile_parser::Command;

#[derive(Parser)]
#[command(
    name = "modelfile",
    version,
    about = "Parse, check and format Modelfiles"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Args, Clone)]
pub struct GlobalArgs {
    /// Configuration file (default: platform config dir).
    #[arg(long, global = true, env = "MODELFILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a Modelfile and print its commands as JSON.
    Parse(ParseArgs),

    /// Print a Modelfile in canonical form.
    Fmt(FmtArgs),

    /// Validate a Modelfile and print a summary.
    Check(CheckArgs),

    /// View / edit configuration.
    Config(ConfigArgs),
}

//  Subcommand argument structs

#[derive(Debug, clap::Args, Clone)]
pub struct ParseArgs {
    /// Modelfile path (`-` or omitted: stdin).
    pub path: Option<PathBuf>,

    /// Single-line JSON regardless of configuration.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct FmtArgs {
    /// Modelfile path (`-` or omitted: stdin).
    pub path: Option<PathBuf>,

    /// Fail if the input is not already formatted.
    #[arg(long, conflicts_with_all = ["write", "from_json"])]
    pub check: bool,

    /// Rewrite the file in place.
    #[arg(long)]
    pub write: bool,

    /// Read a JSON command list (as printed by `parse`) instead of a Modelfile.
    #[arg(long)]
    pub from_json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct CheckArgs {
    /// Modelfile path (`-` or omitted: stdin).
    pub path: Option<PathBuf>,

    /// List every command.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Display the current configuration.
    Show,
    /// Set a configuration value.
    Set { key: String, value: String },
}

//  Input

/// Where a Modelfile is read from.
#[derive(Debug, Clone)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub fn read_to_string(&self) -> anyhow::Result<String> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Parse the input as a Modelfile.
    pub fn parse(&self) -> anyhow::Result<Vec<Command>> {
        let commands = match self {
            Self::Stdin => modelfile_parser::parse(io::stdin().lock()),
            Self::File(path) => modelfile_parser::parse_file(path),
        };
        commands.with_context(|| format!("failed to parse {self}"))
    }
}

impl stdfmt::Display for Input {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

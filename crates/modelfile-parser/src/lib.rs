//! Pure-Rust Modelfile parser and formatter.
//!
//! A Modelfile is a line-oriented list of directives that describe how to
//! build a model:
//!
//! ```text
//! # comment
//! FROM llama3
//! PARAMETER temperature 0.7
//! SYSTEM """You are a helpful assistant."""
//! MESSAGE user "Hello there"
//! ```
//!
//! * **parsing** — a single-pass character state machine turns the text
//!   into [`Command`]s, failing on the first malformed token.
//! * **formatting** — [`format`] writes commands back as canonical text,
//!   quoting values only when needed.

pub mod error;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod quote;
pub mod types;
pub mod validate;

pub use error::{ModelfileError, Result};
pub use format::{format, format_command};
pub use parser::{Parser, parse, parse_file, parse_str};
pub use quote::{UnquoteError, quote, try_unquote, unquote};
pub use types::{Command, Directive, Role};
pub use validate::{is_valid_directive, is_valid_role};

//! Modelfile parser: drives the classifier over a character stream.
//!
//! The driver keeps one token buffer and runs an exit action whenever the
//! scanner leaves a state. Parsing stops at the first error; there is no
//! recovery and no partial result.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::mem;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{ModelfileError, Result};
use crate::lexer::{self, CharClass, ScanError, State, Step};
use crate::quote::{self, UnquoteError};
use crate::types::{Command, Directive, ROLE_SEPARATOR, Role};

//  One-shot entry points

/// Parse a Modelfile from any reader.
///
/// Input must be UTF-8; decoding and read errors are returned as
/// [`ModelfileError::Io`].
pub fn parse<R: Read>(reader: R) -> Result<Vec<Command>> {
    let mut reader = BufReader::new(reader);
    let mut parser = Parser::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        parser.feed(&line)?;
    }
    parser.finish()
}

pub fn parse_str(input: &str) -> Result<Vec<Command>> {
    let mut parser = Parser::new();
    parser.feed(input)?;
    parser.finish()
}

pub fn parse_file(path: &Path) -> Result<Vec<Command>> {
    let file = fs::File::open(path)?;
    let commands = parse(file)?;
    debug!(path = %path.display(), commands = commands.len(), "modelfile parsed");
    Ok(commands)
}

//  Incremental driver

/// What leaving the Value state does with the buffered text.
#[derive(Debug, PartialEq, Eq)]
enum ValueExit {
    /// Tentatively terminated: the terminator may belong to the value
    /// (an open quote, or a space inside a bare value). Keep it and stay
    /// in Value.
    Resume,
    /// The value is complete.
    Commit(String),
}

/// Incremental Modelfile parser.
///
/// Text can be fed in pieces of any size, split anywhere, with the same
/// result as parsing it in one go. After an error the parser must be
/// discarded.
///
/// ```
/// use modelfile_parser::Parser;
///
/// let mut parser = Parser::new();
/// parser.feed("FROM lla").unwrap();
/// parser.feed("ma3\nPARAMETER temperature 0.7\n").unwrap();
/// let commands = parser.finish().unwrap();
/// assert_eq!(commands[0].args, "llama3");
/// assert_eq!(commands[1].name, "temperature");
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    state: State,
    buf: String,
    /// Name of the command being built.
    name: String,
    role: Option<Role>,
    commands: Vec<Command>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, text: &str) -> Result<()> {
        text.chars().try_for_each(|ch| self.push(ch))
    }

    pub fn push(&mut self, ch: char) -> Result<()> {
        let Step { mut next, emit } =
            lexer::step(self.state, ch).map_err(|e| self.scan_error(e))?;

        if next != self.state {
            match self.state {
                State::Name => next = self.leave_name(next)?,
                State::Parameter => self.name = mem::take(&mut self.buf),
                State::Message => self.role = Some(self.buf.parse()?),
                State::Comment | State::Nil => {}
                State::Value => match self.leave_value(ch)? {
                    ValueExit::Resume => {
                        // Pushed unfiltered so tabs and newlines survive.
                        self.buf.push(ch);
                        return Ok(());
                    }
                    ValueExit::Commit(value) => self.commit(value),
                },
            }

            self.buf.clear();
            self.state = next;
        }

        if let Some(c) = emit.filter(|&c| lexer::is_printable(c)) {
            self.buf.push(c);
        }
        Ok(())
    }

    /// End of input: flush a pending value and check for `FROM`.
    pub fn finish(mut self) -> Result<Vec<Command>> {
        match self.state {
            State::Nil | State::Comment => {}
            State::Value => {
                let value = match quote::try_unquote(&self.buf).map(str::to_owned) {
                    Ok(value) => value,
                    Err(UnquoteError::InteriorQuote) => {
                        return Err(ModelfileError::InvalidValue(self.buf));
                    }
                    Err(UnquoteError::Empty | UnquoteError::Unterminated) => {
                        return Err(ModelfileError::UnexpectedEof(self.buf));
                    }
                };
                self.commit(value);
            }
            State::Name | State::Parameter | State::Message => {
                return Err(ModelfileError::UnexpectedEof(self.buf));
            }
        }

        if !self.commands.iter().any(Command::is_model) {
            return Err(ModelfileError::MissingFrom);
        }

        debug!(commands = self.commands.len(), "scan complete");
        Ok(self.commands)
    }

    //  Exit actions

    /// Validate the keyword and pick the state that reads its argument.
    fn leave_name(&mut self, next: State) -> Result<State> {
        let directive = Directive::from_keyword(&self.buf)
            .ok_or_else(|| ModelfileError::InvalidCommand(self.buf.clone()))?;

        // MESSAGE both names the command and redirects to the role token.
        if let Some(name) = directive.command_name() {
            self.name = name.to_string();
        }

        Ok(match directive {
            Directive::Parameter => State::Parameter,
            Directive::Message => State::Message,
            _ => next,
        })
    }

    fn leave_value(&self, terminator: char) -> Result<ValueExit> {
        match quote::try_unquote(&self.buf) {
            Err(UnquoteError::InteriorQuote) => Err(ModelfileError::InvalidValue(self.buf.clone())),
            Err(UnquoteError::Empty | UnquoteError::Unterminated) => Ok(ValueExit::Resume),
            Ok(_) if CharClass::of(terminator) == CharClass::Space => Ok(ValueExit::Resume),
            Ok(value) => Ok(ValueExit::Commit(value.to_string())),
        }
    }

    fn commit(&mut self, value: String) {
        let args = match self.role.take() {
            Some(role) => format!("{role}{ROLE_SEPARATOR}{value}"),
            None => value,
        };
        let command = Command {
            name: mem::take(&mut self.name),
            args,
        };
        trace!(name = %command.name, "command");
        self.commands.push(command);
    }

    fn scan_error(&self, err: ScanError) -> ModelfileError {
        let token = self.buf.clone();
        match err {
            ScanError::InvalidCommand => ModelfileError::InvalidCommand(token),
            ScanError::UnexpectedEof => ModelfileError::UnexpectedEof(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_exit(buf: &str, terminator: char) -> Result<ValueExit> {
        let parser = Parser {
            state: State::Value,
            buf: buf.to_string(),
            ..Parser::default()
        };
        parser.leave_value(terminator)
    }

    #[test]
    fn value_exit_commits_on_newline() {
        assert_eq!(
            value_exit("llama3", '\n').unwrap(),
            ValueExit::Commit("llama3".into())
        );
        assert_eq!(
            value_exit("\"Hello there\"", '\r').unwrap(),
            ValueExit::Commit("Hello there".into())
        );
    }

    #[test]
    fn value_exit_resumes_on_space() {
        assert_eq!(value_exit("hello", ' ').unwrap(), ValueExit::Resume);
        assert_eq!(value_exit("\"closed\"", '\t').unwrap(), ValueExit::Resume);
    }

    #[test]
    fn value_exit_resumes_inside_open_quote() {
        assert_eq!(value_exit("", '\n').unwrap(), ValueExit::Resume);
        assert_eq!(value_exit("\"open", '\n').unwrap(), ValueExit::Resume);
        assert_eq!(value_exit("\"\"\"open", '\n').unwrap(), ValueExit::Resume);
    }

    #[test]
    fn value_exit_rejects_interior_quote() {
        assert!(matches!(
            value_exit("\"a\"b\"", '\n'),
            Err(ModelfileError::InvalidValue(v)) if v == "\"a\"b\""
        ));
    }

    #[test]
    fn message_keyword_sets_name_and_redirects() {
        let mut parser = Parser {
            state: State::Name,
            buf: "Message".into(),
            ..Parser::default()
        };
        assert_eq!(parser.leave_name(State::Value).unwrap(), State::Message);
        assert_eq!(parser.name, "message");
    }

    #[test]
    fn parameter_keyword_defers_name() {
        let mut parser = Parser {
            state: State::Name,
            buf: "PARAMETER".into(),
            ..Parser::default()
        };
        assert_eq!(parser.leave_name(State::Value).unwrap(), State::Parameter);
        assert!(parser.name.is_empty());
    }
}

//! Modelfile command, directive and role types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelfileError;

/// Command name produced by a `FROM` directive.
pub const MODEL: &str = "model";

/// Command name produced by a `MESSAGE` directive.
pub const MESSAGE: &str = "message";

/// Separator between role and content in a message payload.
pub const ROLE_SEPARATOR: &str = ": ";

//  Command

/// One parsed directive.
///
/// `name` is the canonical lowercase directive name (`model`, `license`,
/// `template`, `system`, `adapter`, `message`) or a parameter key. `args`
/// holds the unquoted payload; for messages it is `"<role>: <content>"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub args: String,
}

impl Command {
    pub fn new(name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: args.into(),
        }
    }

    pub fn is_model(&self) -> bool {
        self.name == MODEL
    }

    /// Split a message payload into role and content.
    ///
    /// Returns `None` for non-message commands. A payload without the
    /// `": "` separator is treated as a bare role with empty content.
    pub fn message(&self) -> Option<(&str, &str)> {
        if self.name != MESSAGE {
            return None;
        }
        Some(
            self.args
                .split_once(ROLE_SEPARATOR)
                .unwrap_or((self.args.as_str(), "")),
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_command(self))
    }
}

//  Directive keyword

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    From,
    License,
    Template,
    System,
    Adapter,
    Parameter,
    Message,
}

impl Directive {
    pub const ALL: [Directive; 7] = [
        Self::From,
        Self::License,
        Self::Template,
        Self::System,
        Self::Adapter,
        Self::Parameter,
        Self::Message,
    ];

    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(keyword))
    }

    /// Directive that serializes a command with the given name.
    pub fn for_command(name: &str) -> Self {
        match name {
            MODEL => Self::From,
            "license" => Self::License,
            "template" => Self::Template,
            "system" => Self::System,
            "adapter" => Self::Adapter,
            MESSAGE => Self::Message,
            _ => Self::Parameter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::License => "license",
            Self::Template => "template",
            Self::System => "system",
            Self::Adapter => "adapter",
            Self::Parameter => "parameter",
            Self::Message => "message",
        }
    }

    /// Uppercase keyword as written by the formatter.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::From => "FROM",
            Self::License => "LICENSE",
            Self::Template => "TEMPLATE",
            Self::System => "SYSTEM",
            Self::Adapter => "ADAPTER",
            Self::Parameter => "PARAMETER",
            Self::Message => "MESSAGE",
        }
    }

    /// Command name assigned when this directive's name token ends.
    ///
    /// `None` for `PARAMETER`, whose command name is the key that follows.
    pub fn command_name(self) -> Option<&'static str> {
        match self {
            Self::From => Some(MODEL),
            Self::Parameter => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

//  Message role

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl FromStr for Role {
    type Err = ModelfileError;

    /// Roles are case-sensitive: `User` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(ModelfileError::InvalidMessageRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

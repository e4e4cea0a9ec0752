//! Character classifier: the pure transition function of the scanner.
//!
//! [`step`] maps `(state, char)` to the next state and the character to
//! buffer, if any. It holds no state of its own; the driver in
//! [`crate::parser`] owns the buffer and runs the exit actions.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Between directives.
    #[default]
    Nil,
    /// Inside a directive keyword.
    Name,
    /// Inside a directive value.
    Value,
    /// Inside a `PARAMETER` key.
    Parameter,
    /// Inside a `MESSAGE` role.
    Message,
    /// Inside a `#` comment.
    Comment,
}

/// Character categories the transition table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Hash,
    Space,
    Newline,
    Letter,
    Digit,
    Underscore,
    Other,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        match ch {
            '#' => Self::Hash,
            ' ' | '\t' => Self::Space,
            '\n' | '\r' => Self::Newline,
            '_' => Self::Underscore,
            c if c.is_ascii_alphabetic() => Self::Letter,
            c if c.is_ascii_digit() => Self::Digit,
            _ => Self::Other,
        }
    }
}

/// Outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: State,
    pub emit: Option<char>,
}

impl Step {
    fn to(next: State) -> Self {
        Self { next, emit: None }
    }

    fn emit(next: State, ch: char) -> Self {
        Self {
            next,
            emit: Some(ch),
        }
    }
}

/// A character that is illegal in the current state.
///
/// Carries no text; the driver attaches the partial token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    InvalidCommand,
    UnexpectedEof,
}

pub fn step(state: State, ch: char) -> Result<Step, ScanError> {
    use CharClass::*;

    let step = match (state, CharClass::of(ch)) {
        (State::Nil, Hash) => Step::to(State::Comment),
        (State::Nil, Space | Newline) => Step::to(State::Nil),
        (State::Nil, Letter | Digit | Underscore | Other) => Step::emit(State::Name, ch),

        (State::Name, Letter) => Step::emit(State::Name, ch),
        (State::Name, Space) => Step::to(State::Value),
        (State::Name, Hash | Newline | Digit | Underscore | Other) => {
            return Err(ScanError::InvalidCommand);
        }

        (State::Value, Newline | Space) => Step::emit(State::Nil, ch),
        (State::Value, Hash | Letter | Digit | Underscore | Other) => Step::emit(State::Value, ch),

        (State::Parameter, Letter | Digit | Underscore) => Step::emit(State::Parameter, ch),
        (State::Parameter, Space) => Step::to(State::Value),
        (State::Parameter, Hash | Newline | Other) => return Err(ScanError::UnexpectedEof),

        (State::Message, Letter) => Step::emit(State::Message, ch),
        (State::Message, Space) => Step::to(State::Value),
        (State::Message, Hash | Newline | Digit | Underscore | Other) => {
            return Err(ScanError::UnexpectedEof);
        }

        (State::Comment, Newline) => Step::to(State::Nil),
        (State::Comment, Hash | Space | Letter | Digit | Underscore | Other) => {
            Step::to(State::Comment)
        }
    };
    Ok(step)
}

/// Whether a scanned character is kept in the token buffer.
///
/// Letters, marks, numbers, punctuation, symbols and plain space are kept.
/// Control, format (e.g. a byte-order mark), private-use, unassigned and
/// every other separator are dropped.
pub fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(state: State, ch: char) -> Step {
        step(state, ch).unwrap_or_else(|e| panic!("{state:?} + {ch:?} failed: {e:?}"))
    }

    #[test]
    fn nil_transitions() {
        assert_eq!(ok(State::Nil, '#'), Step::to(State::Comment));
        for ch in [' ', '\t', '\n', '\r'] {
            assert_eq!(ok(State::Nil, ch), Step::to(State::Nil));
        }
        assert_eq!(ok(State::Nil, 'F'), Step::emit(State::Name, 'F'));
        // Anything else starts a name; the keyword check rejects it later.
        assert_eq!(ok(State::Nil, '9'), Step::emit(State::Name, '9'));
    }

    #[test]
    fn name_transitions() {
        assert_eq!(ok(State::Name, 'r'), Step::emit(State::Name, 'r'));
        assert_eq!(ok(State::Name, ' '), Step::to(State::Value));
        assert_eq!(ok(State::Name, '\t'), Step::to(State::Value));
        for ch in ['\n', '1', '_', '-', '#'] {
            assert_eq!(step(State::Name, ch), Err(ScanError::InvalidCommand), "{ch:?}");
        }
    }

    #[test]
    fn value_transitions() {
        assert_eq!(ok(State::Value, '\n'), Step::emit(State::Nil, '\n'));
        assert_eq!(ok(State::Value, ' '), Step::emit(State::Nil, ' '));
        assert_eq!(ok(State::Value, '\t'), Step::emit(State::Nil, '\t'));
        for ch in ['"', '#', 'x', '0', '_', 'é'] {
            assert_eq!(ok(State::Value, ch), Step::emit(State::Value, ch));
        }
    }

    #[test]
    fn parameter_transitions() {
        for ch in ['t', 'K', '4', '_'] {
            assert_eq!(ok(State::Parameter, ch), Step::emit(State::Parameter, ch));
        }
        assert_eq!(ok(State::Parameter, ' '), Step::to(State::Value));
        for ch in ['\n', '-', '.', '#'] {
            assert_eq!(step(State::Parameter, ch), Err(ScanError::UnexpectedEof), "{ch:?}");
        }
    }

    #[test]
    fn message_transitions() {
        assert_eq!(ok(State::Message, 'u'), Step::emit(State::Message, 'u'));
        assert_eq!(ok(State::Message, ' '), Step::to(State::Value));
        for ch in ['\n', '1', '_', ':'] {
            assert_eq!(step(State::Message, ch), Err(ScanError::UnexpectedEof), "{ch:?}");
        }
    }

    #[test]
    fn comment_transitions() {
        assert_eq!(ok(State::Comment, '\n'), Step::to(State::Nil));
        assert_eq!(ok(State::Comment, '\r'), Step::to(State::Nil));
        for ch in ['#', ' ', 'a', '"'] {
            assert_eq!(ok(State::Comment, ch), Step::to(State::Comment));
        }
    }

    #[test]
    fn printable_filter() {
        assert!(is_printable('a'));
        assert!(is_printable(' '));
        assert!(is_printable('"'));
        assert!(is_printable('ü'));
        assert!(!is_printable('\t'));
        assert!(!is_printable('\n'));
        assert!(!is_printable('\u{7}'));
        assert!(!is_printable('\u{feff}'));
        assert!(!is_printable('\u{200b}'));
        assert!(!is_printable('\u{a0}'));
        assert!(!is_printable('\u{2028}'));
        assert!(!is_printable('\u{e000}'));
    }
}

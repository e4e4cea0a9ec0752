//! Closed-set checks for directive keywords and message roles.

use crate::types::{Directive, Role};

/// Case-insensitive: `FROM`, `from` and `From` are all valid.
pub fn is_valid_directive(name: &str) -> bool {
    Directive::from_keyword(name).is_some()
}

/// Case-sensitive: only `system`, `user` and `assistant`.
pub fn is_valid_role(role: &str) -> bool {
    role.parse::<Role>().is_ok()
}

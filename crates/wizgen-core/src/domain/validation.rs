//! Project-name validation against the npm package-name grammar.
//!
//! Grammar (same as the npm registry accepts for new packages):
//!
//! ```text
//! name  := scope? body
//! scope := '@' scope-first scope-rest* '/'
//! body  := body-first body-rest*
//! scope-first := [a-z0-9-*~]     scope-rest := [a-z0-9-*._~]
//! body-first  := [a-z0-9-~]      body-rest  := [a-z0-9-._~]
//! ```
//!
//! Implemented char-by-char rather than with a regex crate: the grammar is
//! tiny and the error messages want to name the offending character.

use crate::domain::error::DomainError;

/// Validate `name` against the package-name grammar.
pub fn check_package_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidProjectName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty".into()));
    }

    let body = match name.strip_prefix('@') {
        Some(rest) => {
            let (scope, body) = rest
                .split_once('/')
                .ok_or_else(|| invalid("scoped name must look like @scope/name".into()))?;
            check_segment(scope, true).map_err(&invalid)?;
            body
        }
        None => name,
    };

    check_segment(body, false).map_err(&invalid)?;
    Ok(())
}

/// Check one segment (scope or body). Scopes additionally allow `*`.
fn check_segment(segment: &str, is_scope: bool) -> Result<(), String> {
    let what = if is_scope { "scope" } else { "name" };

    let mut chars = segment.chars();
    let first = chars
        .next()
        .ok_or_else(|| format!("{what} cannot be empty"))?;

    if !is_first_char(first, is_scope) {
        return Err(format!("{what} cannot start with '{first}'"));
    }
    for c in chars {
        if !is_rest_char(c, is_scope) {
            return Err(format!("{what} contains disallowed character '{c}'"));
        }
    }
    Ok(())
}

fn is_first_char(c: char, is_scope: bool) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '~' || (is_scope && c == '*')
}

fn is_rest_char(c: char, is_scope: bool) -> bool {
    is_first_char(c, is_scope) || c == '.' || c == '_'
}

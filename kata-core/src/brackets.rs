use thiserror::Error;

/// The first violation found while scanning an expression.
///
/// Positions are character offsets into the expression.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// A closing bracket appeared with nothing open.
    #[error("Unexpected '{close}' at position {position}: no bracket is open")]
    UnexpectedClose { close: char, position: usize },
    /// A closing bracket does not match the innermost open bracket.
    #[error("'{close}' at position {position} does not close '{open}' opened at position {open_position}")]
    Mismatched {
        open: char,
        open_position: usize,
        close: char,
        position: usize,
    },
    /// The expression ended while a bracket was still open.
    #[error("'{open}' opened at position {position} is never closed")]
    Unclosed { open: char, position: usize },
}

/// Closing counterpart of an opening bracket.
const fn closer_for(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '[' => Some(']'),
        '(' => Some(')'),
        _ => None,
    }
}

const fn is_closer(c: char) -> bool {
    matches!(c, '}' | ']' | ')')
}

/// Scans `expression` left to right and reports the first bracket violation.
///
/// Only `{ } [ ] ( )` are considered; every other character is ignored.
///
/// # Errors
///
/// Returns the first `BracketError` encountered. A closer is checked against
/// the innermost open bracket as soon as it is seen; unclosed openers are only
/// reported once the whole expression has been scanned.
pub fn check_brackets(expression: &str) -> Result<(), BracketError> {
    // (bracket, position) of every currently open bracket, innermost last.
    let mut stack: Vec<(char, usize)> = Vec::new();

    for (position, c) in expression.chars().enumerate() {
        if closer_for(c).is_some() {
            stack.push((c, position));
        } else if is_closer(c) {
            let Some((open, open_position)) = stack.pop() else {
                return Err(BracketError::UnexpectedClose { close: c, position });
            };
            if closer_for(open) != Some(c) {
                return Err(BracketError::Mismatched {
                    open,
                    open_position,
                    close: c,
                    position,
                });
            }
        }
    }

    match stack.pop() {
        Some((open, position)) => Err(BracketError::Unclosed { open, position }),
        None => Ok(()),
    }
}

/// Returns whether every bracket in `expression` is closed by a matching
/// bracket, with proper nesting.
pub fn brackets_balanced(expression: &str) -> bool {
    let result = check_brackets(expression);
    if let Err(e) = &result {
        log::trace!("unbalanced {expression:?}: {e}");
    }
    result.is_ok()
}

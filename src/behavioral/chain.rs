//! Chain of Responsibility
//!
//! A request travels along an ordered chain until some handler resolves it.
//! The terminal handler always answers, so `handle` never fails.

use std::fmt;

/* ============================================================
 * Variant 1: plain functions, each calling the next
 * ============================================================
 */

pub fn handle_abc(letter: char) -> String {
    if matches!(letter, 'A' | 'B' | 'C') {
        return format!("handle_abc: handled the value {letter}");
    }
    handle_def(letter)
}

pub fn handle_def(letter: char) -> String {
    if matches!(letter, 'D' | 'E' | 'F') {
        return format!("handle_def: handled the value {letter}");
    }
    handle_unsolved(letter)
}

pub fn handle_unsolved(letter: char) -> String {
    format!("no handler could resolve {letter}")
}

/* ============================================================
 * Variant 2: a closed set of handler values linked by successor
 * ============================================================
 */

#[derive(Debug, Clone, PartialEq)]
pub enum Handler {
    Letters {
        name: &'static str,
        letters: Vec<char>,
        successor: Box<Handler>,
    },
    Fallback,
}

impl Handler {
    pub fn letters(name: &'static str, letters: &[char], successor: Handler) -> Self {
        Handler::Letters {
            name,
            letters: letters.to_vec(),
            successor: Box::new(successor),
        }
    }

    pub fn fallback() -> Self {
        Handler::Fallback
    }

    pub fn handle(&self, letter: char) -> String {
        match self {
            Handler::Letters {
                name,
                letters,
                successor,
            } => {
                if letters.contains(&letter) {
                    tracing::debug!(handler = name, %letter, "resolved");
                    format!("{name}: handled the value {letter}")
                } else {
                    successor.handle(letter)
                }
            }
            Handler::Fallback => {
                tracing::debug!(%letter, "reached fallback");
                handle_unsolved(letter)
            }
        }
    }

    /// Number of handlers in the chain starting here, fallback included.
    pub fn depth(&self) -> usize {
        match self {
            Handler::Letters { successor, .. } => 1 + successor.depth(),
            Handler::Fallback => 1,
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Letters { name, successor, .. } => write!(f, "{name} -> {successor}"),
            Handler::Fallback => write!(f, "Fallback"),
        }
    }
}

/// `HandlerABC -> HandlerDEF -> Fallback`
pub fn default_chain() -> Handler {
    let fallback = Handler::fallback();
    let def = Handler::letters("HandlerDEF", &['D', 'E', 'F'], fallback);
    Handler::letters("HandlerABC", &['A', 'B', 'C'], def)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_handler_resolves_abc() {
        let chain = default_chain();
        for letter in ['A', 'B', 'C'] {
            assert_eq!(
                chain.handle(letter),
                format!("HandlerABC: handled the value {letter}")
            );
        }
    }

    #[test]
    fn test_second_handler_resolves_def() {
        let chain = default_chain();
        for letter in ['D', 'E', 'F'] {
            assert!(chain.handle(letter).starts_with("HandlerDEF"));
        }
    }

    #[test]
    fn test_function_chain_matches_handler_chain() {
        assert_eq!(handle_abc('B'), "handle_abc: handled the value B");
        assert_eq!(handle_abc('E'), "handle_def: handled the value E");
        assert_eq!(handle_abc('G'), "no handler could resolve G");
    }

    #[test]
    fn test_chain_shape() {
        let chain = default_chain();
        assert_eq!(chain.depth(), 3);
        assert_eq!(chain.to_string(), "HandlerABC -> HandlerDEF -> Fallback");
    }

    #[test]
    fn test_lowercase_is_not_resolved() {
        // Callers upper-case before dispatch.
        assert_eq!(default_chain().handle('a'), "no handler could resolve a");
    }

    proptest! {
        #[test]
        fn prop_other_letters_reach_fallback(letter in any::<char>()) {
            prop_assume!(!('A'..='F').contains(&letter));
            let answer = default_chain().handle(letter);
            prop_assert!(answer.starts_with("no handler could resolve"));
            prop_assert!(answer.contains(letter));
        }
    }
}

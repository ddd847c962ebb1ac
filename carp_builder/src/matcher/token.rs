use crate::constant::*;
use crate::matcher::ArgumentName;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A registered argument name with its flag prefix stripped, alongside the input as given.
    Flag { name: String, raw: String },
    /// Any other input, unchanged.
    Value(String),
}

impl Token {
    /// Whether `raw` has the shape of a flag for some valid argument name.
    /// Registration is not consulted.
    pub(crate) fn looks_like_flag(raw: &str) -> bool {
        match strip_flag_prefix(raw) {
            Some(name) => name
                .chars()
                .next()
                .map_or(false, |c| c != FLAG_PREFIX_CHAR && !c.is_ascii_digit()),
            None => false,
        }
    }
}

fn strip_flag_prefix(raw: &str) -> Option<&str> {
    raw.strip_prefix(FLAG_PREFIX)
        .or_else(|| raw.strip_prefix(FLAG_PREFIX_CHAR))
}

/// Classifies raw command line strings against the registered argument names.
pub(crate) struct Tokenizer<'a> {
    names: Vec<&'a ArgumentName>,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(names: Vec<&'a ArgumentName>) -> Self {
        Self { names }
    }

    fn is_registered(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.matches(name))
    }

    fn classify(&self, raw: &str) -> Token {
        if let Some(name) = raw.strip_prefix(FLAG_PREFIX) {
            if self.is_registered(name) {
                return Token::Flag {
                    name: name.to_string(),
                    raw: raw.to_string(),
                };
            }
        }

        if let Some(name) = raw.strip_prefix(FLAG_PREFIX_CHAR) {
            if self.is_registered(name) {
                return Token::Flag {
                    name: name.to_string(),
                    raw: raw.to_string(),
                };
            }
        }

        Token::Value(raw.to_string())
    }

    pub(crate) fn tokenize(&self, raw: &[&str]) -> Vec<Token> {
        let tokens: Vec<Token> = raw.iter().map(|r| self.classify(r)).collect();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Tokenized {raw:?} into {tokens:?}.");
        }

        tokens
    }
}

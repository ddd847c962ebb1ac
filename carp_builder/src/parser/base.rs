use std::any::Any;
use std::cmp::Ordering;
use thiserror::Error;

use crate::api::Value;
use crate::matcher::*;
use crate::model::Range;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Error raised while registering and configuring arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The name is empty, starts with the flag prefix, or starts with a digit.
    #[error("Config error: Given name [{name}] is invalid. Reason: {reason}")]
    InvalidArgumentName {
        /// The offending name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },
    /// The name collides with the name of an already registered argument.
    #[error("Config error: Given name [{0}] already used.")]
    ArgumentNameUsed(String),
    /// `required` and `bypass_required` were both enabled on the argument.
    #[error("Config error: Argument [{0}] cannot be both required and bypass the required checks.")]
    RequiredBypassConflict(String),
}

/// Error raised while parsing the command line tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag (or flag-like value) which matches no optional argument.
    #[error("Parse error: Unknown argument [{0}].")]
    UnknownArgument(String),
    /// The argument already holds as many values as its range allows.
    #[error("Parse error: Value for argument [{0}] has already been set.")]
    ValueAlreadySet(String),
    /// The token could not be converted to the argument's value type.
    #[error("Parse error: Cannot parse value `{value}` for argument [{name}] as {type_name}.")]
    InvalidValue {
        /// The argument name.
        name: String,
        /// The raw token.
        value: String,
        /// The argument's value type.
        type_name: &'static str,
    },
    /// The converted value is not amongst the argument's choices.
    #[error("Parse error: Value `{value}` is not a valid choice for argument [{name}].")]
    InvalidChoice {
        /// The argument name.
        name: String,
        /// The raw token.
        value: String,
    },
    /// An observe action rejected the value.
    #[error("Parse error: Invalid value `{value}` for argument [{name}]: {message}")]
    ActionFailed {
        /// The argument name.
        name: String,
        /// The raw token.
        value: String,
        /// The message produced by the action.
        message: String,
    },
    /// A value was offered to an argument of [`NoneType`](crate::NoneType).
    #[error("Parse error: Cannot set value `{value}` for none-type argument [{name}].")]
    NoneTypeValue {
        /// The argument name.
        name: String,
        /// The raw token.
        value: String,
    },
    /// Value tokens which could not be attributed to any argument.
    #[error("Parse error: Failed to deduce the argument for values [{}].", .0.join(", "))]
    ArgumentDeduction(Vec<String>),
    /// A required argument received no value.
    #[error("Parse error: No values parsed for a required argument [{0}].")]
    RequiredArgumentNotParsed(String),
    /// The argument's final value count lies outside its range.
    #[error("Parse error: {} values provided for argument [{name}].", quantity(.ordering))]
    InvalidNumberOfValues {
        /// The argument name.
        name: String,
        /// How the value count compares to the argument's range.
        ordering: Ordering,
    },
}

fn quantity(ordering: &Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "Not enough",
        Ordering::Equal => "Enough",
        Ordering::Greater => "Too many",
    }
}

/// Error raised while retrieving argument values after parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No argument is registered under the name.
    #[error("Lookup error: Argument with given name [{0}] not found.")]
    ArgumentNotFound(String),
    /// The stored values are not of the requested type.
    #[error("Lookup error: Invalid value type specified for argument [{name}] = {type_name}.")]
    InvalidValueType {
        /// The argument name.
        name: String,
        /// The requested type.
        type_name: &'static str,
    },
    /// The argument has neither parsed nor predefined values.
    #[error("Lookup error: No value available for argument [{0}].")]
    NoValue(String),
    /// Positional arguments hold a single value.
    #[error("Lookup error: Positional argument [{0}] holds a single value.")]
    PositionalValues(String),
}

/// Behaviour of an argument with its value type `T` erased.
///
/// The parser works across all argument types through this interface, while the bottom of the object graph keeps `T`.
pub(crate) trait ArgumentInterface {
    fn name(&self) -> &ArgumentName;

    fn is_required(&self) -> bool;

    fn bypass_required_enabled(&self) -> bool;

    /// Declare that the argument's flag has been matched.
    /// Returns whether the argument may accept a value.
    fn mark_used(&mut self) -> bool;

    fn is_used(&self) -> bool;

    fn count(&self) -> usize;

    /// Convert, validate, and store a raw token.
    /// Returns whether the argument may accept a further value.
    fn set_value(&mut self, raw: &str) -> Result<bool, ParseError>;

    /// Whether a parsed or predefined value is available.
    fn has_value(&self) -> bool;

    /// How the value count compares to the argument's range.
    fn nvalues_ordering(&self) -> Ordering;

    fn value(&self) -> Option<&Value>;

    fn values(&self) -> Result<&[Value], LookupError>;

    fn descriptor(&self) -> ArgumentDescriptor;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Read-only view of an argument, as consumed by the help printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentDescriptor {
    pub(crate) name: ArgumentName,
    pub(crate) positional: bool,
    pub(crate) help: Option<String>,
    pub(crate) required: bool,
    pub(crate) nargs: Range,
    pub(crate) choices: Vec<String>,
    pub(crate) defaults: Vec<String>,
    pub(crate) implicits: Vec<String>,
}

impl ArgumentDescriptor {
    pub(crate) fn new(name: ArgumentName, positional: bool, nargs: Range) -> Self {
        Self {
            name,
            positional,
            help: None,
            required: positional,
            nargs,
            choices: Vec::default(),
            defaults: Vec::default(),
            implicits: Vec::default(),
        }
    }
}

pub(crate) struct Parser<'a> {
    positionals: &'a mut [Box<dyn ArgumentInterface>],
    optionals: &'a mut [Box<dyn ArgumentInterface>],
}

impl<'a> Parser<'a> {
    pub(crate) fn new(
        positionals: &'a mut [Box<dyn ArgumentInterface>],
        optionals: &'a mut [Box<dyn ArgumentInterface>],
    ) -> Self {
        Self {
            positionals,
            optionals,
        }
    }

    /// Run the token stream through the arguments.
    ///
    /// 1. Leading value tokens bind to the positional arguments, in registration order.
    /// 2. Flag tokens select an optional argument, which takes the value tokens following it.
    /// 3. Unless a bypassing argument was used, the required and value count checks are run.
    pub(crate) fn consume(mut self, raw: &[&str]) -> Result<(), ParseError> {
        let tokens = {
            let names: Vec<&ArgumentName> = self
                .positionals
                .iter()
                .chain(self.optionals.iter())
                .map(|argument| argument.name())
                .collect();
            Tokenizer::new(names).tokenize(raw)
        };

        let offset = self.consume_positionals(&tokens)?;
        self.consume_optionals(&tokens[offset..])?;

        if self.bypassed() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Bypassing the required and value count checks.");
            }

            return Ok(());
        }

        self.check_required()?;
        self.check_nvalues()
    }

    fn consume_positionals(&mut self, tokens: &[Token]) -> Result<usize, ParseError> {
        let mut offset = 0;

        for positional in self.positionals.iter_mut() {
            match tokens.get(offset) {
                Some(Token::Value(value)) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Positional '{}' takes '{value}'.", positional.name());
                    }

                    positional.set_value(value)?;
                    offset += 1;
                }
                _ => break,
            }
        }

        Ok(offset)
    }

    fn consume_optionals(&mut self, tokens: &[Token]) -> Result<(), ParseError> {
        let mut current: Option<usize> = None;
        let mut dangling: Vec<String> = Vec::default();

        for token in tokens {
            match token {
                Token::Flag { name, raw } => {
                    let index = self
                        .optionals
                        .iter()
                        .position(|optional| optional.name().matches(name))
                        .ok_or_else(|| ParseError::UnknownArgument(raw.clone()))?;
                    let optional = &mut self.optionals[index];
                    let accepts = optional.mark_used();

                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Optional '{}' matched (accepts values: {accepts}).",
                            optional.name()
                        );
                    }

                    current = if accepts { Some(index) } else { None };
                }
                Token::Value(value) => match current {
                    Some(index) => {
                        let optional = &mut self.optionals[index];

                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Optional '{}' takes '{value}'.", optional.name());
                        }

                        if !optional.set_value(value)? {
                            current = None;
                        }
                    }
                    None => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Value '{value}' is dangling.");
                        }

                        dangling.push(value.clone());
                    }
                },
            }
        }

        if dangling.is_empty() {
            Ok(())
        } else if let Some(flag) = dangling.iter().find(|value| Token::looks_like_flag(value)) {
            Err(ParseError::UnknownArgument(flag.clone()))
        } else {
            Err(ParseError::ArgumentDeduction(dangling))
        }
    }

    fn bypassed(&self) -> bool {
        self.optionals
            .iter()
            .any(|optional| optional.bypass_required_enabled() && optional.is_used())
    }

    fn check_required(&self) -> Result<(), ParseError> {
        for positional in self.positionals.iter() {
            if !positional.is_used() {
                return Err(ParseError::RequiredArgumentNotParsed(
                    positional.name().to_string(),
                ));
            }
        }

        for optional in self.optionals.iter() {
            if optional.is_required() && !optional.has_value() {
                return Err(ParseError::RequiredArgumentNotParsed(
                    optional.name().to_string(),
                ));
            }
        }

        Ok(())
    }

    fn check_nvalues(&self) -> Result<(), ParseError> {
        for argument in self.positionals.iter().chain(self.optionals.iter()) {
            match argument.nvalues_ordering() {
                Ordering::Equal => {}
                ordering => {
                    return Err(ParseError::InvalidNumberOfValues {
                        name: argument.name().to_string(),
                        ordering,
                    });
                }
            }
        }

        Ok(())
    }
}

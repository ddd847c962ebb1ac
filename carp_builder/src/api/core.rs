use std::any::type_name;
use std::env;
use std::path::Path;

use crate::api::{predefined, OptionalArgument, PositionalArgument};
use crate::constant::*;
use crate::matcher::ArgumentName;
use crate::model::Range;
use crate::parser::{
    report, ArgumentInterface, ConfigError, ConsoleInterface, LookupError, ParseError, Parser,
    Printer, UserInterface,
};
use crate::prelude::ArgumentValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Conventional positional arguments, registered via [`ArgumentParser::default_positional_arguments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPositional {
    /// `input`: an existing file path.
    Input,
    /// `output`: a file path.
    Output,
}

/// Conventional optional arguments, registered via [`ArgumentParser::default_optional_arguments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultOptional {
    /// `--help, -h`: a flag which bypasses the required checks, and displays the help message.
    Help,
    /// `--input, -i`: one required, existing file path.
    Input,
    /// `--output, -o`: one required file path.
    Output,
    /// `--input, -i`: one or more required, existing file paths.
    MultiInput,
    /// `--output, -o`: one or more required file paths.
    MultiOutput,
}

/// The command line argument parser.
///
/// Arguments are registered and configured first, then the command line is parsed, then the values are retrieved.
///
/// ### Example
/// ```
/// # use carp_builder as carp;
/// use carp::{ArgumentParser, Range};
///
/// let mut ap = ArgumentParser::new().program_name("power");
/// ap.add_positional_argument::<f64>("base").unwrap();
/// ap.add_optional_argument::<f64>(("exponent", "e"))
///     .unwrap()
///     .default_value(0.0)
///     .implicit_value(1.0)
///     .nargs(Range::up_to(5));
///
/// ap.parse_args(&["2.0", "--exponent", "3.0", "4.0"]).unwrap();
/// assert_eq!(ap.value::<f64>("base").unwrap(), 2.0);
/// assert_eq!(ap.values::<f64>("exponent").unwrap(), vec![3.0, 4.0]);
/// ```
pub struct ArgumentParser {
    program_name: Option<String>,
    program_description: Option<String>,
    program_version: Option<String>,
    // The (dyn ..) erases each argument's value type T, so all arguments may live in one collection.
    positional_arguments: Vec<Box<dyn ArgumentInterface>>,
    optional_arguments: Vec<Box<dyn ArgumentInterface>>,
    // Set once `DefaultOptional::Help` registers the help flag.
    help_flag: bool,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for ArgumentParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentParser")
            .field("program_name", &self.program_name)
            .field("program_version", &self.program_version)
            .field(
                "positional_arguments",
                &self
                    .positional_arguments
                    .iter()
                    .map(|a| a.name().to_string())
                    .collect::<Vec<String>>(),
            )
            .field(
                "optional_arguments",
                &self
                    .optional_arguments
                    .iter()
                    .map(|a| a.name().to_string())
                    .collect::<Vec<String>>(),
            )
            .finish()
    }
}

impl Default for ArgumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentParser {
    /// Create an argument parser without any arguments.
    pub fn new() -> Self {
        Self::with_interface(Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            program_name: None,
            program_description: None,
            program_version: None,
            positional_arguments: Vec::default(),
            optional_arguments: Vec::default(),
            help_flag: false,
            user_interface,
        }
    }

    /// Set the program name shown in the help message.
    /// Defaults to the file name of the running executable.
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name.replace(name.into());
        self
    }

    /// Set the program description shown in the help message.
    pub fn program_description(mut self, description: impl Into<String>) -> Self {
        self.program_description.replace(description.into());
        self
    }

    /// Set the program version shown in the help message.
    pub fn program_version(mut self, version: impl Into<String>) -> Self {
        self.program_version.replace(version.into());
        self
    }

    /// Register the conventional positional arguments, in the order given.
    pub fn default_positional_arguments(
        &mut self,
        arguments: &[DefaultPositional],
    ) -> Result<&mut Self, ConfigError> {
        for argument in arguments {
            match argument {
                DefaultPositional::Input => {
                    self.add_positional_argument::<String>("input")?
                        .action(predefined::check_file_exists())
                        .help("Input file path");
                }
                DefaultPositional::Output => {
                    self.add_positional_argument::<String>("output")?
                        .help("Output file path");
                }
            }
        }

        Ok(self)
    }

    /// Register the conventional optional arguments, in the order given.
    pub fn default_optional_arguments(
        &mut self,
        arguments: &[DefaultOptional],
    ) -> Result<&mut Self, ConfigError> {
        for argument in arguments {
            match argument {
                DefaultOptional::Help => {
                    self.add_flag((HELP_NAME, HELP_SHORT))?
                        .bypass_required()?
                        .help(HELP_MESSAGE);
                    self.help_flag = true;
                }
                DefaultOptional::Input => {
                    self.add_optional_argument::<String>(("input", "i"))?
                        .required()?
                        .nargs(Range::exactly(1))
                        .action(predefined::check_file_exists())
                        .help("Input file path");
                }
                DefaultOptional::Output => {
                    self.add_optional_argument::<String>(("output", "o"))?
                        .required()?
                        .nargs(Range::exactly(1))
                        .help("Output file path");
                }
                DefaultOptional::MultiInput => {
                    self.add_optional_argument::<String>(("input", "i"))?
                        .required()?
                        .nargs(Range::at_least(1))
                        .action(predefined::check_file_exists())
                        .help("Input files paths");
                }
                DefaultOptional::MultiOutput => {
                    self.add_optional_argument::<String>(("output", "o"))?
                        .required()?
                        .nargs(Range::at_least(1))
                        .help("Output files paths");
                }
            }
        }

        Ok(self)
    }

    /// Register a positional argument of value type `T`.
    ///
    /// Positional arguments bind, in registration order, to the leading value tokens of the command line.
    pub fn add_positional_argument<T: ArgumentValue>(
        &mut self,
        name: impl Into<ArgumentName>,
    ) -> Result<&mut PositionalArgument<T>, ConfigError> {
        let name = self.register(name.into())?;
        self.positional_arguments
            .push(Box::new(PositionalArgument::<T>::new(name)));
        let argument = self
            .positional_arguments
            .last_mut()
            .expect("internal error - argument must have been pushed");

        Ok(argument
            .as_any_mut()
            .downcast_mut::<PositionalArgument<T>>()
            .expect("internal error - argument must be of the registered type"))
    }

    /// Register an optional argument of value type `T`.
    ///
    /// Optional arguments are bound by flag: `--primary` or `-secondary`.
    pub fn add_optional_argument<T: ArgumentValue>(
        &mut self,
        name: impl Into<ArgumentName>,
    ) -> Result<&mut OptionalArgument<T>, ConfigError> {
        let name = self.register(name.into())?;
        self.optional_arguments
            .push(Box::new(OptionalArgument::<T>::new(name)));
        let argument = self
            .optional_arguments
            .last_mut()
            .expect("internal error - argument must have been pushed");

        Ok(argument
            .as_any_mut()
            .downcast_mut::<OptionalArgument<T>>()
            .expect("internal error - argument must be of the registered type"))
    }

    /// Register a boolean flag: `false` by default, `true` when used.
    pub fn add_flag(
        &mut self,
        name: impl Into<ArgumentName>,
    ) -> Result<&mut OptionalArgument<bool>, ConfigError> {
        self.add_flag_storing(name, true)
    }

    /// Register a boolean flag: `!store` by default, `store` when used.
    pub fn add_flag_storing(
        &mut self,
        name: impl Into<ArgumentName>,
        store: bool,
    ) -> Result<&mut OptionalArgument<bool>, ConfigError> {
        Ok(self
            .add_optional_argument::<bool>(name)?
            .nargs(Range::exactly(0))
            .default_value(!store)
            .implicit_value(store))
    }

    fn register(&self, name: ArgumentName) -> Result<ArgumentName, ConfigError> {
        for part in std::iter::once(name.primary()).chain(name.secondary()) {
            validate_name(part)?;
        }

        if self
            .arguments()
            .any(|argument| argument.name().collides(&name))
        {
            return Err(ConfigError::ArgumentNameUsed(name.to_string()));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering argument '{name}'.");
        }

        Ok(name)
    }

    fn arguments(&self) -> impl Iterator<Item = &Box<dyn ArgumentInterface>> {
        self.positional_arguments
            .iter()
            .chain(self.optional_arguments.iter())
    }

    fn find(&self, name: &str) -> Result<&dyn ArgumentInterface, LookupError> {
        self.arguments()
            .find(|argument| argument.name().matches(name))
            .map(|argument| &**argument)
            .ok_or_else(|| LookupError::ArgumentNotFound(name.to_string()))
    }

    /// Parse the command line tokens (excluding the program name).
    ///
    /// Parsing is not idempotent: parsing again accumulates values on top of the previous parse.
    pub fn parse_args(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        Parser::new(
            &mut self.positional_arguments,
            &mut self.optional_arguments,
        )
        .consume(tokens)
    }

    /// Parse the command line of the running process, via [`env::args`].
    pub fn parse_env_args(&mut self) -> Result<(), ParseError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_args(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Parse the command line tokens, reporting the outcome to the user.
    ///
    /// If parsing fails, the error and the help message are printed, returning `Err(1)`.
    ///
    /// If the help flag (see [`DefaultOptional::Help`]) is used, the help message is printed, returning `Err(0)`.
    pub fn try_parse_tokens(&mut self, tokens: &[&str]) -> Result<(), i32> {
        let result = self.parse_args(tokens);
        let help_requested = self.help_flag && self.count(HELP_NAME) > 0;
        report(result, help_requested, &self.printer(), &*self.user_interface)
    }

    /// Parse the command line of the running process, reporting the outcome to the user.
    ///
    /// Follows [`ArgumentParser::try_parse_tokens`], exiting the process (via `std::process::exit`) with its error code.
    pub fn try_parse_args(&mut self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.try_parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }

    /// Whether the argument has a parsed or predefined (default/implicit) value.
    ///
    /// Unknown names have no value.
    pub fn has_value(&self, name: &str) -> bool {
        self.find(name)
            .map(|argument| argument.has_value())
            .unwrap_or(false)
    }

    /// The number of times the argument was used.
    ///
    /// Unknown names have a count of `0`.
    pub fn count(&self, name: &str) -> usize {
        self.find(name)
            .map(|argument| argument.count())
            .unwrap_or(0)
    }

    /// The (first) value of the argument.
    ///
    /// For optional arguments which were not given values, this falls back to the implicit value (when the flag was used), and then the default value.
    pub fn value<T: ArgumentValue>(&self, name: &str) -> Result<T, LookupError> {
        let argument = self.find(name)?;
        let value = argument
            .value()
            .ok_or_else(|| LookupError::NoValue(argument.name().to_string()))?;

        value
            .get::<T>()
            .cloned()
            .ok_or_else(|| LookupError::InvalidValueType {
                name: argument.name().to_string(),
                type_name: type_name::<T>(),
            })
    }

    /// All the values of an optional argument, in parse order.
    ///
    /// Without parsed values, this falls back to the implicit values (when the flag was used), and then the default values.
    pub fn values<T: ArgumentValue>(&self, name: &str) -> Result<Vec<T>, LookupError> {
        let argument = self.find(name)?;

        argument
            .values()?
            .iter()
            .map(|value| value.get::<T>().cloned())
            .collect::<Option<Vec<T>>>()
            .ok_or_else(|| LookupError::InvalidValueType {
                name: argument.name().to_string(),
                type_name: type_name::<T>(),
            })
    }

    /// Print the help message.
    pub fn print_help(&self) {
        self.printer().print_help(&*self.user_interface);
    }

    fn printer(&self) -> Printer {
        Printer::terminal(
            self.program(),
            self.program_version.clone(),
            self.program_description.clone(),
            self.arguments()
                .map(|argument| argument.descriptor())
                .collect(),
        )
    }

    fn program(&self) -> String {
        self.program_name
            .clone()
            .or_else(|| {
                env::args().next().and_then(|path| {
                    Path::new(&path)
                        .file_name()
                        .map(|file_name| file_name.to_string_lossy().into_owned())
                })
            })
            .unwrap_or_default()
    }
}

fn validate_name(name: &str) -> Result<(), ConfigError> {
    let reason = match name.chars().next() {
        None => Some("An argument name cannot be empty."),
        Some(FLAG_PREFIX_CHAR) => Some("An argument name cannot begin with a flag prefix character."),
        Some(c) if c.is_ascii_digit() => Some("An argument name cannot begin with a digit."),
        Some(_) => None,
    };

    match reason {
        Some(reason) => Err(ConfigError::InvalidArgumentName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

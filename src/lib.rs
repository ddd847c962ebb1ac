//! `carp` is a command line argument parser for Rust.
//!
//! Arguments are registered on an [`ArgumentParser`], each with a value type `T`, and then configured fluently.
//! After parsing, values are retrieved by argument name, recovered as their registered type.
//! `carp` prioritizes the following design concerns:
//! * *Typed values*:
//! Every argument is registered with a value type `T`, converted via [`std::str::FromStr`].
//! Retrieving a value as the wrong type is a [`LookupError`], never a silent coercion.
//! * *Positional vs. optional arguments*:
//! Positional arguments bind to the leading tokens of the command line, in registration order.
//! Optional arguments are bound by flag: `--name` or `-n`.
//! * *Cardinality*:
//! Each optional argument takes a [`Range`] of values (ex: exactly 1, at least 1, up to 5, any).
//! * *Predefined values*:
//! Optional arguments may carry default values (when not given) and implicit values (when the flag is given alone).
//! * *Validation*:
//! Values may be restricted to a set of choices, and run through observe/transform/modify [`Action`]s.
//!
//! # Usage
//! More examples are outlined in [the source](https://github.com/carp-rs/carp/tree/main/demos).
//! ```no_run
#![doc = include_str!("../demos/power.rs")]
//! ```
//!
//! ```console
//! $ power -h
//! usage: power BASE [-e [EXPONENT ...]] [-h]
//!
//! Calculates the value of an expression: base ^ exponent.
//!
//! positional arguments:
//!  BASE                                           The exponentiation base value.
//!
//! options:
//!  -e [EXPONENT ...], --exponent [EXPONENT ...]   The exponent values.
//!  -h, --help                                     Show this help message and exit. (default: false) (implicit: true)
//!
//! $ power 2 -e 1 2 3
//! 2 ^ 1 = 2
//! 2 ^ 2 = 4
//! 2 ^ 3 = 8
//!
//! $ power two
//! Parse error: Cannot parse value `two` for argument [base] as f64.
//! usage: power BASE [-e [EXPONENT ...]] [-h]
//! <truncated>
//! ```
//!
//! # Parsing
//! The command line tokens are parsed in the following phases:
//! 1. Each token is classified as a *flag* (`--name` or `-n`, matching a registered argument name) or a *value*.
//! Tokens which merely look like a flag (ex: `-1`) are values.
//! 2. The leading values are consumed by the positional arguments, in registration order.
//! 3. Each flag selects its optional argument, which consumes the following values until its [`Range`] is full.
//! Values which no argument can take fail the parse.
//! 4. Unless an argument with [`OptionalArgument::bypass_required`] was used (ex: `--help`), the required and value count checks are run.
//!
//! [`ArgumentParser::parse_args`] reports failures as a [`ParseError`].
//! Alternatively, [`ArgumentParser::try_parse_args`] prints the failure along with the help message, and exits the program.
//!
//! # Values
//! * [`ArgumentParser::value`] gets the first value of an argument.
//! * [`ArgumentParser::values`] gets all the values of an optional argument.
//! * [`ArgumentParser::has_value`] tests whether a parsed or predefined value is available.
//! * [`ArgumentParser::count`] gets the number of times an argument was used.
//!
//! For optional arguments without any parsed values, the implicit value is used when the flag was given, otherwise the default value.
//!
//! # Features
//! * `tracing_debug`: emit the parser's internal decisions as `tracing` debug events.
pub use carp_builder::*;

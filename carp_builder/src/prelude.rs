//! Traits which, typically, may be imported without concern: `use carp::prelude::*`.
use std::fmt::Display;
use std::str::FromStr;

/// Behaviour required of every value type `T` held by an argument.
///
/// * [`FromStr`] converts the raw command line token into `T`.
/// * [`PartialEq`] matches a converted value against the configured choices.
/// * [`Display`] presents choices and predefined values in the help message.
///
/// Implemented automatically for every type meeting these bounds.
pub trait ArgumentValue: FromStr + Clone + PartialEq + Display + 'static {}

impl<T> ArgumentValue for T where T: FromStr + Clone + PartialEq + Display + 'static {}

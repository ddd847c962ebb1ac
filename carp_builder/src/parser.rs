mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, LookupError, ParseError};
pub(crate) use base::{ArgumentDescriptor, ArgumentInterface, Parser};
pub(crate) use interface::*;
pub(crate) use middleware::*;
pub(crate) use printer::*;

//! Engine module for `carp`.
//! See [documentation root](https://docs.rs/carp/latest/carp/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use matcher::{ArgumentName, NameScope};
pub use model::*;
pub use parser::{ConfigError, LookupError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

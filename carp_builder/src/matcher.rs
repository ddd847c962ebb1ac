mod name;
mod token;

pub use name::*;
pub(crate) use token::*;

mod action;
mod argument;
mod core;
pub mod predefined;
mod value;

pub use self::action::*;
pub use self::argument::*;
pub use self::core::*;
pub(crate) use self::value::*;

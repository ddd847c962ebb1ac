//! Ready made observe [`Action`]s.
//!
//! ### Example
//! ```
//! # use carp_builder as carp;
//! use carp::{predefined, ArgumentParser};
//!
//! let mut ap = ArgumentParser::new();
//! ap.add_optional_argument::<u32>("workers")
//!     .unwrap()
//!     .action(predefined::within(1, 8));
//!
//! assert!(ap.parse_args(&["--workers", "9"]).is_err());
//! ```
use std::fmt::Display;
use std::path::Path;

use crate::api::Action;

/// Fail unless the value names an existing file system path.
pub fn check_file_exists() -> Action<String> {
    Action::observe(|path: &String| {
        if Path::new(path).exists() {
            Ok(())
        } else {
            Err(format!("File `{path}` does not exist!"))
        }
    })
}

/// Fail unless the value is strictly greater than `lower`.
pub fn gt<T>(lower: T) -> Action<T>
where
    T: PartialOrd + Display + Copy + 'static,
{
    Action::observe(move |value: &T| {
        if *value > lower {
            Ok(())
        } else {
            Err(format!("Value `{value}` must be greater than `{lower}`!"))
        }
    })
}

/// Fail unless the value is greater than or equal to `lower`.
pub fn geq<T>(lower: T) -> Action<T>
where
    T: PartialOrd + Display + Copy + 'static,
{
    Action::observe(move |value: &T| {
        if *value >= lower {
            Ok(())
        } else {
            Err(format!(
                "Value `{value}` must be greater than or equal to `{lower}`!"
            ))
        }
    })
}

/// Fail unless the value is strictly less than `upper`.
pub fn lt<T>(upper: T) -> Action<T>
where
    T: PartialOrd + Display + Copy + 'static,
{
    Action::observe(move |value: &T| {
        if *value < upper {
            Ok(())
        } else {
            Err(format!("Value `{value}` must be less than `{upper}`!"))
        }
    })
}

/// Fail unless the value is less than or equal to `upper`.
pub fn leq<T>(upper: T) -> Action<T>
where
    T: PartialOrd + Display + Copy + 'static,
{
    Action::observe(move |value: &T| {
        if *value <= upper {
            Ok(())
        } else {
            Err(format!(
                "Value `{value}` must be less than or equal to `{upper}`!"
            ))
        }
    })
}

/// Fail unless the value lies in the closed interval `[lower, upper]`.
pub fn within<T>(lower: T, upper: T) -> Action<T>
where
    T: PartialOrd + Display + Copy + 'static,
{
    Action::observe(move |value: &T| {
        if *value >= lower && *value <= upper {
            Ok(())
        } else {
            Err(format!(
                "Value `{value}` must be in interval [{lower}, {upper}]!"
            ))
        }
    })
}

/// A user supplied hook run against every value an argument accepts.
///
/// Actions are applied in registration order, after the value is converted and checked against the choices.
///
/// ### Example
/// ```
/// # use carp_builder as carp;
/// use carp::{Action, ArgumentParser};
///
/// let mut ap = ArgumentParser::new();
/// ap.add_optional_argument::<String>("name")
///     .unwrap()
///     .action(Action::observe(|value: &String| {
///         if value.is_empty() {
///             Err("must not be empty".to_string())
///         } else {
///             Ok(())
///         }
///     }))
///     .action(Action::transform(|value: &String| value.to_uppercase()))
///     .action(Action::modify(|value: &mut String| value.push('!')));
///
/// ap.parse_args(&["--name", "abc"]).unwrap();
/// assert_eq!(ap.value::<String>("name").unwrap(), "ABC!");
/// assert!(ap.parse_args(&["--name", ""]).is_err());
/// ```
pub enum Action<T> {
    /// Validate the value without changing it; an `Err` fails the parse with its message.
    Observe(Box<dyn Fn(&T) -> Result<(), String>>),
    /// Replace the value with a computed one.
    Transform(Box<dyn Fn(&T) -> T>),
    /// Mutate the value in place.
    Modify(Box<dyn Fn(&mut T)>),
}

impl<T> Action<T> {
    /// Create an [`Action::Observe`].
    pub fn observe(f: impl Fn(&T) -> Result<(), String> + 'static) -> Self {
        Action::Observe(Box::new(f))
    }

    /// Create an [`Action::Transform`].
    pub fn transform(f: impl Fn(&T) -> T + 'static) -> Self {
        Action::Transform(Box::new(f))
    }

    /// Create an [`Action::Modify`].
    pub fn modify(f: impl Fn(&mut T) + 'static) -> Self {
        Action::Modify(Box::new(f))
    }

    pub(crate) fn apply(&self, mut value: T) -> Result<T, String> {
        match self {
            Action::Observe(f) => {
                f(&value)?;
                Ok(value)
            }
            Action::Transform(f) => Ok(f(&value)),
            Action::Modify(f) => {
                f(&mut value);
                Ok(value)
            }
        }
    }
}

impl<T> std::fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Observe(_) => write!(f, "Action::Observe"),
            Action::Transform(_) => write!(f, "Action::Transform"),
            Action::Modify(_) => write!(f, "Action::Modify"),
        }
    }
}

/// Which part of an [`ArgumentName`] a match query applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameScope {
    /// Match either the primary or the secondary name.
    Any,
    /// Match only the primary name.
    Primary,
    /// Match only the secondary name.
    Secondary,
}

/// The identity of an argument: a primary name and an optional secondary (short) name.
///
/// On the command line the names are specified with the flag prefix, ex: `--exponent` or `-e`.
///
/// ### Example
/// ```
/// # use carp_builder as carp;
/// use carp::{ArgumentName, NameScope};
///
/// let name = ArgumentName::from(("exponent", "e"));
/// assert!(name.matches("exponent"));
/// assert!(name.matches("e"));
/// assert!(!name.matches_in("e", NameScope::Primary));
/// assert_eq!(name.to_string(), "exponent, e");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgumentName {
    primary: String,
    secondary: Option<String>,
}

impl ArgumentName {
    /// Create a name with only a primary part.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
        }
    }

    /// Create a name with both a primary and secondary part.
    pub fn with_secondary(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: Some(secondary.into()),
        }
    }

    /// The primary name.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary (short) name, if any.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    /// Whether `name` equals either the primary or secondary name.
    pub fn matches(&self, name: &str) -> bool {
        self.matches_in(name, NameScope::Any)
    }

    /// Whether `name` equals the part of this name selected by `scope`.
    pub fn matches_in(&self, name: &str, scope: NameScope) -> bool {
        let primary = self.primary == name;
        let secondary = self.secondary.as_deref() == Some(name);

        match scope {
            NameScope::Any => primary || secondary,
            NameScope::Primary => primary,
            NameScope::Secondary => secondary,
        }
    }

    /// Whether any part of `other` matches any part of this name.
    pub(crate) fn collides(&self, other: &ArgumentName) -> bool {
        self.matches(&other.primary)
            || other
                .secondary
                .as_ref()
                .map_or(false, |secondary| self.matches(secondary))
    }
}

impl From<&str> for ArgumentName {
    fn from(value: &str) -> Self {
        ArgumentName::new(value)
    }
}

impl From<String> for ArgumentName {
    fn from(value: String) -> Self {
        ArgumentName::new(value)
    }
}

impl From<(&str, &str)> for ArgumentName {
    fn from((primary, secondary): (&str, &str)) -> Self {
        ArgumentName::with_secondary(primary, secondary)
    }
}

impl std::fmt::Display for ArgumentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.secondary {
            Some(secondary) => write!(f, "{}, {secondary}", self.primary),
            None => write!(f, "{}", self.primary),
        }
    }
}

use std::any::{type_name, Any, TypeId};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::api::{Action, Value};
use crate::matcher::ArgumentName;
use crate::model::{NoneType, Range};
use crate::parser::{ArgumentDescriptor, ArgumentInterface, ConfigError, LookupError, ParseError};
use crate::prelude::ArgumentValue;

fn is_none_type<T: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<NoneType>()
}

/// Convert, validate, and transform a raw token into `T`.
fn accept<T: ArgumentValue>(
    name: &ArgumentName,
    raw: &str,
    choices: &[T],
    actions: &[Action<T>],
) -> Result<T, ParseError> {
    if is_none_type::<T>() {
        return Err(ParseError::NoneTypeValue {
            name: name.to_string(),
            value: raw.to_string(),
        });
    }

    let value = T::from_str(raw).map_err(|_| ParseError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
        type_name: type_name::<T>(),
    })?;

    if !choices.is_empty() && !choices.contains(&value) {
        return Err(ParseError::InvalidChoice {
            name: name.to_string(),
            value: raw.to_string(),
        });
    }

    actions.iter().try_fold(value, |value, action| {
        action
            .apply(value)
            .map_err(|message| ParseError::ActionFailed {
                name: name.to_string(),
                value: raw.to_string(),
                message,
            })
    })
}

/// An argument bound by position, taking precisely one value.
///
/// Registered via [`ArgumentParser::add_positional_argument`](crate::ArgumentParser::add_positional_argument).
/// Positional arguments are always required.
pub struct PositionalArgument<T: ArgumentValue> {
    name: ArgumentName,
    help: Option<String>,
    choices: Vec<T>,
    actions: Vec<Action<T>>,
    values: Vec<Value>,
}

impl<T: ArgumentValue> PositionalArgument<T> {
    pub(crate) fn new(name: ArgumentName) -> Self {
        Self {
            name,
            help: None,
            choices: Vec::default(),
            actions: Vec::default(),
            values: Vec::default(),
        }
    }

    /// Document the argument in the help message.
    pub fn help(&mut self, message: impl Into<String>) -> &mut Self {
        self.help.replace(message.into());
        self
    }

    /// Restrict the accepted values.
    pub fn choices(&mut self, choices: impl IntoIterator<Item = T>) -> &mut Self {
        self.choices = choices.into_iter().collect();
        self
    }

    /// Append an action to run against the accepted value.
    pub fn action(&mut self, action: Action<T>) -> &mut Self {
        self.actions.push(action);
        self
    }

    fn nargs() -> Range {
        Range::exactly(1)
    }
}

impl<T: ArgumentValue> ArgumentInterface for PositionalArgument<T> {
    fn name(&self) -> &ArgumentName {
        &self.name
    }

    fn is_required(&self) -> bool {
        true
    }

    fn bypass_required_enabled(&self) -> bool {
        false
    }

    fn mark_used(&mut self) -> bool {
        !self.is_used()
    }

    fn is_used(&self) -> bool {
        !self.values.is_empty()
    }

    fn count(&self) -> usize {
        usize::from(self.is_used())
    }

    fn set_value(&mut self, raw: &str) -> Result<bool, ParseError> {
        if !Self::nargs().accepts_more(self.values.len()) {
            return Err(ParseError::ValueAlreadySet(self.name.to_string()));
        }

        let value = accept(&self.name, raw, &self.choices, &self.actions)?;
        self.values.push(Value::new(value));
        Ok(Self::nargs().accepts_more(self.values.len()))
    }

    fn has_value(&self) -> bool {
        self.is_used()
    }

    fn nvalues_ordering(&self) -> Ordering {
        Self::nargs().compare(self.values.len())
    }

    fn value(&self) -> Option<&Value> {
        self.values.first()
    }

    fn values(&self) -> Result<&[Value], LookupError> {
        Err(LookupError::PositionalValues(self.name.to_string()))
    }

    fn descriptor(&self) -> ArgumentDescriptor {
        let mut descriptor = ArgumentDescriptor::new(self.name.clone(), true, Self::nargs());
        descriptor.help = self.help.clone();
        descriptor.choices = self.choices.iter().map(ToString::to_string).collect();
        descriptor
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// An argument bound by flag (`--name` or `-n`), taking the value tokens which follow it.
///
/// Registered via [`ArgumentParser::add_optional_argument`](crate::ArgumentParser::add_optional_argument).
/// The default range is [`Range::any`].
pub struct OptionalArgument<T: ArgumentValue> {
    name: ArgumentName,
    help: Option<String>,
    required: bool,
    bypass_required: bool,
    nargs: Range,
    choices: Vec<T>,
    actions: Vec<Action<T>>,
    flag_actions: Vec<Box<dyn Fn()>>,
    default_values: Vec<Value>,
    implicit_values: Vec<Value>,
    values: Vec<Value>,
    count: usize,
}

impl<T: ArgumentValue> OptionalArgument<T> {
    pub(crate) fn new(name: ArgumentName) -> Self {
        Self {
            name,
            help: None,
            required: false,
            bypass_required: false,
            nargs: Range::any(),
            choices: Vec::default(),
            actions: Vec::default(),
            flag_actions: Vec::default(),
            default_values: Vec::default(),
            implicit_values: Vec::default(),
            values: Vec::default(),
            count: 0,
        }
    }

    /// Document the argument in the help message.
    pub fn help(&mut self, message: impl Into<String>) -> &mut Self {
        self.help.replace(message.into());
        self
    }

    /// Require a value (parsed or predefined) for this argument.
    ///
    /// Fails if [`OptionalArgument::bypass_required`] is already enabled.
    pub fn required(&mut self) -> Result<&mut Self, ConfigError> {
        if self.bypass_required {
            return Err(ConfigError::RequiredBypassConflict(self.name.to_string()));
        }

        self.required = true;
        Ok(self)
    }

    /// When this argument is used, skip the required and value count checks of every argument.
    ///
    /// Fails if [`OptionalArgument::required`] is already enabled.
    pub fn bypass_required(&mut self) -> Result<&mut Self, ConfigError> {
        if self.required {
            return Err(ConfigError::RequiredBypassConflict(self.name.to_string()));
        }

        self.bypass_required = true;
        Ok(self)
    }

    /// Set the number of values the argument takes.
    pub fn nargs(&mut self, nargs: impl Into<Range>) -> &mut Self {
        self.nargs = nargs.into();
        self
    }

    /// Restrict the accepted values.
    pub fn choices(&mut self, choices: impl IntoIterator<Item = T>) -> &mut Self {
        self.choices = choices.into_iter().collect();
        self
    }

    /// Append an action to run against each accepted value.
    pub fn action(&mut self, action: Action<T>) -> &mut Self {
        self.actions.push(action);
        self
    }

    /// Append a side effect to run each time the flag is used.
    pub fn on_flag(&mut self, action: impl Fn() + 'static) -> &mut Self {
        self.flag_actions.push(Box::new(action));
        self
    }

    /// The value when nothing was parsed.
    /// Clears [`OptionalArgument::required`].
    pub fn default_value(&mut self, value: T) -> &mut Self {
        self.default_values(vec![value])
    }

    /// The values when nothing was parsed.
    /// Clears [`OptionalArgument::required`].
    pub fn default_values(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        self.default_values = values.into_iter().map(Value::new).collect();
        self.required = false;
        self
    }

    /// The value when the flag is used without any value.
    pub fn implicit_value(&mut self, value: T) -> &mut Self {
        self.implicit_values(vec![value])
    }

    /// The values when the flag is used without any value.
    pub fn implicit_values(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        self.implicit_values = values.into_iter().map(Value::new).collect();
        self
    }

    fn predefined(&self) -> &[Value] {
        if self.count > 0 && !self.implicit_values.is_empty() {
            &self.implicit_values
        } else {
            &self.default_values
        }
    }
}

impl<T: ArgumentValue> ArgumentInterface for OptionalArgument<T> {
    fn name(&self) -> &ArgumentName {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn bypass_required_enabled(&self) -> bool {
        self.bypass_required
    }

    fn mark_used(&mut self) -> bool {
        self.count += 1;

        for action in &self.flag_actions {
            action();
        }

        !is_none_type::<T>() && self.nargs.accepts_more(self.values.len())
    }

    fn is_used(&self) -> bool {
        self.count > 0
    }

    fn count(&self) -> usize {
        self.count
    }

    fn set_value(&mut self, raw: &str) -> Result<bool, ParseError> {
        if !self.nargs.accepts_more(self.values.len()) {
            return Err(ParseError::ValueAlreadySet(self.name.to_string()));
        }

        let value = accept(&self.name, raw, &self.choices, &self.actions)?;
        self.values.push(Value::new(value));
        Ok(self.nargs.accepts_more(self.values.len()))
    }

    fn has_value(&self) -> bool {
        !self.values.is_empty() || !self.predefined().is_empty()
    }

    fn nvalues_ordering(&self) -> Ordering {
        if self.values.is_empty() && !self.predefined().is_empty() {
            Ordering::Equal
        } else {
            self.nargs.compare(self.values.len())
        }
    }

    fn value(&self) -> Option<&Value> {
        self.values.first().or_else(|| self.predefined().first())
    }

    fn values(&self) -> Result<&[Value], LookupError> {
        if self.values.is_empty() {
            Ok(self.predefined())
        } else {
            Ok(&self.values)
        }
    }

    fn descriptor(&self) -> ArgumentDescriptor {
        let mut descriptor = ArgumentDescriptor::new(self.name.clone(), false, self.nargs);
        descriptor.help = self.help.clone();
        descriptor.required = self.required;
        descriptor.choices = self.choices.iter().map(ToString::to_string).collect();
        descriptor.defaults = self.default_values.iter().map(ToString::to_string).collect();
        descriptor.implicits = self.implicit_values.iter().map(ToString::to_string).collect();
        descriptor
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    impl<T: ArgumentValue> std::fmt::Debug for OptionalArgument<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("OptionalArgument").finish_non_exhaustive()
        }
    }

    fn first<T: Clone + 'static>(argument: &dyn ArgumentInterface) -> Option<T> {
        argument.value().and_then(|v| v.get::<T>()).cloned()
    }

    #[test]
    fn positional_set_value() {
        // Setup
        let mut argument = PositionalArgument::<u32>::new(ArgumentName::new("value"));

        // Execute
        let accepts = argument.set_value("7").unwrap();

        // Verify
        assert!(!accepts);
        assert!(argument.is_used());
        assert_eq!(argument.count(), 1);
        assert_eq!(first::<u32>(&argument), Some(7));
        assert_eq!(argument.nvalues_ordering(), Ordering::Equal);
    }

    #[test]
    fn positional_set_value_twice() {
        // Setup
        let mut argument = PositionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.set_value("7").unwrap();

        // Execute
        let result = argument.set_value("8");

        // Verify
        assert_eq!(result, Err(ParseError::ValueAlreadySet("value".to_string())));
        assert_eq!(first::<u32>(&argument), Some(7));
    }

    #[test]
    fn positional_unused() {
        let argument = PositionalArgument::<u32>::new(ArgumentName::new("value"));
        assert!(!argument.is_used());
        assert!(!argument.has_value());
        assert_eq!(argument.count(), 0);
        assert_eq!(argument.value().is_none(), true);
        assert_eq!(argument.nvalues_ordering(), Ordering::Less);
    }

    #[test]
    fn positional_values() {
        let mut argument = PositionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.set_value("1").unwrap();
        assert_matches!(argument.values(), Err(LookupError::PositionalValues(_)));
    }

    #[rstest]
    #[case("1", Ok(false))]
    #[case("abc", Err(ParseError::InvalidValue { name: "value".to_string(), value: "abc".to_string(), type_name: "u32" }))]
    #[case("-1", Err(ParseError::InvalidValue { name: "value".to_string(), value: "-1".to_string(), type_name: "u32" }))]
    #[case("3", Err(ParseError::InvalidChoice { name: "value".to_string(), value: "3".to_string() }))]
    fn positional_choices(#[case] raw: &str, #[case] expected: Result<bool, ParseError>) {
        // Setup
        let mut argument = PositionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.choices([1, 2]);

        // Execute
        let result = argument.set_value(raw);

        // Verify
        assert_eq!(result, expected);
    }

    #[test]
    fn positional_actions() {
        // Setup
        let mut argument = PositionalArgument::<i32>::new(ArgumentName::new("value"));
        argument
            .action(Action::transform(|v: &i32| v * 10))
            .action(Action::modify(|v: &mut i32| *v += 1))
            .action(Action::observe(|v: &i32| {
                if *v > 0 {
                    Ok(())
                } else {
                    Err("not positive".to_string())
                }
            }));

        // Execute
        argument.set_value("2").unwrap();

        // Verify
        assert_eq!(first::<i32>(&argument), Some(21));
    }

    #[test]
    fn positional_action_failed() {
        // Setup
        let mut argument = PositionalArgument::<i32>::new(ArgumentName::new("value"));
        argument.action(Action::observe(|_: &i32| Err("never".to_string())));

        // Execute
        let result = argument.set_value("2");

        // Verify
        assert_eq!(
            result,
            Err(ParseError::ActionFailed {
                name: "value".to_string(),
                value: "2".to_string(),
                message: "never".to_string(),
            })
        );
        assert!(!argument.is_used());
    }

    #[test]
    fn positional_descriptor() {
        // Setup
        let mut argument = PositionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.help("message").choices([1, 2]);

        // Execute
        let descriptor = argument.descriptor();

        // Verify
        assert!(descriptor.positional);
        assert!(descriptor.required);
        assert_eq!(descriptor.help, Some("message".to_string()));
        assert_eq!(descriptor.nargs, Range::exactly(1));
        assert_eq!(descriptor.choices, vec!["1".to_string(), "2".to_string()]);
    }

    #[rstest]
    #[case(Range::exactly(0), false)]
    #[case(Range::exactly(1), true)]
    #[case(Range::up_to(5), true)]
    #[case(Range::any(), true)]
    fn optional_mark_used(#[case] nargs: Range, #[case] expected: bool) {
        // Setup
        let mut argument = OptionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.nargs(nargs);

        // Execute
        let accepts = argument.mark_used();

        // Verify
        assert_eq!(accepts, expected);
        assert_eq!(argument.count(), 1);
        assert!(argument.is_used());
    }

    #[test]
    fn optional_mark_used_none_type() {
        let mut argument = OptionalArgument::<NoneType>::new(ArgumentName::new("value"));
        assert!(!argument.mark_used());
        assert_eq!(argument.count(), 1);
        assert_eq!(
            argument.set_value("abc"),
            Err(ParseError::NoneTypeValue {
                name: "value".to_string(),
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn optional_on_flag() {
        // Setup
        let fired = Rc::new(Cell::new(0));
        let fired_inner = fired.clone();
        let mut argument = OptionalArgument::<bool>::new(ArgumentName::new("value"));
        argument.on_flag(move || fired_inner.set(fired_inner.get() + 1));

        // Execute
        argument.mark_used();
        argument.mark_used();

        // Verify
        assert_eq!(fired.get(), 2);
        assert_eq!(argument.count(), 2);
    }

    #[test]
    fn optional_set_value_until_full() {
        // Setup
        let mut argument = OptionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.nargs(Range::between(1, 2));

        // Execute & Verify
        assert_eq!(argument.set_value("1"), Ok(true));
        assert_eq!(argument.set_value("2"), Ok(false));
        assert_eq!(
            argument.set_value("3"),
            Err(ParseError::ValueAlreadySet("value".to_string()))
        );
        assert_eq!(argument.values().unwrap().len(), 2);
    }

    #[test]
    fn optional_required_bypass_conflict() {
        let mut argument = OptionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.required().unwrap();
        assert_matches!(
            argument.bypass_required(),
            Err(ConfigError::RequiredBypassConflict(_))
        );

        let mut argument = OptionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.bypass_required().unwrap();
        assert_matches!(
            argument.required(),
            Err(ConfigError::RequiredBypassConflict(_))
        );
    }

    #[test]
    fn optional_default_clears_required() {
        let mut argument = OptionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.required().unwrap().default_value(1);
        assert!(!argument.is_required());

        argument.required().unwrap();
        assert!(argument.is_required());
        assert!(argument.has_value());
    }

    #[test]
    fn optional_predefined() {
        // Setup
        let mut argument = OptionalArgument::<f64>::new(ArgumentName::new("value"));
        argument.default_value(0.0).implicit_value(1.0);

        // Execute & Verify
        assert!(argument.has_value());
        assert_eq!(argument.values().unwrap().len(), 1);
        assert_eq!(first::<f64>(&argument), Some(0.0));

        argument.mark_used();
        assert_eq!(first::<f64>(&argument), Some(1.0));
        assert_eq!(argument.nvalues_ordering(), Ordering::Equal);

        argument.set_value("2.5").unwrap();
        assert_eq!(argument.values().unwrap().len(), 1);
        assert_eq!(first::<f64>(&argument), Some(2.5));
    }

    #[test]
    fn optional_no_value() {
        let mut argument = OptionalArgument::<u32>::new(ArgumentName::new("value"));
        argument.nargs(Range::exactly(1));
        assert!(!argument.has_value());
        assert_eq!(argument.value().is_none(), true);
        assert_eq!(argument.values().unwrap().len(), 0);

        argument.mark_used();
        assert_eq!(argument.nvalues_ordering(), Ordering::Less);
    }

    #[test]
    fn optional_descriptor() {
        // Setup
        let mut argument = OptionalArgument::<String>::new(ArgumentName::from(("base", "b")));
        argument
            .help("message")
            .nargs(Range::exactly(1))
            .choices(["bin".to_string(), "dec".to_string()])
            .default_value("dec".to_string())
            .required()
            .unwrap();

        // Execute
        let descriptor = argument.descriptor();

        // Verify
        assert!(!descriptor.positional);
        assert!(descriptor.required);
        assert_eq!(descriptor.name, ArgumentName::from(("base", "b")));
        assert_eq!(descriptor.nargs, Range::exactly(1));
        assert_eq!(descriptor.choices, vec!["bin".to_string(), "dec".to_string()]);
        assert_eq!(descriptor.defaults, vec!["dec".to_string()]);
        assert!(descriptor.implicits.is_empty());
    }
}

use std::any::{type_name, Any};

/// A type-erased value, recoverable by its exact type.
pub(crate) struct Value {
    inner: Box<dyn Any>,
    type_name: &'static str,
    display: String,
}

impl Value {
    pub(crate) fn new<T: std::fmt::Display + 'static>(value: T) -> Self {
        Self {
            display: value.to_string(),
            type_name: type_name::<T>(),
            inner: Box::new(value),
        }
    }

    /// Recover the value as `T`, or `None` when `T` is not the stored type.
    pub(crate) fn get<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Value({}: {})", self.display, self.type_name)
    }
}

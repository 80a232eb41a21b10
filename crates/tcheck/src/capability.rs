//! Capabilities used by the nil and error checks.

use std::fmt::Display;

use tcheck_core::Value;

/// Types that can be absent.
pub trait Nilable {
    /// True when the value is absent.
    fn is_nil(&self) -> bool;
}

impl<T> Nilable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl Nilable for Value {
    fn is_nil(&self) -> bool {
        Value::is_nil(self)
    }
}

impl<T: Nilable + ?Sized> Nilable for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

/// Types that may carry an error.
pub trait MaybeError {
    /// Rendered error, if one is present.
    fn error_message(&self) -> Option<String>;
}

impl<T, E: Display> MaybeError for Result<T, E> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().err().map(ToString::to_string)
    }
}

impl<E: std::error::Error> MaybeError for Option<E> {
    fn error_message(&self) -> Option<String> {
        self.as_ref().map(ToString::to_string)
    }
}

impl<M: MaybeError + ?Sized> MaybeError for &M {
    fn error_message(&self) -> Option<String> {
        (**self).error_message()
    }
}

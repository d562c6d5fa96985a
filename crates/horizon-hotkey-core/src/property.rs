//! Reactive properties with change detection.
//!
//! A [`Property`] wraps a value and reports whether a write actually changed
//! it. Widgets pair properties with a [`Signal`](crate::Signal) and only emit
//! when `set()` returns `true`.
//!
//! # Example
//!
//! ```
//! use horizon_hotkey_core::Property;
//!
//! let prop = Property::new(Some("ctrl+k".to_string()));
//!
//! // Setting the same value reports no change
//! assert!(!prop.set(Some("ctrl+k".to_string())));
//!
//! // Setting a different value does
//! assert!(prop.set(None));
//! assert_eq!(prop.get(), None);
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;

/// A reactive property that tracks changes.
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            tracing::trace!(target: targets::PROPERTY, "property changed");
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}

//! Request-supplied inputs: previously submitted values and validation errors.

use std::collections::{BTreeMap, HashMap};

use crate::error::ValidationErrors;

/// Values submitted on the previous request, flashed back after a failed
/// validation round-trip.
pub trait OldInput {
    /// Returns the submitted value for a field, if any. A field submitted
    /// empty returns `Some("")`.
    fn get(&self, name: &str) -> Option<&str>;
}

impl OldInput for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

impl OldInput for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }
}

/// Source of validation error messages.
pub trait ErrorSource {
    /// Returns the first error message for a field.
    fn first(&self, name: &str) -> Option<&str>;
}

impl ErrorSource for ValidationErrors {
    fn first(&self, name: &str) -> Option<&str> {
        Self::first(self, name)
    }
}

impl ErrorSource for HashMap<String, String> {
    fn first(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ErrorSource for BTreeMap<String, String> {
    fn first(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

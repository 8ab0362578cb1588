//! In-memory field source.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use formguard_core::{
    application::ports::FieldSource,
    domain::{FieldId, FieldValues},
};

/// Thread-safe field source backed by a map.
///
/// Clones share the same values, so a caller can keep a handle and change
/// the form between validations. Unset fields read as `""`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFieldSource {
    inner: Arc<RwLock<HashMap<FieldId, String>>>,
}

impl MemoryFieldSource {
    /// Create a source with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding `values`.
    pub fn from_values(values: &FieldValues) -> Self {
        let source = Self::new();
        for field in FieldId::ALL {
            source.set(field, values.get(field));
        }
        source
    }

    /// Builder-style setter.
    pub fn with(self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Replace the value of `field`.
    pub fn set(&self, field: FieldId, value: impl Into<String>) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.insert(field, value.into());
    }

    /// Snapshot of the current values.
    pub fn values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        for field in FieldId::ALL {
            values.set(field, self.value(field));
        }
        values
    }
}

impl FieldSource for MemoryFieldSource {
    fn value(&self, field: FieldId) -> String {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(&field).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_read_empty() {
        let source = MemoryFieldSource::new().with(FieldId::Username, "alice");
        assert_eq!(source.value(FieldId::Username), "alice");
        assert_eq!(source.value(FieldId::Phone), "");
    }

    #[test]
    fn clones_share_values() {
        let source = MemoryFieldSource::new();
        let handle = source.clone();
        handle.set(FieldId::Email, "a@abc.com");
        assert_eq!(source.value(FieldId::Email), "a@abc.com");
    }

    #[test]
    fn values_round_trip_through_source() {
        let values = FieldValues::new()
            .with(FieldId::Username, " bob ")
            .with(FieldId::Password, "pw");
        assert_eq!(MemoryFieldSource::from_values(&values).values(), values);
    }
}

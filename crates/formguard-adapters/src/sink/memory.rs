//! In-memory error sink.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use formguard_core::{application::ports::ErrorSink, domain::FieldId};

/// Error sink that keeps what each slot displays plus every write made.
///
/// Clones share state, so the caller keeps a handle after boxing one into a
/// `FormValidator`.
#[derive(Debug, Clone, Default)]
pub struct MemoryErrorSink {
    inner: Arc<RwLock<MemoryErrorSinkInner>>,
}

#[derive(Debug, Default)]
struct MemoryErrorSinkInner {
    display: HashMap<FieldId, String>,
    writes: Vec<(FieldId, String)>,
}

impl MemoryErrorSink {
    /// Create a sink with every slot blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown for `field` (`""` when clear).
    pub fn text(&self, field: FieldId) -> String {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.display.get(&field).cloned().unwrap_or_default()
    }

    /// Fields whose slot currently shows a message, in form order.
    pub fn displayed(&self) -> Vec<(FieldId, String)> {
        FieldId::ALL
            .into_iter()
            .map(|field| (field, self.text(field)))
            .filter(|(_, text)| !text.is_empty())
            .collect()
    }

    /// Every `set_error_text` call, in order.
    pub fn writes(&self) -> Vec<(FieldId, String)> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.writes.clone()
    }

    /// Forget the write log; displayed text is kept.
    pub fn clear_log(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.writes.clear();
    }
}

impl ErrorSink for MemoryErrorSink {
    fn set_error_text(&self, field: FieldId, message: &str) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.display.insert(field, message.to_string());
        inner.writes.push((field, message.to_string()));
    }
}

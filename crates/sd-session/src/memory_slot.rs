use crate::Result as SessionErrorResult;
use crate::slot::SessionSlot;

use std::sync::{Arc, Mutex};

/// Session slot held in process memory. Nothing survives a restart; meant
/// for tests and ephemeral sessions. Clones share the same record.
#[derive(Clone, Default)]
pub struct MemorySessionSlot {
    record: Arc<Mutex<Option<String>>>,
}

impl MemorySessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the slot, as if a previous process had persisted a record.
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(record.into()))),
        }
    }
}

impl SessionSlot for MemorySessionSlot {
    fn read(&self) -> SessionErrorResult<Option<String>> {
        Ok(self.record.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn write(&self, record: &str) -> SessionErrorResult<()> {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = Some(record.to_string());
        Ok(())
    }

    fn clear(&self) -> SessionErrorResult<()> {
        *self.record.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

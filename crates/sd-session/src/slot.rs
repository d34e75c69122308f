use crate::Result as SessionErrorResult;

/// A single named slot of client-local storage.
///
/// The product keeps exactly one persisted record: the serialized current
/// Identity. Implementations only move raw strings; (de)serialization
/// happens in [`crate::record`].
pub trait SessionSlot {
    /// The stored record, or `None` when the slot is empty.
    fn read(&self) -> SessionErrorResult<Option<String>>;

    /// Replace the slot's content.
    fn write(&self, record: &str) -> SessionErrorResult<()>;

    /// Empty the slot. Clearing an already-empty slot is not an error.
    fn clear(&self) -> SessionErrorResult<()>;
}

//! Serialization boundary between Identity and the session slot.

use crate::slot::SessionSlot;
use crate::{Result as SessionErrorResult, SessionError};

use sd_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;

/// Serialize the identity into the slot.
#[track_caller]
pub fn persist<S: SessionSlot>(slot: &S, identity: &Identity) -> SessionErrorResult<()> {
    let record = serde_json::to_string(identity).map_err(|e| SessionError::Encode {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })?;

    slot.write(&record)
}

/// Read the slot exactly once and deserialize it back into an Identity.
///
/// Absent, unreadable or malformed records all restore to "no session" -
/// the caller never sees an error, only an empty store.
pub fn restore<S: SessionSlot>(slot: &S) -> Option<Identity> {
    let record = match slot.read() {
        Ok(Some(record)) => record,
        Ok(None) => return None,
        Err(e) => {
            warn!("Session slot unreadable, starting signed out: {e}");
            return None;
        }
    };

    match serde_json::from_str(&record) {
        Ok(identity) => Some(identity),
        Err(e) => {
            warn!("Persisted session record is malformed, starting signed out: {e}");
            None
        }
    }
}

//! Session store - single source of truth for "who is signed in".

use crate::registration::RegistrationProfile;
use crate::verifier::CredentialVerifier;
use crate::{AuthError, Result as AuthErrorResult};

use sd_core::{GeoLocation, Identity, Role};
use sd_session::SessionSlot;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};

/// Holds at most one authenticated identity and keeps the session slot in
/// sync with it.
///
/// The store is built once at startup and handed to whoever needs it; there
/// is no global. Restoration from the slot happens exactly once, in
/// [`SessionStore::open`].
pub struct SessionStore<V, S> {
    verifier: V,
    slot: S,
    verify_timeout: Duration,
    current: Option<Identity>,
}

impl<V, S> SessionStore<V, S>
where
    V: CredentialVerifier,
    S: SessionSlot,
{
    /// Build the store and restore any persisted session.
    ///
    /// A missing or malformed persisted record starts the store signed out;
    /// that is never an error.
    pub fn open(verifier: V, slot: S, verify_timeout: Duration) -> Self {
        let current = sd_session::restore(&slot);
        if let Some(identity) = &current {
            info!("Restored session for {} ({})", identity.name, identity.role);
        }

        Self {
            verifier,
            slot,
            verify_timeout,
            current,
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Sign in as `role` with the given credentials.
    ///
    /// `Ok(true)` sets and persists the identity. A credential mismatch is
    /// `Ok(false)` and leaves the store untouched, so the caller can show a
    /// generic "invalid credentials" message. Only infrastructure trouble
    /// (slot I/O, verifier timeout) surfaces as an error.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> AuthErrorResult<bool> {
        let timeout_secs = self.verify_timeout.as_secs();
        let location = ErrorLocation::from(Location::caller());

        let verified =
            tokio::time::timeout(self.verify_timeout, self.verifier.verify(email, password, role))
                .await
                .map_err(|_| AuthError::VerifyTimeout {
                    timeout_secs,
                    location,
                })?;

        let identity = match verified {
            Ok(identity) => identity,
            Err(AuthError::InvalidCredentials { .. }) => {
                debug!("Login rejected for role {role}");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        sd_session::persist(&self.slot, &identity).map_err(AuthError::slot)?;
        info!("Signed in {} as {}", identity.name, identity.role);
        self.current = Some(identity);
        Ok(true)
    }

    /// Create an account from the sign-up form. Always succeeds against the
    /// demo directory; the new identity is a plain `user`.
    pub async fn register(&mut self, profile: RegistrationProfile) -> AuthErrorResult<bool> {
        let identity = profile.into_identity();

        sd_session::persist(&self.slot, &identity).map_err(AuthError::slot)?;
        info!("Registered {} ({})", identity.name, identity.email);
        self.current = Some(identity);
        Ok(true)
    }

    /// Clear the current identity and the persisted record. Idempotent.
    pub fn logout(&mut self) -> AuthErrorResult<()> {
        self.slot.clear().map_err(AuthError::slot)?;
        if let Some(identity) = self.current.take() {
            info!("Signed out {}", identity.name);
        }
        Ok(())
    }

    /// Merge a new geolocation into the current identity and re-persist.
    /// Without a current identity this is a no-op.
    pub fn update_location(&mut self, location: GeoLocation) -> AuthErrorResult<()> {
        let Some(identity) = self.current.as_mut() else {
            return Ok(());
        };

        identity.location = Some(location);
        sd_session::persist(&self.slot, identity).map_err(AuthError::slot)?;
        debug!("Updated location for {}", identity.name);
        Ok(())
    }
}

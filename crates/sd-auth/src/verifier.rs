use crate::Result as AuthErrorResult;

use sd_core::{Identity, Role};

use async_trait::async_trait;

/// Credential verification seam.
///
/// The session store only ever talks to this trait, so the bundled
/// [`crate::StaffDirectory`] demo table and a real backend client are
/// interchangeable without touching the store's contract.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Resolve credentials to an identity, or
    /// [`AuthError::InvalidCredentials`](crate::AuthError::InvalidCredentials)
    /// when they don't match.
    async fn verify(&self, email: &str, password: &str, role: Role)
    -> AuthErrorResult<Identity>;
}

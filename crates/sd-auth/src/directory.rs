//! Demo staff directory - the static role-to-identity table.

use crate::verifier::CredentialVerifier;
use crate::{AuthError, Result as AuthErrorResult};

use sd_core::{GeoLocation, Identity, Role};

use async_trait::async_trait;

/// One well-known identity per role, standing in for a user database.
///
/// The password argument is accepted but never checked; this directory
/// exists so the demo can sign in as any role with its fixture email.
#[derive(Default)]
pub struct StaffDirectory;

impl StaffDirectory {
    pub fn new() -> Self {
        Self
    }

    /// The fixture identity for a role.
    pub fn identity_for(role: Role) -> Identity {
        match role {
            Role::Admin => Identity::new(
                "admin-1",
                "System Administrator",
                "admin@company.com",
                Role::Admin,
            )
            .with_avatar("👨‍💼"),
            Role::Employee => Identity::new(
                "emp-1",
                "John Technician",
                "john@company.com",
                Role::Employee,
            )
            .with_avatar("🔧")
            .with_department("IT Support")
            .with_location(GeoLocation::new(40.7128, -74.0060, "Building A, Floor 2")),
            Role::User => {
                Identity::new("user-1", "Jane Customer", "jane@company.com", Role::User)
                    .with_avatar("👩‍💼")
            }
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaffDirectory {
    async fn verify(
        &self,
        email: &str,
        _password: &str,
        role: Role,
    ) -> AuthErrorResult<Identity> {
        let fixture = Self::identity_for(role);
        if fixture.email == email {
            Ok(fixture)
        } else {
            Err(AuthError::invalid_credentials())
        }
    }
}

use sd_core::{Identity, Role};

use uuid::Uuid;

const NEW_MEMBER_AVATAR: &str = "👤";

/// What the sign-up form hands to the store.
///
/// Password confirmation is the caller's responsibility and is checked
/// before this struct is ever built.
#[derive(Debug, Clone)]
pub struct RegistrationProfile {
    pub name: String,
    pub email: String,
}

impl RegistrationProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Synthesize the identity for a fresh member. Role is always `User`.
    pub(crate) fn into_identity(self) -> Identity {
        let id = format!("user-{}", Uuid::new_v4().simple());
        Identity::new(id, self.name, self.email, Role::User).with_avatar(NEW_MEMBER_AVATAR)
    }
}

//! Route gate - decides whether the current identity may enter a screen.

use sd_core::{Identity, Role};

/// What the caller must do with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Identity may enter the route
    Permit,
    /// Nobody is signed in: go to the public landing surface
    RedirectToLanding,
    /// Signed in, wrong role: go to the default authenticated surface
    RedirectToDashboard,
}

/// Gate a route against its allowed-role set.
///
/// An empty `allowed` set means "any authenticated identity".
pub fn evaluate(identity: Option<&Identity>, allowed: &[Role]) -> GateDecision {
    let Some(identity) = identity else {
        return GateDecision::RedirectToLanding;
    };

    if allowed.is_empty() || allowed.contains(&identity.role) {
        GateDecision::Permit
    } else {
        GateDecision::RedirectToDashboard
    }
}

/// Boolean view of [`evaluate`].
pub fn can_enter(identity: Option<&Identity>, allowed: &[Role]) -> bool {
    evaluate(identity, allowed) == GateDecision::Permit
}

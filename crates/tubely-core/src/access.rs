//! Ownership rule for video resources.
//!
//! Authentication answers "who is calling"; this module answers "may they touch
//! this video". Keeping it separate from HTTP plumbing lets handlers share one
//! rule and lets it be tested on its own.

use uuid::Uuid;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Only the recorded owner of a video may modify it.
pub fn authorize_owner(caller: Uuid, owner: Uuid) -> AccessDecision {
    if caller == owner {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny
    }
}

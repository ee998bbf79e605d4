//! Session model: who is signed in, with which role, and whether we know yet.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the snapshot every page renders from. It is only mutated
//! by `state::store::SessionStore`; pages receive clones through a signal.
//!
//! DESIGN
//! ======
//! Readiness is encoded in the type: `principal == None` means the initial
//! auth check has not resolved. After that the principal is always a concrete
//! `Principal`, so there is no third "ready but unknown" state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::IdentityRecord;

/// Coarse authorization level asserted by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse a backend role claim. Unknown claims are `None`, never a default.
    #[must_use]
    pub fn from_claim(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// The signed-in principal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
}

/// Authentication outcome with the role folded into the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Principal {
    Unauthenticated,
    User(Identity),
    Admin(Identity),
}

impl Principal {
    /// Interpret a backend identity record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnrecognizedRole`] when the role claim is missing or
    /// is neither `user` nor `admin`.
    pub fn from_record(record: &IdentityRecord) -> Result<Self, ApiError> {
        let claim = record.role.as_deref().unwrap_or_default();
        let identity = Identity { uid: record.uid.clone(), email: record.email.clone() };
        match Role::from_claim(claim) {
            Some(Role::User) => Ok(Self::User(identity)),
            Some(Role::Admin) => Ok(Self::Admin(identity)),
            None => Err(ApiError::UnrecognizedRole(claim.to_owned())),
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Unauthenticated => None,
            Self::User(identity) | Self::Admin(identity) => Some(identity),
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Unauthenticated => None,
            Self::User(_) => Some(Role::User),
            Self::Admin(_) => Some(Role::Admin),
        }
    }
}

/// Snapshot of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    principal: Option<Principal>,
    credential: Option<String>,
}

impl SessionState {
    /// Session whose initial auth check has not resolved.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// Resolved session for `principal`. Credentials on an unauthenticated
    /// principal are dropped.
    #[must_use]
    pub fn resolved(principal: Principal, credential: Option<String>) -> Self {
        let mut state = Self::pending();
        state.set_principal(principal, credential);
        state
    }

    /// Resolved, signed-out session.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::resolved(Principal::Unauthenticated, None)
    }

    /// `false` until the first auth-state notification arrives.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.principal.is_some()
    }

    /// `None` while not ready.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.principal.as_ref().and_then(Principal::identity)
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.principal.as_ref().and_then(Principal::role)
    }

    /// Bearer credential for authorized requests.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.identity().is_some()
    }

    /// Replace identity and credential together.
    pub(crate) fn set_principal(&mut self, principal: Principal, credential: Option<String>) {
        self.credential = if principal.identity().is_some() { credential } else { None };
        self.principal = Some(principal);
    }

    /// Resolve to signed-out, dropping identity and credential together.
    pub(crate) fn clear(&mut self) {
        self.set_principal(Principal::Unauthenticated, None);
    }

    /// Apply an identity pushed by the ambient subscription.
    ///
    /// A push for the same uid without a token keeps the credential obtained
    /// at login.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnrecognizedRole`] after clearing the session when
    /// the pushed role claim is not recognized.
    pub(crate) fn apply_record(&mut self, record: Option<&IdentityRecord>) -> Result<(), ApiError> {
        let Some(record) = record else {
            self.clear();
            return Ok(());
        };
        match Principal::from_record(record) {
            Ok(principal) => {
                let same_uid = self.identity().is_some_and(|current| current.uid == record.uid);
                let credential = match (&record.token, same_uid) {
                    (Some(token), _) => Some(token.clone()),
                    (None, true) => self.credential.take(),
                    (None, false) => None,
                };
                self.set_principal(principal, credential);
                Ok(())
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }
}

use uuid::Uuid;

use crate::claims::Claims;

/// Identity of the caller, available to handlers through [`crate::Authz`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityContext {
    user_id: Uuid,
    email: String,
    admin: bool,
}

impl SecurityContext {
    #[must_use]
    pub fn new(user_id: Uuid, email: impl Into<String>, admin: bool) -> Self {
        Self {
            user_id,
            email: email.into(),
            admin,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

impl From<Claims> for SecurityContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            admin: claims.admin,
        }
    }
}

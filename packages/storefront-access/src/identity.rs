//! Authenticated identity and the profile boundary

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;
use crate::role::Role;

/// The authenticated visitor's session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            role,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Name to show in navigation, falling back to the email address
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            &self.name
        } else {
            self.email.as_deref().unwrap_or("Account")
        }
    }
}

/// Profile as returned by the backend (`GET /profile`, sign-in, sign-up).
///
/// The role is still a raw string here; converting into an [`Identity`]
/// is where unknown roles get rejected.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    #[serde(default, alias = "username")]
    pub name: String,
    pub email: Option<String>,
    pub role: String,
}

impl TryFrom<ProfilePayload> for Identity {
    type Error = IdentityError;

    fn try_from(payload: ProfilePayload) -> Result<Self, Self::Error> {
        let role = payload.role.parse::<Role>()?;
        let id = payload
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or(IdentityError::MissingId)?;

        Ok(Identity {
            id,
            name: payload.name,
            email: payload.email,
            role,
        })
    }
}

//! Who is asking, and what they may do.
//!
//! Every store operation takes a [`Caller`]. Reads and ordinary writes need a
//! signed-in user; resetting the trip needs the admin role on top.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Viewer,
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(Role::Viewer),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

/// Identity a request runs as.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn viewer(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            role: Role::Viewer,
        }
    }

    pub fn admin(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            role: Role::Admin,
        }
    }

    /// The signed-in user id. Blank ids count as signed out.
    pub fn require_user(&self) -> Result<&str> {
        match self.user_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(TripError::Unauthorized),
        }
    }

    /// The signed-in user id, provided the caller is an admin.
    pub fn require_admin(&self, action: &str) -> Result<&str> {
        let user = self.require_user()?;
        if self.role != Role::Admin {
            return Err(TripError::Forbidden {
                action: action.to_string(),
            });
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_unauthorized() {
        assert!(matches!(
            Caller::anonymous().require_user(),
            Err(TripError::Unauthorized)
        ));
        let blank = Caller::viewer("  ");
        assert!(matches!(blank.require_user(), Err(TripError::Unauthorized)));
    }

    #[test]
    fn test_viewer_cannot_act_as_admin() {
        let caller = Caller::viewer("ma");
        assert_eq!(caller.require_user().unwrap(), "ma");

        match caller.require_admin("reset the trip") {
            Err(TripError::Forbidden { action }) => assert_eq!(action, "reset the trip"),
            other => panic!("Expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn test_admin_passes_both_checks() {
        let caller = Caller::admin("shantanu");
        assert_eq!(caller.require_admin("reset").unwrap(), "shantanu");
    }

    #[test]
    fn test_anonymous_admin_is_still_unauthorized() {
        let caller = Caller {
            user_id: None,
            role: Role::Admin,
        };
        assert!(matches!(
            caller.require_admin("reset"),
            Err(TripError::Unauthorized)
        ));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!("owner".parse::<Role>().is_err());
    }
}

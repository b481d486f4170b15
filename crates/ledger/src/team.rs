//! Team membership primitives.
//!
//! Every business carries a team; the role set is closed and exactly one
//! member holds [`Role::Owner`] at any time (see
//! `Business::ensure_single_owner`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::LedgerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Manager,
    Member,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "manager" => Ok(Self::Manager),
            "member" => Ok(Self::Member),
            other => Err(LedgerError::InvalidRole(format!(
                "invalid team role: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl TeamMember {
    pub fn new(name: String, email: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::try_from("Owner").unwrap(), Role::Owner);
        assert_eq!(Role::try_from(" manager ").unwrap(), Role::Manager);
        assert_eq!(Role::try_from("MEMBER").unwrap(), Role::Member);
        assert!(Role::try_from("admin").is_err());
    }

    #[test]
    fn role_round_trips_through_as_str() {
        for role in [Role::Owner, Role::Manager, Role::Member] {
            assert_eq!(Role::try_from(role.as_str()).unwrap(), role);
        }
    }
}

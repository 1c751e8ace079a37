//! Staff and end-user roles.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a stored role string is not recognized.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

/// A user's role.
///
/// Roles gate the admin-facing operations: `Admin` and `Employee` are staff
/// roles; `User` is any identity resolved from a widget submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Staff with read access to the admin resources.
    Employee,
    /// A regular end-user (widget submitter).
    User,
}

impl Role {
    /// The role's canonical storage string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::User => "user",
        }
    }

    /// Whether this role is a staff role (admin or employee).
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Employee)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            "user" => Ok(Self::User),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_storage_strings() {
        for role in [Role::Admin, Role::Employee, Role::User] {
            let parsed: Role = role.as_str().parse().expect("known role");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn rejects_unknown_strings() {
        assert!("superadmin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn staff_check_excludes_end_users() {
        assert!(Role::Admin.is_staff());
        assert!(Role::Employee.is_staff());
        assert!(!Role::User.is_staff());
    }
}

//! Authorization policy for the admin resources.
//!
//! A pure capability table over `(role, action)` — no I/O, no dispatch —
//! applied uniformly to the Vote and User admin resources: `ViewAny` is open
//! to both staff roles, everything else requires `Admin`. Any panel
//! framework can consume this unchanged.

use waypoint_core::Role;

/// The capability set an admin resource exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    /// List the resource.
    ViewAny,
    /// View a single record.
    View,
    /// Create a record.
    Create,
    /// Update a record.
    Update,
    /// Delete a record.
    Delete,
    /// Restore a soft-deleted record.
    Restore,
    /// Permanently delete a record.
    ForceDelete,
}

impl AdminAction {
    /// All actions, for exhaustive table checks.
    pub const ALL: [Self; 7] = [
        Self::ViewAny,
        Self::View,
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Restore,
        Self::ForceDelete,
    ];
}

/// Whether `role` may perform `action` on an admin resource.
#[must_use]
pub const fn allows(role: Role, action: AdminAction) -> bool {
    match action {
        AdminAction::ViewAny => role.is_staff(),
        AdminAction::View
        | AdminAction::Create
        | AdminAction::Update
        | AdminAction::Delete
        | AdminAction::Restore
        | AdminAction::ForceDelete => matches!(role, Role::Admin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_may_do_everything() {
        for action in AdminAction::ALL {
            assert!(allows(Role::Admin, action), "admin denied {action:?}");
        }
    }

    #[test]
    fn employee_may_only_list() {
        for action in AdminAction::ALL {
            let expected = action == AdminAction::ViewAny;
            assert_eq!(
                allows(Role::Employee, action),
                expected,
                "employee/{action:?}"
            );
        }
    }

    #[test]
    fn end_users_have_no_admin_capabilities() {
        for action in AdminAction::ALL {
            assert!(!allows(Role::User, action), "user allowed {action:?}");
        }
    }
}

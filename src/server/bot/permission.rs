//! Capability check for admin commands.

use serenity::all::{Permissions, RoleId};

/// Commands any guild member may run.
const OPEN_COMMANDS: &[&str] = &["lookup", "fantasy"];

/// Whether `command` needs an admin actor.
pub fn requires_admin(command: &str) -> bool {
    !OPEN_COMMANDS.contains(&command)
}

/// Whether the actor may run admin commands.
///
/// Members with the guild Administrator permission qualify, as do members holding one
/// of the configured admin roles.
///
/// # Arguments
/// - `permissions` - Resolved permissions of the invoking member, absent in DMs
/// - `roles` - Roles of the invoking member
/// - `admin_role_ids` - Configured admin roles
pub fn is_admin(permissions: Option<Permissions>, roles: &[RoleId], admin_role_ids: &[u64]) -> bool {
    permissions.is_some_and(|p| p.contains(Permissions::ADMINISTRATOR))
        || roles.iter().any(|role| admin_role_ids.contains(&role.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administrator_permission_grants_admin() {
        assert!(is_admin(Some(Permissions::ADMINISTRATOR), &[], &[]));
        assert!(!is_admin(Some(Permissions::SEND_MESSAGES), &[], &[]));
        assert!(!is_admin(None, &[], &[]));
    }

    #[test]
    fn configured_role_grants_admin() {
        let roles = [RoleId::new(10), RoleId::new(20)];

        assert!(is_admin(None, &roles, &[20]));
        assert!(!is_admin(None, &roles, &[30]));
    }

    #[test]
    fn only_lookup_and_fantasy_are_open() {
        assert!(!requires_admin("lookup"));
        assert!(!requires_admin("fantasy"));
        assert!(requires_admin("setteam"));
        assert!(requires_admin("fantasyadmin"));
        assert!(requires_admin("deleteplayer"));
    }
}

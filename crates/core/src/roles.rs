//! Well-known role slugs and the rules for toggling role assignments.
//!
//! The slugs must match the rows created by the startup bootstrap. Roles are
//! immutable: they are never renamed or deleted at runtime, only assigned to
//! and removed from users.

use crate::error::CoreError;
use crate::types::DbId;

pub const ROLE_MASTER: &str = "master";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_ENTERPRISE: &str = "enterprise";
pub const ROLE_USER: &str = "user";

/// A role that must always exist, with its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemRole {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed role set ensured at startup, in privilege order.
pub const SYSTEM_ROLES: [SystemRole; 4] = [
    SystemRole {
        slug: ROLE_MASTER,
        title: "Master",
        description: "System super-administrator",
    },
    SystemRole {
        slug: ROLE_ADMIN,
        title: "Admin",
        description: "Manages catalogs and user roles",
    },
    SystemRole {
        slug: ROLE_ENTERPRISE,
        title: "Enterprise",
        description: "Owns an enterprise and publishes vacancies",
    },
    SystemRole {
        slug: ROLE_USER,
        title: "User",
        description: "Regular account",
    },
];

/// Roles allowed to manage catalogs and other users' roles.
pub const ADMIN_ROLES: [&str; 2] = [ROLE_MASTER, ROLE_ADMIN];

/// Returns `true` if `roles` contains any of `required`.
pub fn has_any_role<S: AsRef<str>>(roles: &[S], required: &[&str]) -> bool {
    roles
        .iter()
        .any(|role| required.contains(&role.as_ref()))
}

/// Check whether `actor` may toggle `role_slug` on `target_user_id`.
///
/// - Nobody toggles `master`; it is assigned only by the bootstrap.
/// - Only a `master` may grant or revoke `admin`.
/// - Nobody toggles their own roles.
pub fn ensure_can_toggle<S: AsRef<str>>(
    actor_id: DbId,
    actor_roles: &[S],
    target_user_id: DbId,
    role_slug: &str,
) -> Result<(), CoreError> {
    if !has_any_role(actor_roles, &ADMIN_ROLES) {
        return Err(CoreError::Forbidden("Admin role required".into()));
    }
    if actor_id == target_user_id {
        return Err(CoreError::Forbidden(
            "Cannot change your own roles".into(),
        ));
    }
    if role_slug == ROLE_MASTER {
        return Err(CoreError::Forbidden(
            "The master role cannot be toggled".into(),
        ));
    }
    if role_slug == ROLE_ADMIN && !has_any_role(actor_roles, &[ROLE_MASTER]) {
        return Err(CoreError::Forbidden(
            "Only a master may grant or revoke the admin role".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn has_any_role_matches_one_of_many() {
        let roles = vec!["user".to_string(), "enterprise".to_string()];
        assert!(has_any_role(&roles, &[ROLE_ENTERPRISE, ROLE_ADMIN]));
        assert!(!has_any_role(&roles, &ADMIN_ROLES));
    }

    #[test]
    fn has_any_role_empty_roles() {
        let roles: Vec<String> = Vec::new();
        assert!(!has_any_role(&roles, &[ROLE_USER]));
    }

    #[test]
    fn admin_may_toggle_enterprise_on_other_user() {
        assert!(ensure_can_toggle(1, &[ROLE_ADMIN], 2, ROLE_ENTERPRISE).is_ok());
    }

    #[test]
    fn master_role_is_never_toggled() {
        assert_matches!(
            ensure_can_toggle(1, &[ROLE_MASTER], 2, ROLE_MASTER),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn admin_cannot_grant_admin() {
        assert_matches!(
            ensure_can_toggle(1, &[ROLE_ADMIN], 2, ROLE_ADMIN),
            Err(CoreError::Forbidden(_))
        );
        assert!(ensure_can_toggle(1, &[ROLE_MASTER], 2, ROLE_ADMIN).is_ok());
    }

    #[test]
    fn self_toggle_is_forbidden() {
        assert_matches!(
            ensure_can_toggle(7, &[ROLE_MASTER], 7, ROLE_USER),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn plain_user_cannot_toggle() {
        assert_matches!(
            ensure_can_toggle(1, &[ROLE_USER], 2, ROLE_USER),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn system_roles_have_unique_slugs() {
        let mut slugs: Vec<_> = SYSTEM_ROLES.iter().map(|r| r.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SYSTEM_ROLES.len());
    }
}

//! User roles and their permission codes

use chrono::NaiveDate;

crate::impl_entity!(
    /// A named bundle of permission codes (`module.action`)
    UserRole,
    "user_role",
    "user_roles",
    search: [name, code],
    required: [name, code],
    exposed: [name, code, description, created_at],
    {
        name: String,
        code: String,
        description: String,
        permissions: Vec<String>,
        created_at: NaiveDate,
    }
);

impl UserRole {
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.iter().any(|p| p == code)
    }

    /// Grant `code` if missing, revoke it if present.
    ///
    /// Returns whether the role holds the permission afterwards.
    pub fn toggle_permission(&mut self, code: &str) -> bool {
        if self.has_permission(code) {
            self.permissions.retain(|p| p != code);
            false
        } else {
            self.permissions.push(code.to_string());
            true
        }
    }
}

//! Access rights: the catalogue of permission codes

use chrono::NaiveDate;
use indexmap::IndexMap;

crate::impl_entity!(
    /// One grantable permission, identified by `module.action`
    AccessRight,
    "access_right",
    "access_rights",
    search: [name, code, module, action],
    required: [code],
    exposed: [name, code, description, module, action, created_at],
    {
        name: String,
        code: String,
        description: String,
        module: String,
        action: String,
        created_at: NaiveDate,
    }
);

/// Group rights by module, modules in order of first appearance
pub fn group_by_module(rights: &[AccessRight]) -> IndexMap<String, Vec<AccessRight>> {
    let mut groups: IndexMap<String, Vec<AccessRight>> = IndexMap::new();
    for right in rights {
        groups
            .entry(right.module.clone())
            .or_default()
            .push(right.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right(code: &str) -> AccessRight {
        let (module, action) = code.split_once('.').unwrap();
        AccessRight {
            code: code.to_string(),
            module: module.to_string(),
            action: action.to_string(),
            ..AccessRight::default()
        }
    }

    #[test]
    fn test_group_by_module_keeps_first_appearance_order() {
        let rights = vec![
            right("user.create"),
            right("company.create"),
            right("user.read"),
        ];
        let groups = group_by_module(&rights);

        let modules: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(modules, vec!["user", "company"]);
        assert_eq!(groups["user"].len(), 2);
        assert_eq!(groups["company"][0].code, "company.create");
    }
}

use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_round_trip() {
    for role in [Role::Admin, Role::Employee, Role::User] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let result = Role::from_str("superuser");

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_role_default_is_user() {
    assert_eq!(Role::default(), Role::User);
}

#[test]
fn test_role_display() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::Employee.to_string(), "employee");
    assert_eq!(Role::User.to_string(), "user");
}

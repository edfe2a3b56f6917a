use super::*;

#[test]
fn storage_keys_follow_role_name() {
    assert_eq!(Role::Company.storage_key(), "company");
    assert_eq!(Role::Company.token_key(), "companyToken");
    assert_eq!(Role::Driver.storage_key(), "driver");
    assert_eq!(Role::Driver.token_key(), "driverToken");
}

#[test]
fn collections_are_plural() {
    assert_eq!(Role::Company.collection(), "companies");
    assert_eq!(Role::Driver.collection(), "drivers");
}

#[test]
fn login_routes_are_role_scoped() {
    assert_eq!(Role::Company.login_route(), "/company/login");
    assert_eq!(Role::Driver.login_route(), "/driver/login");
}

#[test]
fn company_placeholders_match_marketing_copy() {
    assert_eq!(Role::Company.placeholder_name(), "Entreprise");
    assert_eq!(Role::Company.placeholder_email(), "entreprise@email.com");
}

#[test]
fn home_route_lives_under_role_prefix() {
    for role in [Role::Company, Role::Driver] {
        let prefix = role.login_route().trim_end_matches("/login");
        assert!(role.home_route().starts_with(prefix));
    }
}

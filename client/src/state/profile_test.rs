use super::*;
use crate::net::types::Logo;

fn entity(name: Option<&str>, email: Option<&str>, logo: Option<Logo>) -> AuthenticatedEntity {
    AuthenticatedEntity {
        id: Some("abc".to_owned()),
        plain_id: None,
        name: name.map(str::to_owned),
        email: email.map(str::to_owned),
        logo,
    }
}

#[test]
fn profile_without_logo_has_no_logo_url() {
    let profile = DisplayProfile::from_entity(entity(Some("Acme"), Some("a@x.com"), None));
    assert!(profile.logo_url.is_none());
}

#[test]
fn profile_logo_url_is_exact_data_uri() {
    let logo = Logo { content_type: Some("image/jpeg".to_owned()), data: Some("/9j/4AAQ".to_owned()) };
    let profile = DisplayProfile::from_entity(entity(Some("Acme"), None, Some(logo)));
    assert_eq!(profile.logo_url.as_deref(), Some("data:image/jpeg;base64,/9j/4AAQ"));
}

#[test]
fn profile_with_partial_logo_has_no_logo_url() {
    let logo = Logo { content_type: Some("image/png".to_owned()), data: None };
    let profile = DisplayProfile::from_entity(entity(Some("Acme"), None, Some(logo)));
    assert!(profile.logo_url.is_none());
}

#[test]
fn identity_without_profile_uses_company_placeholders() {
    let identity = ShellIdentity::resolve(Role::Company, None);
    assert_eq!(identity.name, "Entreprise");
    assert_eq!(identity.email, "entreprise@email.com");
    assert!(identity.logo_url.is_none());
}

#[test]
fn identity_without_profile_uses_driver_placeholders() {
    let identity = ShellIdentity::resolve(Role::Driver, None);
    assert_eq!(identity.name, "Cariste");
    assert_eq!(identity.email, "cariste@email.com");
}

#[test]
fn identity_shows_fetched_name_and_email() {
    let profile = DisplayProfile::from_entity(entity(Some("Acme"), Some("a@x.com"), None));
    let identity = ShellIdentity::resolve(Role::Company, Some(&profile));
    assert_eq!(identity.name, "Acme");
    assert_eq!(identity.email, "a@x.com");
    assert!(identity.logo_url.is_none());
}

#[test]
fn identity_falls_back_per_field() {
    let profile = DisplayProfile::from_entity(entity(Some("Acme"), Some(""), None));
    let identity = ShellIdentity::resolve(Role::Company, Some(&profile));
    assert_eq!(identity.name, "Acme");
    assert_eq!(identity.email, "entreprise@email.com");
}

#[test]
fn initial_is_uppercased_first_letter() {
    let profile = DisplayProfile::from_entity(entity(Some("élan logistique"), None, None));
    assert_eq!(ShellIdentity::resolve(Role::Company, Some(&profile)).initial(), "É");
}

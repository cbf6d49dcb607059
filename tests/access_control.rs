use std::collections::{HashMap, HashSet};

use palestra::{AccessPolicy, Action, Actor, PermissionSet, Resource, Role};

#[test]
fn editor_manages_news_but_cannot_delete() {
    let policy = AccessPolicy::builtin();

    assert!(policy.allows(Role::Editor, Resource::News, Action::Create));
    assert!(policy.allows(Role::Editor, Resource::News, Action::Read));
    assert!(policy.allows(Role::Editor, Resource::News, Action::Update));
    assert!(!policy.allows(Role::Editor, Resource::News, Action::Delete));
}

#[test]
fn super_admin_wildcard_covers_the_whole_enum() {
    let policy = AccessPolicy::builtin();

    for resource in Resource::all() {
        for action in Action::all() {
            assert!(
                policy.allows(Role::SuperAdmin, *resource, *action),
                "super_admin denied {action} on {resource}"
            );
        }
    }
}

#[test]
fn wildcard_covers_resources_no_other_role_lists() {
    let policy = AccessPolicy::builtin();

    // neither admin nor editor may delete user accounts
    assert!(!policy.allows(Role::Admin, Resource::Users, Action::Delete));
    assert!(!policy.allows(Role::Editor, Resource::Users, Action::Delete));
    assert!(policy.allows(Role::SuperAdmin, Resource::Users, Action::Delete));
}

#[test]
fn unknown_session_roles_deny_everything() {
    let policy = AccessPolicy::builtin();

    for bogus in ["viewer", "root", "SUPER_ADMIN", ""] {
        let actor = Actor {
            role: Some(bogus.to_string()),
        };
        for resource in Resource::all() {
            for action in Action::all() {
                assert!(
                    !policy.check(Some(&actor), *resource, *action),
                    "role `{bogus}` was granted {action} on {resource}"
                );
            }
        }
    }
}

#[test]
fn missing_actor_or_role_denies_without_panicking() {
    let policy = AccessPolicy::builtin();

    assert!(!policy.check(None, Resource::News, Action::Read));
    assert!(!policy.check(Some(&Actor::default()), Resource::News, Action::Read));

    let empty_record: Actor = serde_json::from_str("{}").expect("empty session record");
    assert!(!policy.check(Some(&empty_record), Resource::News, Action::Read));
}

#[test]
fn session_records_resolve_through_the_table() {
    let policy = AccessPolicy::builtin();

    let admin: Actor = serde_json::from_str(r#"{"role": "admin"}"#).expect("session record");
    assert!(policy.check(Some(&admin), Resource::Elections, Action::Delete));
    assert!(!policy.check(Some(&admin), Resource::Settings, Action::Delete));

    let super_admin: Actor =
        serde_json::from_str(r#"{"role": "super_admin"}"#).expect("session record");
    assert!(policy.check(Some(&super_admin), Resource::Settings, Action::Delete));
}

#[test]
fn custom_tables_stay_fail_closed() {
    let mut roles = HashMap::new();
    roles.insert(
        Role::Editor,
        PermissionSet::Grants(HashMap::from([(
            Resource::RtiRequests,
            HashSet::from([Action::Read, Action::Update]),
        )])),
    );
    let policy = AccessPolicy::new(roles);

    assert!(policy.allows(Role::Editor, Resource::RtiRequests, Action::Read));
    assert!(policy.allows(Role::Editor, Resource::RtiRequests, Action::Update));
    assert!(!policy.allows(Role::Editor, Resource::RtiRequests, Action::Create));
    assert!(!policy.allows(Role::Editor, Resource::News, Action::Read));
    assert!(!policy.allows(Role::Admin, Resource::RtiRequests, Action::Read));
}

//! Domain types for roles, resources, actions, and the permission table.

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Back-office role assigned to a signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Editor,
}

impl Role {
    /// Returns the slug used for serialization and session records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Editor => "editor",
        }
    }

    /// Returns the human-readable display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super admin",
            Self::Admin => "Admin",
            Self::Editor => "Editor",
        }
    }

    /// Returns all role variants for iteration.
    pub fn all() -> &'static [Role] {
        &[Self::SuperAdmin, Self::Admin, Self::Editor]
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            _ => Err(()),
        }
    }
}

/// Manageable content type of the federation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    News,
    Events,
    Results,
    GeneralBody,
    Elections,
    ComplianceDocs,
    AntiDopingGuidelines,
    RtiRequests,
    History,
    ContactInfo,
    HeroImages,
    Files,
    Users,
    Settings,
}

impl Resource {
    /// Returns the slug used for serialization and route naming.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Events => "events",
            Self::Results => "results",
            Self::GeneralBody => "general_body",
            Self::Elections => "elections",
            Self::ComplianceDocs => "compliance_docs",
            Self::AntiDopingGuidelines => "anti_doping_guidelines",
            Self::RtiRequests => "rti_requests",
            Self::History => "history",
            Self::ContactInfo => "contact_info",
            Self::HeroImages => "hero_images",
            Self::Files => "files",
            Self::Users => "users",
            Self::Settings => "settings",
        }
    }

    /// Returns the human-readable display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::News => "News",
            Self::Events => "Events",
            Self::Results => "Results",
            Self::GeneralBody => "General body",
            Self::Elections => "Elections",
            Self::ComplianceDocs => "Compliance documents",
            Self::AntiDopingGuidelines => "Anti-doping guidelines",
            Self::RtiRequests => "RTI requests",
            Self::History => "History",
            Self::ContactInfo => "Contact info",
            Self::HeroImages => "Hero images",
            Self::Files => "Files",
            Self::Users => "Users",
            Self::Settings => "Settings",
        }
    }

    /// Returns all resource variants for iteration.
    pub fn all() -> &'static [Resource] {
        &[
            Self::News,
            Self::Events,
            Self::Results,
            Self::GeneralBody,
            Self::Elections,
            Self::ComplianceDocs,
            Self::AntiDopingGuidelines,
            Self::RtiRequests,
            Self::History,
            Self::ContactInfo,
            Self::HeroImages,
            Self::Files,
            Self::Users,
            Self::Settings,
        ]
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(Self::News),
            "events" => Ok(Self::Events),
            "results" => Ok(Self::Results),
            "general_body" => Ok(Self::GeneralBody),
            "elections" => Ok(Self::Elections),
            "compliance_docs" => Ok(Self::ComplianceDocs),
            "anti_doping_guidelines" => Ok(Self::AntiDopingGuidelines),
            "rti_requests" => Ok(Self::RtiRequests),
            "history" => Ok(Self::History),
            "contact_info" => Ok(Self::ContactInfo),
            "hero_images" => Ok(Self::HeroImages),
            "files" => Ok(Self::Files),
            "users" => Ok(Self::Users),
            "settings" => Ok(Self::Settings),
            _ => Err(()),
        }
    }
}

/// CRUD action requested against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    /// Returns the slug used for serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Returns all action variants for iteration.
    pub fn all() -> &'static [Action] {
        &[Self::Create, Self::Read, Self::Update, Self::Delete]
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Self::Create),
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _ => Err(()),
        }
    }
}

/// A role's grants: either unconditional access or an explicit
/// resource → action table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSet {
    /// Every action on every resource, including resources added after
    /// this table was written.
    Unrestricted,
    /// Explicit grants; anything absent is denied.
    Grants(HashMap<Resource, HashSet<Action>>),
}

/// Caller record handed over by the session layer.
///
/// Unauthenticated requests arrive as `None`; malformed session payloads
/// deserialize with `role: None`. Either way [`AccessPolicy::check`]
/// answers false rather than panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub role: Option<String>,
}

/// Immutable role → resource → action table with a fail-closed evaluator.
///
/// Built once at process start and passed by handle to the request layer.
/// Changing the table is a code change shipped with a deploy, not a
/// runtime write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    roles: HashMap<Role, PermissionSet>,
}

impl AccessPolicy {
    pub fn new(roles: HashMap<Role, PermissionSet>) -> Self {
        Self { roles }
    }

    /// The table shipped with the platform.
    pub fn builtin() -> Self {
        let mut roles = HashMap::new();
        roles.insert(Role::SuperAdmin, PermissionSet::Unrestricted);
        roles.insert(Role::Admin, PermissionSet::Grants(admin_grants()));
        roles.insert(Role::Editor, PermissionSet::Grants(editor_grants()));
        Self { roles }
    }

    /// Decide whether `role` may perform `action` on `resource`.
    ///
    /// Absent role, absent resource, or an unlisted action all deny.
    pub fn allows(&self, role: Role, resource: Resource, action: Action) -> bool {
        match self.roles.get(&role) {
            None => false,
            Some(PermissionSet::Unrestricted) => true,
            Some(PermissionSet::Grants(grants)) => grants
                .get(&resource)
                .is_some_and(|actions| actions.contains(&action)),
        }
    }

    /// [`allows`](Self::allows) against the role carried in a session
    /// record. A missing actor, missing role field, or unrecognized role
    /// string denies.
    pub fn check(&self, actor: Option<&Actor>, resource: Resource, action: Action) -> bool {
        let Some(actor) = actor else {
            return false;
        };
        let Some(role_name) = actor.role.as_deref() else {
            return false;
        };
        match Role::from_str(role_name) {
            Ok(role) => self.allows(role, resource, action),
            Err(()) => false,
        }
    }
}

fn admin_grants() -> HashMap<Resource, HashSet<Action>> {
    use Action::{Create, Delete, Read, Update};

    let mut grants = HashMap::new();
    for resource in [
        Resource::News,
        Resource::Events,
        Resource::Results,
        Resource::GeneralBody,
        Resource::Elections,
        Resource::ComplianceDocs,
        Resource::AntiDopingGuidelines,
        Resource::RtiRequests,
        Resource::History,
        Resource::ContactInfo,
        Resource::HeroImages,
        Resource::Files,
    ] {
        grants.insert(resource, HashSet::from([Create, Read, Update, Delete]));
    }
    // account removal and deployment settings stay with the super role
    grants.insert(Resource::Users, HashSet::from([Create, Read, Update]));
    grants.insert(Resource::Settings, HashSet::from([Read, Update]));
    grants
}

fn editor_grants() -> HashMap<Resource, HashSet<Action>> {
    use Action::{Create, Read, Update};

    let mut grants = HashMap::new();
    // day-to-day content desk: publish and revise, nothing destructive
    for resource in [
        Resource::News,
        Resource::Events,
        Resource::Results,
        Resource::HeroImages,
        Resource::Files,
    ] {
        grants.insert(resource, HashSet::from([Create, Read, Update]));
    }
    for resource in [
        Resource::GeneralBody,
        Resource::Elections,
        Resource::ComplianceDocs,
        Resource::AntiDopingGuidelines,
        Resource::RtiRequests,
        Resource::History,
        Resource::ContactInfo,
    ] {
        grants.insert(resource, HashSet::from([Read]));
    }
    // Users and Settings are absent on purpose: absent means denied
    grants
}

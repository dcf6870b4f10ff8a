//! User accounts, roles and the authenticated principal.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Account role. Ids match the rows seeded into the `roles` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

    pub fn id(self) -> i64 {
        match self {
            Role::User => 1,
            Role::Manager => 2,
            Role::Admin => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Parses a role name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown role '{s}'"))
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// `"First Last"`, with missing parts left empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}

/// Input data for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub password_hash: String,
    pub role: Role,
}

/// Claims of an authenticated caller, extracted from a verified JWT.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub user_id: i64,
    pub name: String,
    pub role: Role,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
}

impl Principal {
    pub fn is_in_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

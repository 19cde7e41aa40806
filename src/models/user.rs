use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// Role tags this tool assigns. Stored documents may carry any other tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

// User model (collection: users)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub username: String,
    pub email: String,  // natural key, unique index
    #[serde(default)]
    pub password: String,  // bcrypt hash; empty never verifies
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<BsonDateTime>,
}

impl User {
    /// Builds a new, not yet persisted user. Duplicate roles are dropped.
    pub fn new(username: &str, email: &str, password_hash: String, roles: &[Role]) -> Self {
        let mut roles = roles.to_vec();
        roles.sort();
        roles.dedup();

        Self {
            id: None,
            username: username.to_string(),
            email: email.to_string(),
            password: password_hash,
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
            created_at: Some(BsonDateTime::now()),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r == role.as_str())
    }
}

/// Public view of a user, without the password hash.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map(|oid| oid.to_hex()),
            username: user.username.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
        }
    }
}

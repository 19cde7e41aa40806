use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const INITIAL_DATA_NAME: &str = "Initial Data";

/// Marker document written by the bootstrap to prove the database is reachable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InitDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}

impl InitDocument {
    pub fn initial() -> Self {
        Self {
            id: None,
            name: INITIAL_DATA_NAME.to_string(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// A single note as persisted in the backing file. Field names are part of
/// the on-disk and wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: String,
    pub content: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// A registered user. Lives only in memory for the process lifetime; the
/// password is stored as-is and compared by string equality.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub password: String,
}

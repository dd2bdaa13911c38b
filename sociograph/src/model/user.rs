use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a [User]. Assigned by whoever authored the
/// dataset; never reassigned or reused.
pub type UserId = u64;

/// A member of the social network.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    pub fn new<S: ToString>(id: UserId, name: S) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

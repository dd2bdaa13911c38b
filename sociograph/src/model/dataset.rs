use serde::{Deserialize, Serialize};

use crate::model::{User, UserId};

/// The raw, declarative form of a social network: a flat list of users,
/// friendships, and interest associations, exactly as authored in a dataset
/// file. Nothing here is indexed or validated; see [crate::Network] for the
/// derived, queryable form.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,

    /// Undirected friendships, stored once per edge. `(a, b)` and `(b, a)`
    /// describe the same friendship.
    #[serde(default)]
    pub friendships: Vec<(UserId, UserId)>,

    /// Free-text interest labels per user. Labels are not normalized: case
    /// and spelling variants are distinct labels.
    #[serde(default)]
    pub interests: Vec<(UserId, String)>,
}

impl Dataset {
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn contains_user(&self, id: UserId) -> bool {
        self.user(id).is_some()
    }
}

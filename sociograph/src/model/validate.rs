use itertools::Itertools;
use thiserror::Error;

use crate::model::{Dataset, UserId};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate user id {0} in user list. User ids must be unique.")]
    DuplicateUserId(UserId),

    #[error("Friendship ({0}, {1}) references user id {2}, which is not in the user list.")]
    UnknownFriendshipUser(UserId, UserId, UserId),

    #[error("Interest '{1}' references user id {0}, which is not in the user list.")]
    UnknownInterestUser(UserId, String),

    #[error("Friendship ({0}, {0}) connects user {0} to themselves. Self-friendships are not allowed.")]
    SelfFriendship(UserId),
}

pub fn no_duplicate_user_ids(dataset: &Dataset) -> Vec<ValidationError> {
    dataset
        .users
        .iter()
        .duplicates_by(|user| user.id)
        .map(|user| ValidationError::DuplicateUserId(user.id))
        .collect_vec()
}

pub fn no_self_friendships(dataset: &Dataset) -> Vec<ValidationError> {
    dataset
        .friendships
        .iter()
        .filter(|(a, b)| a == b)
        .map(|(a, _)| ValidationError::SelfFriendship(*a))
        .collect_vec()
}

pub fn friendship_references(dataset: &Dataset) -> Vec<ValidationError> {
    dataset
        .friendships
        .iter()
        .flat_map(|(a, b)| [(*a, *b, *a), (*a, *b, *b)])
        .filter(|(_, _, id)| !dataset.contains_user(*id))
        .map(|(a, b, id)| ValidationError::UnknownFriendshipUser(a, b, id))
        .collect_vec()
}

pub fn interest_references(dataset: &Dataset) -> Vec<ValidationError> {
    dataset
        .interests
        .iter()
        .filter(|(id, _)| !dataset.contains_user(*id))
        .map(|(id, label)| ValidationError::UnknownInterestUser(*id, label.clone()))
        .collect_vec()
}

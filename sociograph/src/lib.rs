pub use model::{Dataset, User, UserId, ValidationError};
pub use network::{Network, QueryError};

pub mod model;
pub mod network;

#[cfg(test)]
mod test_util;

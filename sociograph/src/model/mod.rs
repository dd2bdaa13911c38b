pub use dataset::Dataset;
pub use user::{User, UserId};
pub use validate::ValidationError;

mod dataset;
mod user;
pub mod validate;

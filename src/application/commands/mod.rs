pub mod articles;
pub mod comments;
pub mod favorites;
pub mod profiles;
pub mod users;

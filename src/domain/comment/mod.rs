pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{CanDeleteCommentSpec, Comment, NewComment};
pub use repository::CommentRepository;
pub use value_objects::{CommentBody, CommentId};

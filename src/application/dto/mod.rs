pub mod articles;
pub mod auth;
pub mod comments;
pub mod profiles;
pub mod serde_time;
pub mod tags;
pub mod users;

pub use articles::{ArticleEnvelope, ArticleList, ArticleView};
pub use auth::{AuthTokenDto, TokenSubject};
pub use comments::{CommentEnvelope, CommentList, CommentView};
pub use profiles::{ProfileEnvelope, ProfileView};
pub use tags::TagsDto;
pub use users::{UserEnvelope, UserView};

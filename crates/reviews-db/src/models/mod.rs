//! Row structs mapped straight from query results.

pub mod category;
pub mod comment;
pub mod genre;
pub mod review;
pub mod title;
pub mod user;

pub use category::CategoryModel;
pub use comment::CommentModel;
pub use genre::GenreModel;
pub use review::ReviewModel;
pub use title::TitleModel;
pub use user::UserModel;

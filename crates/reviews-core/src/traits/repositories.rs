//! Persistence contract for the domain entities.
//!
//! Implementations validate payloads before touching storage, map
//! constraint violations to the matching `DomainError` variants, and
//! return `Ok(None)` rather than an error when a lookup misses.

use async_trait::async_trait;

use crate::entities::{
    Category, CategoryUpdate, Comment, CommentUpdate, Genre, GenreUpdate, NewCategory, NewComment,
    NewGenre, NewReview, NewTitle, NewUser, Review, ReviewUpdate, Title, TitleUpdate, User,
    UserUpdate,
};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, DomainError>;

/// User persistence operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// All users in insertion order.
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Insert a new user. Fails with a uniqueness conflict when the
    /// username or email is already taken.
    async fn create(&self, new_user: &NewUser) -> RepoResult<User>;

    /// Apply the present fields of `update` and return the new state.
    async fn update(&self, id: RecordId, update: &UserUpdate) -> RepoResult<User>;

    /// Delete a user along with their reviews and comments.
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;
}

/// Category persistence operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Category>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>>;

    /// All categories ordered by name.
    async fn list(&self) -> RepoResult<Vec<Category>>;

    async fn create(&self, new_category: &NewCategory) -> RepoResult<Category>;

    async fn update(&self, id: RecordId, update: &CategoryUpdate) -> RepoResult<Category>;

    /// Delete a category. Fails with `CategoryInUse` while any title
    /// still belongs to it.
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    async fn slug_exists(&self, slug: &str) -> RepoResult<bool>;
}

/// Genre persistence operations.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Genre>>;

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Genre>>;

    /// All genres ordered by name.
    async fn list(&self) -> RepoResult<Vec<Genre>>;

    async fn create(&self, new_genre: &NewGenre) -> RepoResult<Genre>;

    async fn update(&self, id: RecordId, update: &GenreUpdate) -> RepoResult<Genre>;

    /// Delete a genre, detaching it from any titles that carry it.
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    async fn slug_exists(&self, slug: &str) -> RepoResult<bool>;
}

/// Title persistence operations.
#[async_trait]
pub trait TitleRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Title>>;

    /// All titles ordered by name.
    async fn list(&self) -> RepoResult<Vec<Title>>;

    async fn find_by_category(&self, category_id: RecordId) -> RepoResult<Vec<Title>>;

    async fn find_by_genre(&self, genre_id: RecordId) -> RepoResult<Vec<Title>>;

    /// Insert a title and attach its genres in one transaction.
    async fn create(&self, new_title: &NewTitle) -> RepoResult<Title>;

    async fn update(&self, id: RecordId, update: &TitleUpdate) -> RepoResult<Title>;

    /// Delete a title along with its reviews, their comments, and its
    /// genre links.
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Attach a genre. Attaching one that is already present is a no-op.
    async fn add_genre(&self, title_id: RecordId, genre_id: RecordId) -> RepoResult<()>;

    /// Detach a genre. Detaching one that is absent is a no-op.
    async fn remove_genre(&self, title_id: RecordId, genre_id: RecordId) -> RepoResult<()>;

    /// Mean review score, or `None` when the title has no reviews.
    async fn rating(&self, title_id: RecordId) -> RepoResult<Option<f64>>;
}

/// Review persistence operations.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Review>>;

    /// Reviews of a title, newest first.
    async fn find_by_title(&self, title_id: RecordId) -> RepoResult<Vec<Review>>;

    async fn find_by_title_and_author(
        &self,
        title_id: RecordId,
        author_id: RecordId,
    ) -> RepoResult<Option<Review>>;

    /// Reviews written by a user, newest first.
    async fn find_by_author(&self, author_id: RecordId) -> RepoResult<Vec<Review>>;

    /// Insert a review. Fails with `ReviewAlreadyExists` when the author
    /// has already reviewed the title.
    async fn create(&self, new_review: &NewReview) -> RepoResult<Review>;

    /// Update text or score. The publication date is not touched.
    async fn update(&self, id: RecordId, update: &ReviewUpdate) -> RepoResult<Review>;

    /// Delete a review along with its comments.
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

/// Comment persistence operations.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Comment>>;

    /// Comments on a review, newest first.
    async fn find_by_review(&self, review_id: RecordId) -> RepoResult<Vec<Comment>>;

    /// Comments written by a user, newest first.
    async fn find_by_author(&self, author_id: RecordId) -> RepoResult<Vec<Comment>>;

    async fn create(&self, new_comment: &NewComment) -> RepoResult<Comment>;

    /// Update text. The publication date is not touched.
    async fn update(&self, id: RecordId, update: &CommentUpdate) -> RepoResult<Comment>;

    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

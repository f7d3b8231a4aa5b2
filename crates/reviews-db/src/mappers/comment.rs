//! Comment model to entity mapping.

use reviews_core::entities::Comment;
use reviews_core::value_objects::RecordId;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Self {
            id: RecordId::new(model.id),
            review_id: RecordId::new(model.review_id),
            author_id: RecordId::new(model.author_id),
            text: model.text,
            pub_date: model.pub_date,
        }
    }
}

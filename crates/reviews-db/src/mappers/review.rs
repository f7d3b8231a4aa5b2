//! Review model to entity mapping.

use reviews_core::entities::Review;
use reviews_core::value_objects::RecordId;

use crate::models::ReviewModel;

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Self {
            id: RecordId::new(model.id),
            title_id: RecordId::new(model.title_id),
            author_id: RecordId::new(model.author_id),
            text: model.text,
            score: model.score,
            pub_date: model.pub_date,
        }
    }
}

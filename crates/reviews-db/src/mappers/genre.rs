//! Genre model to entity mapping.

use reviews_core::entities::Genre;
use reviews_core::value_objects::RecordId;

use crate::models::GenreModel;

impl From<GenreModel> for Genre {
    fn from(model: GenreModel) -> Self {
        Self {
            id: RecordId::new(model.id),
            name: model.name,
            slug: model.slug,
        }
    }
}

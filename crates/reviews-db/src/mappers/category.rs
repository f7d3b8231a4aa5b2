//! Category model to entity mapping.

use reviews_core::entities::Category;
use reviews_core::value_objects::RecordId;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: RecordId::new(model.id),
            name: model.name,
            slug: model.slug,
        }
    }
}

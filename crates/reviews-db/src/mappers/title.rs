//! Title model to entity mapping.

use reviews_core::entities::Title;
use reviews_core::value_objects::RecordId;

use crate::models::TitleModel;

/// Combine a title row with its genre ids loaded from the link table.
#[must_use]
pub fn title_with_genres(model: TitleModel, genre_ids: Vec<i64>) -> Title {
    Title {
        id: RecordId::new(model.id),
        name: model.name,
        year: model.year,
        description: model.description,
        category_id: RecordId::new(model.category_id),
        genre_ids: genre_ids.into_iter().map(RecordId::new).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_ids_are_attached() {
        let model = TitleModel {
            id: 5,
            name: "Stalker".to_string(),
            year: 1979,
            description: Some("Zone expedition".to_string()),
            category_id: 2,
        };

        let title = title_with_genres(model, vec![10, 11]);
        assert_eq!(title.id, RecordId::new(5));
        assert_eq!(title.category_id, RecordId::new(2));
        assert_eq!(
            title.genre_ids,
            vec![RecordId::new(10), RecordId::new(11)]
        );
    }

    #[test]
    fn test_title_without_genres() {
        let model = TitleModel {
            id: 6,
            name: "Roadside Picnic".to_string(),
            year: 1972,
            description: None,
            category_id: 3,
        };

        let title = title_with_genres(model, Vec::new());
        assert!(title.genre_ids.is_empty());
        assert!(title.description.is_none());
    }
}

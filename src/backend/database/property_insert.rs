use async_trait::async_trait;
use tracing::{error, info};

use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};
use crate::models::{NewProperty, Property};

/// Columns written by an insert, in parameter order
pub const PROPERTY_INSERT_COLUMNS: [&str; 14] = [
    "owner_id",
    "title",
    "description",
    "thumbnail_photo_url",
    "cover_photo_url",
    "cost_per_night",
    "street",
    "city",
    "province",
    "post_code",
    "country",
    "parking_spaces",
    "number_of_bathrooms",
    "number_of_bedrooms",
];

/// Statement inserting one property and returning the stored row
pub fn insert_property_sql(database_type: DatabaseType) -> String {
    let placeholders: Vec<String> = (1..=PROPERTY_INSERT_COLUMNS.len())
        .map(|index| database_type.placeholder(index))
        .collect();

    format!(
        "INSERT INTO properties ({}) VALUES ({}) RETURNING *",
        PROPERTY_INSERT_COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

/// Database-specific adapter for property INSERT operations
///
/// Implementations bind the fields of the validated property in
/// [`PROPERTY_INSERT_COLUMNS`] order.
#[async_trait]
pub trait PropertyInserter: Send + Sync {
    async fn execute_property_insert(&self, property: NewProperty) -> AppResult<Property>;
}

/// Shared business logic for property INSERT operations
pub struct PropertyInsertProcessor;

impl PropertyInsertProcessor {
    /// Validate a new property and trim its text fields
    pub fn prepare_property_for_insert(property: &NewProperty) -> AppResult<NewProperty> {
        let mut property = property.clone();

        for field in [
            &mut property.title,
            &mut property.description,
            &mut property.thumbnail_photo_url,
            &mut property.cover_photo_url,
            &mut property.street,
            &mut property.city,
            &mut property.province,
            &mut property.post_code,
            &mut property.country,
        ] {
            *field = field.trim().to_string();
        }

        if property.title.is_empty() {
            return Err(AppError::BadRequest("title is required".to_string()));
        }

        let counts = [
            ("cost_per_night", property.cost_per_night),
            ("parking_spaces", property.parking_spaces),
            ("number_of_bathrooms", property.number_of_bathrooms),
            ("number_of_bedrooms", property.number_of_bedrooms),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, value)| *value < 0) {
            return Err(AppError::BadRequest(format!("{} cannot be negative", name)));
        }

        Ok(property)
    }
}

/// Unified property insert operations
pub struct UnifiedPropertyInsertOps<T: PropertyInserter> {
    inserter: T,
}

impl<T: PropertyInserter> UnifiedPropertyInsertOps<T> {
    pub fn new(inserter: T) -> Self {
        Self { inserter }
    }

    /// Add a new property to the properties table
    pub async fn add_property(&self, property: &NewProperty) -> AppResult<Property> {
        let prepared = PropertyInsertProcessor::prepare_property_for_insert(property)?;
        let saved = self
            .inserter
            .execute_property_insert(prepared)
            .await
            .map_err(|e| {
                error!("Error inserting property: {}", e);
                e
            })?;
        info!(property_id = saved.id, owner_id = saved.owner_id, "Added property");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_property() -> NewProperty {
        NewProperty {
            owner_id: 1,
            title: " Speed lamp ".to_string(),
            description: "description".to_string(),
            thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
            cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
            cost_per_night: 93061,
            street: "536 Namsub Highway".to_string(),
            city: "Sotboske".to_string(),
            province: "Quebec".to_string(),
            post_code: "28142".to_string(),
            country: "Canada".to_string(),
            parking_spaces: 6,
            number_of_bathrooms: 4,
            number_of_bedrooms: 8,
        }
    }

    #[test]
    fn test_insert_sql_has_one_placeholder_per_column() {
        let sql = insert_property_sql(DatabaseType::PostgreSQL);
        assert!(sql.starts_with("INSERT INTO properties (owner_id, title, description,"));
        assert!(sql.contains("$1, $2, $3"));
        assert!(sql.contains("$14) RETURNING *"));
        assert!(!sql.contains("$15"));

        let sql = insert_property_sql(DatabaseType::SQLite);
        assert!(sql.contains("?14) RETURNING *"));
    }

    #[test]
    fn test_prepare_trims_text() {
        let prepared = PropertyInsertProcessor::prepare_property_for_insert(&sample_property())
            .unwrap();
        assert_eq!(prepared.title, "Speed lamp");
        assert_eq!(prepared.cost_per_night, 93061);
    }

    #[test]
    fn test_prepare_rejects_blank_title() {
        let mut property = sample_property();
        property.title = "   ".to_string();
        assert!(matches!(
            PropertyInsertProcessor::prepare_property_for_insert(&property),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_prepare_rejects_negative_counts() {
        let mut property = sample_property();
        property.number_of_bedrooms = -1;
        match PropertyInsertProcessor::prepare_property_for_insert(&property) {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("number_of_bedrooms")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the `users` table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload for creating a user
///
/// The password is stored as supplied; hashing belongs to the caller.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A row of the `properties` table. `cost_per_night` is in cents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Payload for creating a property
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

/// Property search result: the property plus its average review rating
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PropertyListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

/// A guest's reservation as shown in "my reservations"
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Reservation {
    pub id: i32,
    pub title: String,
    pub cost_per_night: i32,
    pub start_date: NaiveDate,
    pub average_rating: f64,
}

/// Optional search constraints for property listings
///
/// Prices are in major currency units (dollars); they are converted to cents
/// when the query is built. Unknown keys are ignored on deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_price_per_night: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_price_per_night: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_rating: Option<f64>,
}

impl FilterCriteria {
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn with_owner_id(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_minimum_price_per_night(mut self, price: f64) -> Self {
        self.minimum_price_per_night = Some(price);
        self
    }

    pub fn with_maximum_price_per_night(mut self, price: f64) -> Self {
        self.maximum_price_per_night = Some(price);
        self
    }

    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_criteria_ignores_unknown_keys() {
        let criteria: FilterCriteria = serde_json::from_value(serde_json::json!({
            "city": "Vancouver",
            "minimum_rating": 4,
            "sort": "price",
            "page": 2
        }))
        .unwrap();

        assert_eq!(criteria.city.as_deref(), Some("Vancouver"));
        assert_eq!(criteria.minimum_rating, Some(4.0));
        assert_eq!(criteria.owner_id, None);
    }

    #[test]
    fn test_listing_serializes_flat() {
        let listing = PropertyListing {
            property: Property {
                id: 1,
                owner_id: 2,
                title: "Cabin".to_string(),
                description: String::new(),
                thumbnail_photo_url: "thumb.jpg".to_string(),
                cover_photo_url: "cover.jpg".to_string(),
                cost_per_night: 12500,
                street: "1 Lake Rd".to_string(),
                city: "Whistler".to_string(),
                province: "BC".to_string(),
                post_code: "V0N".to_string(),
                country: "Canada".to_string(),
                parking_spaces: 2,
                number_of_bathrooms: 1,
                number_of_bedrooms: 3,
            },
            average_rating: 4.5,
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["title"], "Cabin");
        assert_eq!(json["cost_per_night"], 12500);
        assert_eq!(json["average_rating"], 4.5);
        assert!(json.get("property").is_none());
    }
}

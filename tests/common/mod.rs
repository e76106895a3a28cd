#![allow(dead_code)]

use lightbnb::backend::database::{DatabaseBackendConfig, PostgresBackend, SqliteBackend};
use lightbnb::backend::{Backend, LightBnbBackend};
use lightbnb::models::{NewProperty, PropertyListing};
use std::sync::Arc;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;

/// Run the same async test body against SQLite and PostgreSQL
macro_rules! matrix_test {
    ($test_name:ident, $test_fn:ident) => {
        paste::paste! {
            #[tokio::test]
            async fn [<$test_name _sqlite>]() {
                $test_fn(common::TestDatabaseType::Sqlite).await;
            }

            #[tokio::test]
            async fn [<$test_name _postgres>]() {
                $test_fn(common::TestDatabaseType::Postgres).await;
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestDatabaseType {
    Sqlite,
    Postgres,
}

/// A backend plus whatever keeps its database alive
pub struct TestDatabase {
    pub backend: Arc<dyn LightBnbBackend>,
    pub postgres_container: Option<ContainerAsync<Postgres>>,
}

/// Users: 1 Alice, 2 Bob, 3 Carol.
///
/// | id | owner | title            | cost  | city      | avg rating |
/// |----|-------|------------------|-------|-----------|------------|
/// | 1  | 1     | Harbour Loft     | 12000 | Vancouver | 4.5        |
/// | 2  | 1     | Lakeside Cabin   | 8000  | Whistler  | 3.0        |
/// | 3  | 2     | Downtown Studio  | 5000  | Vancouver | 3.0        |
/// | 4  | 2     | Mountain Chalet  | 30000 | Banff     | 5.0        |
/// | 5  | 3     | Unreviewed Villa | 1000  | Vancouver | none       |
///
/// Ids come from the serial columns of a fresh database, so rows are
/// inserted in id order.
const SEED_SQL: &str = r#"
INSERT INTO users (name, email, password) VALUES
    ('Alice Example', 'alice@example.com', 'password'),
    ('Bob Example', 'bob@example.com', 'password'),
    ('Carol Example', 'carol@example.com', 'password');

INSERT INTO properties (owner_id, title, description, thumbnail_photo_url, cover_photo_url,
    cost_per_night, street, city, province, post_code, country,
    parking_spaces, number_of_bathrooms, number_of_bedrooms) VALUES
    (1, 'Harbour Loft', 'description', 'thumb.jpg', 'cover.jpg', 12000, '1 Main St', 'Vancouver', 'BC', 'V0N 1A0', 'Canada', 1, 1, 2),
    (1, 'Lakeside Cabin', 'description', 'thumb.jpg', 'cover.jpg', 8000, '1 Main St', 'Whistler', 'BC', 'V0N 1A0', 'Canada', 1, 1, 2),
    (2, 'Downtown Studio', 'description', 'thumb.jpg', 'cover.jpg', 5000, '1 Main St', 'Vancouver', 'BC', 'V0N 1A0', 'Canada', 1, 1, 2),
    (2, 'Mountain Chalet', 'description', 'thumb.jpg', 'cover.jpg', 30000, '1 Main St', 'Banff', 'AB', 'T1L 1A1', 'Canada', 1, 1, 2),
    (3, 'Unreviewed Villa', 'description', 'thumb.jpg', 'cover.jpg', 1000, '1 Main St', 'Vancouver', 'BC', 'V0N 1A0', 'Canada', 1, 1, 2);

INSERT INTO reservations (start_date, end_date, property_id, guest_id) VALUES
    ('2023-03-01', '2023-03-05', 1, 3),
    ('2023-01-10', '2023-01-12', 2, 3),
    ('2023-02-01', '2023-02-04', 3, 1),
    ('2023-05-01', '2023-05-02', 4, 1),
    ('2023-06-01', '2023-06-03', 5, 3);

INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message) VALUES
    (3, 1, 1, 5, 'review'),
    (3, 1, 1, 4, 'review'),
    (3, 2, 2, 3, 'review'),
    (1, 3, 3, 4, 'review'),
    (1, 3, 3, 2, 'review'),
    (1, 4, 4, 5, 'review');
"#;

/// Create a backend with empty tables on the given database
pub async fn setup_empty_database(
    db_type: TestDatabaseType,
) -> Result<TestDatabase, Box<dyn std::error::Error>> {
    open_database(db_type, false).await
}

/// Create a backend seeded with the listing fixtures on the given database
pub async fn setup_test_database(
    db_type: TestDatabaseType,
) -> Result<TestDatabase, Box<dyn std::error::Error>> {
    open_database(db_type, true).await
}

async fn open_database(
    db_type: TestDatabaseType,
    seed: bool,
) -> Result<TestDatabase, Box<dyn std::error::Error>> {
    match db_type {
        TestDatabaseType::Sqlite => {
            let backend = SqliteBackend::connect(&DatabaseBackendConfig::memory_sqlite()).await?;
            backend.init_schema().await?;
            if seed {
                sqlx::raw_sql(SEED_SQL).execute(backend.pool()).await?;
            }

            Ok(TestDatabase {
                backend: Arc::new(backend),
                postgres_container: None,
            })
        }
        TestDatabaseType::Postgres => {
            let container = Postgres::default().start().await?;
            let connection_url = format!(
                "postgresql://postgres:postgres@{}:{}/postgres",
                container.get_host().await?,
                container.get_host_port_ipv4(5432).await?
            );

            let config = DatabaseBackendConfig::postgres(connection_url)
                .with_max_connections(5)
                .with_application_name("lightbnb-tests");
            let backend = PostgresBackend::connect(&config).await?;
            backend.init_schema().await?;
            if seed {
                sqlx::raw_sql(SEED_SQL).execute(backend.pool()).await?;
            }

            Ok(TestDatabase {
                backend: Arc::new(backend),
                postgres_container: Some(container),
            })
        }
    }
}

/// A valid property payload owned by the given user
pub fn new_property(owner_id: i32, title: &str, cost_per_night: i32, city: &str) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_string(),
        description: "A lovely place".to_string(),
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".to_string(),
        cover_photo_url: "https://images.example.com/cover.jpg".to_string(),
        cost_per_night,
        street: "42 Ocean Ave".to_string(),
        city: city.to_string(),
        province: "BC".to_string(),
        post_code: "V6B 1A1".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 1,
        number_of_bathrooms: 2,
        number_of_bedrooms: 3,
    }
}

/// Ids of listings, in result order
pub fn listing_ids(listings: &[PropertyListing]) -> Vec<i32> {
    listings.iter().map(|l| l.property.id).collect()
}

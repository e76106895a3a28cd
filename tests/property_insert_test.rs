use lightbnb::backend::{PropertyBackend, UserBackend};
use lightbnb::error::AppError;
use lightbnb::models::NewUser;

#[macro_use]
mod common;

use common::TestDatabaseType;

async fn stored_row_test(db_type: TestDatabaseType) {
    let db = common::setup_test_database(db_type).await.unwrap();

    let saved = db
        .backend
        .add_property(&common::new_property(3, "Garden Suite", 9500, "Victoria"))
        .await
        .unwrap();

    assert_eq!(saved.id, 6);
    assert_eq!(saved.owner_id, 3);
    assert_eq!(saved.title, "Garden Suite");
    assert_eq!(saved.cost_per_night, 9500);
    assert_eq!(saved.city, "Victoria");
    assert_eq!(saved.number_of_bedrooms, 3);
}

async fn new_owner_test(db_type: TestDatabaseType) {
    let db = common::setup_empty_database(db_type).await.unwrap();

    let owner = db
        .backend
        .add_user(&NewUser {
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    let saved = db
        .backend
        .add_property(&common::new_property(owner.id, "Tiny House", 3000, "Tofino"))
        .await
        .unwrap();
    assert_eq!(saved.id, 1);
    assert_eq!(saved.owner_id, owner.id);
}

async fn unknown_owner_test(db_type: TestDatabaseType) {
    let db = common::setup_test_database(db_type).await.unwrap();

    let result = db
        .backend
        .add_property(&common::new_property(42, "Ghost House", 1000, "Nowhere"))
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));
}

async fn requires_title_test(db_type: TestDatabaseType) {
    let db = common::setup_test_database(db_type).await.unwrap();

    let result = db
        .backend
        .add_property(&common::new_property(1, "  ", 1000, "Vancouver"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

matrix_test!(test_add_property_returns_stored_row, stored_row_test);
matrix_test!(test_add_property_for_new_owner, new_owner_test);
matrix_test!(test_add_property_with_unknown_owner_fails, unknown_owner_test);
matrix_test!(test_add_property_requires_title, requires_title_test);

use chrono::NaiveDate;
use lightbnb::backend::ReservationBackend;

#[macro_use]
mod common;

use common::TestDatabaseType;

async fn ordered_by_start_date_test(db_type: TestDatabaseType) {
    let db = common::setup_test_database(db_type).await.unwrap();

    let reservations = db.backend.get_reservations_for_guest(3, None).await.unwrap();

    // Reservation 5 is for a property without reviews and is not returned
    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);

    let first = &reservations[0];
    assert_eq!(first.title, "Lakeside Cabin");
    assert_eq!(first.cost_per_night, 8000);
    assert_eq!(first.start_date, NaiveDate::from_ymd_opt(2023, 1, 10).unwrap());
    assert!((first.average_rating - 3.0).abs() < f64::EPSILON);

    let second = &reservations[1];
    assert_eq!(second.title, "Harbour Loft");
    assert!((second.average_rating - 4.5).abs() < f64::EPSILON);
}

async fn limit_test(db_type: TestDatabaseType) {
    let db = common::setup_test_database(db_type).await.unwrap();

    let reservations = db.backend.get_reservations_for_guest(3, Some(1)).await.unwrap();

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, 2);
}

async fn requested_guest_only_test(db_type: TestDatabaseType) {
    let db = common::setup_test_database(db_type).await.unwrap();

    let reservations = db.backend.get_reservations_for_guest(1, None).await.unwrap();

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4]);
}

async fn guest_without_reservations_test(db_type: TestDatabaseType) {
    let db = common::setup_test_database(db_type).await.unwrap();

    let reservations = db.backend.get_reservations_for_guest(2, None).await.unwrap();
    assert!(reservations.is_empty());
}

matrix_test!(test_reservations_ordered_by_start_date, ordered_by_start_date_test);
matrix_test!(test_reservations_respect_limit, limit_test);
matrix_test!(test_reservations_only_for_requested_guest, requested_guest_only_test);
matrix_test!(test_guest_without_reservations, guest_without_reservations_test);

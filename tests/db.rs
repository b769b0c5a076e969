use diesel::prelude::*;
use diesel::sql_types::Integer;

mod common;

#[derive(QueryableByName)]
struct Pragma {
    #[diesel(sql_type = Integer)]
    value: i32,
}

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should get connection");

    let pragma = diesel::sql_query("SELECT foreign_keys AS value FROM pragma_foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .expect("should read pragma");

    assert_eq!(pragma.value, 1);
}

#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer)]
    timeout: i32,
}

#[test]
fn pooled_connections_wait_for_the_write_lock() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should get connection");

    let pragma = diesel::sql_query("PRAGMA busy_timeout")
        .get_result::<BusyTimeout>(&mut conn)
        .expect("should read pragma");

    assert_eq!(pragma.timeout, 5000);
}

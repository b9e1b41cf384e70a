#[cfg(test)]
mod tests {
    use hotelbook::db::db::Db;
    use hotelbook::db::migrations::{
        get_db_version, needs_migration, provision, provision_database, seed_rooms, MigrationManager, SEED_ROOMS,
    };
    use hotelbook::libs::config::DatabaseConfig;
    use rusqlite::Connection;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        database: DatabaseConfig,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let database = DatabaseConfig::new(temp_dir.path().join("hotel.db"));
            MigrationTestContext {
                _temp_dir: temp_dir,
                database,
            }
        }
    }

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let mut db = Db::open(&ctx.database).unwrap();
        MigrationManager::new().run_migrations(&mut db.conn).unwrap();
        assert!(!needs_migration(&db.conn).unwrap());

        let other = tempfile::tempdir().unwrap();
        let empty = Db::open(&DatabaseConfig::new(other.path().join("empty.db"))).unwrap();
        empty
            .conn
            .execute(
                "CREATE TABLE migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
                [],
            )
            .unwrap();
        assert_eq!(get_db_version(&empty.conn).unwrap(), 0);
        assert!(needs_migration(&empty.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_provision_creates_schema(ctx: &mut MigrationTestContext) {
        let seeded = provision_database(&ctx.database).unwrap();
        assert_eq!(seeded, SEED_ROOMS.len());

        let db = Db::open(&ctx.database).unwrap();
        for table in ["rooms", "guests", "bookings"] {
            let exists: i64 = db
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(exists, 1, "table {} missing", table);
        }
        assert_eq!(count(&db.conn, "rooms"), 4);
        assert_eq!(count(&db.conn, "bookings"), 0);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_provision_is_idempotent(ctx: &mut MigrationTestContext) {
        assert_eq!(provision_database(&ctx.database).unwrap(), 4);
        assert_eq!(provision_database(&ctx.database).unwrap(), 0);
        assert_eq!(provision_database(&ctx.database).unwrap(), 0);

        let db = Db::open(&ctx.database).unwrap();
        assert_eq!(count(&db.conn, "rooms"), 4);
        assert_eq!(count(&db.conn, "migrations") as u32, get_db_version(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_seed_skips_non_empty_rooms(ctx: &mut MigrationTestContext) {
        let mut db = Db::open(&ctx.database).unwrap();
        MigrationManager::new().run_migrations(&mut db.conn).unwrap();
        db.conn
            .execute("INSERT INTO rooms (room_type, price_cents) VALUES ('Penthouse', 99900)", [])
            .unwrap();

        assert_eq!(seed_rooms(&mut db.conn).unwrap(), 0);
        assert_eq!(provision(&mut db.conn).unwrap(), 0);
        assert_eq!(count(&db.conn, "rooms"), 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut db = Db::open(&ctx.database).unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut db.conn).unwrap();

        let history = manager.get_migration_history(&db.conn).unwrap();
        assert!(!history.is_empty());
        for (i, (version, name, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
            assert!(!name.is_empty());
        }
        assert_eq!(history[0].1, "create_booking_tables");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_bookings_enforce_foreign_keys(ctx: &mut MigrationTestContext) {
        provision_database(&ctx.database).unwrap();
        let db = Db::open(&ctx.database).unwrap();

        let orphan = db.conn.execute(
            "INSERT INTO bookings (room_id, guest_id, check_in, check_out) VALUES (1, 12345, '2024-06-01', '2024-06-02')",
            [],
        );
        assert!(orphan.is_err());
        assert_eq!(count(&db.conn, "bookings"), 0);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_concurrent_provisioning(ctx: &mut MigrationTestContext) {
        let barrier = Arc::new(Barrier::new(2));
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let database = ctx.database.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    provision_database(&database).map_err(|e| e.to_string())
                })
            })
            .collect();

        let seeded: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
        assert_eq!(seeded.iter().sum::<usize>(), SEED_ROOMS.len());

        let db = Db::open(&ctx.database).unwrap();
        assert_eq!(count(&db.conn, "rooms"), 4);
        assert!(!needs_migration(&db.conn).unwrap());
    }
}

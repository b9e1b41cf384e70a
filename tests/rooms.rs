#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate};
    use hotelbook::db::bookings::Bookings;
    use hotelbook::db::migrations::provision_database;
    use hotelbook::db::rooms::Rooms;
    use hotelbook::libs::booking::{BookingRequest, Guest, Money, RoomId};
    use hotelbook::libs::config::DatabaseConfig;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RoomsTestContext {
        _temp_dir: TempDir,
        database: DatabaseConfig,
    }

    impl TestContext for RoomsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let database = DatabaseConfig::new(temp_dir.path().join("hotel.db"));
            provision_database(&database).unwrap();
            RoomsTestContext {
                _temp_dir: temp_dir,
                database,
            }
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn book(ctx: &RoomsTestContext, room_id: RoomId, check_in: NaiveDate, check_out: NaiveDate) {
        let request = BookingRequest::new(room_id, Guest::new("Ann Lee", "1234567", "ann@lee.io"), check_in, check_out);
        Bookings::open(&ctx.database).unwrap().create(&request).unwrap();
    }

    fn ids_free_on(ctx: &RoomsTestContext, day: NaiveDate) -> Vec<RoomId> {
        Rooms::open(&ctx.database)
            .unwrap()
            .available_on(day)
            .unwrap()
            .into_iter()
            .map(|room| room.id)
            .collect()
    }

    #[test_context(RoomsTestContext)]
    #[test]
    fn test_seeded_rooms(ctx: &mut RoomsTestContext) {
        let rooms = Rooms::open(&ctx.database).unwrap().all().unwrap();
        let summary: Vec<(RoomId, &str, Money)> =
            rooms.iter().map(|r| (r.id, r.room_type.as_str(), r.price)).collect();

        assert_eq!(
            summary,
            vec![
                (1, "Single", Money::from_cents(10_000)),
                (2, "Double", Money::from_cents(15_000)),
                (3, "Suite", Money::from_cents(25_000)),
                (4, "Single", Money::from_cents(9_000)),
            ]
        );
        assert!(rooms.iter().all(|r| r.available));
    }

    #[test_context(RoomsTestContext)]
    #[test]
    fn test_all_rooms_free_without_bookings(ctx: &mut RoomsTestContext) {
        assert_eq!(ids_free_on(ctx, date("2024-06-01")), vec![1, 2, 3, 4]);
        assert_eq!(Rooms::open(&ctx.database).unwrap().available_now().unwrap().len(), 4);
    }

    #[test_context(RoomsTestContext)]
    #[test]
    fn test_booked_room_hidden_during_stay(ctx: &mut RoomsTestContext) {
        book(ctx, 2, date("2024-06-01"), date("2024-06-05"));

        assert_eq!(ids_free_on(ctx, date("2024-05-31")), vec![1, 2, 3, 4]);
        assert_eq!(ids_free_on(ctx, date("2024-06-01")), vec![1, 3, 4]);
        assert_eq!(ids_free_on(ctx, date("2024-06-04")), vec![1, 3, 4]);
        // Free again on the check-out day
        assert_eq!(ids_free_on(ctx, date("2024-06-05")), vec![1, 2, 3, 4]);
    }

    #[test_context(RoomsTestContext)]
    #[test]
    fn test_stay_starting_today_hides_room(ctx: &mut RoomsTestContext) {
        let today = Local::now().date_naive();
        book(ctx, 3, today, today + Duration::days(2));
        book(ctx, 4, today + Duration::days(1), today + Duration::days(3));

        assert_eq!(ids_free_on(ctx, today), vec![1, 2, 4]);
    }

    #[test_context(RoomsTestContext)]
    #[test]
    fn test_room_json_names_cents(ctx: &mut RoomsTestContext) {
        let room = Rooms::open(&ctx.database).unwrap().get(2).unwrap().unwrap();
        let json: serde_json::Value = serde_json::to_value(&room).unwrap();

        assert_eq!(json["price_cents"], 15_000);
        assert!(json.get("price").is_none());
        assert_eq!(json["room_type"], "Double");
    }

    #[test_context(RoomsTestContext)]
    #[test]
    fn test_get_room(ctx: &mut RoomsTestContext) {
        let rooms = Rooms::open(&ctx.database).unwrap();
        assert_eq!(rooms.get(3).unwrap().unwrap().room_type, "Suite");
        assert_eq!(rooms.get(42).unwrap(), None);
    }
}

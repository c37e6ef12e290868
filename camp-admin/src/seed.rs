//! Seed data loaded at startup
//!
//! Zones, tent spots and reservations the admin starts with, plus the fixed
//! tent-size reference list.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use shared::models::{CampingZone, Reservation, ReservationStatus, TentSize, TentSpot};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Fixed tent-size reference list, shared by every spot
pub fn tent_sizes() -> Vec<Arc<TentSize>> {
    [
        ("small", "Small", 1, 2, 300.0),
        ("medium", "Medium", 3, 4, 500.0),
        ("large", "Large", 5, 6, 700.0),
        ("family", "Family", 6, 8, 900.0),
    ]
    .into_iter()
    .map(|(id, display_name, min_capacity, max_capacity, base_price)| {
        Arc::new(TentSize {
            id: id.to_string(),
            name: id.to_string(),
            display_name: display_name.to_string(),
            min_capacity,
            max_capacity,
            base_price,
        })
    })
    .collect()
}

/// Seed zones with their spots. Spots share the given size records.
pub fn zones(sizes: &[Arc<TentSize>]) -> Vec<CampingZone> {
    let size = |id: &str| sizes.iter().find(|s| s.id == id).cloned();
    let spot = |id: &str, name: &str, size_id: &str| {
        size(size_id).map(|size| TentSpot {
            id: id.to_string(),
            name: name.to_string(),
            capacity: size.min_capacity,
            price_per_night: size.base_price,
            size,
            is_active: true,
            position: None,
        })
    };

    vec![
        CampingZone {
            id: "1".to_string(),
            name: "Riverside".to_string(),
            description: "Camping by a clear stream, quiet and family friendly".to_string(),
            capacity: 6,
            price_per_night: 800.0,
            amenities: amenities(&["restroom", "dishwashing", "electricity", "parking"]),
            images: vec![
                "https://images.unsplash.com/photo-1500673922987-e212871fec22?w=800".to_string(),
                "https://images.unsplash.com/photo-1433086966358-54859d0ed716?w=800".to_string(),
            ],
            is_active: true,
            created_at: at(2024, 1, 15, 10, 0),
            tent_spots: [
                spot("spot_a1", "A1", "medium"),
                spot("spot_a3", "A3", "large"),
            ]
            .into_iter()
            .flatten()
            .collect(),
        },
        CampingZone {
            id: "2".to_string(),
            name: "Bamboo Forest".to_string(),
            description: "Camping among green bamboo, cool and shaded".to_string(),
            capacity: 4,
            price_per_night: 600.0,
            amenities: amenities(&["restroom", "electricity", "parking"]),
            images: vec![
                "https://images.unsplash.com/photo-1509316975850-ff9c5deb0cd9?w=800".to_string(),
                "https://images.unsplash.com/photo-1513836279014-a89f7a76ae86?w=800".to_string(),
            ],
            is_active: true,
            created_at: at(2024, 1, 10, 14, 30),
            tent_spots: spot("spot_b2", "B2", "small").into_iter().collect(),
        },
        CampingZone {
            id: "3".to_string(),
            name: "Mountain Top".to_string(),
            description: "Hilltop camping with a sunrise view".to_string(),
            capacity: 8,
            price_per_night: 1200.0,
            amenities: amenities(&[
                "restroom",
                "dishwashing",
                "electricity",
                "parking",
                "viewpoint",
            ]),
            images: vec![
                "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=800".to_string(),
                "https://images.unsplash.com/photo-1472396961693-142e6e269027?w=800".to_string(),
            ],
            is_active: true,
            created_at: at(2024, 1, 5, 9, 15),
            tent_spots: spot("spot_c1", "C1", "family").into_iter().collect(),
        },
    ]
}

/// Seed reservations
pub fn reservations() -> Vec<Reservation> {
    vec![
        Reservation {
            id: "R001".to_string(),
            zone_name: "Riverside".to_string(),
            spot_name: "A1".to_string(),
            check_in: date(2024, 2, 15),
            check_out: date(2024, 2, 17),
            guests: 4,
            status: ReservationStatus::Confirmed,
            total: 1600.0,
            payment_slip: Some("slip_001.jpg".to_string()),
            customer_name: "Somchai Jaidee".to_string(),
            customer_phone: "081-234-5678".to_string(),
            customer_email: "somchai@email.com".to_string(),
            created_at: at(2024, 2, 1, 10, 30),
            tent_spot_id: Some("spot_a1".to_string()),
        },
        Reservation {
            id: "R002".to_string(),
            zone_name: "Bamboo Forest".to_string(),
            spot_name: "B2".to_string(),
            check_in: date(2024, 2, 20),
            check_out: date(2024, 2, 22),
            guests: 2,
            status: ReservationStatus::Pending,
            total: 1200.0,
            payment_slip: Some("slip_002.jpg".to_string()),
            customer_name: "Wilai Suksai".to_string(),
            customer_phone: "089-876-5432".to_string(),
            customer_email: "wilai@email.com".to_string(),
            created_at: at(2024, 2, 5, 15, 45),
            tent_spot_id: Some("spot_b2".to_string()),
        },
        Reservation {
            id: "R003".to_string(),
            zone_name: "Mountain Top".to_string(),
            spot_name: "C1".to_string(),
            check_in: date(2024, 2, 25),
            check_out: date(2024, 2, 28),
            guests: 6,
            status: ReservationStatus::Confirmed,
            total: 3600.0,
            payment_slip: Some("slip_003.jpg".to_string()),
            customer_name: "Prayut Thongthiao".to_string(),
            customer_phone: "092-111-2233".to_string(),
            customer_email: "prayut@email.com".to_string(),
            created_at: at(2024, 2, 10, 8, 20),
            tent_spot_id: None,
        },
        Reservation {
            id: "R004".to_string(),
            zone_name: "Riverside".to_string(),
            spot_name: "A3".to_string(),
            check_in: date(2024, 3, 1),
            check_out: date(2024, 3, 3),
            guests: 5,
            status: ReservationStatus::Cancelled,
            total: 1600.0,
            payment_slip: None,
            customer_name: "Sunisa Camping".to_string(),
            customer_phone: "084-555-7777".to_string(),
            customer_email: "sunisa@email.com".to_string(),
            created_at: at(2024, 2, 12, 12, 10),
            tent_spot_id: Some("spot_a3".to_string()),
        },
    ]
}

fn amenities(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Invalid literals fall back to the epoch
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

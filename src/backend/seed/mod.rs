//! Seed Data
//!
//! The sample spots loaded by `campmap-seed`. Seeding replaces the whole
//! `camping_spots` table in one transaction; users are left alone.

use sqlx::SqlitePool;

use crate::backend::spots::db::replace_all_spots;
use crate::shared::NewSpot;

/// The sample spots, in insertion order
pub fn sample_spots() -> Vec<NewSpot> {
    vec![
        NewSpot {
            name: "Bear Creek".to_string(),
            location: "Near Guanella Pass".to_string(),
            description: Some(
                "Free dispersed camping near forest roads. Great views of the mountains."
                    .to_string(),
            ),
            state: "CO".to_string(),
            latitude: 39.6,
            longitude: -105.3,
        },
        NewSpot {
            name: "Sierra Pines".to_string(),
            location: "Stanislaus National Forest".to_string(),
            description: Some(
                "Near stream, shady area. Pet-friendly camping with hiking trails nearby."
                    .to_string(),
            ),
            state: "CA".to_string(),
            latitude: 38.0,
            longitude: -120.3,
        },
        NewSpot {
            name: "Red Rock Canyon".to_string(),
            location: "Moab Area".to_string(),
            description: Some(
                "Stunning red rock formations. Popular with rock climbers and hikers.".to_string(),
            ),
            state: "UT".to_string(),
            latitude: 38.7,
            longitude: -109.6,
        },
        NewSpot {
            name: "Lost Lake".to_string(),
            location: "Roosevelt National Forest".to_string(),
            description: Some(
                "Peaceful lake camping with fishing opportunities. 4WD recommended.".to_string(),
            ),
            state: "CO".to_string(),
            latitude: 40.1,
            longitude: -105.8,
        },
    ]
}

/// Replace every stored spot with the samples; returns the number inserted
pub async fn seed_spots(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let count = replace_all_spots(pool, &sample_spots()).await?;
    tracing::info!("Database seeded with {} spots", count);
    Ok(count)
}

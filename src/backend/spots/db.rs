/**
 * Spot Database Operations
 *
 * Reads and writes of the `camping_spots` table. Rows map onto
 * `CampingSpot` through `sqlx::FromRow`; listing order is the row id.
 */

use sqlx::SqlitePool;

use crate::shared::{CampingSpot, NewSpot};

/// Load all spots, or only those whose `state` equals `state` exactly
pub async fn list_spots(
    pool: &SqlitePool,
    state: Option<&str>,
) -> Result<Vec<CampingSpot>, sqlx::Error> {
    match state {
        Some(state) => {
            sqlx::query_as::<_, CampingSpot>(
                r#"
                SELECT id, name, location, description, state, latitude, longitude
                FROM camping_spots
                WHERE state = ?
                ORDER BY id
                "#,
            )
            .bind(state)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, CampingSpot>(
                r#"
                SELECT id, name, location, description, state, latitude, longitude
                FROM camping_spots
                ORDER BY id
                "#,
            )
            .fetch_all(pool)
            .await
        }
    }
}

/// Insert one spot in its own transaction and return the new id
pub async fn create_spot(pool: &SqlitePool, spot: &NewSpot) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let id = insert_spot(&mut tx, spot).await?;
    tx.commit().await?;
    Ok(id)
}

/// Delete every spot and insert `spots`, atomically
pub async fn replace_all_spots(pool: &SqlitePool, spots: &[NewSpot]) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM camping_spots")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tracing::debug!("Removed {} existing spots", removed);

    for spot in spots {
        insert_spot(&mut tx, spot).await?;
    }

    tx.commit().await?;
    Ok(spots.len())
}

async fn insert_spot(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    spot: &NewSpot,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO camping_spots (name, location, description, state, latitude, longitude)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&spot.name)
    .bind(&spot.location)
    .bind(&spot.description)
    .bind(&spot.state)
    .bind(spot.latitude)
    .bind(spot.longitude)
    .fetch_one(&mut **tx)
    .await
}

//! Database operations for the `places` table (saved search results).

use cafehop_core::{Coordinate, Place};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `places` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlaceRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub external_id: String,
    pub address: String,
    pub source: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl PlaceRow {
    /// Rebuilds the domain shape held in the row.
    #[must_use]
    pub fn to_place(&self) -> Place {
        let location = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        };
        Place {
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            external_id: self.external_id.clone(),
            address: self.address.clone(),
            source: self.source.clone(),
            location,
        }
    }
}

/// A place about to be saved.
#[derive(Debug, Clone)]
pub struct NewPlace<'a> {
    pub place: &'a Place,
}

/// Inserts a saved place and returns the stored row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_place(pool: &PgPool, new: NewPlace<'_>) -> Result<PlaceRow, DbError> {
    let place = new.place;
    let (latitude, longitude) = place
        .location
        .map_or((None, None), |c| (Some(c.lat), Some(c.lon)));

    let row = sqlx::query_as::<_, PlaceRow>(
        "INSERT INTO places \
             (id, title, description, thumbnail_url, external_id, address, source, latitude, longitude) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING id, title, description, thumbnail_url, external_id, address, source, \
                   latitude, longitude, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(&place.title)
    .bind(&place.description)
    .bind(&place.thumbnail_url)
    .bind(&place.external_id)
    .bind(&place.address)
    .bind(&place.source)
    .bind(latitude)
    .bind(longitude)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Returns all saved places, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_places(pool: &PgPool) -> Result<Vec<PlaceRow>, DbError> {
    let rows = sqlx::query_as::<_, PlaceRow>(
        "SELECT id, title, description, thumbnail_url, external_id, address, source, \
                latitude, longitude, created_at \
         FROM places \
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Deletes a saved place by id.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no row had that id, or [`DbError::Sqlx`]
/// if the query fails.
pub async fn delete_place(pool: &PgPool, id: Uuid) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM places WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}

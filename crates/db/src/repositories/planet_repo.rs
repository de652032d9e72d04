//! Repository for the `planets` table.

use holocron_core::pagination::Pagination;
use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::planet::{CreatePlanet, Planet, UpdatePlanet};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// Insert a new planet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!("INSERT INTO planets (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a planet by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List planets in insertion order, windowed by `page`.
    pub async fn list(pool: &PgPool, page: Pagination) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM planets
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Update a planet. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlanet,
    ) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!(
            "UPDATE planets SET
                name = COALESCE($2, name),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a planet, returning the removed row.
    ///
    /// Characters on the planet keep existing with `planet_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("DELETE FROM planets WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a planet with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM planets WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Total number of planets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM planets")
            .fetch_one(pool)
            .await
    }
}

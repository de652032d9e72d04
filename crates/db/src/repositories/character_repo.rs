//! Repository for the `characters` table and its `character_episodes` links.
//!
//! Every read returns [`CharacterDetail`]: rows are fetched first, then the
//! referenced planets and linked episodes are loaded in one batched query
//! each and stitched onto their characters. Writes that touch more than one
//! table run inside a single transaction.

use std::collections::HashMap;

use holocron_core::pagination::Pagination;
use holocron_core::types::DbId;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::models::character::{Character, CharacterDetail, CreateCharacter, UpdateCharacter};
use crate::models::episode::Episode;
use crate::models::planet::Planet;
use crate::repositories::planet_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, planet_id, created_at, updated_at";

/// An episode row tagged with the character it is linked to.
#[derive(Debug, FromRow)]
struct EpisodeLink {
    character_id: DbId,
    #[sqlx(flatten)]
    episode: Episode,
}

/// Provides CRUD operations for characters with planet/episode expansion.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character and link it to `episode_ids`, returning the
    /// expanded row.
    ///
    /// Fails with a foreign-key violation if `planet_id` or any episode id
    /// does not exist; nothing is written in that case.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCharacter,
    ) -> Result<CharacterDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO characters (name, description, planet_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.planet_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(episode_ids) = &input.episode_ids {
            link_episodes(&mut tx, character.id, episode_ids).await?;
        }

        let detail = expand_one(&mut tx, character).await?;
        tx.commit().await?;

        tracing::debug!(character_id = detail.character.id, "Character created");
        Ok(detail)
    }

    /// Find a character by its internal ID, expanded.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        match character {
            Some(character) => Ok(Some(expand_one(&mut conn, character).await?)),
            None => Ok(None),
        }
    }

    /// List characters in insertion order, windowed by `page`, expanded.
    pub async fn list(
        pool: &PgPool,
        page: Pagination,
    ) -> Result<Vec<CharacterDetail>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        let characters = sqlx::query_as::<_, Character>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        expand(&mut conn, characters).await
    }

    /// List the characters whose home planet is `planet_id`, expanded.
    pub async fn list_by_planet(
        pool: &PgPool,
        planet_id: DbId,
        page: Pagination,
    ) -> Result<Vec<CharacterDetail>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE planet_id = $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        let characters = sqlx::query_as::<_, Character>(&query)
            .bind(planet_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        expand(&mut conn, characters).await
    }

    /// List the characters linked to `episode_id`, expanded.
    pub async fn list_by_episode(
        pool: &PgPool,
        episode_id: DbId,
        page: Pagination,
    ) -> Result<Vec<CharacterDetail>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE id IN (SELECT character_id FROM character_episodes WHERE episode_id = $1)
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        let characters = sqlx::query_as::<_, Character>(&query)
            .bind(episode_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        expand(&mut conn, characters).await
    }

    /// Update a character. Only supplied fields in `input` are applied.
    ///
    /// `description` and `planet_id` use `Option<Option<_>>` so `Some(None)`
    /// clears the column. A supplied `episode_ids` replaces every link.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|d| d.as_deref());
        let planet_provided = input.planet_id.is_some();
        let planet_value = input.planet_id.flatten();

        let query = format!(
            "UPDATE characters SET
                name        = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                planet_id   = CASE WHEN $5 THEN $6 ELSE planet_id END,
                updated_at  = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(character) = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(description_provided)
            .bind(description_value)
            .bind(planet_provided)
            .bind(planet_value)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if let Some(episode_ids) = &input.episode_ids {
            sqlx::query("DELETE FROM character_episodes WHERE character_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_episodes(&mut tx, id, episode_ids).await?;
        }

        let detail = expand_one(&mut tx, character).await?;
        tx.commit().await?;
        Ok(Some(detail))
    }

    /// Delete a character, returning it expanded as it was before deletion.
    ///
    /// Episode links cascade. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1 FOR UPDATE");
        let Some(character) = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let detail = expand_one(&mut tx, character).await?;

        sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(character_id = id, "Character deleted");
        Ok(Some(detail))
    }

    /// Total number of characters.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert one join row per distinct id in `episode_ids`.
async fn link_episodes(
    conn: &mut PgConnection,
    character_id: DbId,
    episode_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    if episode_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        "INSERT INTO character_episodes (character_id, episode_id)
         SELECT $1, episode_id FROM UNNEST($2::BIGINT[]) AS ids(episode_id)
         ON CONFLICT DO NOTHING",
    )
    .bind(character_id)
    .bind(episode_ids)
    .execute(conn)
    .await?;
    Ok(())
}

async fn expand_one(
    conn: &mut PgConnection,
    character: Character,
) -> Result<CharacterDetail, sqlx::Error> {
    let mut details = expand(conn, vec![character]).await?;
    details.pop().ok_or(sqlx::Error::RowNotFound)
}

/// Attach planets and episodes to `characters`, preserving their order.
async fn expand(
    conn: &mut PgConnection,
    characters: Vec<Character>,
) -> Result<Vec<CharacterDetail>, sqlx::Error> {
    if characters.is_empty() {
        return Ok(Vec::new());
    }

    let planet_ids: Vec<DbId> = characters.iter().filter_map(|c| c.planet_id).collect();
    let mut planets: HashMap<DbId, Planet> = HashMap::new();
    if !planet_ids.is_empty() {
        let query = format!(
            "SELECT {} FROM planets WHERE id = ANY($1)",
            planet_repo::COLUMNS
        );
        planets = sqlx::query_as::<_, Planet>(&query)
            .bind(&planet_ids)
            .fetch_all(&mut *conn)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
    }

    let character_ids: Vec<DbId> = characters.iter().map(|c| c.id).collect();
    let links = sqlx::query_as::<_, EpisodeLink>(
        "SELECT ce.character_id, e.id, e.title, e.created_at, e.updated_at
         FROM character_episodes ce
         JOIN episodes e ON e.id = ce.episode_id
         WHERE ce.character_id = ANY($1)
         ORDER BY e.id ASC",
    )
    .bind(&character_ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut episodes: HashMap<DbId, Vec<Episode>> = HashMap::new();
    for link in links {
        episodes
            .entry(link.character_id)
            .or_default()
            .push(link.episode);
    }

    Ok(characters
        .into_iter()
        .map(|character| CharacterDetail {
            planet: character.planet_id.and_then(|pid| planets.get(&pid).cloned()),
            episodes: episodes.remove(&character.id).unwrap_or_default(),
            character,
        })
        .collect())
}

//! Integration tests for planet, episode and character repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create, read, update, delete for each entity
//! - Unique constraint violations
//! - Foreign key violations on character links
//! - Planet/episode expansion on character reads
//! - Pagination windows

use assert_matches::assert_matches;
use holocron_core::pagination::Pagination;
use holocron_db::models::character::{CreateCharacter, UpdateCharacter};
use holocron_db::models::episode::{CreateEpisode, UpdateEpisode};
use holocron_db::models::planet::{CreatePlanet, UpdatePlanet};
use holocron_db::repositories::{CharacterRepo, EpisodeRepo, PlanetRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_planet(name: &str) -> CreatePlanet {
    CreatePlanet {
        name: name.to_string(),
    }
}

fn new_episode(title: &str) -> CreateEpisode {
    CreateEpisode {
        title: title.to_string(),
    }
}

fn new_character(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        description: None,
        planet_id: None,
        episode_ids: None,
    }
}

fn page(skip: Option<i64>, take: Option<i64>) -> Pagination {
    Pagination { skip, take }
}

/// Assert that `err` is a database error raised by `constraint`.
fn assert_constraint(err: sqlx::Error, code: &str, constraint: &str) {
    assert_matches!(err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.code().as_deref(), Some(code));
        assert_eq!(db_err.constraint(), Some(constraint));
    });
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planet_crud(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Tatooine"))
        .await
        .unwrap();
    assert_eq!(planet.name, "Tatooine");

    let found = PlanetRepo::find_by_id(&pool, planet.id).await.unwrap();
    assert_eq!(found, Some(planet.clone()));

    let updated = PlanetRepo::update(
        &pool,
        planet.id,
        &UpdatePlanet {
            name: Some("Dagobah".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Dagobah");
    assert!(updated.updated_at >= planet.updated_at);

    let deleted = PlanetRepo::delete(&pool, planet.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, planet.id);
    assert!(PlanetRepo::find_by_id(&pool, planet.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planet_update_without_fields_keeps_name(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Hoth")).await.unwrap();
    let updated = PlanetRepo::update(&pool, planet.id, &UpdatePlanet::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Hoth");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planet_missing_rows_return_none(pool: PgPool) {
    assert!(PlanetRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(PlanetRepo::update(&pool, 999_999, &UpdatePlanet::default())
        .await
        .unwrap()
        .is_none());
    assert!(PlanetRepo::delete(&pool, 999_999).await.unwrap().is_none());
    assert!(!PlanetRepo::exists(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_planet_name_fails(pool: PgPool) {
    PlanetRepo::create(&pool, &new_planet("Naboo")).await.unwrap();
    let err = PlanetRepo::create(&pool, &new_planet("Naboo"))
        .await
        .unwrap_err();
    assert_constraint(err, "23505", "uq_planets_name");
    assert_eq!(PlanetRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planet_list_pagination(pool: PgPool) {
    for name in ["Alderaan", "Bespin", "Coruscant", "Dantooine"] {
        PlanetRepo::create(&pool, &new_planet(name)).await.unwrap();
    }

    let all = PlanetRepo::list(&pool, Pagination::default()).await.unwrap();
    let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alderaan", "Bespin", "Coruscant", "Dantooine"]);

    let window = PlanetRepo::list(&pool, page(Some(1), Some(2))).await.unwrap();
    let names: Vec<_> = window.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Bespin", "Coruscant"]);

    let tail = PlanetRepo::list(&pool, page(Some(3), Some(10))).await.unwrap();
    assert_eq!(tail.len(), 1);

    let unbounded = PlanetRepo::list(&pool, page(Some(2), Some(0))).await.unwrap();
    assert_eq!(unbounded.len(), 2);
}

// ---------------------------------------------------------------------------
// Episodes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_episode_crud(pool: PgPool) {
    let episode = EpisodeRepo::create(&pool, &new_episode("A New Hope"))
        .await
        .unwrap();

    let updated = EpisodeRepo::update(
        &pool,
        episode.id,
        &UpdateEpisode {
            title: Some("The Empire Strikes Back".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "The Empire Strikes Back");

    let deleted = EpisodeRepo::delete(&pool, episode.id).await.unwrap().unwrap();
    assert_eq!(deleted.title, "The Empire Strikes Back");
    assert_eq!(EpisodeRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_episode_title_on_update_fails(pool: PgPool) {
    EpisodeRepo::create(&pool, &new_episode("Return of the Jedi"))
        .await
        .unwrap();
    let other = EpisodeRepo::create(&pool, &new_episode("The Phantom Menace"))
        .await
        .unwrap();

    let err = EpisodeRepo::update(
        &pool,
        other.id,
        &UpdateEpisode {
            title: Some("Return of the Jedi".to_string()),
        },
    )
    .await
    .unwrap_err();
    assert_constraint(err, "23505", "uq_episodes_title");
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_character_expands_relations(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Tatooine"))
        .await
        .unwrap();
    let ep4 = EpisodeRepo::create(&pool, &new_episode("A New Hope"))
        .await
        .unwrap();
    let ep5 = EpisodeRepo::create(&pool, &new_episode("The Empire Strikes Back"))
        .await
        .unwrap();

    let created = CharacterRepo::create(
        &pool,
        &CreateCharacter {
            name: "Luke Skywalker".to_string(),
            description: Some("Jedi".to_string()),
            planet_id: Some(planet.id),
            episode_ids: Some(vec![ep5.id, ep4.id, ep4.id]),
        },
    )
    .await
    .unwrap();

    assert_eq!(created.character.planet_id, Some(planet.id));
    assert_eq!(created.planet, Some(planet));
    assert_eq!(created.episodes, vec![ep4, ep5]);

    let found = CharacterRepo::find_by_id(&pool, created.character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_without_relations(pool: PgPool) {
    let created = CharacterRepo::create(&pool, &new_character("Chewbacca"))
        .await
        .unwrap();
    assert!(created.planet.is_none());
    assert!(created.episodes.is_empty());
    assert!(created.character.description.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_unknown_planet_fails_atomically(pool: PgPool) {
    let mut input = new_character("Rey");
    input.planet_id = Some(999_999);

    let err = CharacterRepo::create(&pool, &input).await.unwrap_err();
    assert_constraint(err, "23503", "fk_characters_planet_id");
    assert_eq!(CharacterRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_unknown_episode_fails_atomically(pool: PgPool) {
    let episode = EpisodeRepo::create(&pool, &new_episode("The Force Awakens"))
        .await
        .unwrap();
    let mut input = new_character("Finn");
    input.episode_ids = Some(vec![episode.id, 999_999]);

    let err = CharacterRepo::create(&pool, &input).await.unwrap_err();
    assert_constraint(err, "23503", "fk_character_episodes_episode_id");
    assert_eq!(CharacterRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_episode_ids_link_once(pool: PgPool) {
    let episode = EpisodeRepo::create(&pool, &new_episode("The Last Jedi"))
        .await
        .unwrap();
    let mut input = new_character("Rose Tico");
    input.episode_ids = Some(vec![episode.id, episode.id]);

    let created = CharacterRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.episodes, vec![episode.clone()]);

    let updated = CharacterRepo::update(
        &pool,
        created.character.id,
        &UpdateCharacter {
            episode_ids: Some(vec![episode.id, episode.id, episode.id]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.episodes, vec![episode]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_character_name_fails(pool: PgPool) {
    CharacterRepo::create(&pool, &new_character("Han Solo"))
        .await
        .unwrap();
    let err = CharacterRepo::create(&pool, &new_character("Han Solo"))
        .await
        .unwrap_err();
    assert_constraint(err, "23505", "uq_characters_name");
    assert_eq!(CharacterRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_character_partial_fields(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Corellia"))
        .await
        .unwrap();
    let mut input = new_character("Han Solo");
    input.description = Some("Smuggler".to_string());
    input.planet_id = Some(planet.id);
    let created = CharacterRepo::create(&pool, &input).await.unwrap();

    // Only the name changes.
    let renamed = CharacterRepo::update(
        &pool,
        created.character.id,
        &UpdateCharacter {
            name: Some("Captain Solo".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.character.name, "Captain Solo");
    assert_eq!(renamed.character.description.as_deref(), Some("Smuggler"));
    assert_eq!(renamed.planet, Some(planet));

    // Explicit nulls clear description and planet.
    let cleared = CharacterRepo::update(
        &pool,
        created.character.id,
        &UpdateCharacter {
            description: Some(None),
            planet_id: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(cleared.character.description.is_none());
    assert!(cleared.planet.is_none());
    assert_eq!(cleared.character.name, "Captain Solo");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_character_replaces_episode_links(pool: PgPool) {
    let ep1 = EpisodeRepo::create(&pool, &new_episode("Attack of the Clones"))
        .await
        .unwrap();
    let ep2 = EpisodeRepo::create(&pool, &new_episode("Revenge of the Sith"))
        .await
        .unwrap();
    let mut input = new_character("Anakin Skywalker");
    input.episode_ids = Some(vec![ep1.id]);
    let created = CharacterRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.episodes, vec![ep1.clone()]);

    let updated = CharacterRepo::update(
        &pool,
        created.character.id,
        &UpdateCharacter {
            episode_ids: Some(vec![ep2.id]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.episodes, vec![ep2]);

    let emptied = CharacterRepo::update(
        &pool,
        created.character.id,
        &UpdateCharacter {
            episode_ids: Some(vec![]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(emptied.episodes.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_update_leaves_character_untouched(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Alderaan")).await.unwrap();
    let episode = EpisodeRepo::create(&pool, &new_episode("A New Hope"))
        .await
        .unwrap();
    let mut input = new_character("Leia");
    input.planet_id = Some(planet.id);
    input.episode_ids = Some(vec![episode.id]);
    let created = CharacterRepo::create(&pool, &input).await.unwrap();

    // Links are deleted before the new ones are inserted.
    let err = CharacterRepo::update(
        &pool,
        created.character.id,
        &UpdateCharacter {
            name: Some("Leia Organa".into()),
            episode_ids: Some(vec![999_999]),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_constraint(err, "23503", "fk_character_episodes_episode_id");

    let err = CharacterRepo::update(
        &pool,
        created.character.id,
        &UpdateCharacter {
            name: Some("Leia Organa".into()),
            planet_id: Some(Some(999_999)),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_constraint(err, "23503", "fk_characters_planet_id");

    let stored = CharacterRepo::find_by_id(&pool, created.character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_character_returns_none(pool: PgPool) {
    let result = CharacterRepo::update(&pool, 999_999, &UpdateCharacter::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_character_returns_expanded_row(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Kashyyyk"))
        .await
        .unwrap();
    let episode = EpisodeRepo::create(&pool, &new_episode("Revenge of the Sith"))
        .await
        .unwrap();
    let mut input = new_character("Chewbacca");
    input.planet_id = Some(planet.id);
    input.episode_ids = Some(vec![episode.id]);
    let created = CharacterRepo::create(&pool, &input).await.unwrap();

    let deleted = CharacterRepo::delete(&pool, created.character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deleted, created);

    assert!(CharacterRepo::find_by_id(&pool, created.character.id)
        .await
        .unwrap()
        .is_none());
    let links: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM character_episodes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links.0, 0);

    // Related rows survive.
    assert!(PlanetRepo::exists(&pool, planet.id).await.unwrap());
    assert!(EpisodeRepo::exists(&pool, episode.id).await.unwrap());
    assert!(CharacterRepo::delete(&pool, created.character.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_planet_nulls_character_reference(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Alderaan"))
        .await
        .unwrap();
    let mut input = new_character("Leia Organa");
    input.planet_id = Some(planet.id);
    let created = CharacterRepo::create(&pool, &input).await.unwrap();

    PlanetRepo::delete(&pool, planet.id).await.unwrap().unwrap();

    let found = CharacterRepo::find_by_id(&pool, created.character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.character.planet_id, None);
    assert!(found.planet.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_episode_unlinks_characters(pool: PgPool) {
    let episode = EpisodeRepo::create(&pool, &new_episode("Rogue One"))
        .await
        .unwrap();
    let mut input = new_character("Jyn Erso");
    input.episode_ids = Some(vec![episode.id]);
    let created = CharacterRepo::create(&pool, &input).await.unwrap();

    EpisodeRepo::delete(&pool, episode.id).await.unwrap().unwrap();

    let found = CharacterRepo::find_by_id(&pool, created.character.id)
        .await
        .unwrap()
        .unwrap();
    assert!(found.episodes.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_list_expands_each_row(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Tatooine"))
        .await
        .unwrap();
    let episode = EpisodeRepo::create(&pool, &new_episode("A New Hope"))
        .await
        .unwrap();

    let mut luke = new_character("Luke Skywalker");
    luke.planet_id = Some(planet.id);
    luke.episode_ids = Some(vec![episode.id]);
    CharacterRepo::create(&pool, &luke).await.unwrap();
    CharacterRepo::create(&pool, &new_character("Obi-Wan Kenobi"))
        .await
        .unwrap();

    let all = CharacterRepo::list(&pool, Pagination::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].planet.as_ref().map(|p| p.id), Some(planet.id));
    assert_eq!(all[0].episodes, vec![episode]);
    assert!(all[1].planet.is_none());
    assert!(all[1].episodes.is_empty());

    let second = CharacterRepo::list(&pool, page(Some(1), Some(1)))
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].character.name, "Obi-Wan Kenobi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_characters_by_planet_and_episode(pool: PgPool) {
    let tatooine = PlanetRepo::create(&pool, &new_planet("Tatooine"))
        .await
        .unwrap();
    let episode = EpisodeRepo::create(&pool, &new_episode("A New Hope"))
        .await
        .unwrap();

    let mut luke = new_character("Luke Skywalker");
    luke.planet_id = Some(tatooine.id);
    luke.episode_ids = Some(vec![episode.id]);
    CharacterRepo::create(&pool, &luke).await.unwrap();

    let mut leia = new_character("Leia Organa");
    leia.episode_ids = Some(vec![episode.id]);
    CharacterRepo::create(&pool, &leia).await.unwrap();

    let residents = CharacterRepo::list_by_planet(&pool, tatooine.id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(residents.len(), 1);
    assert_eq!(residents[0].character.name, "Luke Skywalker");

    let cast = CharacterRepo::list_by_episode(&pool, episode.id, Pagination::default())
        .await
        .unwrap();
    let names: Vec<_> = cast.iter().map(|c| c.character.name.as_str()).collect();
    assert_eq!(names, ["Luke Skywalker", "Leia Organa"]);
}

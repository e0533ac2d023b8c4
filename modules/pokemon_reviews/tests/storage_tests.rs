//! SeaORM repository tests against an in-memory SQLite database

use catalog_db::DbConfig;
use pokemon_reviews::domain::repository::PokemonRepository;
use pokemon_reviews::infra::storage::entity::{category, pokemon_category, review};
use pokemon_reviews::infra::storage::repositories::SeaOrmPokemonRepository;
use pokemon_reviews::{Config, PokemonError, PokemonReviewsModule, PokemonUpdate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};
use std::sync::Arc;

mod common;
use common::{birth_date, pikachu, print_test_header, unreviewed};

async fn setup() -> (Arc<DatabaseConnection>, SeaOrmPokemonRepository) {
    let db = Arc::new(
        catalog_db::connect(&DbConfig::in_memory())
            .await
            .expect("connect"),
    );
    PokemonReviewsModule::migrate(&db).await.expect("migrate");
    let repo = SeaOrmPokemonRepository::new(db.clone());
    (db, repo)
}

/// Ten Pikachu, each with the same three reviews
async fn seed(repo: &SeaOrmPokemonRepository) {
    for _ in 0..10 {
        repo.insert(&pikachu()).await.expect("seed insert");
    }
}

#[tokio::test]
async fn test_get_by_name_returns_lowest_id_of_duplicates() {
    print_test_header(
        "test_get_by_name_returns_lowest_id_of_duplicates",
        &["Ten rows named Pikachu: the lookup resolves to id 1 with its owned rows."],
    );
    let (_db, repo) = setup().await;
    seed(&repo).await;

    let found = repo
        .find_by_name("pikachu")
        .await
        .expect("query")
        .expect("present");

    assert_eq!(found.id, 1);
    assert_eq!(found.reviews.len(), 3);
    assert_eq!(found.categories.len(), 1);
    assert_eq!(found.categories[0].name, "Electric");
}

#[tokio::test]
async fn test_rating_between_one_and_ten() {
    let (_db, repo) = setup().await;
    seed(&repo).await;

    let rating = repo.average_rating(1).await.expect("rating");
    let value = rating.to_f64().expect("finite");

    assert_ne!(rating, Decimal::ZERO);
    assert!((1.0..=10.0).contains(&value));
    assert!((value - 3.67).abs() < 0.01, "got {}", value);
}

#[tokio::test]
async fn test_rating_of_unreviewed_is_zero() {
    let (_db, repo) = setup().await;
    let created = repo
        .insert(&unreviewed("Bulbasaur", &["Grass"]))
        .await
        .expect("insert");

    assert_eq!(
        repo.average_rating(created.id).await.expect("rating"),
        Decimal::ZERO
    );
}

#[tokio::test]
async fn test_round_trip_preserves_owned_rows() {
    print_test_header(
        "test_round_trip_preserves_owned_rows",
        &["Insert then find_by_id returns the same id, name, categories and reviews."],
    );
    let (_db, repo) = setup().await;
    let input = pikachu();
    let created = repo.insert(&input).await.expect("insert");

    let loaded = repo
        .find_by_id(created.id)
        .await
        .expect("query")
        .expect("present");

    assert_eq!(loaded, created);
    assert_eq!(loaded.name, input.name);
    assert_eq!(loaded.birth_date, input.birth_date);
    for (stored, given) in loaded.reviews.iter().zip(&input.reviews) {
        assert_eq!(stored.title, given.title);
        assert_eq!(stored.text, given.text);
        assert_eq!(stored.rating, given.rating);
        assert_eq!(stored.reviewer.first_name, given.reviewer.first_name);
        assert_eq!(stored.reviewer.last_name, given.reviewer.last_name);
    }
}

#[tokio::test]
async fn test_list_all_in_insertion_order() {
    let (_db, repo) = setup().await;
    repo.insert(&unreviewed("Bulbasaur", &["Grass"])).await.expect("insert");
    repo.insert(&unreviewed("Charmander", &["Fire"])).await.expect("insert");
    repo.insert(&unreviewed("Squirtle", &["Water"])).await.expect("insert");

    let names: Vec<String> = repo
        .list_all()
        .await
        .expect("list")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Bulbasaur", "Charmander", "Squirtle"]);
}

#[tokio::test]
async fn test_delete_removes_reviews_and_links() {
    print_test_header(
        "test_delete_removes_reviews_and_links",
        &["Deleting a Pokemon leaves no reviews or join rows behind; categories survive."],
    );
    let (db, repo) = setup().await;
    let created = repo.insert(&pikachu()).await.expect("insert");

    repo.delete(created.id).await.expect("delete");

    assert_eq!(repo.count().await.expect("count"), 0);
    let orphan_reviews = review::Entity::find()
        .filter(review::Column::PokemonId.eq(created.id))
        .count(&*db)
        .await
        .expect("count reviews");
    let orphan_links = pokemon_category::Entity::find()
        .filter(pokemon_category::Column::PokemonId.eq(created.id))
        .count(&*db)
        .await
        .expect("count links");
    assert_eq!(orphan_reviews, 0);
    assert_eq!(orphan_links, 0);
    assert_eq!(category::Entity::find().count(&*db).await.expect("categories"), 1);
}

#[tokio::test]
async fn test_delete_unknown_is_not_found() {
    let (_db, repo) = setup().await;
    let err = repo.delete(99).await.unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn test_distinct_category_names() {
    let (_db, repo) = setup().await;
    repo.insert(&pikachu()).await.expect("insert");
    repo.insert(&unreviewed("Raichu", &["Electric"])).await.expect("insert");
    repo.insert(&unreviewed("Charmander", &["Fire", "Fire"])).await.expect("insert");

    let names = repo.list_category_names().await.expect("names");
    assert_eq!(names, vec!["Electric".to_string(), "Fire".to_string()]);

    let electric = repo.find_by_category("ELECTRIC").await.expect("filter");
    let electric: Vec<&str> = electric.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(electric, vec!["Pikachu", "Raichu"]);

    assert!(repo.find_by_category("Ghost").await.expect("filter").is_empty());
}

#[tokio::test]
async fn test_reviewers_are_shared_between_pokemon() {
    let (_db, repo) = setup().await;
    let first = repo.insert(&pikachu()).await.expect("insert");
    let second = repo.insert(&pikachu()).await.expect("insert");

    assert_eq!(first.reviews[0].reviewer.id, second.reviews[0].reviewer.id);
    assert_ne!(first.reviews[0].id, second.reviews[0].id);
}

#[tokio::test]
async fn test_update_changes_name_and_date() {
    let (_db, repo) = setup().await;
    let created = repo.insert(&pikachu()).await.expect("insert");
    let new_date = birth_date().succ_opt().expect("valid date");

    let updated = repo
        .update(
            created.id,
            &PokemonUpdate {
                name: " Raichu ".to_string(),
                birth_date: new_date,
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Raichu");
    assert_eq!(updated.birth_date, new_date);
    assert_eq!(updated.reviews, created.reviews);

    let err = repo
        .update(
            500,
            &PokemonUpdate {
                name: "Ghost".to_string(),
                birth_date: new_date,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn test_store_enforces_review_foreign_keys() {
    let (db, repo) = setup().await;
    let created = repo.insert(&pikachu()).await.expect("insert");
    let reviewer_id = created.reviews[0].reviewer.id;

    let orphan = review::ActiveModel {
        title: Set("Ghost".to_string()),
        text: Set("No such pokemon".to_string()),
        rating: Set(3),
        pokemon_id: Set(9_999),
        reviewer_id: Set(reviewer_id),
        ..Default::default()
    };
    let err = catalog_db::StoreError::from(orphan.insert(&*db).await.unwrap_err());
    assert!(
        matches!(err, catalog_db::StoreError::Persistence(_)),
        "got {:?}",
        err
    );
}

#[tokio::test]
async fn test_exists_and_count() {
    let (_db, repo) = setup().await;
    assert_eq!(repo.count().await.expect("count"), 0);
    let created = repo.insert(&pikachu()).await.expect("insert");

    assert!(repo.exists(created.id).await.expect("exists"));
    assert!(!repo.exists(created.id + 1).await.expect("exists"));
    assert_eq!(repo.count().await.expect("count"), 1);
}

#[tokio::test]
async fn test_migrations_apply_once_per_database() {
    print_test_header(
        "test_migrations_apply_once_per_database",
        &[
            "Migrating a fresh database records every migration under its own name.",
            "Migrating it again is a no-op and the stored rows survive.",
        ],
    );
    let (db, repo) = setup().await;
    let created = repo.insert(&pikachu()).await.expect("insert");

    PokemonReviewsModule::migrate(&db).await.expect("second migrate");
    PokemonReviewsModule::init(db.clone(), Config::default())
        .await
        .expect("init on a migrated database");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("query")
        .expect("present");
    assert_eq!(found.reviews.len(), 3);
}

#[tokio::test]
async fn test_category_spellings_share_one_row() {
    print_test_header(
        "test_category_spellings_share_one_row",
        &[
            "Electric and electric resolve to one category that keeps the first spelling.",
            "A lookup in any case returns every Pokemon linked to it.",
        ],
    );
    let (db, repo) = setup().await;
    let pikachu = repo.insert(&pikachu()).await.expect("insert");
    let raichu = repo
        .insert(&unreviewed("Raichu", &["electric", " ELECTRIC "]))
        .await
        .expect("insert");

    assert_eq!(category::Entity::find().count(&*db).await.expect("count"), 1);
    assert_eq!(raichu.categories.len(), 1);
    assert_eq!(raichu.categories[0].id, pikachu.categories[0].id);
    assert_eq!(raichu.categories[0].name, "Electric");

    let names = repo.list_category_names().await.expect("names");
    assert_eq!(names, vec!["Electric".to_string()]);

    let found = repo.find_by_category("eLeCtRiC").await.expect("filter");
    let found: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(found, vec!["Pikachu", "Raichu"]);
}

#[tokio::test]
async fn test_non_ascii_names_match_in_any_case() {
    print_test_header(
        "test_non_ascii_names_match_in_any_case",
        &["Names and categories with accented letters are found whatever their case."],
    );
    let (_db, repo) = setup().await;
    repo.insert(&unreviewed("FLABÉBÉ", &["Fée"]))
        .await
        .expect("insert");

    let found = repo
        .find_by_name("flabébé")
        .await
        .expect("query")
        .expect("present");
    assert_eq!(found.name, "FLABÉBÉ");

    let fairies = repo.find_by_category("FÉE").await.expect("filter");
    assert_eq!(fairies.len(), 1);
    assert_eq!(fairies[0].id, found.id);
}

#[tokio::test]
async fn test_renamed_pokemon_is_found_by_new_name() {
    let (_db, repo) = setup().await;
    let created = repo.insert(&pikachu()).await.expect("insert");
    repo.update(
        created.id,
        &PokemonUpdate {
            name: "Évoli".to_string(),
            birth_date: birth_date(),
        },
    )
    .await
    .expect("update");

    assert!(repo.find_by_name("pikachu").await.expect("query").is_none());
    let found = repo
        .find_by_name("ÉVOLI")
        .await
        .expect("query")
        .expect("present");
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_non_ascii_duplicate_is_a_conflict() {
    print_test_header(
        "test_non_ascii_duplicate_is_a_conflict",
        &["Through the real store, Flabébé after FLABÉBÉ is refused as a duplicate."],
    );
    let (db, _repo) = setup().await;
    let module = PokemonReviewsModule::init(db, Config::default())
        .await
        .expect("init");
    let service = module.service();

    service
        .create_pokemon(unreviewed("FLABÉBÉ", &["Fairy"]))
        .await
        .expect("first create");
    let err = service
        .create_pokemon(unreviewed("Flabébé", &["Fairy"]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PokemonError::Conflict {
            reason: "Pokemon already exists".to_string()
        }
    );
    assert_eq!(service.count_pokemon().await.expect("count"), 1);
}

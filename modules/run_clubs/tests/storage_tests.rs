//! SeaORM repository tests against an in-memory SQLite database

use catalog_db::DbConfig;
use run_clubs::domain::repository::ClubRepository;
use run_clubs::infra::storage::entity::address;
use run_clubs::infra::storage::repositories::SeaOrmClubRepository;
use run_clubs::{ClubCategory, Config, RunClubsModule};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;

mod common;
use common::{charlotte_club, club, print_test_header, sample_clubs};

async fn setup() -> (Arc<DatabaseConnection>, SeaOrmClubRepository) {
    let db = Arc::new(
        catalog_db::connect(&DbConfig::in_memory())
            .await
            .expect("connect"),
    );
    RunClubsModule::migrate(&db).await.expect("migrate");
    let repo = SeaOrmClubRepository::new(db.clone());
    (db, repo)
}

async fn seed(repo: &SeaOrmClubRepository) {
    for club in sample_clubs() {
        repo.insert(&club).await.expect("seed insert");
    }
}

#[tokio::test]
async fn test_add_then_delete_leaves_no_address() {
    print_test_header(
        "test_add_then_delete_leaves_no_address",
        &["Insert counts one; delete counts zero and removes the owned address row."],
    );
    let (db, repo) = setup().await;

    let created = repo.insert(&charlotte_club()).await.expect("insert");
    assert_eq!(repo.count().await.expect("count"), 1);
    assert_eq!(address::Entity::find().count(&*db).await.expect("addresses"), 1);

    repo.delete(created.id).await.expect("delete");
    assert_eq!(repo.count().await.expect("count"), 0);
    assert_eq!(address::Entity::find().count(&*db).await.expect("addresses"), 0);
}

#[tokio::test]
async fn test_delete_unknown_is_not_found() {
    let (_db, repo) = setup().await;
    let err = repo.delete(42).await.unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn test_round_trip() {
    let (_db, repo) = setup().await;
    let input = charlotte_club();
    let created = repo.insert(&input).await.expect("insert");

    let loaded = repo
        .find_by_id(created.id)
        .await
        .expect("query")
        .expect("present");

    assert_eq!(loaded.title, input.title);
    assert_eq!(loaded.description, input.description);
    assert_eq!(loaded.image, input.image);
    assert_eq!(loaded.category, input.category);
    assert_eq!(loaded.address.city, "Charlotte");
    assert_eq!(loaded.address.state, "NC");
    assert_eq!(loaded.address.id, created.address.id);
    assert_eq!(loaded.created_at.timestamp(), created.created_at.timestamp());
}

#[tokio::test]
async fn test_find_by_state() {
    print_test_header(
        "test_find_by_state",
        &["Clubs in NC are returned in id order; the first is Running Club 1."],
    );
    let (_db, repo) = setup().await;
    seed(&repo).await;

    let clubs = repo.find_by_state("NC").await.expect("filter");
    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].title, "Running Club 1");
    assert!(clubs.iter().all(|c| c.address.state == "NC"));

    assert!(repo.find_by_state("TX").await.expect("filter").is_empty());
}

#[tokio::test]
async fn test_states_are_distinct_and_sorted() {
    let (_db, repo) = setup().await;
    seed(&repo).await;

    let states = repo.list_states().await.expect("states");
    assert_eq!(states, vec!["IL", "MI", "NC"]);
}

#[tokio::test]
async fn test_find_by_city_and_title_ignore_case() {
    let (_db, repo) = setup().await;
    seed(&repo).await;

    let clubs = repo.find_by_city("RALEIGH").await.expect("city");
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].title, "Running Club 3");

    let found = repo
        .find_by_title("  running club 4 ")
        .await
        .expect("title")
        .expect("present");
    assert_eq!(found.address.city, "Chicago");
}

#[tokio::test]
async fn test_duplicate_titles_resolve_to_lowest_id() {
    let (_db, repo) = setup().await;
    let first = repo.insert(&charlotte_club()).await.expect("insert");
    repo.insert(&charlotte_club()).await.expect("insert");

    let found = repo
        .find_by_title("Running Club 1")
        .await
        .expect("title")
        .expect("present");
    assert_eq!(found.id, first.id);
}

#[tokio::test]
async fn test_pagination_by_category() {
    print_test_header(
        "test_pagination_by_category",
        &["Seven city clubs paged three at a time give pages of 3, 3 and 1."],
    );
    let (_db, repo) = setup().await;
    for n in 1..=7 {
        let title = format!("City Club {}", n);
        repo.insert(&club(&title, ClubCategory::City, "Charlotte", "NC"))
            .await
            .expect("insert");
    }
    repo.insert(&club("Trail Club", ClubCategory::Trail, "Asheville", "NC"))
        .await
        .expect("insert");

    let mut seen = Vec::new();
    for offset in [0, 3, 6] {
        let page = repo
            .find_by_category(ClubCategory::City, offset, 3)
            .await
            .expect("page");
        seen.push(page.len());
        assert!(page.iter().all(|c| c.category == ClubCategory::City));
    }
    assert_eq!(seen, vec![3, 3, 1]);
    assert_eq!(
        repo.count_by_category(ClubCategory::City).await.expect("count"),
        7
    );
    assert_eq!(
        repo.count_by_category(ClubCategory::Endurance)
            .await
            .expect("count"),
        0
    );
}

#[tokio::test]
async fn test_list_slice_in_id_order() {
    let (_db, repo) = setup().await;
    seed(&repo).await;

    let titles: Vec<String> = repo
        .list_slice(1, 2)
        .await
        .expect("slice")
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["Running Club 2", "Running Club 3"]);
    assert_eq!(repo.list_all().await.expect("all").len(), 4);
}

#[tokio::test]
async fn test_update_edits_address_in_place() {
    let (db, repo) = setup().await;
    let created = repo.insert(&charlotte_club()).await.expect("insert");

    let updated = repo
        .update(
            created.id,
            &club("Running Club 1", ClubCategory::Trail, "Durham", "NC"),
        )
        .await
        .expect("update");

    assert_eq!(updated.category, ClubCategory::Trail);
    assert_eq!(updated.address.id, created.address.id);
    assert_eq!(updated.address.city, "Durham");
    assert_eq!(address::Entity::find().count(&*db).await.expect("addresses"), 1);

    let err = repo.update(999, &charlotte_club()).await.unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn test_exists() {
    let (_db, repo) = setup().await;
    let created = repo.insert(&charlotte_club()).await.expect("insert");

    assert!(repo.exists(created.id).await.expect("exists"));
    assert!(!repo.exists(created.id + 1).await.expect("exists"));
}

#[tokio::test]
async fn test_migrations_apply_once_per_database() {
    print_test_header(
        "test_migrations_apply_once_per_database",
        &["A second migrate and a module init over a migrated database leave clubs in place."],
    );
    let (db, repo) = setup().await;
    let created = repo.insert(&charlotte_club()).await.expect("insert");

    RunClubsModule::migrate(&db).await.expect("second migrate");
    RunClubsModule::init(db.clone(), Config::default())
        .await
        .expect("init on a migrated database");

    assert!(repo.exists(created.id).await.expect("exists"));
}

#[tokio::test]
async fn test_non_ascii_title_and_city_match_in_any_case() {
    print_test_header(
        "test_non_ascii_title_and_city_match_in_any_case",
        &["Accented titles and cities are found by lookups in a different case."],
    );
    let (_db, repo) = setup().await;
    let created = repo
        .insert(&club("CLUB DE COURSE ÉTOILE", ClubCategory::City, "MONTRÉAL", "QC"))
        .await
        .expect("insert");

    let found = repo
        .find_by_title("club de course étoile")
        .await
        .expect("title")
        .expect("present");
    assert_eq!(found.id, created.id);

    let clubs = repo.find_by_city(" montréal ").await.expect("city");
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].title, "CLUB DE COURSE ÉTOILE");
}

#[tokio::test]
async fn test_update_moves_title_and_city_lookups() {
    let (_db, repo) = setup().await;
    let created = repo.insert(&charlotte_club()).await.expect("insert");
    repo.update(
        created.id,
        &club("Coureurs de Québec", ClubCategory::Trail, "Québec", "QC"),
    )
    .await
    .expect("update");

    assert!(repo
        .find_by_title("Running Club 1")
        .await
        .expect("title")
        .is_none());
    assert!(repo.find_by_city("Charlotte").await.expect("city").is_empty());

    let found = repo
        .find_by_title("COUREURS DE QUÉBEC")
        .await
        .expect("title")
        .expect("present");
    assert_eq!(found.id, created.id);
    assert_eq!(repo.find_by_city("QUÉBEC").await.expect("city").len(), 1);
}

//! Sample data for a fresh database

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pokemon_reviews::{NewPokemon, NewReview, NewReviewer, PokemonReviewsApi};
use run_clubs::{ClubCategory, NewAddress, NewClub, RunClubsApi};

/// How many rows a seed run inserted
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub pokemon: usize,
    pub clubs: usize,
}

/// Insert the sample rows of each catalog that is still empty
pub async fn run(pokemon: &dyn PokemonReviewsApi, clubs: &dyn RunClubsApi) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    if pokemon.count_pokemon().await? == 0 {
        for entry in sample_pokemon()? {
            pokemon
                .create_pokemon(entry)
                .await
                .context("failed to seed pokemon")?;
            report.pokemon += 1;
        }
    } else {
        tracing::info!("Pokemon catalog already populated, skipping");
    }

    if clubs.count_clubs().await? == 0 {
        for entry in sample_clubs() {
            clubs
                .create_club(entry)
                .await
                .context("failed to seed clubs")?;
            report.clubs += 1;
        }
    } else {
        tracing::info!("Club catalog already populated, skipping");
    }

    tracing::info!(pokemon = report.pokemon, clubs = report.clubs, "Seed completed");
    Ok(report)
}

fn review(title: &str, text: &str, rating: i32, first: &str, last: &str) -> NewReview {
    NewReview {
        title: title.to_string(),
        text: text.to_string(),
        rating,
        reviewer: NewReviewer::new(first, last),
    }
}

fn sample_pokemon() -> Result<Vec<NewPokemon>> {
    let born = NaiveDate::from_ymd_opt(1903, 1, 1).context("invalid seed date")?;
    let entry = |name: &str, category: &str, reviews: Vec<NewReview>| NewPokemon {
        name: name.to_string(),
        birth_date: born,
        categories: vec![category.to_string()],
        reviews,
    };

    Ok(vec![
        entry(
            "Pikachu",
            "Electric",
            vec![
                review("Pikachu", "Pickahu is the best pokemon, because it is electric", 5, "Teddy", "Smith"),
                review("Pikachu", "Pickachu is the best a killing rocks", 5, "Taylor", "Jones"),
                review("Pikachu", "Pickachu, pikachu, pikachu", 1, "Jessica", "McGregor"),
            ],
        ),
        entry(
            "Squirtle",
            "Water",
            vec![
                review("Squirtle", "squirtle is the best pokemon, because it is electric", 5, "Teddy", "Smith"),
                review("Squirtle", "Squirtle is the best a killing rocks", 5, "Taylor", "Jones"),
                review("Squirtle", "squirtle, squirtle, squirtle", 1, "Jessica", "McGregor"),
            ],
        ),
        entry(
            "Venasuar",
            "Leaf",
            vec![
                review("Veasaur", "Venasuar is the best pokemon, because it is electric", 5, "Teddy", "Smith"),
                review("Veasaur", "Venasuar is the best a killing rocks", 5, "Taylor", "Jones"),
                review("Veasaur", "Venasuar, Venasuar, Venasuar", 1, "Jessica", "McGregor"),
            ],
        ),
    ])
}

fn sample_clubs() -> Vec<NewClub> {
    let club = |n: usize, category: ClubCategory, street: &str, city: &str, state: &str| NewClub {
        title: format!("Running Club {}", n),
        description: format!("This is the description of running club {}", n),
        image: Some(
            "https://www.eatthis.com/wp-content/uploads/sites/4/2020/05/running.jpg".to_string(),
        ),
        category,
        address: NewAddress {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        },
    };

    vec![
        club(1, ClubCategory::City, "123 Main St", "Charlotte", "NC"),
        club(2, ClubCategory::Endurance, "123 Main St", "Charlotte", "NC"),
        club(3, ClubCategory::Trail, "123 Main St", "Charlotte", "NC"),
        club(4, ClubCategory::City, "123 Main St", "Michigan", "NC"),
        club(5, ClubCategory::Womens, "435 Main St", "Michigan", "MI"),
        club(6, ClubCategory::RoadRunner, "12 Lake Shore Dr", "Chicago", "IL"),
    ]
}

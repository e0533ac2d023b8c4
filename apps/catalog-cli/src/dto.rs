//! Serializable views of the contract models for `--json` output

use chrono::{DateTime, NaiveDate, Utc};
use pokemon_reviews::{Pokemon, Review};
use run_clubs::Club;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PokemonDto {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub categories: Vec<String>,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewDto {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub reviewer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClubDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    pub address: AddressDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub state: String,
}

// ===== Conversions =====

impl From<&Review> for ReviewDto {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            title: review.title.clone(),
            text: review.text.clone(),
            rating: review.rating,
            reviewer: review.reviewer.full_name(),
        }
    }
}

impl From<&Pokemon> for PokemonDto {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            birth_date: pokemon.birth_date,
            categories: pokemon.categories.iter().map(|c| c.name.clone()).collect(),
            reviews: pokemon.reviews.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Club> for ClubDto {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id,
            title: club.title.clone(),
            description: club.description.clone(),
            image: club.image.clone(),
            category: club.category.to_string(),
            address: AddressDto {
                street: club.address.street.clone(),
                city: club.address.city.clone(),
                state: club.address.state.clone(),
            },
            created_at: club.created_at,
        }
    }
}

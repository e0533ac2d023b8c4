//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{category, pokemon, review, reviewer};
use crate::contract::{Category, NewPokemon, NewReview, Pokemon, Review, Reviewer};
use crate::domain::validation::normalize_name;
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Read Side =====

impl From<category::Model> for Category {
    fn from(entity: category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

impl From<reviewer::Model> for Reviewer {
    fn from(entity: reviewer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }
}

pub fn review_from_parts(review: review::Model, reviewer: reviewer::Model) -> Review {
    Review {
        id: review.id,
        title: review.title,
        text: review.text,
        rating: review.rating,
        reviewer: reviewer.into(),
    }
}

pub fn pokemon_from_parts(
    entity: pokemon::Model,
    categories: Vec<category::Model>,
    reviews: Vec<Review>,
) -> Pokemon {
    Pokemon {
        id: entity.id,
        name: entity.name,
        birth_date: entity.birth_date,
        categories: categories.into_iter().map(Into::into).collect(),
        reviews,
    }
}

// ===== Write Side =====

impl From<&NewPokemon> for pokemon::ActiveModel {
    fn from(model: &NewPokemon) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.trim().to_string()),
            name_key: Set(normalize_name(&model.name)),
            birth_date: Set(model.birth_date),
        }
    }
}

pub fn category_active_model(name: &str) -> category::ActiveModel {
    category::ActiveModel {
        id: NotSet,
        name: Set(name.trim().to_string()),
        name_key: Set(normalize_name(name)),
    }
}

pub fn review_active_model(model: &NewReview, pokemon_id: i32, reviewer_id: i32) -> review::ActiveModel {
    review::ActiveModel {
        id: NotSet,
        title: Set(model.title.trim().to_string()),
        text: Set(model.text.clone()),
        rating: Set(model.rating),
        pokemon_id: Set(pokemon_id),
        reviewer_id: Set(reviewer_id),
    }
}

//! Input validation for Pokemon, categories and reviews

use crate::config::Config;
use crate::contract::{NewPokemon, NewReview, PokemonError, PokemonUpdate};

/// Lookup key for names: trimmed and case-folded
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Validate a display name (Pokemon, category, review title)
pub fn validate_name(field: &str, value: &str, max_len: usize) -> Result<(), PokemonError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PokemonError::validation(format!("{} cannot be empty", field)));
    }
    if trimmed.chars().count() > max_len {
        return Err(PokemonError::validation(format!(
            "{} '{}' exceeds {} characters",
            field, trimmed, max_len
        )));
    }
    Ok(())
}

/// Validate a rating against the configured bounds
pub fn validate_rating(rating: i32, cfg: &Config) -> Result<(), PokemonError> {
    if rating < cfg.min_rating || rating > cfg.max_rating {
        return Err(PokemonError::validation(format!(
            "rating {} is outside {}..={}",
            rating, cfg.min_rating, cfg.max_rating
        )));
    }
    Ok(())
}

pub fn validate_review(review: &NewReview, cfg: &Config) -> Result<(), PokemonError> {
    validate_name("review title", &review.title, cfg.max_name_len)?;
    if review.text.trim().is_empty() {
        return Err(PokemonError::validation("review text cannot be empty"));
    }
    validate_rating(review.rating, cfg)?;
    validate_name("reviewer first name", &review.reviewer.first_name, cfg.max_name_len)?;
    validate_name("reviewer last name", &review.reviewer.last_name, cfg.max_name_len)
}

pub fn validate_new_pokemon(pokemon: &NewPokemon, cfg: &Config) -> Result<(), PokemonError> {
    validate_name("pokemon name", &pokemon.name, cfg.max_name_len)?;
    for category in &pokemon.categories {
        validate_name("category name", category, cfg.max_name_len)?;
    }
    for review in &pokemon.reviews {
        validate_review(review, cfg)?;
    }
    Ok(())
}

pub fn validate_update(update: &PokemonUpdate, cfg: &Config) -> Result<(), PokemonError> {
    validate_name("pokemon name", &update.name, cfg.max_name_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::NewReviewer;
    use chrono::NaiveDate;

    fn review(rating: i32) -> NewReview {
        NewReview {
            title: "Pikachu".to_string(),
            text: "Pikachu is the best pokemon, because it is electric".to_string(),
            rating,
            reviewer: NewReviewer::new("Teddy", "Smith"),
        }
    }

    fn pokemon(reviews: Vec<NewReview>) -> NewPokemon {
        NewPokemon {
            name: "Pikachu".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1903, 1, 1).unwrap(),
            categories: vec!["Electric".to_string()],
            reviews,
        }
    }

    #[test]
    fn normalize_trims_and_folds_case() {
        assert_eq!(normalize_name("  PiKaChu "), "pikachu");
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        let cfg = Config::default();
        assert!(validate_rating(1, &cfg).is_ok());
        assert!(validate_rating(5, &cfg).is_ok());
        assert!(validate_rating(0, &cfg).is_err());
        assert!(validate_rating(6, &cfg).is_err());
    }

    #[test]
    fn configured_bounds_are_respected() {
        let cfg = Config {
            max_rating: 10,
            ..Config::default()
        };
        assert!(validate_rating(10, &cfg).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_name("pokemon name", "   ", 10).unwrap_err();
        assert!(matches!(err, PokemonError::Validation { .. }));
    }

    #[test]
    fn long_name_is_rejected() {
        assert!(validate_name("pokemon name", "abcdef", 5).is_err());
        assert!(validate_name("pokemon name", "abcde", 5).is_ok());
    }

    #[test]
    fn new_pokemon_with_valid_reviews_passes() {
        let cfg = Config::default();
        assert!(validate_new_pokemon(&pokemon(vec![review(5), review(1)]), &cfg).is_ok());
    }

    #[test]
    fn one_bad_review_fails_the_pokemon() {
        let cfg = Config::default();
        let err = validate_new_pokemon(&pokemon(vec![review(5), review(9)]), &cfg).unwrap_err();
        assert!(err.to_string().contains("rating 9"));
    }

    #[test]
    fn review_without_reviewer_name_fails() {
        let mut r = review(3);
        r.reviewer.last_name = String::new();
        assert!(validate_review(&r, &Config::default()).is_err());
    }
}

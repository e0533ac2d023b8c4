//! Entity to model mappers

use super::entity::{address, club};
use crate::contract::{Address, Club, ClubCategory, NewAddress, NewClub};
use crate::domain::validation::normalize_key;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::DbErr;

impl From<address::Model> for Address {
    fn from(entity: address::Model) -> Self {
        Self {
            id: entity.id,
            street: entity.street,
            city: entity.city,
            state: entity.state,
        }
    }
}

/// Assemble a club from its row and the address row it points at
pub fn club_from_parts(entity: club::Model, address: address::Model) -> Result<Club, DbErr> {
    let category: ClubCategory = entity
        .category
        .parse()
        .map_err(|e: String| DbErr::Type(format!("club {}: {}", entity.id, e)))?;
    Ok(Club {
        id: entity.id,
        title: entity.title,
        description: entity.description,
        image: entity.image,
        category,
        address: address.into(),
        created_at: entity.created_at,
    })
}

impl From<&NewAddress> for address::ActiveModel {
    fn from(model: &NewAddress) -> Self {
        Self {
            id: NotSet,
            street: Set(model.street.clone()),
            city: Set(model.city.clone()),
            city_key: Set(normalize_key(&model.city)),
            state: Set(model.state.clone()),
        }
    }
}

pub fn club_active_model(
    model: &NewClub,
    address_id: i32,
    created_at: DateTime<Utc>,
) -> club::ActiveModel {
    club::ActiveModel {
        id: NotSet,
        title: Set(model.title.clone()),
        title_key: Set(normalize_key(&model.title)),
        description: Set(model.description.clone()),
        image: Set(model.image.clone()),
        category: Set(model.category.as_str().to_string()),
        address_id: Set(address_id),
        created_at: Set(created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_row() -> address::Model {
        address::Model {
            id: 2,
            street: "123 Main St".to_string(),
            city: "Charlotte".to_string(),
            city_key: "charlotte".to_string(),
            state: "NC".to_string(),
        }
    }

    fn club_row(category: &str) -> club::Model {
        club::Model {
            id: 1,
            title: "Running Club 1".to_string(),
            title_key: "running club 1".to_string(),
            description: "This is the description of the first cinema".to_string(),
            image: None,
            category: category.to_string(),
            address_id: 2,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn parts_become_a_club() {
        let club = club_from_parts(club_row("ROAD_RUNNER"), address_row()).unwrap();
        assert_eq!(club.category, ClubCategory::RoadRunner);
        assert_eq!(club.address.state, "NC");
    }

    #[test]
    fn unknown_category_is_a_type_error() {
        let err = club_from_parts(club_row("SWIMMING"), address_row()).unwrap_err();
        assert!(matches!(err, DbErr::Type(_)));
    }

    #[test]
    fn category_is_stored_in_upper_snake_case() {
        let input = NewClub {
            title: "Running Club 2".to_string(),
            description: String::new(),
            image: None,
            category: ClubCategory::Womens,
            address: NewAddress {
                street: "435 Main St".to_string(),
                city: "Michigan".to_string(),
                state: "MI".to_string(),
            },
        };
        let active = club_active_model(&input, 5, Utc::now());
        assert_eq!(active.category, Set("WOMENS".to_string()));
        assert_eq!(active.address_id, Set(5));
        assert_eq!(active.id, NotSet);
        assert_eq!(active.title_key, Set("running club 2".to_string()));
    }

    #[test]
    fn lookup_keys_fold_non_ascii() {
        let address = NewAddress {
            street: "1 Rue Principale".to_string(),
            city: "  MONTRÉAL ".to_string(),
            state: "QC".to_string(),
        };
        let active = address::ActiveModel::from(&address);
        assert_eq!(active.city_key, Set("montréal".to_string()));
    }
}

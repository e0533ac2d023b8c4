//! SeaORM repository implementation

use super::entity::{category, pokemon, pokemon_category, review, reviewer};
use super::mapper;
use crate::contract::{NewPokemon, NewReviewer, Pokemon, PokemonUpdate, Review};
use crate::domain::rating::mean_rating;
use crate::domain::repository::PokemonRepository;
use crate::domain::validation::normalize_name;
use async_trait::async_trait;
use catalog_db::{StoreError, StoreResult};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;

pub struct SeaOrmPokemonRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPokemonRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PokemonRepository for SeaOrmPokemonRepository {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Pokemon>> {
        let db = &*self.db;
        match pokemon::Entity::find_by_id(id).one(db).await? {
            Some(model) => Ok(Some(load_pokemon(db, model).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Pokemon>> {
        let db = &*self.db;
        let key = normalize_name(name);
        let mut matches = pokemon::Entity::find()
            .filter(pokemon::Column::NameKey.eq(key.as_str()))
            .order_by_asc(pokemon::Column::Id)
            .limit(2)
            .all(db)
            .await?;

        if matches.len() > 1 {
            tracing::warn!(name = %key, "Several Pokemon share this name, returning the lowest id");
        }
        if matches.is_empty() {
            return Ok(None);
        }
        let first = matches.swap_remove(0);
        Ok(Some(load_pokemon(db, first).await?))
    }

    async fn list_all(&self) -> StoreResult<Vec<Pokemon>> {
        let db = &*self.db;
        let models = pokemon::Entity::find()
            .order_by_asc(pokemon::Column::Id)
            .all(db)
            .await?;
        Ok(load_many(db, models).await?)
    }

    async fn insert(&self, new: &NewPokemon) -> StoreResult<Pokemon> {
        let txn = self.db.begin().await?;

        let active: pokemon::ActiveModel = new.into();
        let model = active.insert(&txn).await?;

        let mut linked = HashSet::new();
        for name in &new.categories {
            let category = find_or_create_category(&txn, name).await?;
            if !linked.insert(category.id) {
                continue;
            }
            pokemon_category::Entity::insert(pokemon_category::ActiveModel {
                pokemon_id: Set(model.id),
                category_id: Set(category.id),
            })
            .exec_without_returning(&txn)
            .await?;
        }

        for review in &new.reviews {
            let reviewer = find_or_create_reviewer(&txn, &review.reviewer).await?;
            mapper::review_active_model(review, model.id, reviewer.id)
                .insert(&txn)
                .await?;
        }

        let created = load_pokemon(&txn, model).await?;
        txn.commit().await?;
        Ok(created)
    }

    async fn update(&self, id: i32, update: &PokemonUpdate) -> StoreResult<Pokemon> {
        let db = &*self.db;
        let model = pokemon::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| StoreError::not_found("pokemon", id))?;

        let mut active: pokemon::ActiveModel = model.into();
        active.name = Set(update.name.trim().to_string());
        active.name_key = Set(normalize_name(&update.name));
        active.birth_date = Set(update.birth_date);
        let model = active.update(db).await?;

        Ok(load_pokemon(db, model).await?)
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let txn = self.db.begin().await?;

        review::Entity::delete_many()
            .filter(review::Column::PokemonId.eq(id))
            .exec(&txn)
            .await?;
        pokemon_category::Entity::delete_many()
            .filter(pokemon_category::Column::PokemonId.eq(id))
            .exec(&txn)
            .await?;
        let result = pokemon::Entity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            // dropping the transaction rolls it back
            return Err(StoreError::not_found("pokemon", id));
        }
        txn.commit().await?;
        Ok(())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(pokemon::Entity::find().count(&*self.db).await?)
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        let count = pokemon::Entity::find_by_id(id).count(&*self.db).await?;
        Ok(count > 0)
    }

    async fn average_rating(&self, id: i32) -> StoreResult<Decimal> {
        let ratings: Vec<i32> = review::Entity::find()
            .select_only()
            .column(review::Column::Rating)
            .filter(review::Column::PokemonId.eq(id))
            .into_tuple()
            .all(&*self.db)
            .await?;
        Ok(mean_rating(&ratings))
    }

    async fn list_category_names(&self) -> StoreResult<Vec<String>> {
        let names: Vec<String> = category::Entity::find()
            .select_only()
            .column(category::Column::Name)
            .distinct()
            .order_by_asc(category::Column::Name)
            .into_tuple()
            .all(&*self.db)
            .await?;
        Ok(names)
    }

    async fn find_by_category(&self, name: &str) -> StoreResult<Vec<Pokemon>> {
        let db = &*self.db;
        let category = category::Entity::find()
            .filter(category::Column::NameKey.eq(normalize_name(name)))
            .one(db)
            .await?;

        let Some(category) = category else {
            return Ok(Vec::new());
        };
        let models = category
            .find_related(pokemon::Entity)
            .order_by_asc(pokemon::Column::Id)
            .all(db)
            .await?;
        Ok(load_many(db, models).await?)
    }

    async fn reviews_of(&self, id: i32) -> StoreResult<Vec<Review>> {
        Ok(load_reviews(&*self.db, id).await?)
    }
}

// ===== Loading Helpers =====

async fn load_pokemon<C: ConnectionTrait>(db: &C, model: pokemon::Model) -> Result<Pokemon, DbErr> {
    let categories = model
        .find_related(category::Entity)
        .order_by_asc(category::Column::Name)
        .all(db)
        .await?;
    let reviews = load_reviews(db, model.id).await?;
    Ok(mapper::pokemon_from_parts(model, categories, reviews))
}

async fn load_many<C: ConnectionTrait>(
    db: &C,
    models: Vec<pokemon::Model>,
) -> Result<Vec<Pokemon>, DbErr> {
    let mut out = Vec::with_capacity(models.len());
    for model in models {
        out.push(load_pokemon(db, model).await?);
    }
    Ok(out)
}

async fn load_reviews<C: ConnectionTrait>(db: &C, pokemon_id: i32) -> Result<Vec<Review>, DbErr> {
    let rows = review::Entity::find()
        .filter(review::Column::PokemonId.eq(pokemon_id))
        .find_also_related(reviewer::Entity)
        .order_by_asc(review::Column::Id)
        .all(db)
        .await?;

    rows.into_iter()
        .map(|(review, reviewer)| {
            let reviewer = reviewer.ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "reviewer {} of review {}",
                    review.reviewer_id, review.id
                ))
            })?;
            Ok(mapper::review_from_parts(review, reviewer))
        })
        .collect()
}

// ===== Find-or-create Helpers =====

/// Categories are keyed case-insensitively; the first spelling seen is kept
async fn find_or_create_category<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<category::Model, DbErr> {
    if let Some(existing) = category::Entity::find()
        .filter(category::Column::NameKey.eq(normalize_name(name)))
        .one(db)
        .await?
    {
        return Ok(existing);
    }
    mapper::category_active_model(name).insert(db).await
}

async fn find_or_create_reviewer<C: ConnectionTrait>(
    db: &C,
    reviewer: &NewReviewer,
) -> Result<reviewer::Model, DbErr> {
    let first_name = reviewer.first_name.trim();
    let last_name = reviewer.last_name.trim();
    if let Some(existing) = reviewer::Entity::find()
        .filter(reviewer::Column::FirstName.eq(first_name))
        .filter(reviewer::Column::LastName.eq(last_name))
        .one(db)
        .await?
    {
        return Ok(existing);
    }
    reviewer::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

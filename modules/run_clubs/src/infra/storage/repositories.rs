//! SeaORM repository implementation

use super::entity::{address, club};
use super::mapper;
use crate::contract::{Club, ClubCategory, ClubUpdate, NewClub};
use crate::domain::repository::ClubRepository;
use crate::domain::validation::normalize_key;
use async_trait::async_trait;
use catalog_db::{StoreError, StoreResult};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};
use std::sync::Arc;

pub struct SeaOrmClubRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmClubRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClubRepository for SeaOrmClubRepository {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Club>> {
        let rows = club::Entity::find_by_id(id)
            .find_also_related(address::Entity)
            .all(&*self.db)
            .await?;
        Ok(assemble(rows)?.into_iter().next())
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Club>> {
        let key = normalize_key(title);
        let rows = club::Entity::find()
            .filter(club::Column::TitleKey.eq(key.as_str()))
            .order_by_asc(club::Column::Id)
            .limit(2)
            .find_also_related(address::Entity)
            .all(&*self.db)
            .await?;

        if rows.len() > 1 {
            tracing::warn!(title = %key, "Several clubs share this title, returning the lowest id");
        }
        Ok(assemble(rows)?.into_iter().next())
    }

    async fn list_all(&self) -> StoreResult<Vec<Club>> {
        Ok(fetch(&*self.db, ordered(), None).await?)
    }

    async fn list_slice(&self, offset: u64, limit: u64) -> StoreResult<Vec<Club>> {
        Ok(fetch(&*self.db, ordered(), Some((offset, limit))).await?)
    }

    async fn insert(&self, new: &NewClub) -> StoreResult<Club> {
        let txn = self.db.begin().await?;

        let address = address::ActiveModel::from(&new.address).insert(&txn).await?;
        let model = mapper::club_active_model(new, address.id, Utc::now())
            .insert(&txn)
            .await?;
        let created = mapper::club_from_parts(model, address)?;

        txn.commit().await?;
        Ok(created)
    }

    async fn update(&self, id: i32, update: &ClubUpdate) -> StoreResult<Club> {
        let txn = self.db.begin().await?;

        let (model, address) = load_row(&txn, id).await?;

        let mut active: club::ActiveModel = model.into();
        active.title = Set(update.title.clone());
        active.title_key = Set(normalize_key(&update.title));
        active.description = Set(update.description.clone());
        active.image = Set(update.image.clone());
        active.category = Set(update.category.as_str().to_string());
        let model = active.update(&txn).await?;

        let mut active: address::ActiveModel = address.into();
        active.street = Set(update.address.street.clone());
        active.city = Set(update.address.city.clone());
        active.city_key = Set(normalize_key(&update.address.city));
        active.state = Set(update.address.state.clone());
        let address = active.update(&txn).await?;

        let updated = mapper::club_from_parts(model, address)?;
        txn.commit().await?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let txn = self.db.begin().await?;

        let (model, _) = load_row(&txn, id).await?;
        club::Entity::delete_by_id(model.id).exec(&txn).await?;
        address::Entity::delete_by_id(model.address_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(club::Entity::find().count(&*self.db).await?)
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        let count = club::Entity::find_by_id(id).count(&*self.db).await?;
        Ok(count > 0)
    }

    async fn list_states(&self) -> StoreResult<Vec<String>> {
        let states: Vec<String> = address::Entity::find()
            .select_only()
            .column(address::Column::State)
            .distinct()
            .order_by_asc(address::Column::State)
            .into_tuple()
            .all(&*self.db)
            .await?;
        Ok(states)
    }

    async fn find_by_state(&self, state: &str) -> StoreResult<Vec<Club>> {
        let rows = club::Entity::find()
            .find_also_related(address::Entity)
            .filter(address::Column::State.eq(state))
            .order_by_asc(club::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(assemble(rows)?)
    }

    async fn find_by_city(&self, city: &str) -> StoreResult<Vec<Club>> {
        let rows = club::Entity::find()
            .find_also_related(address::Entity)
            .filter(address::Column::CityKey.eq(normalize_key(city)))
            .order_by_asc(club::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(assemble(rows)?)
    }

    async fn find_by_category(
        &self,
        category: ClubCategory,
        offset: u64,
        limit: u64,
    ) -> StoreResult<Vec<Club>> {
        let query = ordered().filter(club::Column::Category.eq(category.as_str()));
        Ok(fetch(&*self.db, query, Some((offset, limit))).await?)
    }

    async fn count_by_category(&self, category: ClubCategory) -> StoreResult<u64> {
        let count = club::Entity::find()
            .filter(club::Column::Category.eq(category.as_str()))
            .count(&*self.db)
            .await?;
        Ok(count)
    }
}

// ===== Loading Helpers =====

fn ordered() -> Select<club::Entity> {
    club::Entity::find().order_by_asc(club::Column::Id)
}

async fn fetch<C: ConnectionTrait>(
    db: &C,
    query: Select<club::Entity>,
    window: Option<(u64, u64)>,
) -> Result<Vec<Club>, DbErr> {
    let query = match window {
        Some((offset, limit)) => query.offset(offset).limit(limit),
        None => query,
    };
    let rows = query.find_also_related(address::Entity).all(db).await?;
    assemble(rows)
}

/// Club row together with its address row, or `NotFound`
async fn load_row<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> StoreResult<(club::Model, address::Model)> {
    let (model, address) = club::Entity::find_by_id(id)
        .find_also_related(address::Entity)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("club", id))?;
    let address = address.ok_or_else(|| missing_address(&model))?;
    Ok((model, address))
}

fn assemble(rows: Vec<(club::Model, Option<address::Model>)>) -> Result<Vec<Club>, DbErr> {
    rows.into_iter()
        .map(|(model, address)| {
            let address = address.ok_or_else(|| missing_address(&model))?;
            mapper::club_from_parts(model, address)
        })
        .collect()
}

fn missing_address(model: &club::Model) -> DbErr {
    DbErr::RecordNotFound(format!("address {} of club {}", model.address_id, model.id))
}

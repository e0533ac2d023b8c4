use sea_orm::entity::prelude::*;

/// Pokemon table entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pokemon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// Case-folded `name`, the lookup column
    pub name_key: String,

    pub birth_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Review,

    #[sea_orm(has_many = "super::pokemon_category::Entity")]
    PokemonCategory,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::pokemon_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PokemonCategory.def()
    }
}

/// Many-to-many through the join table
impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::pokemon_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pokemon_category::Relation::Pokemon.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

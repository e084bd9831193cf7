//! Dream entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dreams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub interpretation: String,
    pub is_favorite: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Dream.
impl From<Model> for ruya_core::domain::Dream {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.user_id,
            title: model.title,
            content: model.content,
            category: model.category,
            interpretation: model.interpretation,
            is_favorite: model.is_favorite,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Dream to SeaORM ActiveModel.
impl From<ruya_core::domain::Dream> for ActiveModel {
    fn from(dream: ruya_core::domain::Dream) -> Self {
        Self {
            id: Set(dream.id),
            user_id: Set(dream.owner_id),
            title: Set(dream.title),
            content: Set(dream.content),
            category: Set(dream.category),
            interpretation: Set(dream.interpretation),
            is_favorite: Set(dream.is_favorite),
            created_at: Set(dream.created_at.into()),
            updated_at: Set(dream.updated_at.into()),
        }
    }
}

/// The fields an owner may change. Identity, ownership and creation
/// time stay `NotSet` so an update can never touch them.
pub fn mutable_fields(dream: &ruya_core::domain::Dream) -> ActiveModel {
    ActiveModel {
        title: Set(dream.title.clone()),
        content: Set(dream.content.clone()),
        category: Set(dream.category.clone()),
        interpretation: Set(dream.interpretation.clone()),
        is_favorite: Set(dream.is_favorite),
        updated_at: Set(dream.updated_at.into()),
        ..Default::default()
    }
}

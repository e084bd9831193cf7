//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use ruya_core::domain;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub age: i32,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub profile_image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dream::Entity")]
    Dream,
}

impl Related<super::dream::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dream.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum MaritalStatus {
    #[sea_orm(string_value = "single")]
    Single,
    #[sea_orm(string_value = "married")]
    Married,
    #[sea_orm(string_value = "divorced")]
    Divorced,
    #[sea_orm(string_value = "widowed")]
    Widowed,
}

impl From<Gender> for domain::Gender {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Male => domain::Gender::Male,
            Gender::Female => domain::Gender::Female,
            Gender::Other => domain::Gender::Other,
        }
    }
}

impl From<domain::Gender> for Gender {
    fn from(value: domain::Gender) -> Self {
        match value {
            domain::Gender::Male => Gender::Male,
            domain::Gender::Female => Gender::Female,
            domain::Gender::Other => Gender::Other,
        }
    }
}

impl From<MaritalStatus> for domain::MaritalStatus {
    fn from(value: MaritalStatus) -> Self {
        match value {
            MaritalStatus::Single => domain::MaritalStatus::Single,
            MaritalStatus::Married => domain::MaritalStatus::Married,
            MaritalStatus::Divorced => domain::MaritalStatus::Divorced,
            MaritalStatus::Widowed => domain::MaritalStatus::Widowed,
        }
    }
}

impl From<domain::MaritalStatus> for MaritalStatus {
    fn from(value: domain::MaritalStatus) -> Self {
        match value {
            domain::MaritalStatus::Single => MaritalStatus::Single,
            domain::MaritalStatus::Married => MaritalStatus::Married,
            domain::MaritalStatus::Divorced => MaritalStatus::Divorced,
            domain::MaritalStatus::Widowed => MaritalStatus::Widowed,
        }
    }
}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            password_hash: model.password_hash,
            age: model.age,
            gender: model.gender.into(),
            marital_status: model.marital_status.into(),
            profile_image: model.profile_image,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<domain::User> for ActiveModel {
    fn from(user: domain::User) -> Self {
        Self {
            id: Set(user.id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            phone: Set(user.phone),
            password_hash: Set(user.password_hash),
            age: Set(user.age),
            gender: Set(user.gender.into()),
            marital_status: Set(user.marital_status.into()),
            profile_image: Set(user.profile_image),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}

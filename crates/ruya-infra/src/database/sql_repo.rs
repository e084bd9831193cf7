//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use ruya_core::domain::{Dream, DreamFilter, User};
use ruya_core::error::RepoError;
use ruya_core::ports::{DreamRepository, UserRepository};

use super::entity::dream::{self, Entity as DreamEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sql_base::{SqlBaseRepository, query_err, write_err};

/// SQL user repository.
pub type SqlUserRepository = SqlBaseRepository<UserEntity>;

/// SQL dream repository.
///
/// Not a `SqlBaseRepository`: dreams are only reachable through the owner.
pub struct SqlDreamRepository {
    db: DbConn,
}

impl SqlDreamRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// `j***@example.com`, for logs.
fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{}***", first),
                _ => "***".to_string(),
            };
            format!("{}{}", masked_local, domain)
        }
        None => "***".to_string(),
    }
}

/// Escape LIKE wildcards in user input; `\` is the escape character.
fn like_pattern(needle: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape('\\')
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl DreamRepository for SqlDreamRepository {
    async fn insert(&self, dream: Dream) -> Result<Dream, RepoError> {
        let model = dream::ActiveModel::from(dream)
            .insert(&self.db)
            .await
            .map_err(write_err)?;

        Ok(model.into())
    }

    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Dream>, RepoError> {
        let result = DreamEntity::find()
            .filter(dream::Column::Id.eq(id))
            .filter(dream::Column::UserId.eq(owner_id))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        filter: &DreamFilter,
    ) -> Result<Vec<Dream>, RepoError> {
        let mut query = DreamEntity::find().filter(dream::Column::UserId.eq(owner_id));

        if let Some(favorite) = filter.favorite {
            query = query.filter(dream::Column::IsFavorite.eq(favorite));
        }
        if let Some(category) = &filter.category {
            query = query.filter(dream::Column::Category.eq(category.as_str()));
        }
        if let Some(search) = &filter.search {
            let lowered = |col: dream::Column| Expr::expr(Func::lower(Expr::col(col)));
            query = query.filter(
                Condition::any()
                    .add(lowered(dream::Column::Title).like(like_pattern(search)))
                    .add(lowered(dream::Column::Content).like(like_pattern(search))),
            );
        }

        let result = query
            .order_by_desc(dream::Column::CreatedAt)
            .order_by_desc(dream::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_owned(&self, dream: Dream) -> Result<Option<Dream>, RepoError> {
        let result = DreamEntity::update_many()
            .set(dream::mutable_fields(&dream))
            .filter(dream::Column::Id.eq(dream.id))
            .filter(dream::Column::UserId.eq(dream.owner_id))
            .exec(&self.db)
            .await
            .map_err(write_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        // Re-read so timestamps carry the column's precision, not ours.
        self.find_owned(dream.id, dream.owner_id).await
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, RepoError> {
        let result = DreamEntity::delete_many()
            .filter(dream::Column::Id.eq(id))
            .filter(dream::Column::UserId.eq(owner_id))
            .exec(&self.db)
            .await
            .map_err(write_err)?;

        Ok(result.rows_affected > 0)
    }
}

//! Database schema for the Ruya backend.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_and_dreams;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_users_and_dreams::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use sea_orm_migration::sea_orm::{ConnectionTrait, Database, Statement};

    use super::*;

    #[tokio::test]
    async fn test_up_then_down_on_sqlite() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("users").await.unwrap());
        assert!(manager.has_table("dreams").await.unwrap());
        assert!(manager.has_index("dreams", "idx_dreams_user_created").await.unwrap());

        db.execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT id, user_id, is_favorite FROM dreams",
        ))
        .await
        .unwrap();

        Migrator::down(&db, None).await.unwrap();
        assert!(!manager.has_table("dreams").await.unwrap());
        assert!(!manager.has_table("users").await.unwrap());
    }
}

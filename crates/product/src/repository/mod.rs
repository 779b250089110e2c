mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

use shared::{config::ConnectionPool, errors::RepositoryError};

/// Creates the `products` table when it does not exist yet.
pub async fn run_migrations(pool: &ConnectionPool) -> Result<(), RepositoryError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::product::repository::{
            ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
        },
        domain::requests::{CreateProduct, UpdateProduct},
    };
    use chrono::Utc;
    use shared::config::ConnectionManager;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, ProductQueryRepository, ProductCommandRepository) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("products.db").display());
        let pool = ConnectionManager::new_pool(&url, 2).unwrap();
        run_migrations(&pool).await.unwrap();

        (
            dir,
            ProductQueryRepository::new(pool.clone()),
            ProductCommandRepository::new(pool),
        )
    }

    fn new_product(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: Some("Gaming".into()),
            price,
            category: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("products.db").display());
        let pool = ConnectionManager::new_pool(&url, 1).unwrap();

        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_lists_in_insertion_order() {
        let (_dir, query, command) = setup().await;

        let first = command.create_product(&new_product("Laptop", 10.0)).await.unwrap();
        let second = command.create_product(&new_product("Mouse", 2.5)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.category, None);

        let all = query.find_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Mouse"]);
    }

    #[tokio::test]
    async fn round_trips_created_at() {
        let (_dir, query, command) = setup().await;

        let created = command.create_product(&new_product("Laptop", 10.0)).await.unwrap();
        let found = query.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn update_keeps_created_at_and_reports_missing_rows() {
        let (_dir, query, command) = setup().await;
        let created = command.create_product(&new_product("Laptop", 10.0)).await.unwrap();

        let update = UpdateProduct {
            id: created.id,
            name: "Laptop Pro".into(),
            description: None,
            price: 12.0,
            category: Some("Electronics".into()),
        };
        command.update_product(&update).await.unwrap();

        let found = query.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Laptop Pro");
        assert_eq!(found.description, None);
        assert_eq!(found.created_at, created.created_at);

        let missing = UpdateProduct { id: 99, ..update };
        assert!(matches!(
            command.update_product(&missing).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_is_permanent_and_ids_are_not_reused() {
        let (_dir, query, command) = setup().await;
        let created = command.create_product(&new_product("Laptop", 10.0)).await.unwrap();

        command.delete_product(created.id).await.unwrap();
        assert!(!query.exists(created.id).await.unwrap());
        assert!(matches!(
            command.delete_product(created.id).await,
            Err(RepositoryError::NotFound)
        ));

        let next = command.create_product(&new_product("Mouse", 1.0)).await.unwrap();
        assert_eq!(next.id, created.id + 1);
    }

    #[tokio::test]
    async fn storage_rejects_non_positive_price() {
        let (_dir, _query, command) = setup().await;
        let result = command.create_product(&new_product("Freebie", 0.0)).await;
        assert!(matches!(result, Err(RepositoryError::Sqlx(_))));
    }
}

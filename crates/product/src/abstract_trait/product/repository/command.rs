use crate::{
    domain::requests::{CreateProduct, UpdateProduct},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProduct) -> Result<ProductModel, RepositoryError>;
    /// Overwrites the mutable columns. Returns `RepositoryError::NotFound` when
    /// no row was touched.
    async fn update_product(&self, req: &UpdateProduct) -> Result<(), RepositoryError>;
    async fn delete_product(&self, id: i64) -> Result<(), RepositoryError>;
}

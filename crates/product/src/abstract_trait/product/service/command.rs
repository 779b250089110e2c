use crate::domain::{requests::ProductRequest, response::ProductResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(&self, req: &ProductRequest)
    -> Result<ProductResponse, ServiceError>;
    async fn update_product(&self, id: i64, req: &ProductRequest) -> Result<(), ServiceError>;
    async fn delete_product(&self, id: i64) -> Result<(), ServiceError>;
}

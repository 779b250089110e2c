use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service", "ProductQueryService");

        Self { query, metrics }
    }

    fn complete(&self, method: Method, start: Instant, is_success: bool, message: &str) {
        let status = if is_success {
            info!("✅ Operation completed successfully: {message}");
            StatusUtils::Success
        } else {
            error!("❌ Operation failed: {message}");
            StatusUtils::Error
        };

        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Finding all products");
        let start = Instant::now();

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                self.complete(
                    Method::Get,
                    start,
                    false,
                    &format!("Failed to fetch all products: {e:?}"),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        self.complete(
            Method::Get,
            start,
            true,
            &format!("Found {} products", data.len()),
        );

        Ok(data)
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");
        let start = Instant::now();

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.complete(
                    Method::Get,
                    start,
                    true,
                    &format!("Product retrieved: '{}' (ID: {id})", product.name),
                );
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.complete(Method::Get, start, false, "Product not found");
                Err(ServiceError::NotFound(format!(
                    "Product with id {id} not found"
                )))
            }
            Err(e) => {
                self.complete(
                    Method::Get,
                    start,
                    false,
                    &format!("Database error while finding product ID {id}: {e:?}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}

use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProduct, ProductRequest, UpdateProduct},
        response::ProductResponse,
        validation::validate_product,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use shared::{
    errors::{FieldViolation, RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        query: DynProductQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service", "ProductCommandService");

        Self {
            command,
            query,
            metrics,
        }
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

    fn not_found(id: i64) -> ServiceError {
        ServiceError::NotFound(format!("Product with id {id} not found"))
    }

    async fn ensure_exists(&self, id: i64) -> Result<(), ServiceError> {
        match self.query.exists(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(Self::not_found(id)),
            Err(e) => Err(ServiceError::Repo(e)),
        }
    }

    /// A write that touched nothing or hit a lock is resolved by looking at the
    /// row again: gone means not found, still present means a real conflict.
    async fn resolve_write_failure(&self, id: i64, err: RepositoryError) -> ServiceError {
        match err {
            RepositoryError::NotFound | RepositoryError::Conflict(_) => {
                warn!("⚠️ Concurrent modification detected on product ID {id}: {err}");
                match self.query.exists(id).await {
                    Ok(false) => Self::not_found(id),
                    Ok(true) => ServiceError::Conflict(format!(
                        "Product with id {id} was modified concurrently"
                    )),
                    Err(e) => ServiceError::Repo(e),
                }
            }
            other => ServiceError::Repo(other),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &ProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating new product: {}", req.name);
        let start = Instant::now();

        let violations = validate_product(req);
        if !violations.is_empty() {
            self.complete(Method::Post, start, false, "Invalid product payload");
            return Err(ServiceError::Validation(violations));
        }

        let new_product = CreateProduct::from_request(req, Utc::now());

        let product = match self.command.create_product(&new_product).await {
            Ok(product) => product,
            Err(e) => {
                self.complete(
                    Method::Post,
                    start,
                    false,
                    &format!("Failed to create product: {e:?}"),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        self.complete(
            Method::Post,
            start,
            true,
            &format!("Product created: '{}' (ID: {})", product.name, product.id),
        );

        Ok(ProductResponse::from(product))
    }

    async fn update_product(&self, id: i64, req: &ProductRequest) -> Result<(), ServiceError> {
        info!("🔄 Updating product ID: {id}");
        let start = Instant::now();

        if req.id != Some(id) {
            self.complete(Method::Put, start, false, "Route and body id differ");
            return Err(ServiceError::Validation(vec![FieldViolation::new(
                "id",
                format!("Body id must match route id {id}"),
            )]));
        }

        let violations = validate_product(req);
        if !violations.is_empty() {
            self.complete(Method::Put, start, false, "Invalid product payload");
            return Err(ServiceError::Validation(violations));
        }

        if let Err(e) = self.ensure_exists(id).await {
            self.complete(Method::Put, start, false, &format!("{e}"));
            return Err(e);
        }

        let update = UpdateProduct::from_request(id, req);

        if let Err(e) = self.command.update_product(&update).await {
            let err = self.resolve_write_failure(id, e).await;
            self.complete(Method::Put, start, false, &format!("{err}"));
            return Err(err);
        }

        self.complete(
            Method::Put,
            start,
            true,
            &format!("Product updated (ID: {id})"),
        );
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        info!("🧨 Permanently deleting product ID: {id}");
        let start = Instant::now();

        if let Err(e) = self.ensure_exists(id).await {
            self.complete(Method::Delete, start, false, &format!("{e}"));
            return Err(e);
        }

        if let Err(e) = self.command.delete_product(id).await {
            let err = match e {
                RepositoryError::NotFound => Self::not_found(id),
                other => ServiceError::Repo(other),
            };
            self.complete(Method::Delete, start, false, &format!("{err}"));
            return Err(err);
        }

        self.complete(
            Method::Delete,
            start,
            true,
            &format!("Product permanently deleted (ID: {id})"),
        );
        Ok(())
    }
}

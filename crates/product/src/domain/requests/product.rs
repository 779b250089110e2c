use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Missing `name` and `price` fall back to their defaults so that they are
/// reported as field violations instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Laptop")]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    #[schema(example = "Gaming")]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    #[schema(example = 1299.99)]
    pub price: f64,

    #[serde(default)]
    #[validate(length(max = 100, message = "Category cannot exceed 100 characters"))]
    #[schema(example = "Electronics")]
    pub category: Option<String>,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("required").with_message("Name is required".into()));
    }
    if name.chars().count() > 200 {
        return Err(
            ValidationError::new("length").with_message("Name cannot exceed 200 characters".into()),
        );
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CreateProduct {
    pub fn from_request(req: &ProductRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            category: req.category.clone(),
            created_at,
        }
    }
}

/// Mutable columns of an existing row; `id` selects the row and is never written.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

impl UpdateProduct {
    pub fn from_request(id: i64, req: &ProductRequest) -> Self {
        Self {
            id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            category: req.category.clone(),
        }
    }
}

mod health;
mod product;

pub use self::health::HealthResponse;
pub use self::product::ProductResponse;

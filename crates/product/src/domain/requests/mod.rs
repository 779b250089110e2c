mod product;

pub use self::product::{CreateProduct, ProductRequest, UpdateProduct};

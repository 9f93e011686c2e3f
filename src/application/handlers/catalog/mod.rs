//! Catalog query handlers.

mod get_product;

pub use get_product::{
    GetProductByIdHandler, GetProductByIdQuery, GetProductError, ProductWithStock,
};

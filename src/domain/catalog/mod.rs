//! Catalog domain - products and their stock levels.
//!
//! Stock is modeled as a bare unit count keyed by product id; it has no
//! behavior of its own beyond the repository's atomic `decrement`.

mod product;

pub use product::Product;

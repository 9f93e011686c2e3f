//! Product reference data.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProductId;

/// A catalog product.
///
/// Immutable reference data owned by the catalog; checkout only reads
/// it. `price` is an integer amount in the minor unit of the
/// deployment's settlement currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: i64,
}

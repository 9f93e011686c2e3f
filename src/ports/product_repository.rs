//! Product repository port (read side).
//!
//! Products are immutable reference data, so this port is read-only and
//! has no error channel: an unreadable or unknown product surfaces as a
//! lookup miss, per the checkout contract.

use async_trait::async_trait;

use crate::domain::catalog::Product;
use crate::domain::foundation::ProductId;

/// Repository port for product lookups.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch a product by id. Returns `None` when the product does not
    /// exist (or the id is malformed for the backing store).
    async fn get_by_id(&self, product_id: &ProductId) -> Option<Product>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn product_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProductRepository) {}
    }
}

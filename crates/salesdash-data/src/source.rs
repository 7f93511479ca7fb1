//! The seam between the dashboard and wherever sales rows come from.

use async_trait::async_trait;
use salesdash_common::{ProductSales, Result};

/// A provider of aggregated product sales.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Runs the aggregation and returns one row per product.
    async fn fetch_product_sales(&self) -> Result<Vec<ProductSales>>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

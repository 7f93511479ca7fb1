//! Time-bounded memoization of the sales query.

use crate::postgres::PRODUCT_SALES_QUERY;
use crate::source::SalesSource;
use moka::future::Cache;
use salesdash_common::{DashError, SalesReport};
use salesdash_config::CacheConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// What the page receives from a load: always a report, sometimes a warning.
#[derive(Debug, Clone)]
pub struct SalesLoad {
    /// Rows to display. Empty when the load failed.
    pub report: Arc<SalesReport>,
    /// User-facing message when the database could not be read.
    pub warning: Option<String>,
}

impl SalesLoad {
    fn loaded(report: Arc<SalesReport>) -> Self {
        Self {
            report,
            warning: None,
        }
    }

    fn degraded(error: &DashError) -> Self {
        Self {
            report: Arc::new(SalesReport::empty()),
            warning: Some(error.to_string()),
        }
    }

    /// Whether the load fell back to an empty report.
    pub const fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }
}

/// Memoizes the sales report for a fixed time-to-live.
///
/// Entries are keyed by the query text. A degraded load is stored like any
/// other, so the warning is replayed until the window elapses.
pub struct SalesCache {
    source: Arc<dyn SalesSource>,
    entries: Cache<&'static str, Arc<SalesLoad>>,
    ttl: Duration,
}

impl SalesCache {
    /// Creates a cache in front of `source`.
    pub fn new(source: Arc<dyn SalesSource>, ttl: Duration) -> Self {
        let entries = Cache::builder().max_capacity(1).time_to_live(ttl).build();

        info!(source = source.name(), ttl_secs = ttl.as_secs(), "Sales cache ready");

        Self {
            source,
            entries,
            ttl,
        }
    }

    /// Creates a cache using the configured window.
    pub fn from_config(source: Arc<dyn SalesSource>, config: &CacheConfig) -> Self {
        Self::new(source, config.ttl())
    }

    /// The memoization window.
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached load, querying the source when the window has
    /// elapsed. Never fails: errors become an empty report with a warning.
    pub async fn load(&self) -> SalesLoad {
        let source = Arc::clone(&self.source);

        let load = self
            .entries
            .get_with(PRODUCT_SALES_QUERY, async move {
                debug!(source = source.name(), "Sales cache miss, querying");
                match source.fetch_product_sales().await {
                    Ok(rows) => Arc::new(SalesLoad::loaded(Arc::new(SalesReport::new(rows)))),
                    Err(error) => {
                        warn!(
                            source = source.name(),
                            %error,
                            "Sales query failed, showing no data"
                        );
                        Arc::new(SalesLoad::degraded(&error))
                    }
                }
            })
            .await;

        SalesLoad::clone(&load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSalesSource;
    use salesdash_common::test_utils::sales_fixtures;
    use salesdash_common::ProductSales;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn mock_returning(rows: Vec<ProductSales>, times: usize) -> MockSalesSource {
        let mut mock = MockSalesSource::new();
        mock.expect_name().return_const("mock");
        mock.expect_fetch_product_sales()
            .times(times)
            .returning(move || Ok(rows.clone()));
        mock
    }

    #[tokio::test]
    async fn test_load_returns_rows() {
        let cache = SalesCache::new(
            Arc::new(mock_returning(sales_fixtures::two_products(), 1)),
            Duration::from_secs(300),
        );

        let load = cache.load().await;

        assert!(!load.is_degraded());
        assert_eq!(load.report.rows, sales_fixtures::two_products());
    }

    #[tokio::test]
    async fn test_repeated_loads_hit_cache() {
        let cache = SalesCache::new(
            Arc::new(mock_returning(sales_fixtures::catalogue(), 1)),
            Duration::from_secs(300),
        );

        let first = cache.load().await;
        let second = cache.load().await;
        let third = cache.load().await;

        assert!(Arc::ptr_eq(&first.report, &second.report));
        assert!(Arc::ptr_eq(&second.report, &third.report));
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty_report() {
        let mut mock = MockSalesSource::new();
        mock.expect_name().return_const("mock");
        mock.expect_fetch_product_sales()
            .times(1)
            .returning(|| Err(DashError::database_message("connection refused")));

        let cache = SalesCache::new(Arc::new(mock), Duration::from_secs(300));
        let load = cache.load().await;

        assert!(load.report.is_empty());
        assert_eq!(
            load.warning.as_deref(),
            Some("Database error: connection refused")
        );
    }

    #[tokio::test]
    async fn test_failures_are_memoized_for_the_window() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut mock = MockSalesSource::new();
        mock.expect_name().return_const("mock");
        mock.expect_fetch_product_sales().times(1).returning(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(DashError::database_message("down"))
            } else {
                Ok(sales_fixtures::two_products())
            }
        });

        let cache = SalesCache::new(Arc::new(mock), Duration::from_secs(300));

        let first = cache.load().await;
        let second = cache.load().await;

        assert!(first.is_degraded());
        assert!(second.report.is_empty());
        assert_eq!(second.warning.as_deref(), Some("Database error: down"));
        assert!(Arc::ptr_eq(&first.report, &second.report));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_from_config_uses_ttl() {
        let config = CacheConfig { ttl_seconds: 42 };
        let cache = SalesCache::from_config(Arc::new(mock_returning(Vec::new(), 0)), &config);
        assert_eq!(cache.ttl(), Duration::from_secs(42));
    }
}

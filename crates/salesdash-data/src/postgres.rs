//! PostgreSQL sales source.

use crate::source::SalesSource;
use async_trait::async_trait;
use salesdash_common::{DashError, ProductSales, Result, UNKNOWN_PRODUCT};
use salesdash_config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgRow, PgSslMode};
use sqlx::Row;
use std::str::FromStr;
use std::time::Instant;
use tracing::{info, instrument};

/// The aggregation run on every cache miss. Also the cache key.
pub const PRODUCT_SALES_QUERY: &str = r#"
    SELECT "Product" AS product, COUNT(*) AS count
    FROM sales_data
    GROUP BY "Product"
"#;

/// Reported to the server as `application_name`.
pub const APPLICATION_NAME: &str = "salesdash";

/// Product sales read from the `sales_data` table.
pub struct PgSalesSource {
    pool: PgPool,
}

impl PgSalesSource {
    /// Builds connection options from the configured URL.
    ///
    /// TLS is always required and the session uses UTF-8 client encoding,
    /// whatever the URL says.
    pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
        let url = config.url()?;
        let options = PgConnectOptions::from_str(url).map_err(|e| {
            DashError::config_field(format!("Invalid database URL: {e}"), "DATABASE_URL")
        })?;

        Ok(options
            .ssl_mode(PgSslMode::Require)
            .options([("client_encoding", "utf8")])
            .application_name(APPLICATION_NAME))
    }

    /// Creates a source whose pool connects on first use.
    ///
    /// Must be called inside a tokio runtime.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let options = Self::connect_options(config)?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        info!(
            url = %config.redacted_url().unwrap_or_default(),
            max_connections = config.max_connections,
            "Configured PostgreSQL sales source"
        );

        Ok(Self { pool })
    }

    /// The underlying pool.
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SalesSource for PgSalesSource {
    #[instrument(skip(self), name = "product_sales_query")]
    async fn fetch_product_sales(&self) -> Result<Vec<ProductSales>> {
        let started = Instant::now();

        let rows = sqlx::query(PRODUCT_SALES_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(DashError::database)?;

        let sales = rows.iter().map(row_to_sales).collect::<Result<Vec<_>>>()?;

        info!(
            rows = sales.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Fetched product sales"
        );

        Ok(sales)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

fn row_to_sales(row: &PgRow) -> Result<ProductSales> {
    let product: Option<String> = row.try_get("product").map_err(DashError::database)?;
    let count: i64 = row.try_get("count").map_err(DashError::database)?;

    let product = product.unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());
    let count = u64::try_from(count).map_err(|_| {
        DashError::database_message(format!("negative count {count} for product '{product}'"))
    })?;

    Ok(ProductSales::new(product, count))
}

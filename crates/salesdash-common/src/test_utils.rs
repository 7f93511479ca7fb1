//! Test utilities and shared test helpers for SalesDash.
//!
//! Fixtures here are shared by the unit and integration tests of every
//! crate in the workspace.

use crate::types::{ProductSales, SalesReport};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for creating a fixed timestamp.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Sales fixtures.
pub mod sales_fixtures {
    use super::*;

    /// Product A sold three times, product B once.
    pub fn two_products() -> Vec<ProductSales> {
        vec![ProductSales::new("A", 3), ProductSales::new("B", 1)]
    }

    /// A wider spread of products for chart tests.
    pub fn catalogue() -> Vec<ProductSales> {
        vec![
            ProductSales::new("Laptop", 42),
            ProductSales::new("Monitor", 17),
            ProductSales::new("Keyboard", 28),
            ProductSales::new("Mouse", 35),
            ProductSales::new("Headset", 9),
        ]
    }

    /// A report over [`two_products`] with a fixed load time.
    pub fn two_product_report() -> SalesReport {
        SalesReport::at(two_products(), mock_timestamp(2024, 1, 1, 12, 0, 0))
    }
}

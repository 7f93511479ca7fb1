//! Domain types for product sales aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for rows whose product column is `NULL`.
pub const UNKNOWN_PRODUCT: &str = "(unknown)";

/// One row of the sales aggregation: a product and how many sales it has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductSales {
    /// Product name, unique within one query result.
    pub product: String,
    /// Number of sales rows for the product.
    pub count: u64,
}

impl ProductSales {
    /// Creates a new row.
    pub fn new(product: impl Into<String>, count: u64) -> Self {
        Self {
            product: product.into(),
            count,
        }
    }
}

impl fmt::Display for ProductSales {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.product, self.count)
    }
}

/// The result of one aggregation query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    /// Rows in the order the database returned them.
    pub rows: Vec<ProductSales>,
    /// When the rows were fetched.
    pub loaded_at: DateTime<Utc>,
}

impl SalesReport {
    /// Creates a report stamped with the current time.
    pub fn new(rows: Vec<ProductSales>) -> Self {
        Self::at(rows, Utc::now())
    }

    /// Creates a report with an explicit load time.
    pub fn at(rows: Vec<ProductSales>, loaded_at: DateTime<Utc>) -> Self {
        Self { rows, loaded_at }
    }

    /// An empty report, used when a load fails.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows (distinct products).
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

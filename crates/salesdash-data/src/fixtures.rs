//! In-memory sales sources for tests of code built on [`SalesSource`].

use crate::source::SalesSource;
use async_trait::async_trait;
use salesdash_common::{DashError, ProductSales, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same rows on every call and counts the calls.
#[derive(Debug, Default)]
pub struct StaticSalesSource {
    rows: Vec<ProductSales>,
    calls: AtomicUsize,
}

impl StaticSalesSource {
    /// Creates a source serving `rows`.
    pub const fn new(rows: Vec<ProductSales>) -> Self {
        Self {
            rows,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SalesSource for StaticSalesSource {
    async fn fetch_product_sales(&self) -> Result<Vec<ProductSales>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Fails every call with a database error and counts the calls.
#[derive(Debug)]
pub struct FailingSalesSource {
    message: String,
    calls: AtomicUsize,
}

impl FailingSalesSource {
    /// Creates a source failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SalesSource for FailingSalesSource {
    async fn fetch_product_sales(&self) -> Result<Vec<ProductSales>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DashError::database_message(self.message.clone()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

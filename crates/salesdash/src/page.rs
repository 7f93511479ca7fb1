//! Dashboard page assembly.

use askama::Template;
use salesdash_common::{format_timestamp, Result};
use salesdash_config::{Config, DatabaseConfig};
use salesdash_data::{PgSalesSource, SalesCache, SalesSource};
use salesdash_graphs::{to_hex, GraphRenderer, ProductSalesChart};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Browser tab title.
pub const PAGE_TITLE: &str = "Sales Dashboard";
/// Main heading.
pub const HEADING: &str = "📊 Sales Dashboard";
/// Heading above the chart.
pub const SUBHEADING: &str = "🔥 Top Selling Products";
/// Shown instead of a chart when the query returned nothing.
pub const NO_DATA_MESSAGE: &str = "No data found";

/// Severity of a message box on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Red box.
    Error,
    /// Yellow box.
    Warning,
}

/// A message box shown above the chart area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Leading icon.
    pub icon: &'static str,
    /// Message text.
    pub message: String,
}

impl Notice {
    fn error(icon: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            icon,
            message: message.into(),
        }
    }

    fn warning(icon: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            icon,
            message: message.into(),
        }
    }

    /// CSS class of the message box.
    pub const fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Error => "notice notice-error",
            NoticeLevel::Warning => "notice notice-warning",
        }
    }
}

/// The rendered state of one page load.
#[derive(Template, Debug, Clone)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    /// Browser tab title.
    pub page_title: &'static str,
    /// Set when configuration stopped the page; nothing else is shown.
    pub halt: Option<Notice>,
    /// Heading.
    pub heading: &'static str,
    /// Subheading.
    pub subheading: &'static str,
    /// Message boxes above the chart.
    pub notices: Vec<Notice>,
    /// Inline SVG chart.
    pub chart_svg: Option<String>,
    /// Background behind the chart.
    pub chart_background: String,
    /// When the displayed data was fetched.
    pub loaded_at: Option<String>,
}

impl DashboardPage {
    fn new(chart_background: String) -> Self {
        Self {
            page_title: PAGE_TITLE,
            halt: None,
            heading: HEADING,
            subheading: SUBHEADING,
            notices: Vec::new(),
            chart_svg: None,
            chart_background,
            loaded_at: None,
        }
    }

    fn halted(message: &str, chart_background: String) -> Self {
        Self {
            halt: Some(Notice::error("❌", message)),
            ..Self::new(chart_background)
        }
    }

    /// Whether rendering stopped before any query.
    pub const fn is_halted(&self) -> bool {
        self.halt.is_some()
    }

    /// Whether the page carries a chart.
    pub const fn has_chart(&self) -> bool {
        self.chart_svg.is_some()
    }
}

enum SalesAccess {
    Ready(SalesCache),
    Halted(String),
}

/// Everything a page load needs: the memoized sales and the chart renderer.
pub struct Dashboard {
    access: SalesAccess,
    renderer: ProductSalesChart,
}

impl Dashboard {
    /// Builds the dashboard over PostgreSQL.
    ///
    /// Without a usable `DATABASE_URL` the dashboard is halted: every page
    /// shows the configuration error and no query is ever issued.
    pub fn from_config(config: &Config) -> Self {
        Self::build(config, |database| {
            let source: Arc<dyn SalesSource> = Arc::new(PgSalesSource::connect_lazy(database)?);
            Ok(source)
        })
    }

    /// Builds the dashboard over an arbitrary source. The configuration is
    /// still checked first, so a missing URL halts the page.
    pub fn with_source(config: &Config, source: Arc<dyn SalesSource>) -> Self {
        Self::build(config, |_| Ok(source))
    }

    fn build<F>(config: &Config, connect: F) -> Self
    where
        F: FnOnce(&DatabaseConfig) -> Result<Arc<dyn SalesSource>>,
    {
        let access = match config.database.url().and_then(|_| connect(&config.database)) {
            Ok(source) => SalesAccess::Ready(SalesCache::from_config(source, &config.cache)),
            Err(e) => {
                error!("Dashboard halted: {e}");
                SalesAccess::Halted(e.to_string())
            }
        };

        Self {
            access,
            renderer: ProductSalesChart::new(&config.chart),
        }
    }

    /// Whether configuration stops every page load.
    pub const fn is_halted(&self) -> bool {
        matches!(self.access, SalesAccess::Halted(_))
    }

    /// Runs one page load: load sales, then chart or warning.
    pub async fn build_page(&self) -> DashboardPage {
        let background = to_hex(self.renderer.theme().paper);

        let cache = match &self.access {
            SalesAccess::Ready(cache) => cache,
            SalesAccess::Halted(message) => return DashboardPage::halted(message, background),
        };

        let load = cache.load().await;
        let mut page = DashboardPage::new(background);

        if let Some(warning) = &load.warning {
            page.notices.push(Notice::error("⚠️", warning.clone()));
        } else {
            page.loaded_at = Some(format_timestamp(load.report.loaded_at));
        }

        match self.renderer.chart_for(&load.report.rows) {
            Some(chart) => match self.renderer.render(&chart) {
                Ok(svg) => page.chart_svg = Some(svg),
                Err(e) => {
                    warn!(chart = self.renderer.name(), "Chart rendering failed: {e}");
                    page.notices.push(Notice::error("⚠️", e.to_string()));
                }
            },
            None => {
                info!("Sales query returned no rows");
                page.notices.push(Notice::warning("⚠️", NO_DATA_MESSAGE));
            }
        }

        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdash_common::test_utils::sales_fixtures;
    use salesdash_data::fixtures::{FailingSalesSource, StaticSalesSource};

    fn configured() -> Config {
        let mut config = Config::default();
        config.database.url = Some("postgres://localhost/sales".to_string());
        config
    }

    #[tokio::test]
    async fn test_missing_url_halts_before_query() {
        let source = Arc::new(StaticSalesSource::new(sales_fixtures::two_products()));
        let dashboard = Dashboard::with_source(&Config::default(), source.clone());

        let page = dashboard.build_page().await;

        assert!(dashboard.is_halted());
        assert!(page.is_halted());
        assert!(!page.has_chart());
        assert_eq!(page.halt.unwrap().message, "Database URL not found");
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_unparsable_url_halts() {
        let mut config = Config::default();
        config.database.url = Some("definitely not a url".to_string());

        let dashboard = Dashboard::from_config(&config);

        assert!(dashboard.is_halted());
        let page = dashboard.build_page().await;
        assert!(page.halt.unwrap().message.starts_with("Invalid database URL"));
    }

    #[tokio::test]
    async fn test_rows_produce_chart() {
        let source = Arc::new(StaticSalesSource::new(sales_fixtures::two_products()));
        let dashboard = Dashboard::with_source(&configured(), source);

        let page = dashboard.build_page().await;

        assert!(page.has_chart());
        assert!(page.notices.is_empty());
        assert!(page.loaded_at.is_some());
    }

    #[tokio::test]
    async fn test_empty_rows_warn_without_chart() {
        let dashboard =
            Dashboard::with_source(&configured(), Arc::new(StaticSalesSource::new(Vec::new())));

        let page = dashboard.build_page().await;

        assert!(!page.has_chart());
        assert_eq!(page.notices.len(), 1);
        assert_eq!(page.notices[0].level, NoticeLevel::Warning);
        assert_eq!(page.notices[0].message, NO_DATA_MESSAGE);
    }

    #[tokio::test]
    async fn test_database_error_shows_error_then_no_data() {
        let source = Arc::new(FailingSalesSource::new("connection refused"));
        let dashboard = Dashboard::with_source(&configured(), source.clone());

        let page = dashboard.build_page().await;

        assert!(!page.is_halted());
        assert!(!page.has_chart());
        let messages: Vec<_> = page.notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["Database error: connection refused", NO_DATA_MESSAGE]);
        assert_eq!(page.notices[0].css_class(), "notice notice-error");
        assert!(page.loaded_at.is_none());
        assert_eq!(source.calls(), 1);
    }
}

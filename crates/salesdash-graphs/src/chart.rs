//! Declarative bar chart model.

use crate::palette::ColorScale;
use plotters::style::RGBColor;
use salesdash_common::ProductSales;

/// Chart title.
pub const CHART_TITLE: &str = "Product Popularity";
/// Category axis title.
pub const X_AXIS_TITLE: &str = "Product";
/// Value axis title.
pub const Y_AXIS_TITLE: &str = "count";
/// Colour bar title.
pub const COLORBAR_TITLE: &str = "Sales Count";

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Category label under the bar.
    pub label: String,
    /// Bar height, also printed above the bar.
    pub value: u64,
    /// Fill colour taken from the colour scale.
    pub color: RGBColor,
}

/// A bar chart: one bar per product, in the order the rows arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// Category axis title.
    pub x_title: String,
    /// Value axis title.
    pub y_title: String,
    /// Colour bar title.
    pub colorbar_title: String,
    /// Bars in row order.
    pub bars: Vec<Bar>,
    /// Colour scale the bars were coloured with.
    pub scale: ColorScale,
}

impl BarChart {
    /// Builds the chart for `rows`, or `None` when there is nothing to plot.
    pub fn from_sales(rows: &[ProductSales], scale: &ColorScale) -> Option<Self> {
        let min = rows.iter().map(|row| row.count).min()?;
        let max = rows.iter().map(|row| row.count).max()?;

        let bars = rows
            .iter()
            .map(|row| Bar {
                label: row.product.clone(),
                value: row.count,
                color: scale.sample_between(row.count, min, max),
            })
            .collect();

        Some(Self {
            title: CHART_TITLE.to_string(),
            x_title: X_AXIS_TITLE.to_string(),
            y_title: Y_AXIS_TITLE.to_string(),
            colorbar_title: COLORBAR_TITLE.to_string(),
            bars,
            scale: scale.clone(),
        })
    }

    /// Smallest bar value.
    pub fn min_value(&self) -> u64 {
        self.bars.iter().map(|bar| bar.value).min().unwrap_or(0)
    }

    /// Largest bar value.
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|bar| bar.value).max().unwrap_or(0)
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the chart has no bars. Never true for a chart built by
    /// [`BarChart::from_sales`].
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

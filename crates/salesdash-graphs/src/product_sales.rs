//! Product popularity bar chart rendered to SVG.

use crate::chart::BarChart;
use crate::palette::{ColorScale, Theme};
use crate::traits::GraphRenderer;
use crate::utils::{axis_ceiling, MAX_LABEL_CHARS};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use salesdash_common::{truncate_string, DashError, ProductSales, Result};
use salesdash_config::ChartConfig;
use tracing::debug;

/// Width reserved to the right of the plot for the colour bar.
const COLORBAR_AREA: u32 = 110;
/// Number of bands the colour bar gradient is drawn with.
const COLORBAR_STEPS: i32 = 64;

/// Product popularity bar chart renderer.
pub struct ProductSalesChart {
    width: u32,
    height: u32,
    theme: Theme,
    scale: ColorScale,
}

impl ProductSalesChart {
    /// Creates a renderer with the dashboard theme and Plasma scale.
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            theme: Theme::dark(),
            scale: ColorScale::plasma(),
        }
    }

    /// Builds the chart model for `rows` with this renderer's scale.
    pub fn chart_for(&self, rows: &[ProductSales]) -> Option<BarChart> {
        BarChart::from_sales(rows, &self.scale)
    }

    /// Output size in pixels.
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Theme colours.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Default for ProductSalesChart {
    fn default() -> Self {
        Self::new(&ChartConfig::default())
    }
}

impl GraphRenderer for ProductSalesChart {
    type Data = BarChart;

    fn render(&self, chart: &BarChart) -> Result<String> {
        if chart.is_empty() {
            return Err(DashError::chart("cannot render a chart without bars"));
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            draw_chart(&root, chart, &self.theme).map_err(|e| DashError::chart(e.to_string()))?;
            root.present().map_err(|e| DashError::chart(e.to_string()))?;
        }

        debug!(bars = chart.len(), bytes = svg.len(), "Rendered product sales chart");
        Ok(svg)
    }

    fn name(&self) -> &'static str {
        "product_sales"
    }
}

type DrawResult<DB> =
    std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart,
    theme: &Theme,
) -> DrawResult<DB> {
    root.fill(&theme.paper)?;

    let (width, _) = root.dim_in_pixel();
    let (plot_area, colorbar_area) = root.split_horizontally(width.saturating_sub(COLORBAR_AREA));

    draw_bars(&plot_area, chart, theme)?;
    draw_colorbar(&colorbar_area, chart, theme)
}

#[allow(clippy::cast_possible_truncation)]
fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &BarChart,
    theme: &Theme,
) -> DrawResult<DB> {
    let bar_count = chart.len() as u32;
    let labels: Vec<String> = chart
        .bars
        .iter()
        .map(|bar| truncate_string(&bar.label, MAX_LABEL_CHARS))
        .collect();

    let mut cc = ChartBuilder::on(area)
        .caption(&chart.title, ("sans-serif", 24).into_font().color(&theme.accent))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0u32..bar_count).into_segmented(),
            0u64..axis_ceiling(chart.max_value()),
        )?;

    let label_for = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(index) => labels.get(*index as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    cc.configure_mesh()
        .disable_x_mesh()
        .bold_line_style(theme.grid.stroke_width(1))
        .light_line_style(theme.paper.stroke_width(1))
        .axis_style(theme.grid.stroke_width(1))
        .x_labels(labels.len())
        .x_label_formatter(&label_for)
        .x_label_style(("sans-serif", 12).into_font().color(&theme.accent))
        .y_label_style(("sans-serif", 12).into_font().color(&theme.accent))
        .x_desc(chart.x_title.as_str())
        .y_desc(chart.y_title.as_str())
        .axis_desc_style(("sans-serif", 14).into_font().color(&theme.text))
        .draw()?;

    cc.draw_series(chart.bars.iter().enumerate().map(|(index, bar)| {
        let index = index as u32;
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(index), 0),
                (SegmentValue::Exact(index + 1), bar.value),
            ],
            bar.color.filled(),
        );
        rect.set_margin(0, 0, 6, 6);
        rect
    }))?;

    cc.draw_series(chart.bars.iter().enumerate().map(|(index, bar)| {
        let index = index as u32;
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(index), 0),
                (SegmentValue::Exact(index + 1), bar.value),
            ],
            theme.bar_outline.stroke_width(1),
        );
        rect.set_margin(0, 0, 6, 6);
        rect
    }))?;

    let value_style = ("sans-serif", 12)
        .into_font()
        .color(&theme.text)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    cc.draw_series(chart.bars.iter().enumerate().map(|(index, bar)| {
        Text::new(
            bar.value.to_string(),
            (SegmentValue::CenterOf(index as u32), bar.value),
            value_style.clone(),
        )
    }))?;

    Ok(())
}

#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &BarChart,
    theme: &Theme,
) -> DrawResult<DB> {
    let (_, height) = area.dim_in_pixel();
    let top = 70;
    let bottom = (height as i32 - 90).max(top + COLORBAR_STEPS);
    let left = 12;
    let right = left + 18;
    let span = bottom - top;

    let text_style = ("sans-serif", 12).into_font().color(&theme.text);

    area.draw(&Text::new(
        chart.colorbar_title.clone(),
        (left - 6, top - 24),
        text_style.clone(),
    ))?;

    for step in 0..COLORBAR_STEPS {
        let y0 = top + span * step / COLORBAR_STEPS;
        let y1 = top + span * (step + 1) / COLORBAR_STEPS;
        let t = 1.0 - f64::from(step) / f64::from(COLORBAR_STEPS - 1);
        area.draw(&Rectangle::new(
            [(left, y0), (right, y1)],
            chart.scale.sample(t).filled(),
        ))?;
    }

    let min = chart.min_value();
    let max = chart.max_value();
    let tick_style = text_style.pos(Pos::new(HPos::Left, VPos::Center));
    area.draw(&Text::new(max.to_string(), (right + 6, top), tick_style.clone()))?;
    if max != min {
        area.draw(&Text::new(min.to_string(), (right + 6, bottom), tick_style))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdash_common::test_utils::sales_fixtures;

    #[test]
    fn test_render_produces_single_svg_document() {
        let renderer = ProductSalesChart::default();
        let chart = renderer.chart_for(&sales_fixtures::catalogue()).unwrap();

        let svg = renderer.render(&chart).unwrap();

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<svg").count(), 1);
        assert!(svg.contains("Product Popularity"));
        assert!(svg.contains("Sales Count"));
    }

    #[test]
    fn test_render_labels_every_product() {
        let renderer = ProductSalesChart::default();
        let chart = renderer.chart_for(&sales_fixtures::catalogue()).unwrap();

        let svg = renderer.render(&chart).unwrap();

        let texts: Vec<&str> = svg.lines().map(str::trim).collect();
        for bar in &chart.bars {
            assert!(texts.contains(&bar.label.as_str()), "missing label {}", bar.label);
            assert!(texts.contains(&bar.value.to_string().as_str()), "missing value {}", bar.value);
        }
    }

    #[test]
    fn test_render_uses_configured_size() {
        let renderer = ProductSalesChart::new(&ChartConfig {
            width: 640,
            height: 480,
        });
        let chart = renderer.chart_for(&sales_fixtures::two_products()).unwrap();

        let svg = renderer.render(&chart).unwrap();

        assert!(svg.contains(r#"width="640""#));
        assert!(svg.contains(r#"height="480""#));
    }

    #[test]
    fn test_render_rejects_empty_chart() {
        let renderer = ProductSalesChart::default();
        let mut chart = renderer.chart_for(&sales_fixtures::two_products()).unwrap();
        chart.bars.clear();
        assert!(renderer.render(&chart).is_err());
    }
}

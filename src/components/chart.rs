//! Chart Components
//!
//! Bar and pie charts drawn on HTML5 Canvas. At most one live chart
//! instance exists per kind; rendering a kind destroys the instance
//! previously bound to its surface before installing the new one.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::loading::ChartSkeleton;
use crate::state::global::{expect_state, ChartSeries};
use crate::theme::{self, Palette};

/// Grid and slice border color, shared by both themes
const BORDER_COLOR: &str = "rgba(255, 255, 255, 0.1)";

/// The two chart kinds on the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    fn index(self) -> usize {
        match self {
            Self::Bar => 0,
            Self::Pie => 1,
        }
    }
}

/// A live chart bound to a rendering surface
pub trait ChartSurface {
    /// Release the surface. Idempotent from the registry's point of view:
    /// destroying a kind with no live instance is a no-op.
    fn destroy(&mut self);
}

/// Chart instance bound to a canvas element
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

impl CanvasChart {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartSurface for CanvasChart {
    fn destroy(&mut self) {
        if let Some(ctx) = context_2d(&self.canvas) {
            ctx.clear_rect(
                0.0,
                0.0,
                f64::from(self.canvas.width()),
                f64::from(self.canvas.height()),
            );
        }
    }
}

/// Kind -> live instance mapping; the single owner of chart lifetimes
pub struct ChartRegistry<S: ChartSurface = CanvasChart> {
    live: [Option<S>; 2],
}

impl<S: ChartSurface> ChartRegistry<S> {
    pub fn new() -> Self {
        Self { live: [None, None] }
    }

    /// Install a new instance for a kind, destroying the prior one first
    pub fn install(&mut self, kind: ChartKind, surface: S) {
        let slot = &mut self.live[kind.index()];
        if let Some(mut prior) = slot.take() {
            prior.destroy();
        }
        *slot = Some(surface);
    }

    pub fn has(&self, kind: ChartKind) -> bool {
        self.live[kind.index()].is_some()
    }

    pub fn live_count(&self) -> usize {
        self.live.iter().filter(|s| s.is_some()).count()
    }
}

impl<S: ChartSurface> Default for ChartRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared chart registry provided to the chart components
#[derive(Clone)]
pub struct ChartContext {
    registry: Rc<RefCell<ChartRegistry<CanvasChart>>>,
}

impl ChartContext {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(ChartRegistry::new())),
        }
    }

    /// Replace the live instance for `kind` and draw onto its canvas
    pub fn render(
        &self,
        kind: ChartKind,
        canvas: &HtmlCanvasElement,
        draw: impl FnOnce(&HtmlCanvasElement),
    ) {
        self.registry
            .borrow_mut()
            .install(kind, CanvasChart::new(canvas.clone()));
        draw(canvas);
    }
}

impl Default for ChartContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the chart registry to the component tree
pub fn provide_chart_context() {
    provide_context(ChartContext::new());
}

/// Engagement bar chart, redrawn when the snapshot or theme changes
#[component]
pub fn EngagementChart() -> impl IntoView {
    let state = expect_state();
    let charts = use_context::<ChartContext>().expect("ChartContext not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let Some(snapshot) = state.snapshot.get() else {
            return;
        };
        let palette = theme::palette(state.theme.get());

        match canvas_ref.get() {
            Some(canvas) => {
                charts.render(ChartKind::Bar, &canvas, |c| {
                    draw_bar_chart(c, &snapshot.engagement, palette);
                });
            }
            None => web_sys::console::error_1(&"Chart canvas not found".into()),
        }
    });

    chart_card("Engagement by Post Type", canvas_ref)
}

/// Distribution pie chart, redrawn when the snapshot or theme changes
#[component]
pub fn DistributionChart() -> impl IntoView {
    let state = expect_state();
    let charts = use_context::<ChartContext>().expect("ChartContext not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let Some(snapshot) = state.snapshot.get() else {
            return;
        };
        let palette = theme::palette(state.theme.get());

        match canvas_ref.get() {
            Some(canvas) => {
                charts.render(ChartKind::Pie, &canvas, |c| {
                    draw_pie_chart(c, &snapshot.distribution, palette);
                });
            }
            None => web_sys::console::error_1(&"Chart canvas not found".into()),
        }
    });

    chart_card("Content Distribution", canvas_ref)
}

/// Both charts side by side, with skeletons until the first snapshot lands
#[component]
pub fn ChartsPanel() -> impl IntoView {
    let state = expect_state();
    let loaded = create_memo(move |_| state.snapshot.with(|s| s.is_some()));

    view! {
        <section class="charts-grid">
            {move || {
                if loaded.get() {
                    view! {
                        <EngagementChart />
                        <DistributionChart />
                    }
                    .into_view()
                } else {
                    view! {
                        <ChartSkeleton />
                        <ChartSkeleton />
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

fn chart_card(title: &'static str, canvas_ref: NodeRef<html::Canvas>) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h2 class="chart-title">{title}</h2>
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="chart-canvas"
            />
        </div>
    }
}

/// Series fill color for a dataset index, at ~70% alpha
pub fn series_color(palette: &Palette, index: usize) -> String {
    let base = [palette.primary, palette.secondary, palette.accent];
    theme::with_alpha(base[index % base.len()])
}

/// Per-slice percentage label: value over sum, two decimals
pub fn pie_percentage(value: f64, sum: f64) -> String {
    format!("{:.2}%", value / sum * 100.0)
}

/// Draw the engagement bar chart
fn draw_bar_chart(canvas: &HtmlCanvasElement, series: &ChartSeries, palette: &Palette) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    // Margins; top leaves room for the legend row
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 40.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let values = series.values();
    if values.is_empty() {
        draw_no_data(&ctx, palette, width, height);
        return;
    }

    // Y scale starts at zero
    let max_value = values.iter().copied().fold(0.0_f64, f64::max).max(1.0);

    // Horizontal grid lines and y-axis labels
    ctx.set_stroke_style(&BORDER_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (f64::from(i) / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_value - (f64::from(i) / 5.0) * max_value;
        ctx.set_fill_style(&palette.text_primary.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Bars
    let count = series.labels.len().min(values.len());
    let slot = chart_width / count as f64;
    let bar_width = slot * 0.6;

    for i in 0..count {
        let value = values[i];
        let bar_height = (value / max_value) * chart_height;
        let x = margin_left + i as f64 * slot + slot * 0.2;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&series_color(palette, i).as_str().into());
        ctx.fill_rect(x, y, bar_width, bar_height);
        ctx.set_stroke_style(&BORDER_COLOR.into());
        ctx.set_line_width(2.0);
        ctx.stroke_rect(x, y, bar_width, bar_height);

        // X-axis label under the bar
        ctx.set_fill_style(&palette.text_primary.into());
        ctx.set_font("12px sans-serif");
        let label = &series.labels[i];
        let label_x = x + bar_width / 2.0 - 3.0 * label.len() as f64;
        let _ = ctx.fill_text(label, label_x, height - 10.0);
    }

    // Legend swatch and dataset label
    let legend = series
        .datasets
        .first()
        .and_then(|d| d.label.clone())
        .unwrap_or_else(|| "Engagement by Post Type".to_string());

    ctx.set_fill_style(&series_color(palette, 0).as_str().into());
    ctx.fill_rect(margin_left, 12.0, 12.0, 12.0);
    ctx.set_fill_style(&palette.text_primary.into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text(&legend, margin_left + 18.0, 22.0);
}

/// Draw the distribution pie chart
fn draw_pie_chart(canvas: &HtmlCanvasElement, series: &ChartSeries, palette: &Palette) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let values = series.values();
    let sum: f64 = values.iter().sum();
    if values.is_empty() || sum <= 0.0 {
        draw_no_data(&ctx, palette, width, height);
        return;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0 + 10.0;
    let radius = (width.min(height) / 2.0) - 40.0;

    let mut start = -std::f64::consts::FRAC_PI_2;

    for (i, &value) in values.iter().enumerate() {
        let sweep = value / sum * std::f64::consts::TAU;

        ctx.begin_path();
        ctx.move_to(center_x, center_y);
        let _ = ctx.arc(center_x, center_y, radius, start, start + sweep);
        ctx.close_path();
        ctx.set_fill_style(&series_color(palette, i).as_str().into());
        ctx.fill();
        ctx.set_stroke_style(&BORDER_COLOR.into());
        ctx.set_line_width(2.0);
        ctx.stroke();

        // Percentage label at the slice midpoint
        let mid = start + sweep / 2.0;
        let label_x = center_x + radius * 0.6 * mid.cos();
        let label_y = center_y + radius * 0.6 * mid.sin();
        ctx.set_fill_style(&"#fff".into());
        ctx.set_font("13px sans-serif");
        let _ = ctx.fill_text(&pie_percentage(value, sum), label_x - 18.0, label_y);

        start += sweep;
    }

    // Legend row across the top
    let mut legend_x = 20.0;
    for (i, label) in series.labels.iter().enumerate().take(values.len()) {
        ctx.set_fill_style(&series_color(palette, i).as_str().into());
        ctx.fill_rect(legend_x, 12.0, 12.0, 12.0);
        ctx.set_fill_style(&palette.text_primary.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text(label, legend_x + 18.0, 22.0);
        legend_x += 36.0 + 8.0 * label.len() as f64;
    }
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, palette: &Palette, width: f64, height: f64) {
    ctx.set_fill_style(&palette.text_primary.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data available", width / 2.0 - 60.0, height / 2.0);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct MockSurface {
        destroyed: Rc<Cell<u32>>,
    }

    impl ChartSurface for MockSurface {
        fn destroy(&mut self) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    #[test]
    fn test_install_replaces_single_instance_per_kind() {
        let destroyed = Rc::new(Cell::new(0));
        let mut registry: ChartRegistry<MockSurface> = ChartRegistry::new();

        for _ in 0..4 {
            registry.install(
                ChartKind::Bar,
                MockSurface {
                    destroyed: Rc::clone(&destroyed),
                },
            );
        }

        assert!(registry.has(ChartKind::Bar));
        assert!(!registry.has(ChartKind::Pie));
        assert_eq!(registry.live_count(), 1);
        // First install destroys nothing; each of the 3 replacements
        // destroys exactly the prior instance
        assert_eq!(destroyed.get(), 3);
    }

    #[test]
    fn test_kinds_do_not_displace_each_other() {
        let destroyed = Rc::new(Cell::new(0));
        let mut registry: ChartRegistry<MockSurface> = ChartRegistry::new();

        registry.install(
            ChartKind::Bar,
            MockSurface {
                destroyed: Rc::clone(&destroyed),
            },
        );
        registry.install(
            ChartKind::Pie,
            MockSurface {
                destroyed: Rc::clone(&destroyed),
            },
        );

        assert_eq!(registry.live_count(), 2);
        assert_eq!(destroyed.get(), 0);
    }

    #[test]
    fn test_pie_percentage_two_decimals() {
        assert_eq!(pie_percentage(25.0, 100.0), "25.00%");
        assert_eq!(pie_percentage(1.0, 3.0), "33.33%");
    }

    #[test]
    fn test_series_colors_cycle_with_alpha() {
        let palette = crate::theme::palette(crate::theme::ThemeName::Dark);
        assert_eq!(series_color(palette, 0), format!("{}B3", palette.primary));
        assert_eq!(series_color(palette, 1), format!("{}B3", palette.secondary));
        assert_eq!(series_color(palette, 2), format!("{}B3", palette.accent));
        assert_eq!(series_color(palette, 3), series_color(palette, 0));
    }
}

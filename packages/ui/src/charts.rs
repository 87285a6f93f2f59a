//! # Chart data and rendering
//!
//! The dashboard charts display mock series only. The six-month statistics
//! series is a compile-time constant; the welcome-page bar chart re-rolls
//! random values on a fixed interval. Geometry is computed by small pure
//! helpers ([`polyline_points`], [`bar_height_pct`]) so the scaling logic is
//! testable without a DOM, and the components just emit inline SVG / styled
//! divs around those numbers.

use dioxus::prelude::*;

use crate::time::sleep_ms;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// One month of the fixed statistics series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub month: &'static str,
    pub income: f64,
    pub expenses: f64,
}

/// One month of the randomly regenerated bar series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarPoint {
    pub month: &'static str,
    pub expenses: f64,
    pub savings: f64,
}

/// The fixed income/expenses series shown on the dashboard.
pub fn statistics_data() -> Vec<SeriesPoint> {
    let income = [4000.0, 5000.0, 6000.0, 7000.0, 5500.0, 8000.0];
    let expenses = [2400.0, 3200.0, 4800.0, 3800.0, 2900.0, 3500.0];
    MONTHS
        .iter()
        .zip(income.iter().zip(expenses.iter()))
        .map(|(&month, (&income, &expenses))| SeriesPoint { month, income, expenses })
        .collect()
}

/// Roll a fresh random bar series: expenses in 2000..10000, savings in 1000..6000.
pub fn random_bar_data() -> Vec<BarPoint> {
    MONTHS
        .iter()
        .map(|&month| BarPoint {
            month,
            expenses: random_range(2000.0, 10000.0).floor(),
            savings: random_range(1000.0, 6000.0).floor(),
        })
        .collect()
}

fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        rand::random::<f64>()
    }
}

pub(crate) fn random_range(lo: f64, hi: f64) -> f64 {
    lo + random_unit() * (hi - lo)
}

/// Map a series onto SVG polyline coordinates. X spreads points evenly across
/// the width, Y is flipped so larger values sit higher; `max` controls the
/// vertical scale (values above it are clamped to the top edge).
pub fn polyline_points(values: &[f64], width: f64, height: f64, max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = if max > 0.0 { max } else { 1.0 };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = step * i as f64;
            let y = height - (v / max).clamp(0.0, 1.0) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar height as a percentage of the tallest possible bar.
pub fn bar_height_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    ((value / max) * 100.0).clamp(0.0, 100.0)
}

/// Largest value across both series, used as the shared vertical scale.
fn series_max(points: &[SeriesPoint]) -> f64 {
    points
        .iter()
        .flat_map(|p| [p.income, p.expenses])
        .fold(0.0, f64::max)
}

/// Inline-SVG line chart for the fixed income/expenses series.
#[component]
pub fn LineChart(points: Vec<SeriesPoint>) -> Element {
    const WIDTH: f64 = 600.0;
    const HEIGHT: f64 = 240.0;

    let max = series_max(&points);
    let income: Vec<f64> = points.iter().map(|p| p.income).collect();
    let expenses: Vec<f64> = points.iter().map(|p| p.expenses).collect();
    let income_line = polyline_points(&income, WIDTH, HEIGHT, max);
    let expenses_line = polyline_points(&expenses, WIDTH, HEIGHT, max);

    rsx! {
        div {
            class: "line-chart",
            svg {
                view_box: "0 0 600 240",
                preserve_aspect_ratio: "none",
                // horizontal grid lines
                for y in [60, 120, 180] {
                    line {
                        class: "chart-grid",
                        x1: "0",
                        x2: "600",
                        y1: "{y}",
                        y2: "{y}",
                    }
                }
                polyline {
                    class: "chart-line chart-line-income",
                    points: "{income_line}",
                }
                polyline {
                    class: "chart-line chart-line-expenses",
                    points: "{expenses_line}",
                }
            }
            div {
                class: "chart-months",
                for p in points {
                    span { key: "{p.month}", "{p.month}" }
                }
            }
            div {
                class: "chart-legend",
                span { class: "legend-dot legend-income", "" }
                span { "Income" }
                span { class: "legend-dot legend-expenses", "" }
                span { "Expenses" }
            }
        }
    }
}

/// Bar chart that rolls fresh random data every 3 seconds.
#[component]
pub fn AnimatedBarChart() -> Element {
    let mut data = use_signal(random_bar_data);

    use_effect(move || {
        spawn(async move {
            loop {
                sleep_ms(3000).await;
                data.set(random_bar_data());
            }
        });
    });

    // Fixed scale so bars stay comparable across rolls.
    let max = 10000.0;
    let bars: Vec<(&str, f64, f64)> = data()
        .iter()
        .map(|p| {
            (
                p.month,
                bar_height_pct(p.expenses, max),
                bar_height_pct(p.savings, max),
            )
        })
        .collect();

    rsx! {
        div {
            class: "bar-chart",
            div {
                class: "bar-chart-bars",
                for (month, expenses_pct, savings_pct) in bars {
                    div {
                        key: "{month}",
                        class: "bar-group",
                        div {
                            class: "bar-pair",
                            div {
                                class: "bar bar-expenses",
                                style: "height: {expenses_pct:.1}%",
                            }
                            div {
                                class: "bar bar-savings",
                                style: "height: {savings_pct:.1}%",
                            }
                        }
                        span { class: "bar-label", "{month}" }
                    }
                }
            }
            div {
                class: "chart-legend",
                span { class: "legend-dot legend-expenses-bar", "" }
                span { "Expenses" }
                span { class: "legend-dot legend-savings", "" }
                span { "Savings" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_data_is_fixed() {
        let data = statistics_data();
        assert_eq!(data.len(), 6);
        assert_eq!(data[0].month, "Jan");
        assert_eq!(data[0].income, 4000.0);
        assert_eq!(data[5].expenses, 3500.0);
        // Deterministic across calls.
        assert_eq!(data, statistics_data());
    }

    #[test]
    fn test_random_bar_data_in_documented_ranges() {
        for _ in 0..50 {
            for point in random_bar_data() {
                assert!((2000.0..10000.0).contains(&point.expenses), "{}", point.expenses);
                assert!((1000.0..6000.0).contains(&point.savings), "{}", point.savings);
                assert_eq!(point.expenses, point.expenses.floor());
            }
        }
    }

    #[test]
    fn test_polyline_spans_the_viewport() {
        let points = polyline_points(&[0.0, 50.0, 100.0], 600.0, 240.0, 100.0);
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], "0.0,240.0");
        assert_eq!(coords[1], "300.0,120.0");
        assert_eq!(coords[2], "600.0,0.0");
    }

    #[test]
    fn test_polyline_clamps_out_of_scale_values() {
        let points = polyline_points(&[200.0], 600.0, 240.0, 100.0);
        assert_eq!(points, "0.0,0.0");
    }

    #[test]
    fn test_polyline_empty_and_degenerate_scales() {
        assert_eq!(polyline_points(&[], 600.0, 240.0, 100.0), "");
        // A zero max must not divide by zero.
        assert_eq!(polyline_points(&[5.0], 600.0, 240.0, 0.0), "0.0,0.0");
    }

    #[test]
    fn test_bar_height_is_bounded() {
        assert_eq!(bar_height_pct(5000.0, 10000.0), 50.0);
        assert_eq!(bar_height_pct(20000.0, 10000.0), 100.0);
        assert_eq!(bar_height_pct(-5.0, 10000.0), 0.0);
        assert_eq!(bar_height_pct(5.0, 0.0), 0.0);
    }
}

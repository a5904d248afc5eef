//! Market value history chart, drawn as an inline SVG.
//!
//! The markup is rebuilt from scratch on every render: points in, fresh
//! `<svg>` string out, no incremental DOM surgery. Hover state lives
//! outside the SVG in an absolutely positioned tooltip div. Axis math
//! comes from [`crate::scale`]; everything here besides the component
//! itself is a pure string builder and unit-testable.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use dioxus::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::scale::{date_pos, date_ticks, linear_pos, nice_ticks, tick_label};

/// Plot margins inside the SVG, in pixels.
const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 28.0;
const MARGIN_LEFT: f64 = 44.0;
/// Tick targets per axis.
const Y_TICK_COUNT: usize = 5;
const X_TICK_COUNT: usize = 6;
/// Marker radius and hover capture distance, in pixels.
const POINT_RADIUS: f64 = 3.5;
const HIT_RADIUS: f64 = 12.0;
/// Headroom multiplier above the highest valuation.
const DOMAIN_HEADROOM: f64 = 1.1;
/// Width used until the container is first measured.
const DEFAULT_WIDTH: f64 = 560.0;

const CONTAINER_ID: &str = "valuation-chart";

type ResizeListener = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Chart input as handed over by the drawer: ISO date string plus the
/// valuation in millions. Entries that fail to parse are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPoint {
    pub date: String,
    pub value: f64,
}

/// A validated point, ready for projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Parse, validate and sort the raw series. Unparseable dates and
/// non-finite values never reach the projection stage.
pub fn prepare_points(raw: &[RawPoint]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = raw
        .iter()
        .filter_map(|p| {
            let date = NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").ok()?;
            if !p.value.is_finite() {
                return None;
            }
            Some(ChartPoint {
                date,
                value: p.value,
            })
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Upper end of the Y domain before rounding to a tick boundary.
fn y_domain(points: &[ChartPoint]) -> f64 {
    let max = points.iter().fold(0.0f64, |acc, p| acc.max(p.value));
    if max <= 0.0 {
        1.0
    } else {
        max * DOMAIN_HEADROOM
    }
}

fn plot_size(width: f64, height: f64) -> (f64, f64) {
    (
        (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
        (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
    )
}

/// Pixel position of every point in SVG coordinates, dates on X and
/// values on Y with zero at the baseline.
pub fn project_points(
    points: &[ChartPoint],
    width: f64,
    height: f64,
    y_max: f64,
) -> Vec<(f64, f64)> {
    let (plot_w, plot_h) = plot_size(width, height);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let (min_date, max_date) = (first.date, last.date);
    points
        .iter()
        .map(|p| {
            let x = MARGIN_LEFT + date_pos(p.date, min_date, max_date, plot_w);
            let y = MARGIN_TOP + plot_h - linear_pos(p.value, 0.0, y_max, 0.0, plot_h);
            (x, y)
        })
        .collect()
}

/// Index of the nearest projected point within `threshold` pixels of
/// `pos`, if any.
pub fn find_nearest_point(
    projected: &[(f64, f64)],
    pos: (f64, f64),
    threshold: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (x, y)) in projected.iter().enumerate() {
        let dist = ((x - pos.0).powi(2) + (y - pos.1).powi(2)).sqrt();
        if dist <= threshold && best.map(|(_, d)| dist < d).unwrap_or(true) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

// ---------------------------------------------------------------------------
// SVG builders
// ---------------------------------------------------------------------------

fn build_grid(svg: &mut String, ticks: &[f64], y_max: f64, width: f64, height: f64) {
    let (plot_w, plot_h) = plot_size(width, height);
    for tick in ticks {
        let y = MARGIN_TOP + plot_h - linear_pos(*tick, 0.0, y_max, 0.0, plot_h);
        svg.push_str(&format!(
            r#"<line class="grid-line" x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}"/>"#,
            x1 = MARGIN_LEFT,
            x2 = MARGIN_LEFT + plot_w,
        ));
    }
}

fn build_y_labels(svg: &mut String, ticks: &[f64], y_max: f64, width: f64, height: f64) {
    let (_, plot_h) = plot_size(width, height);
    for tick in ticks {
        let y = MARGIN_TOP + plot_h - linear_pos(*tick, 0.0, y_max, 0.0, plot_h);
        svg.push_str(&format!(
            r#"<text class="axis-label" x="{x:.1}" y="{y:.1}" text-anchor="end" dominant-baseline="middle">{label}</text>"#,
            x = MARGIN_LEFT - 8.0,
            label = tick_label(*tick),
        ));
    }
}

fn build_x_labels(svg: &mut String, points: &[ChartPoint], width: f64, height: f64) {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };
    let (plot_w, plot_h) = plot_size(width, height);
    let y = MARGIN_TOP + plot_h + 18.0;
    for tick in date_ticks(first.date, last.date, X_TICK_COUNT) {
        let x = MARGIN_LEFT + date_pos(tick, first.date, last.date, plot_w);
        svg.push_str(&format!(
            r#"<text class="axis-label" x="{x:.1}" y="{y:.1}" text-anchor="middle">{label}</text>"#,
            label = tick.format("%b %y"),
        ));
    }
}

fn build_line(svg: &mut String, projected: &[(f64, f64)]) {
    if projected.len() < 2 {
        return;
    }
    let mut d = String::with_capacity(projected.len() * 16);
    for (i, (x, y)) in projected.iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M{x:.1},{y:.1}"));
        } else {
            d.push_str(&format!("L{x:.1},{y:.1}"));
        }
    }
    svg.push_str(&format!(
        r#"<path class="value-line" d="{d}" fill="none"/>"#
    ));
}

fn build_markers(svg: &mut String, projected: &[(f64, f64)]) {
    for (x, y) in projected {
        svg.push_str(&format!(
            r#"<circle class="value-point" cx="{x:.1}" cy="{y:.1}" r="{POINT_RADIUS}"/>"#
        ));
    }
}

/// Full chart markup. Axes render even for an empty series so the panel
/// keeps its shape while data is missing.
pub fn build_chart_svg(
    points: &[ChartPoint],
    projected: &[(f64, f64)],
    ticks: &[f64],
    y_max: f64,
    width: f64,
    height: f64,
) -> String {
    let (plot_w, plot_h) = plot_size(width, height);
    let baseline = MARGIN_TOP + plot_h;
    let mut svg = String::with_capacity(8192);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
    ));
    build_grid(&mut svg, ticks, y_max, width, height);
    svg.push_str(&format!(
        r#"<line class="axis-line" x1="{x1:.1}" y1="{baseline:.1}" x2="{x2:.1}" y2="{baseline:.1}"/>"#,
        x1 = MARGIN_LEFT,
        x2 = MARGIN_LEFT + plot_w,
    ));
    build_y_labels(&mut svg, ticks, y_max, width, height);
    build_x_labels(&mut svg, points, width, height);
    build_line(&mut svg, projected);
    build_markers(&mut svg, projected);
    svg.push_str("</svg>");
    svg
}

fn chart_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let el = document.get_element_by_id(CONTAINER_ID)?;
    Some(el.get_bounding_client_rect())
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn ValuationChart(points: Vec<RawPoint>, height: f64) -> Element {
    let mut width = use_signal(|| DEFAULT_WIDTH);
    let mut hovered = use_signal(|| None::<usize>);

    // Measure once the container exists.
    use_effect(move || {
        if let Some(rect) = chart_rect() {
            let w = rect.width();
            if w > 0.0 && (w - *width.peek()).abs() > 0.5 {
                width.set(w);
            }
        }
    });

    // Track container width across window resizes.
    let resize_listener: ResizeListener = use_hook(|| Rc::new(RefCell::new(None)));
    use_effect({
        let slot = resize_listener.clone();
        move || {
            if slot.borrow().is_some() {
                return;
            }
            let closure = Closure::wrap(Box::new(move || {
                if let Some(rect) = chart_rect() {
                    let w = rect.width();
                    if w > 0.0 && (w - *width.peek()).abs() > 0.5 {
                        width.set(w);
                    }
                }
            }) as Box<dyn FnMut()>);
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            *slot.borrow_mut() = Some(closure);
        }
    });
    use_drop({
        let slot = resize_listener.clone();
        move || {
            if let Some(closure) = slot.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    });

    let w = *width.read();
    let prepared = prepare_points(&points);
    let (y_max, ticks) = nice_ticks(y_domain(&prepared), Y_TICK_COUNT);
    let projected = project_points(&prepared, w, height, y_max);
    let svg_markup = build_chart_svg(&prepared, &projected, &ticks, y_max, w, height);

    let tooltip = match *hovered.read() {
        Some(i) if i < prepared.len() => {
            let (x, y) = projected[i];
            let value = prepared[i].value;
            let date_label = prepared[i].date.format("%b %Y").to_string();
            let left = x + 14.0;
            let top = y - 12.0;
            rsx! {
                div { class: "chart-tooltip", style: "left: {left}px; top: {top}px;",
                    span { class: "tooltip-value", "\u{20ac}{value:.1}M" }
                    span { class: "tooltip-date", "{date_label}" }
                }
            }
        }
        _ => rsx! {},
    };

    let hover_points = projected.clone();
    rsx! {
        div {
            id: CONTAINER_ID,
            class: "valuation-chart",
            onmousemove: move |evt| {
                let Some(rect) = chart_rect() else { return };
                let coords = evt.client_coordinates();
                let pos = (coords.x - rect.left(), coords.y - rect.top());
                let nearest = find_nearest_point(&hover_points, pos, HIT_RADIUS);
                if *hovered.peek() != nearest {
                    hovered.set(nearest);
                }
            },
            onmouseleave: move |_| hovered.set(None),
            div { class: "chart-svg", dangerous_inner_html: "{svg_markup}" }
            {tooltip}
        }
    }
}

//! SVG visualization of a fit plan.
//!
//! Renders the scale-then-crop transform as a vertical sequence of annotated
//! panels: source → scale → crop → output. Debug/diagnostic surface for
//! inspecting how a focal point placed the crop; not part of the engine.
//!
//! # Example
//!
//! ```
//! use zenfit::{FocalPoint, Size, Viewport, svg::render_fit_svg};
//!
//! let plan = Viewport::new(400, 400)
//!     .fit(Size::new(1000, 500), FocalPoint::UNSET)
//!     .unwrap();
//!
//! let svg = render_fit_svg(&plan);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::fit::{FitPlan, Size};

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 44.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top/bottom margin.
const MARGIN_Y: f64 = 30.0;
/// Height of the label text area above each panel.
const LABEL_H: f64 = 22.0;

/// One panel in the visualization.
struct Panel {
    label: String,
    /// Dimensions the panel represents.
    outer: Size,
    /// Highlighted region within the outer box (the crop).
    highlight: Option<(u32, u32, u32, u32)>,
    /// Annotation text below the panel.
    annotation: String,
}

/// Render a complete SVG document showing a [`FitPlan`] step by step.
pub fn render_fit_svg(plan: &FitPlan) -> String {
    render_panels(&build_panels(plan))
}

fn build_panels(plan: &FitPlan) -> Vec<Panel> {
    let mut panels = vec![Panel {
        label: format!("Source  {}×{}", plan.source.width, plan.source.height),
        outer: plan.source,
        highlight: None,
        annotation: String::new(),
    }];

    if plan.needs_resize() {
        panels.push(Panel {
            label: format!("Scale  {}×{}", plan.scaled.width, plan.scaled.height),
            outer: plan.scaled,
            highlight: None,
            annotation: String::new(),
        });
    }

    if plan.needs_crop() {
        panels.push(Panel {
            label: format!("Crop  {}×{}", plan.crop.width, plan.crop.height),
            outer: plan.scaled,
            highlight: Some((plan.crop.x, plan.crop.y, plan.crop.width, plan.crop.height)),
            annotation: format!("at ({}, {})", plan.crop.x, plan.crop.y),
        });
    }

    let output = plan.output();
    panels.push(Panel {
        label: format!("Output  {}×{}", output.width, output.height),
        outer: output,
        highlight: None,
        annotation: String::new(),
    });

    panels
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width as f64;
    let h = size.height as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel]) -> String {
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = 2.0 * MARGIN_Y
        + panels.len() as f64 * (LABEL_H + MAX_PANEL_H)
        + (panels.len().saturating_sub(1)) as f64 * PANEL_GAP;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_Y;

    for panel in panels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (pw, ph, scale) = scale_to_fit(panel.outer);
        let px = center_x - pw / 2.0;

        svg.push_str(&format!(
            r#"<rect x="{px:.1}" y="{y:.1}" width="{pw:.1}" height="{ph:.1}" class="outer" rx="2"/>"#
        ));
        svg.push('\n');

        if let Some((hx, hy, hw, hh)) = panel.highlight {
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="1"/>"#,
                px + hx as f64 * scale,
                y + hy as f64 * scale,
                hw as f64 * scale,
                hh as f64 * scale
            ));
            svg.push('\n');
        } else {
            svg.push_str(&format!(
                r#"<rect x="{px:.1}" y="{y:.1}" width="{pw:.1}" height="{ph:.1}" class="inner" rx="2"/>"#
            ));
            svg.push('\n');
        }

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                y + ph + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

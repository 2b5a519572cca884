use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use image::{DynamicImage, ImageFormat, RgbaImage};
use indexmap::IndexMap;
use std::fmt::Write as _;
use std::io::Cursor;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;
use usvg::{fontdb, TreeParsing, TreeTextToPath};

use crate::models::CooccurrenceMatrix;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("SVG error: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Failed to allocate {0}x{1} canvas")]
    Canvas(u32, u32),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

const BACKGROUND: [u8; 3] = [255, 255, 255];
const AXIS: [u8; 3] = [60, 60, 60];
const BAR: [u8; 3] = [70, 130, 180];
const HEAT_MAX: [u8; 3] = [178, 24, 43];

const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";
const MAX_FONT_SIZE: f32 = 12.0;
const MAX_LABEL_CHARS: usize = 24;

const PADDING: f32 = 16.0;
/// Room for rotated skill labels below the x axis and row labels left of the heatmap
const LABEL_MARGIN: f32 = 140.0;
/// Room for the count ticks left of the bar chart
const AXIS_MARGIN: f32 = 40.0;

const BAR_PLOT_WIDTH: f32 = 720.0;
const BAR_PLOT_HEIGHT: f32 = 240.0;
const MAX_BAR_SLOT: f32 = 44.0;

const HEATMAP_SIDE: f32 = 600.0;
const MAX_CELL: f32 = 28.0;
const MAX_HEATMAP_CELLS: usize = 120;

/// Bar chart of skill counts as SVG, one labelled bar per entry in iteration order
pub fn skill_bar_chart_svg(counts: &IndexMap<String, usize>) -> String {
    let n = counts.len();
    let slot = if n == 0 {
        0.0
    } else {
        (BAR_PLOT_WIDTH / n as f32).min(MAX_BAR_SLOT)
    };
    let left = PADDING + AXIS_MARGIN;
    let top = PADDING;
    let baseline = top + BAR_PLOT_HEIGHT;
    let plot_width = (slot * n as f32).min(BAR_PLOT_WIDTH);
    let width = left + plot_width + PADDING;
    let height = baseline + LABEL_MARGIN + PADDING;
    let max = counts.values().copied().max().unwrap_or(0).max(1);
    let font_size = font_size_for(slot);

    let mut svg = svg_open(width, height);

    for (i, (skill, &count)) in counts.iter().enumerate() {
        let bar_height = count as f32 / max as f32 * BAR_PLOT_HEIGHT;
        let x = left + i as f32 * slot;
        let _ = write!(
            svg,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" shape-rendering="crispEdges"/>"#,
            x + slot * 0.1,
            baseline - bar_height,
            slot * 0.8,
            bar_height,
            hex(BAR),
        );
        push_rotated_label(&mut svg, x + slot / 2.0, baseline + 8.0, font_size, skill);
    }

    push_line(&mut svg, left, baseline, left + plot_width, baseline);
    push_line(&mut svg, left, top, left, baseline);
    push_text(&mut svg, left - 6.0, baseline, "end", MAX_FONT_SIZE, "0");
    push_text(&mut svg, left - 6.0, top + MAX_FONT_SIZE, "end", MAX_FONT_SIZE, &max.to_string());

    svg.push_str("</svg>");
    svg
}

/// Heatmap of the co-occurrence matrix as SVG; rows and columns follow `matrix.skills`
///
/// The plot side never exceeds `HEATMAP_SIDE`. Past `MAX_HEATMAP_CELLS`
/// skills per side, consecutive skills share a cell holding their maximum.
pub fn cooccurrence_heatmap_svg(matrix: &CooccurrenceMatrix) -> String {
    let n = matrix.len();
    let group = n.div_ceil(MAX_HEATMAP_CELLS).max(1);
    let cells = n.div_ceil(group);
    let cell = if cells == 0 {
        0.0
    } else {
        (HEATMAP_SIDE / cells as f32).min(MAX_CELL)
    };
    let left = PADDING + LABEL_MARGIN;
    let top = PADDING;
    let plot = (cell * cells as f32).min(HEATMAP_SIDE);
    let width = left + plot + PADDING;
    let height = top + plot + LABEL_MARGIN + PADDING;
    let max = matrix.max_count().max(1);
    let font_size = font_size_for(cell);

    if group > 1 {
        debug!(skills = n, cells, "Grouping heatmap cells");
    }

    let mut grouped = vec![vec![0u32; cells]; cells];
    for (i, row) in matrix.matrix.iter().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            let slot = &mut grouped[i / group][j / group];
            *slot = (*slot).max(count);
        }
    }

    let mut svg = svg_open(width, height);

    for (gi, row) in grouped.iter().enumerate() {
        for (gj, &count) in row.iter().enumerate() {
            let _ = write!(
                svg,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" shape-rendering="crispEdges"/>"#,
                left + gj as f32 * cell,
                top + gi as f32 * cell,
                cell,
                cell,
                hex(heat_color(count as f64 / max as f64)),
            );
        }
    }

    for (g, skill) in matrix.skills.iter().step_by(group).enumerate() {
        let center = g as f32 * cell + cell / 2.0;
        push_text(&mut svg, left - 6.0, top + center + font_size * 0.35, "end", font_size, skill);
        push_rotated_label(&mut svg, left + center, top + plot + 8.0, font_size, skill);
    }

    svg.push_str("</svg>");
    svg
}

/// Bar chart of skill counts as PNG
pub fn render_skill_bar_chart(counts: &IndexMap<String, usize>) -> Result<Vec<u8>, ChartError> {
    rasterize(&skill_bar_chart_svg(counts))
}

/// Co-occurrence heatmap as PNG
pub fn render_cooccurrence_heatmap(matrix: &CooccurrenceMatrix) -> Result<Vec<u8>, ChartError> {
    rasterize(&cooccurrence_heatmap_svg(matrix))
}

/// Embed PNG bytes as a `data:` URI for an `<img>` tag
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png))
}

/// Linear blend from white at 0.0 to HEAT_MAX at 1.0
#[inline]
fn heat_color(intensity: f64) -> [u8; 3] {
    let t = intensity.clamp(0.0, 1.0);
    let blend = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
    [
        blend(BACKGROUND[0], HEAT_MAX[0]),
        blend(BACKGROUND[1], HEAT_MAX[1]),
        blend(BACKGROUND[2], HEAT_MAX[2]),
    ]
}

#[inline]
fn hex(color: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

#[inline]
fn font_size_for(slot: f32) -> f32 {
    (slot * 0.8).clamp(1.0, MAX_FONT_SIZE)
}

fn svg_open(width: f32, height: f32) -> String {
    let width = width.ceil();
    let height = height.ceil();
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
}

fn push_line(svg: &mut String, x1: f32, y1: f32, x2: f32, y2: f32) {
    let _ = write!(
        svg,
        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="1"/>"#,
        hex(AXIS),
    );
}

fn push_text(svg: &mut String, x: f32, y: f32, anchor: &str, size: f32, label: &str) {
    let _ = write!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" text-anchor="{anchor}" font-family="{FONT_FAMILY}" font-size="{size:.2}" fill="{}">{}</text>"#,
        hex(AXIS),
        escape_label(label),
    );
}

/// Label hanging down-left from (x, y) at 45 degrees
fn push_rotated_label(svg: &mut String, x: f32, y: f32, size: f32, label: &str) {
    let _ = write!(
        svg,
        r#"<text x="{x:.2}" y="{y:.2}" transform="rotate(-45 {x:.2} {y:.2})" text-anchor="end" font-family="{FONT_FAMILY}" font-size="{size:.2}" fill="{}">{}</text>"#,
        hex(AXIS),
        escape_label(label),
    );
}

/// XML-escape a skill label, truncated to MAX_LABEL_CHARS
fn escape_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len().min(MAX_LABEL_CHARS * 2));
    for (i, c) in label.chars().enumerate() {
        if i == MAX_LABEL_CHARS {
            out.push('…');
            break;
        }
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

fn fonts() -> &'static fontdb::Database {
    static FONTS: OnceLock<fontdb::Database> = OnceLock::new();
    FONTS.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "Loaded chart fonts");
        db
    })
}

/// Render SVG onto a white canvas and encode it as PNG
fn rasterize(svg: &str) -> Result<Vec<u8>, ChartError> {
    let mut tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    tree.convert_text(fonts());

    let width = tree.size.width().ceil() as u32;
    let height = tree.size.height().ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(ChartError::Canvas(width, height))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::Tree::from_usvg(&tree).render(tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // Opaque background, so premultiplied and straight alpha agree
    let img = RgbaImage::from_raw(width, height, pixmap.take()).ok_or(ChartError::Canvas(width, height))?;

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cooccurrence_matrix;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn decode(png: &[u8]) -> image::RgbImage {
        image::load_from_memory(png).unwrap().to_rgb8()
    }

    fn many_skills(n: usize) -> String {
        (0..n).map(|i| format!("skill{}", i)).collect::<Vec<_>>().join(", ")
    }

    #[test]
    fn test_bar_chart_is_png() {
        let mut counts = IndexMap::new();
        counts.insert("excel".to_string(), 3);
        counts.insert("logistics".to_string(), 1);

        let png = render_skill_bar_chart(&counts).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let img = decode(&png);
        assert_eq!(img.width(), (PADDING * 2.0 + AXIS_MARGIN + 2.0 * MAX_BAR_SLOT) as u32);
        assert_eq!(img.height(), (PADDING * 2.0 + BAR_PLOT_HEIGHT + LABEL_MARGIN) as u32);
    }

    #[test]
    fn test_bar_chart_labels_every_skill() {
        let mut counts = IndexMap::new();
        counts.insert("excel".to_string(), 2);
        counts.insert("R&D".to_string(), 1);

        let svg = skill_bar_chart_svg(&counts);
        assert!(svg.contains(">excel</text>"));
        assert!(svg.contains(">R&amp;D</text>"));
        assert!(svg.contains(">2</text>"));
    }

    #[test]
    fn test_tallest_bar_reaches_top() {
        let mut counts = IndexMap::new();
        counts.insert("excel".to_string(), 4);

        let img = decode(&render_skill_bar_chart(&counts).unwrap());
        let x = (PADDING + AXIS_MARGIN + MAX_BAR_SLOT / 2.0) as u32;
        let top = PADDING as u32;

        assert_eq!(img.get_pixel(x, top + 1).0, BAR);
        assert_eq!(img.get_pixel(x, top - 3).0, BACKGROUND);
    }

    #[test]
    fn test_heatmap_labels_both_axes() {
        let matrix = cooccurrence_matrix(["excel, logistics", "marketing"]);
        let svg = cooccurrence_heatmap_svg(&matrix);

        for skill in ["excel", "logistics", "marketing"] {
            // once on the rows, once on the columns
            assert_eq!(svg.matches(&format!(">{}</text>", skill)).count(), 2);
        }
    }

    #[test]
    fn test_heatmap_leaves_room_for_labels() {
        let matrix = cooccurrence_matrix(["a, b", "a"]);
        let img = decode(&render_cooccurrence_heatmap(&matrix).unwrap());

        let plot = 2.0 * MAX_CELL;
        assert_eq!(img.width(), (PADDING * 2.0 + LABEL_MARGIN + plot) as u32);
        assert_eq!(img.height(), (PADDING * 2.0 + LABEL_MARGIN + plot) as u32);
    }

    #[test]
    fn test_heatmap_colors() {
        let matrix = cooccurrence_matrix(["a, b", "a"]);
        let img = decode(&render_cooccurrence_heatmap(&matrix).unwrap());

        let left = (PADDING + LABEL_MARGIN + MAX_CELL / 2.0) as u32;
        let top = (PADDING + MAX_CELL / 2.0) as u32;
        let cell = MAX_CELL as u32;

        // (a, a) holds the maximum, 2
        assert_eq!(img.get_pixel(left, top).0, HEAT_MAX);
        // (b, b) holds 1, half way
        let half = img.get_pixel(left + cell, top + cell).0;
        assert!(half[1] > HEAT_MAX[1] && half[1] < BACKGROUND[1]);
    }

    #[test]
    fn test_heatmap_canvas_is_bounded() {
        let skills = many_skills(500);
        let matrix = cooccurrence_matrix([skills.as_str()]);
        assert_eq!(matrix.len(), 500);

        let svg = cooccurrence_heatmap_svg(&matrix);
        assert!(svg.matches("<rect").count() <= MAX_HEATMAP_CELLS * MAX_HEATMAP_CELLS);

        let img = decode(&render_cooccurrence_heatmap(&matrix).unwrap());
        let bound = (PADDING * 2.0 + LABEL_MARGIN + HEATMAP_SIDE) as u32;
        assert!(img.width() <= bound);
        assert!(img.height() <= bound);
    }

    #[test]
    fn test_bar_chart_canvas_is_bounded() {
        let counts: IndexMap<String, usize> = (0..1000).map(|i| (format!("skill{}", i), i + 1)).collect();

        let img = decode(&render_skill_bar_chart(&counts).unwrap());
        assert!(img.width() <= (PADDING * 2.0 + AXIS_MARGIN + BAR_PLOT_WIDTH).ceil() as u32);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let long = "x".repeat(200);
        assert_eq!(escape_label(&long).chars().count(), MAX_LABEL_CHARS + 1);
        assert_eq!(escape_label("a<b"), "a&lt;b");
    }

    #[test]
    fn test_empty_inputs_still_encode() {
        assert!(render_skill_bar_chart(&IndexMap::new()).is_ok());
        assert!(render_cooccurrence_heatmap(&CooccurrenceMatrix::default()).is_ok());
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(png_data_uri(b"abc"), "data:image/png;base64,YWJj");
    }
}

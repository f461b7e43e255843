//! Pie charts of transaction counts.
//!
//! Records are grouped by the value of one field, then drawn with plotters into an SVG document
//! which resvg rasterizes into a PNG.

use super::ChartError;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::Pie;
use plotters::prelude::*;
use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};
use serde_json::{Map, Value};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

const DEFAULT_SIZE: (u32, u32) = (800, 600);
const TITLE_BAND: i32 = 48;
const SANS_SERIF_CANDIDATES: [&str; 4] = ["DejaVu Sans", "Liberation Sans", "Noto Sans", "Arial"];

const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
}

impl Slice {
    pub fn percentage(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count as f64 * 100.0 / total as f64
    }
}

/// Counts records per distinct value of `field`, largest count first. Ties keep the order in
/// which the values first appear. Records without the field, or with `null`, are skipped.
pub fn count_by_field(records: &[Map<String, Value>], field: &str) -> Vec<Slice> {
    let mut slices: Vec<Slice> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for label in records
        .iter()
        .filter_map(|record| record.get(field))
        .filter_map(slice_label)
    {
        match positions.entry(label) {
            Entry::Occupied(e) => slices[*e.get()].count += 1,
            Entry::Vacant(e) => {
                slices.push(Slice {
                    label: e.key().clone(),
                    count: 1,
                });
                e.insert(slices.len() - 1);
            }
        }
    }

    // stable sort
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

fn slice_label(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub struct PieChartRenderer {
    fontdb: Arc<fontdb::Database>,
    size: (u32, u32),
}

impl PieChartRenderer {
    /// Loads the system fonts once; every render shares them.
    pub fn new() -> PieChartRenderer {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        let available = SANS_SERIF_CANDIDATES.into_iter().find(|candidate| {
            fontdb
                .faces()
                .any(|face| face.families.iter().any(|(family, _)| family.as_str() == *candidate))
        });
        if let Some(family) = available {
            fontdb.set_sans_serif_family(family);
        } else {
            warn!("No known sans-serif font found, chart labels may be missing");
        }

        PieChartRenderer {
            fontdb: Arc::new(fontdb),
            size: DEFAULT_SIZE,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> PieChartRenderer {
        self.size = (width, height);
        self
    }

    /// Renders a PNG pie chart of `records` grouped by `field`, titled with the field name.
    pub fn render(
        &self,
        records: &[Map<String, Value>],
        field: &str,
    ) -> Result<Vec<u8>, ChartError> {
        if records.is_empty() {
            return Err(ChartError::NoRecords);
        }
        let slices = count_by_field(records, field);
        if slices.is_empty() {
            return Err(ChartError::MissingField(field.to_owned()));
        }
        debug!(field, slices = slices.len(), "Rendering pie chart");

        let svg = draw_svg(&slices, field, self.size)?;
        self.rasterize(&svg)
    }

    fn rasterize(&self, svg: &str) -> Result<Vec<u8>, ChartError> {
        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_str(svg, &options)
            .map_err(|e| ChartError::Rasterize(e.to_string()))?;
        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or_else(|| ChartError::Rasterize("Chart has an empty size".to_owned()))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| ChartError::Rasterize(e.to_string()))
    }
}

impl Default for PieChartRenderer {
    fn default() -> Self {
        PieChartRenderer::new()
    }
}

fn draw_svg(slices: &[Slice], title: &str, size: (u32, u32)) -> Result<String, ChartError> {
    let sizes: Vec<f64> = slices.iter().map(|s| s.count as f64).collect();
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| PALETTE[i % PALETTE.len()])
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;
        root.titled(title, ("sans-serif", 32).into_font().color(&BLACK))
            .map_err(draw_error)?;

        // the pie is positioned in backend pixels, below the title band
        let (width, height) = root.dim_in_pixel();
        let center = ((width / 2) as i32, (height / 2) as i32 + TITLE_BAND / 2);
        let radius = f64::from(width.min(height).saturating_sub(TITLE_BAND as u32)) * 0.38;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
        pie.percentages(("sans-serif", radius * 0.09).into_font().color(&WHITE));
        root.draw(&pie).map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}

fn draw_error<E: std::error::Error + Send + Sync>(error: DrawingAreaErrorKind<E>) -> ChartError {
    ChartError::Draw(error.to_string())
}

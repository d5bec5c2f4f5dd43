//! Canvas rendering onto plotters drawing backends

use crate::canvas::{Bounds, Canvas};
use gdraw_common::{Result, Rgb};
use gdraw_config::StyleConfig;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Renders a [`Canvas`] with a given style and resolution.
///
/// Axes are hidden and both axes share one scale, so a circle in data space
/// stays a circle on the image.
pub struct CanvasRenderer<'a> {
    style: &'a StyleConfig,
    dpi: u32,
}

impl<'a> CanvasRenderer<'a> {
    /// Creates a renderer for the given style at `dpi`.
    pub const fn new(style: &'a StyleConfig, dpi: u32) -> Self {
        Self { style, dpi }
    }

    /// Marker radius in pixels.
    #[allow(clippy::cast_possible_truncation)]
    pub fn marker_radius(&self) -> i32 {
        self.style.marker_radius_pixels(self.dpi).round().max(1.0) as i32
    }

    /// Edge stroke width in pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stroke_width(&self) -> u32 {
        self.style.line_pixels(self.dpi).round().max(1.0) as u32
    }

    /// Label font size in pixels.
    pub fn font_size(&self) -> f64 {
        self.style.font_pixels(self.dpi)
    }

    /// Pixel margin kept free around the plotting area so markers and labels
    /// at the edge of the view are not cut off.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn margin(&self, (width, height): (u32, u32)) -> i32 {
        let wanted = (f64::from(self.marker_radius()) + self.font_size() / 2.0).ceil() as i32;
        let limit = (width.min(height) / 4) as i32;
        wanted.min(limit).max(0)
    }

    /// Data-space window shown on an area of `size` pixels.
    #[allow(clippy::cast_sign_loss)]
    pub fn view(&self, canvas: &Canvas, size: (u32, u32)) -> Bounds {
        let margin = self.margin(size) as u32;
        canvas.bounds().padded(self.style.padding).equal_aspect(
            size.0.saturating_sub(2 * margin),
            size.1.saturating_sub(2 * margin),
        )
    }

    /// Draws `canvas` onto `root` and flushes the backend.
    ///
    /// `background` of `None` leaves the backend's initial pixels untouched.
    pub fn render<DB>(
        &self,
        canvas: &Canvas,
        root: &DrawingArea<DB, Shift>,
        background: Option<Rgb>,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        if let Some(color) = background {
            root.fill(&to_rgb(color))?;
        }

        let size = root.dim_in_pixel();
        let view = self.view(canvas, size);

        let mut chart = ChartBuilder::on(root)
            .margin(self.margin(size))
            .build_cartesian_2d(view.x_range(), view.y_range())?;

        let edge_style = to_rgb(self.style.edge_color).stroke_width(self.stroke_width());
        chart.draw_series(canvas.segments().iter().map(|segment| {
            PathElement::new(
                vec![(segment.from.x, segment.from.y), (segment.to.x, segment.to.y)],
                edge_style,
            )
        }))?;

        let radius = self.marker_radius();
        chart.draw_series(canvas.markers().iter().map(|marker| {
            let color = marker.color.unwrap_or(self.style.vertex_color);
            Circle::new((marker.at.x, marker.at.y), radius, to_rgb(color).filled())
        }))?;

        let text_style = (self.style.font_family.as_str(), self.font_size())
            .into_font()
            .color(&to_rgb(self.style.label_color))
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(
            canvas
                .labels()
                .iter()
                .map(|label| Text::new(label.text.clone(), (label.at.x, label.at.y), text_style.clone())),
        )?;

        root.present()?;

        tracing::debug!(
            "Rendered {} segments, {} markers, {} labels on {}x{} px",
            canvas.segments().len(),
            canvas.markers().len(),
            canvas.labels().len(),
            size.0,
            size.1
        );
        Ok(())
    }
}

/// Converts a configured colour to a plotters colour.
pub const fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use gdraw_common::test_utils::{assert_approx_eq, count_svg_elements};

    fn render_svg(canvas: &Canvas, style: &StyleConfig, background: Option<Rgb>) -> String {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, (300, 300)).into_drawing_area();
            CanvasRenderer::new(style, 72)
                .render(canvas, &root, background)
                .unwrap();
        }
        buffer
    }

    #[test]
    fn test_pixel_sizes() {
        let style = StyleConfig::default();
        let renderer = CanvasRenderer::new(&style, 72);

        // 20pt diameter at 72 dpi
        assert_eq!(renderer.marker_radius(), 10);
        assert_eq!(renderer.stroke_width(), 2);
        assert_approx_eq(renderer.font_size(), 25.0, 1e-9);
        assert_eq!(renderer.margin((600, 600)), 23);
        // Never more than a quarter of the short side
        assert_eq!(renderer.margin((40, 400)), 10);
    }

    #[test]
    fn test_view_keeps_equal_aspect() {
        let style = StyleConfig::default();
        let renderer = CanvasRenderer::new(&style, 72);
        let graph = Graph::from_parts([(1, (0.0, 0.0)), (2, (4.0, 1.0))], vec![(1, 2)]);
        let canvas = Canvas::from_graph(&graph).unwrap();

        let view = renderer.view(&canvas, (400, 200));
        let margin = f64::from(renderer.margin((400, 200)));
        let x_scale = (400.0 - 2.0 * margin) / view.width();
        let y_scale = (200.0 - 2.0 * margin) / view.height();

        assert_approx_eq(x_scale, y_scale, 1e-9);
        assert!(view.x_min <= 0.0 && view.x_max >= 4.0);
        assert!(view.y_min <= 0.0 && view.y_max >= 1.0);
    }

    #[test]
    fn test_render_primitives_to_svg() {
        let style = StyleConfig::default();
        let graph = Graph::from_parts(
            [(1, (0.0, 0.0)), (2, (1.0, 1.0)), (3, (2.0, 0.0))],
            vec![(1, 2), (2, 3)],
        )
        .with_label_positions([(1, (0.0, 0.2))]);
        let canvas = Canvas::from_graph(&graph).unwrap();

        let svg = render_svg(&canvas, &style, None);

        assert_eq!(count_svg_elements(&svg, "circle"), 3);
        assert_eq!(count_svg_elements(&svg, "polyline"), 2);
        assert_eq!(count_svg_elements(&svg, "text"), 1);
        assert!(svg.contains("1</text>"));
    }

    #[test]
    fn test_background() {
        let style = StyleConfig::default();
        let canvas = Canvas::new();

        let transparent = render_svg(&canvas, &style, None);
        assert_eq!(count_svg_elements(&transparent, "rect"), 0);

        let filled = render_svg(&canvas, &style, Some(Rgb(250, 250, 250)));
        assert_eq!(count_svg_elements(&filled, "rect"), 1);
        assert!(filled.contains("#FAFAFA"));
    }

    #[test]
    fn test_node_color_override() {
        let style = StyleConfig::default();
        let mut graph = Graph::from_parts([(1, (0.0, 0.0)), (2, (1.0, 0.0))], Vec::new());
        graph.node_colors.insert(2, Rgb(255, 0, 0));
        let canvas = Canvas::from_graph(&graph).unwrap();

        let svg = render_svg(&canvas, &style, None);
        assert!(svg.contains("#FF0000"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(to_rgb(Rgb(31, 119, 180)), RGBColor(31, 119, 180));
    }
}

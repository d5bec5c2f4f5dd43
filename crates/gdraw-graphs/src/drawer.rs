//! The graph drawer: owns a canvas, draws graphs onto it, exports it.

use crate::canvas::Canvas;
use crate::format::ImageFormat;
use crate::graph::Graph;
use crate::renderer::CanvasRenderer;
use gdraw_common::{GDrawError, Result, Rgb};
use gdraw_config::{DrawerConfig, FigSize, MAX_DPI};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Draws graphs onto a canvas of fixed size and saves it to image files.
///
/// Drawing only records primitives; each save renders them through a fresh
/// backend that is released before the call returns. Saving before any draw
/// produces a blank image.
#[derive(Debug, Clone)]
pub struct GraphDrawer {
    config: DrawerConfig,
    canvas: Canvas,
}

impl GraphDrawer {
    /// Creates a drawer with the default style and the given canvas size in inches.
    pub fn new(fig_size: impl Into<FigSize>) -> Self {
        Self {
            config: DrawerConfig::with_fig_size(fig_size),
            canvas: Canvas::new(),
        }
    }

    /// Creates a drawer from a full configuration, validating it first.
    pub fn with_config(config: DrawerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            canvas: Canvas::new(),
        })
    }

    /// Canvas size in inches.
    pub const fn fig_size(&self) -> FigSize {
        self.config.fig_size
    }

    /// Active configuration.
    pub const fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Primitives drawn so far.
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Canvas size in pixels at the configured resolution.
    pub fn pixel_size(&self) -> (u32, u32) {
        self.config.pixels()
    }

    /// Draws `graph` on top of whatever is already on the canvas.
    ///
    /// Fails without touching the canvas when an edge, label, or node colour
    /// refers to a vertex the graph does not define.
    pub fn draw(&mut self, graph: &Graph) -> Result<&mut Self> {
        self.draw_all(&[graph])
    }

    /// Draws several graphs onto the canvas; all or nothing.
    pub fn draw_all(&mut self, graphs: &[&Graph]) -> Result<&mut Self> {
        let mut drawn = Canvas::new();

        for graph in graphs {
            if graph.edges.is_empty() {
                tracing::warn!("Graph with {} vertices has no edges", graph.vertex_count());
            }
            if graph.label_positions.is_empty() {
                tracing::debug!("Graph has no label positions, drawing without vertex labels");
            }

            drawn.append(Canvas::from_graph(graph)?);
        }

        tracing::debug!(
            "Drew {} markers and {} segments",
            drawn.markers().len(),
            drawn.segments().len()
        );
        self.canvas.append(drawn);
        Ok(self)
    }

    /// Removes everything drawn so far.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Saves the canvas, choosing the format from the extension of `file_name`.
    ///
    /// A name without an extension is written as both SVG and PNG. Returns the
    /// paths written.
    pub fn save(&self, file_name: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.save_with_dpi(file_name, self.config.dpi)
    }

    /// Like [`GraphDrawer::save`], at an explicit resolution.
    pub fn save_with_dpi(&self, file_name: impl AsRef<Path>, dpi: u32) -> Result<Vec<PathBuf>> {
        if dpi == 0 || dpi > MAX_DPI {
            return Err(GDrawError::validation_field(
                format!("dpi must be between 1 and {MAX_DPI}, got {dpi}"),
                "dpi",
            ));
        }

        let targets = ImageFormat::targets(file_name.as_ref())?;
        let mut written = Vec::with_capacity(targets.len());

        for (path, format) in targets {
            self.render_to_file(&path, format, dpi)?;
            tracing::info!("Saved {} graph to {}", format, path.display());
            written.push(path);
        }

        Ok(written)
    }

    /// Renders the canvas as an SVG document.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.pixel_size()).into_drawing_area();
            self.renderer(self.config.dpi)
                .render(&self.canvas, &root, self.config.style.background)?;
        }
        Ok(buffer)
    }

    fn renderer(&self, dpi: u32) -> CanvasRenderer<'_> {
        CanvasRenderer::new(&self.config.style, dpi)
    }

    fn render_to_file(&self, path: &Path, format: ImageFormat, dpi: u32) -> Result<()> {
        let size = self.config.fig_size.pixels(dpi);
        let renderer = self.renderer(dpi);

        if format.is_bitmap() {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            let background = self.config.style.background.unwrap_or(Rgb::WHITE);
            renderer.render(&self.canvas, &root, Some(background))
        } else {
            let root = SVGBackend::new(path, size).into_drawing_area();
            renderer.render(&self.canvas, &root, self.config.style.background)
        }
    }
}

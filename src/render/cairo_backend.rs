use std::f64::consts::TAU;
use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartElement, Color, CommandBatch, Orientation, Renderer, RetainedScene, TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub marks_drawn: usize,
    pub connectors_drawn: usize,
    pub bars_drawn: usize,
    pub labels_drawn: usize,
    pub gridlines_drawn: usize,
}

/// Cairo + Pango raster backend.
///
/// The backend keeps the live element set in a `RetainedScene` and repaints
/// the whole surface after every batch. Chart space (Y up) is flipped into
/// device space (Y down); `margin_px` leaves room for axis labels drawn at
/// negative chart coordinates.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    viewport: Viewport,
    margin_px: f64,
    background: Color,
    scene: RetainedScene,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(viewport: Viewport, margin_px: f64) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        if !margin_px.is_finite() || margin_px < 0.0 {
            return Err(ChartError::InvalidData(
                "cairo margin must be finite and >= 0".to_owned(),
            ));
        }

        let width = device_extent(viewport.width, margin_px)?;
        let height = device_extent(viewport.height, margin_px)?;
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            viewport,
            margin_px,
            background: Color::rgb(0.17, 0.17, 0.2),
            scene: RetainedScene::new(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn scene(&self) -> &RetainedScene {
        &self.scene
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&mut self, out: &mut impl Write) -> ChartResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }

    fn to_device(&self, point: Point) -> (f64, f64) {
        (
            self.margin_px + point.x,
            self.margin_px + self.viewport.height - point.y,
        )
    }

    fn repaint(&mut self) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, self.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for (_, element) in self.scene.iter() {
            match element {
                ChartElement::Gridline(gridline) => {
                    let end = match gridline.orientation {
                        Orientation::Vertical => Point::new(
                            gridline.position.x,
                            gridline.position.y + gridline.length,
                        ),
                        Orientation::Horizontal => Point::new(
                            gridline.position.x + gridline.length,
                            gridline.position.y,
                        ),
                    };
                    self.stroke_segment(&context, gridline.position, end, 1.0, gridline.color)?;
                    stats.gridlines_drawn += 1;
                }
                ChartElement::Connector(connector) => {
                    self.stroke_segment(
                        &context,
                        connector.from,
                        connector.to,
                        connector.thickness,
                        connector.color,
                    )?;
                    stats.connectors_drawn += 1;
                }
                ChartElement::PointMark(mark) => {
                    let (x, y) = self.to_device(mark.center);
                    let radius = mark.size.width.min(mark.size.height) * 0.5;
                    context.new_sub_path();
                    context.arc(x, y, radius, 0.0, TAU);
                    apply_color(&context, mark.color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill point mark", err))?;
                    stats.marks_drawn += 1;
                }
                ChartElement::Bar(bar) => {
                    let (left, top) =
                        self.to_device(Point::new(bar.base_x - bar.width * 0.5, bar.height));
                    context.rectangle(left, top, bar.width, bar.height);
                    apply_color(&context, bar.color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill bar", err))?;
                    stats.bars_drawn += 1;
                }
                ChartElement::Label(label) => {
                    let layout = pangocairo::functions::create_layout(&context);
                    let font_description =
                        FontDescription::from_string(&format!("Sans {}", label.font_size_px));
                    layout.set_font_description(Some(&font_description));
                    layout.set_text(&label.text);

                    let (text_width, text_height) = layout.pixel_size();
                    let (anchor_x, anchor_y) = self.to_device(label.position);
                    let x = match label.h_align {
                        TextHAlign::Left => anchor_x,
                        TextHAlign::Center => anchor_x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => anchor_x - f64::from(text_width),
                    };

                    apply_color(&context, label.color);
                    context.move_to(x, anchor_y - f64::from(text_height) / 2.0);
                    pangocairo::functions::show_layout(&context, &layout);
                    stats.labels_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    fn stroke_segment(
        &self,
        context: &Context,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    ) -> ChartResult<()> {
        let (x1, y1) = self.to_device(from);
        let (x2, y2) = self.to_device(to);
        apply_color(context, color);
        context.set_line_width(width);
        context.move_to(x1, y1);
        context.line_to(x2, y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))
    }
}

impl Renderer for CairoRenderer {
    fn apply(&mut self, batch: &CommandBatch) -> ChartResult<()> {
        self.scene.apply(batch)?;
        self.repaint()
    }
}

fn device_extent(extent: f64, margin_px: f64) -> ChartResult<i32> {
    let total = (extent + margin_px * 2.0).ceil();
    if total > f64::from(i32::MAX) {
        return Err(ChartError::InvalidData(
            "cairo surface size overflows i32".to_owned(),
        ));
    }
    Ok(total as i32)
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}

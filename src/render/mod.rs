mod command;
mod element;
mod frame;
mod null_renderer;
mod retained_scene;

pub use command::{CommandBatch, RenderCommand};
pub use element::{
    Axis, Bar, ChartElement, Color, Connector, ElementId, ElementKind, Gridline, Label,
    Orientation, PointMark, TextHAlign,
};
pub use frame::ChartFrame;
pub use null_renderer::NullRenderer;
pub use retained_scene::RetainedScene;

use crate::error::ChartResult;

/// Contract implemented by any display backend.
///
/// Backends receive one batch per render pass. Every destroy in a batch
/// precedes every create, so a backend never holds elements of two passes at
/// once.
pub trait Renderer {
    fn apply(&mut self, batch: &CommandBatch) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};

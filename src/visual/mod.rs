//! Pluggable visual styles turning one sample position into drawable marks.

mod bar_style;
mod line_style;

pub use bar_style::{BarStyle, BarStyleConfig};
pub use line_style::{LineStyle, LineStyleConfig, connector_angle_degrees};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::ChartResult;
use crate::render::ChartElement;

/// Marks emitted for one sample. No style emits more than two.
pub type MarkBatch = SmallVec<[ChartElement; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualStyleKind {
    Line,
    Bar,
}

/// Capability shared by every visual style.
///
/// A style may keep state between `emit_marks` calls of the same pass. The
/// engine calls `begin_pass` before the first sample of every pass, so a
/// style instance carries nothing from one pass into the next. One instance
/// must not be driven by two passes at the same time.
pub trait VisualStyle {
    fn kind(&self) -> VisualStyleKind;

    fn begin_pass(&mut self);

    fn emit_marks(&mut self, position: Point, slot_width: f64) -> MarkBatch;
}

/// Serializable style selection for hosts that pick styles from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisualStyleConfig {
    Line(LineStyleConfig),
    Bar(BarStyleConfig),
}

impl VisualStyleConfig {
    #[must_use]
    pub fn kind(self) -> VisualStyleKind {
        match self {
            Self::Line(_) => VisualStyleKind::Line,
            Self::Bar(_) => VisualStyleKind::Bar,
        }
    }

    pub fn build(self) -> ChartResult<Box<dyn VisualStyle>> {
        Ok(match self {
            Self::Line(config) => Box::new(LineStyle::new(config)?),
            Self::Bar(config) => Box::new(BarStyle::new(config)?),
        })
    }
}

impl Default for VisualStyleConfig {
    fn default() -> Self {
        Self::Line(LineStyleConfig::default())
    }
}

use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::{Bar, ChartElement, Color};

use super::{MarkBatch, VisualStyle, VisualStyleKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyleConfig {
    pub bar_color: Color,
    /// Share of the slot width covered by a bar, in `(0, 1]`.
    pub bar_width_multiplier: f64,
}

impl Default for BarStyleConfig {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb(0.32, 0.6, 0.86),
            bar_width_multiplier: 0.9,
        }
    }
}

impl BarStyleConfig {
    pub fn validate(self) -> ChartResult<Self> {
        self.bar_color.validate()?;
        if !self.bar_width_multiplier.is_finite()
            || self.bar_width_multiplier <= 0.0
            || self.bar_width_multiplier > 1.0
        {
            return Err(ChartError::InvalidData(
                "bar width multiplier must be in (0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Vertical bars rising from the bottom edge. Stateless.
#[derive(Debug, Clone, Default)]
pub struct BarStyle {
    config: BarStyleConfig,
}

impl BarStyle {
    pub fn new(config: BarStyleConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> BarStyleConfig {
        self.config
    }
}

impl VisualStyle for BarStyle {
    fn kind(&self) -> VisualStyleKind {
        VisualStyleKind::Bar
    }

    fn begin_pass(&mut self) {}

    fn emit_marks(&mut self, position: Point, slot_width: f64) -> MarkBatch {
        smallvec![ChartElement::Bar(Bar {
            base_x: position.x,
            height: position.y,
            width: slot_width * self.config.bar_width_multiplier,
            color: self.config.bar_color,
        })]
    }
}

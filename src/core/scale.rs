use serde::{Deserialize, Serialize};

use crate::core::{Point, Viewport, VisibleWindow, samples_in_window};
use crate::error::{ChartError, ChartResult};

/// Tuning controls for value-range autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRangeTuning {
    /// Fraction of the raw span added above the maximum and below the minimum.
    pub padding_ratio: f64,
    /// Span substituted when the raw span is zero or negative.
    pub fallback_span: f64,
    /// When set, scanning starts from `0.0` so the range always contains zero.
    pub anchor_zero: bool,
}

impl Default for ValueRangeTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.2,
            fallback_span: 5.0,
            anchor_zero: true,
        }
    }
}

impl ValueRangeTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "value range padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.fallback_span.is_finite() || self.fallback_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "value range fallback span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Padded value domain shown on the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub minimum: f64,
    pub maximum: f64,
}

impl ValueRange {
    /// Computes the padded range of the samples inside `window`.
    ///
    /// The minimum is padded with the span measured against the already padded
    /// maximum, so the lower padding is slightly larger than the upper one.
    pub fn from_window(
        samples: &[f64],
        window: VisibleWindow,
        tuning: ValueRangeTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        let visible = samples_in_window(samples, window);
        if visible.is_empty() {
            return Err(ChartError::EmptySamples);
        }
        if visible.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "samples must be finite".to_owned(),
            ));
        }

        let (mut minimum, mut maximum) = if tuning.anchor_zero {
            (0.0, 0.0)
        } else {
            (visible[0], visible[0])
        };
        for &value in visible {
            maximum = maximum.max(value);
            minimum = minimum.min(value);
        }

        let mut diff = maximum - minimum;
        if diff <= 0.0 {
            diff = tuning.fallback_span;
        }

        maximum += diff * tuning.padding_ratio;
        minimum -= (maximum - minimum) * tuning.padding_ratio;

        Ok(Self { minimum, maximum })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.maximum - self.minimum
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }

    /// Value at `normalized` (0 = bottom, 1 = top) of the range.
    #[must_use]
    pub fn value_at(self, normalized: f64) -> f64 {
        self.minimum + normalized * self.span()
    }
}

/// Horizontal distance allocated to one sample slot.
#[must_use]
pub fn slot_width(viewport_width: f64, window_size: usize) -> f64 {
    viewport_width / (window_size as f64 + 1.0)
}

/// X pixel of the `offset`-th sample inside the visible window.
#[must_use]
pub fn map_index_to_x(offset: usize, slot_width: f64) -> f64 {
    slot_width * (offset as f64 + 1.0)
}

/// Y pixel of `value`, measured upward from the bottom edge.
#[must_use]
pub fn map_value_to_y(value: f64, range: ValueRange, viewport_height: f64) -> f64 {
    (value - range.minimum) / range.span() * viewport_height
}

/// Resolved value-to-pixel mapping for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScale {
    pub viewport: Viewport,
    pub window: VisibleWindow,
    pub range: ValueRange,
    pub slot_width: f64,
}

impl ChartScale {
    pub fn fit(
        samples: &[f64],
        viewport: Viewport,
        window: VisibleWindow,
        tuning: ValueRangeTuning,
    ) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let range = ValueRange::from_window(samples, window, tuning)?;
        Ok(Self {
            viewport,
            window,
            range,
            slot_width: slot_width(viewport.width, window.size),
        })
    }

    /// Pixel position of the sample at absolute `index`.
    #[must_use]
    pub fn position(self, index: usize, value: f64) -> Point {
        Point::new(
            map_index_to_x(self.window.offset_of(index), self.slot_width),
            map_value_to_y(value, self.range, self.viewport.height),
        )
    }
}

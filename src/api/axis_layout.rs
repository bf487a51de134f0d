use serde::{Deserialize, Serialize};

use crate::core::{ChartScale, Point, Viewport, map_index_to_x};
use crate::error::{ChartError, ChartResult};
use crate::render::{Axis, ChartElement, ChartFrame, Color, Gridline, Label, Orientation, TextHAlign};

use super::LabelFormatters;

/// Placement of axis labels and gridlines around the plot area.
///
/// Offsets are in chart units relative to the axis they belong to; negative
/// values place guides below the X axis or left of the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub x_label_offset: f64,
    pub x_grid_offset: f64,
    pub y_label_offset: f64,
    pub y_grid_offset: f64,
    /// Y axis gets `y_subdivisions + 1` labels.
    pub y_subdivisions: u32,
    pub label_font_size_px: f64,
    pub label_color: Color,
    pub gridline_color: Color,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            x_label_offset: -7.0,
            x_grid_offset: -3.0,
            y_label_offset: -7.0,
            y_grid_offset: -4.0,
            y_subdivisions: 10,
            label_font_size_px: 11.0,
            label_color: Color::WHITE,
            gridline_color: Color::rgba(1.0, 1.0, 1.0, 0.25),
        }
    }
}

impl AxisLayout {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("x_label_offset", self.x_label_offset),
            ("x_grid_offset", self.x_grid_offset),
            ("y_label_offset", self.y_label_offset),
            ("y_grid_offset", self.y_grid_offset),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "axis layout `{name}` must be finite"
                )));
            }
        }
        if self.y_subdivisions == 0 {
            return Err(ChartError::InvalidData(
                "axis layout needs at least one y subdivision".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis label font size must be finite and > 0".to_owned(),
            ));
        }
        self.label_color.validate()?;
        self.gridline_color.validate()?;
        Ok(self)
    }

    /// Validates the layout and checks that gridlines keep a positive length
    /// inside `viewport`.
    pub fn validate_for(self, viewport: Viewport) -> ChartResult<Self> {
        let layout = self.validate()?;
        if layout.x_grid_offset >= viewport.height {
            return Err(ChartError::InvalidData(format!(
                "axis layout `x_grid_offset` ({}) must be below viewport height ({})",
                layout.x_grid_offset, viewport.height
            )));
        }
        if layout.y_grid_offset >= viewport.width {
            return Err(ChartError::InvalidData(format!(
                "axis layout `y_grid_offset` ({}) must be below viewport width ({})",
                layout.y_grid_offset, viewport.width
            )));
        }
        Ok(layout)
    }

    /// Number of labels placed on the Y axis.
    #[must_use]
    pub fn y_label_count(self) -> usize {
        self.y_subdivisions as usize + 1
    }
}

/// Appends the X label and vertical gridline of the sample at absolute `index`.
pub(super) fn append_x_axis_guides(
    frame: &mut ChartFrame,
    scale: ChartScale,
    index: usize,
    layout: AxisLayout,
    formatters: &LabelFormatters,
) {
    let x = map_index_to_x(scale.window.offset_of(index), scale.slot_width);
    frame.push(ChartElement::Label(Label {
        axis: Axis::X,
        text: formatters.format_x(index),
        position: Point::new(x, layout.x_label_offset),
        h_align: TextHAlign::Center,
        font_size_px: layout.label_font_size_px,
        color: layout.label_color,
    }));
    frame.push(ChartElement::Gridline(Gridline {
        position: Point::new(x, layout.x_grid_offset),
        orientation: Orientation::Vertical,
        length: scale.viewport.height - layout.x_grid_offset,
        color: layout.gridline_color,
    }));
}

/// Appends the Y labels and horizontal gridlines at fixed subdivisions.
pub(super) fn append_y_axis_guides(
    frame: &mut ChartFrame,
    scale: ChartScale,
    layout: AxisLayout,
    formatters: &LabelFormatters,
) {
    let subdivisions = f64::from(layout.y_subdivisions);
    for step in 0..=layout.y_subdivisions {
        let normalized = f64::from(step) / subdivisions;
        let y = normalized * scale.viewport.height;
        frame.push(ChartElement::Label(Label {
            axis: Axis::Y,
            text: formatters.format_y(scale.range.value_at(normalized)),
            position: Point::new(layout.y_label_offset, y),
            h_align: TextHAlign::Right,
            font_size_px: layout.label_font_size_px,
            color: layout.label_color,
        }));
        frame.push(ChartElement::Gridline(Gridline {
            position: Point::new(layout.y_grid_offset, y),
            orientation: Orientation::Horizontal,
            length: scale.viewport.width - layout.y_grid_offset,
            color: layout.gridline_color,
        }));
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{Point, Size};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Opaque handle for one element created by the engine.
///
/// Handles are allocated from a monotonically increasing counter and are never
/// reused, so a stale handle can never alias an element of a later pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    PointMark,
    Connector,
    Bar,
    Label,
    Gridline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Runs bottom to top at a fixed X.
    Vertical,
    /// Runs left to right at a fixed Y.
    Horizontal,
}

/// Horizontal text alignment relative to `Label::position.x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Dot drawn for one sample, centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMark {
    pub center: Point,
    pub size: Size,
    pub color: Color,
}

/// Straight segment joining two consecutive point marks.
///
/// Backends that only know axis-aligned sprites can draw a `length x thickness`
/// rectangle at `center` rotated by `angle_degrees`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
    pub center: Point,
    pub length: f64,
    /// Direction of `from -> to`, in `[0, 360)`.
    pub angle_degrees: f64,
    pub thickness: f64,
    pub color: Color,
}

/// Vertical bar growing upward from the bottom edge, pivoted at its base center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub base_x: f64,
    pub height: f64,
    pub width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub axis: Axis,
    pub text: String,
    pub position: Point,
    pub h_align: TextHAlign,
    pub font_size_px: f64,
    pub color: Color,
}

/// Guide line starting at `position` and spanning `length` along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub position: Point,
    pub orientation: Orientation,
    pub length: f64,
    pub color: Color,
}

/// One drawable unit produced by a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartElement {
    PointMark(PointMark),
    Connector(Connector),
    Bar(Bar),
    Label(Label),
    Gridline(Gridline),
}

impl ChartElement {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::PointMark(_) => ElementKind::PointMark,
            Self::Connector(_) => ElementKind::Connector,
            Self::Bar(_) => ElementKind::Bar,
            Self::Label(_) => ElementKind::Label,
            Self::Gridline(_) => ElementKind::Gridline,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::PointMark(mark) => {
                ensure_point(mark.center, "point mark center")?;
                mark.size.validate("point mark")?;
                mark.color.validate()
            }
            Self::Connector(connector) => {
                ensure_point(connector.from, "connector start")?;
                ensure_point(connector.to, "connector end")?;
                ensure_point(connector.center, "connector center")?;
                if !connector.length.is_finite() || connector.length < 0.0 {
                    return Err(ChartError::InvalidData(
                        "connector length must be finite and >= 0".to_owned(),
                    ));
                }
                if !(0.0..360.0).contains(&connector.angle_degrees) {
                    return Err(ChartError::InvalidData(
                        "connector angle must be in [0, 360)".to_owned(),
                    ));
                }
                ensure_positive(connector.thickness, "connector thickness")?;
                connector.color.validate()
            }
            Self::Bar(bar) => {
                if !bar.base_x.is_finite() {
                    return Err(ChartError::InvalidData(
                        "bar base must be finite".to_owned(),
                    ));
                }
                if !bar.height.is_finite() || bar.height < 0.0 {
                    return Err(ChartError::InvalidData(
                        "bar height must be finite and >= 0".to_owned(),
                    ));
                }
                ensure_positive(bar.width, "bar width")?;
                bar.color.validate()
            }
            Self::Label(label) => {
                ensure_point(label.position, "label position")?;
                ensure_positive(label.font_size_px, "font size")?;
                label.color.validate()
            }
            Self::Gridline(gridline) => {
                ensure_point(gridline.position, "gridline position")?;
                ensure_positive(gridline.length, "gridline length")?;
                gridline.color.validate()
            }
        }
    }
}

fn ensure_point(point: Point, what: &str) -> ChartResult<()> {
    if !point.is_finite() {
        return Err(ChartError::InvalidData(format!("{what} must be finite")));
    }
    Ok(())
}

fn ensure_positive(value: f64, what: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(())
}

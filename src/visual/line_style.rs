use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::core::{Point, Size};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartElement, Color, Connector, PointMark};

use super::{MarkBatch, VisualStyle, VisualStyleKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyleConfig {
    pub mark_color: Color,
    pub mark_size: Size,
    pub connector_color: Color,
    pub connector_thickness: f64,
}

impl Default for LineStyleConfig {
    fn default() -> Self {
        Self {
            mark_color: Color::WHITE,
            mark_size: Size::new(11.0, 11.0),
            connector_color: Color::rgba(1.0, 1.0, 1.0, 0.5),
            connector_thickness: 3.0,
        }
    }
}

impl LineStyleConfig {
    pub fn validate(self) -> ChartResult<Self> {
        self.mark_color.validate()?;
        self.mark_size.validate("point mark")?;
        self.connector_color.validate()?;
        if !self.connector_thickness.is_finite() || self.connector_thickness <= 0.0 {
            return Err(ChartError::InvalidData(
                "connector thickness must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Dot plot with straight connectors between consecutive dots.
#[derive(Debug, Clone, Default)]
pub struct LineStyle {
    config: LineStyleConfig,
    last_position: Option<Point>,
}

impl LineStyle {
    pub fn new(config: LineStyleConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            last_position: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> LineStyleConfig {
        self.config
    }

    /// Position of the last mark emitted in the current pass.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last_position
    }

    fn connector(&self, from: Point, to: Point) -> Connector {
        Connector {
            from,
            to,
            center: from.midpoint(to),
            length: from.distance_to(to),
            angle_degrees: connector_angle_degrees(from, to),
            thickness: self.config.connector_thickness,
            color: self.config.connector_color,
        }
    }
}

impl VisualStyle for LineStyle {
    fn kind(&self) -> VisualStyleKind {
        VisualStyleKind::Line
    }

    fn begin_pass(&mut self) {
        self.last_position = None;
    }

    fn emit_marks(&mut self, position: Point, _slot_width: f64) -> MarkBatch {
        let mark = ChartElement::PointMark(PointMark {
            center: position,
            size: self.config.mark_size,
            color: self.config.mark_color,
        });

        let mut marks: MarkBatch = smallvec![mark];
        if let Some(previous) = self.last_position {
            marks.push(ChartElement::Connector(self.connector(previous, position)));
        }
        self.last_position = Some(position);
        marks
    }
}

/// Direction of `from -> to` in degrees, normalized into `[0, 360)`.
#[must_use]
pub fn connector_angle_degrees(from: Point, to: Point) -> f64 {
    let degrees = (to.y - from.y).atan2(to.x - from.x).to_degrees();
    let normalized = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    // -0.0 and tiny negatives can round up to exactly 360.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_covers_all_quadrants() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(connector_angle_degrees(origin, Point::new(1.0, 0.0)), 0.0);
        assert!((connector_angle_degrees(origin, Point::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((connector_angle_degrees(origin, Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((connector_angle_degrees(origin, Point::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_negative_angle_never_reaches_360() {
        let angle = connector_angle_degrees(Point::new(0.0, 0.0), Point::new(1.0, -1e-300));
        assert!((0.0..360.0).contains(&angle));
    }
}

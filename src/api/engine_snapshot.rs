use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ValueRange, Viewport, VisibleWindow};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartElement, ElementId, ElementKind, Renderer};
use crate::visual::VisualStyleKind;

use super::ChartEngine;

/// Serializable description of the last render pass, used by regression
/// tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub pass: u64,
    pub viewport: Viewport,
    pub style: Option<VisualStyleKind>,
    pub window: Option<VisibleWindow>,
    pub range: Option<ValueRange>,
    pub slot_width: Option<f64>,
    /// Live element count per kind, in first-seen order.
    pub element_counts: IndexMap<ElementKind, usize>,
    pub elements: Vec<(ElementId, ChartElement)>,
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let frame = self.last_frame();
        let mut element_counts = IndexMap::new();
        let mut elements = Vec::new();
        if let Some(frame) = frame {
            for (id, element) in self.retained_ids().iter().zip(&frame.elements) {
                *element_counts.entry(element.kind()).or_insert(0) += 1;
                elements.push((*id, element.clone()));
            }
        }

        EngineSnapshot {
            pass: self.pass_count(),
            viewport: self.viewport(),
            style: self.last_style(),
            window: frame.map(|frame| frame.scale.window),
            range: frame.map(|frame| frame.scale.range),
            slot_width: frame.map(|frame| frame.scale.slot_width),
            element_counts,
            elements,
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_pretty()
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{ChartScale, ValueRange, Viewport};
use crate::error::ChartResult;
use crate::render::{ChartElement, ElementKind};

/// Backend-agnostic content of one chart render pass, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub scale: ChartScale,
    pub elements: Vec<ChartElement>,
}

impl ChartFrame {
    #[must_use]
    pub fn new(scale: ChartScale) -> Self {
        Self {
            scale,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.scale.viewport
    }

    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.scale.range
    }

    pub fn push(&mut self, element: ChartElement) {
        self.elements.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = ChartElement>) {
        self.elements.extend(elements);
    }

    #[must_use]
    pub fn count(&self, kind: ElementKind) -> usize {
        self.elements
            .iter()
            .filter(|element| element.kind() == kind)
            .count()
    }

    /// Kind sequence in creation order, used to compare frame composition.
    #[must_use]
    pub fn composition(&self) -> Vec<ElementKind> {
        self.elements.iter().map(ChartElement::kind).collect()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.scale.viewport.validate()?;
        for element in &self.elements {
            element.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

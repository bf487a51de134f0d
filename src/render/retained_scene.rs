use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartElement, CommandBatch, ElementId, ElementKind, RenderCommand, Renderer};

/// Renderer that keeps every live element, keyed by handle.
///
/// `IndexMap` preserves creation order so backends drawing from the scene
/// paint elements in the order the engine produced them.
#[derive(Debug, Default, Clone)]
pub struct RetainedScene {
    elements: IndexMap<ElementId, ChartElement>,
    total_created: u64,
    total_destroyed: u64,
}

impl RetainedScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&ChartElement> {
        self.elements.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &ChartElement)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    #[must_use]
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.keys().copied().collect()
    }

    #[must_use]
    pub fn count(&self, kind: ElementKind) -> usize {
        self.elements
            .values()
            .filter(|element| element.kind() == kind)
            .count()
    }

    #[must_use]
    pub fn total_created(&self) -> u64 {
        self.total_created
    }

    #[must_use]
    pub fn total_destroyed(&self) -> u64 {
        self.total_destroyed
    }

    fn apply_command(&mut self, command: &RenderCommand) -> ChartResult<()> {
        match command {
            RenderCommand::Create { id, element } => {
                element.validate()?;
                if self.elements.contains_key(id) {
                    return Err(ChartError::Backend(format!(
                        "element {} is already live",
                        id.0
                    )));
                }
                self.elements.insert(*id, element.clone());
                self.total_created += 1;
            }
            RenderCommand::Destroy { id } => {
                if self.elements.shift_remove(id).is_none() {
                    return Err(ChartError::Backend(format!(
                        "destroy of unknown element {}",
                        id.0
                    )));
                }
                self.total_destroyed += 1;
            }
        }
        Ok(())
    }
}

impl Renderer for RetainedScene {
    fn apply(&mut self, batch: &CommandBatch) -> ChartResult<()> {
        for command in batch.commands() {
            self.apply_command(command)?;
        }
        Ok(())
    }
}

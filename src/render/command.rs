use serde::{Deserialize, Serialize};

use crate::render::{ChartElement, ElementId};

/// Instruction sent to the display collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    Create { id: ElementId, element: ChartElement },
    Destroy { id: ElementId },
}

impl RenderCommand {
    #[must_use]
    pub fn id(&self) -> ElementId {
        match self {
            Self::Create { id, .. } | Self::Destroy { id } => *id,
        }
    }

    #[must_use]
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create { .. })
    }
}

/// Command batch for one render pass: every destroy precedes every create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandBatch {
    pub pass: u64,
    commands: Vec<RenderCommand>,
}

impl CommandBatch {
    #[must_use]
    pub fn new(pass: u64) -> Self {
        Self {
            pass,
            commands: Vec::new(),
        }
    }

    pub fn destroy(&mut self, id: ElementId) {
        debug_assert!(
            !self.commands.iter().any(RenderCommand::is_create),
            "destroy commands must precede creates"
        );
        self.commands.push(RenderCommand::Destroy { id });
    }

    pub fn create(&mut self, id: ElementId, element: ChartElement) {
        self.commands.push(RenderCommand::Create { id, element });
    }

    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    #[must_use]
    pub fn destroy_count(&self) -> usize {
        self.commands.iter().filter(|c| !c.is_create()).count()
    }

    #[must_use]
    pub fn create_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_create()).count()
    }
}

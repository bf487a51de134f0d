use crate::error::{ChartError, ChartResult};
use crate::render::{CommandBatch, RenderCommand, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates every created element and keeps live-element counts so
/// tests can catch leaks before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub live_count: usize,
    pub last_created: usize,
    pub last_destroyed: usize,
    pub batches_applied: u64,
}

impl Renderer for NullRenderer {
    fn apply(&mut self, batch: &CommandBatch) -> ChartResult<()> {
        let mut live = self.live_count;
        let mut created = 0;
        let mut destroyed = 0;
        for command in batch.commands() {
            match command {
                RenderCommand::Create { element, .. } => {
                    element.validate()?;
                    live += 1;
                    created += 1;
                }
                RenderCommand::Destroy { id } => {
                    live = live.checked_sub(1).ok_or_else(|| {
                        ChartError::Backend(format!("destroy of unknown element {}", id.0))
                    })?;
                    destroyed += 1;
                }
            }
        }

        self.live_count = live;
        self.last_created = created;
        self.last_destroyed = destroyed;
        self.batches_applied += 1;
        Ok(())
    }
}

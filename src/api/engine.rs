use tracing::{debug, trace, warn};

use crate::core::{ValueRange, Viewport, WindowSize};
use crate::error::ChartResult;
use crate::render::{ChartFrame, CommandBatch, ElementId, ElementKind, Renderer};
use crate::visual::{VisualStyle, VisualStyleKind};

use super::{ChartEngineConfig, LabelFormatters, build_chart_frame};

/// Render orchestrator consumed by host applications.
///
/// The engine owns every element it created during the last pass. Each call to
/// [`ChartEngine::render`] builds and validates the complete new frame first,
/// then hands the renderer one batch that destroys the previous generation
/// and creates the new one. A rejected call issues no command at all.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    retained: Vec<ElementId>,
    next_element_id: u64,
    pass_count: u64,
    last_frame: Option<ChartFrame>,
    last_style: Option<VisualStyleKind>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            retained: Vec::new(),
            next_element_id: 0,
            pass_count: 0,
            last_frame: None,
            last_style: None,
        })
    }

    /// Runs one full render pass.
    ///
    /// `samples` is only read during the call. `window` selects the trailing
    /// samples to show (`WindowSize::All` for the full history).
    pub fn render(
        &mut self,
        samples: &[f64],
        style: &mut dyn VisualStyle,
        window: WindowSize,
        formatters: &LabelFormatters,
    ) -> ChartResult<()> {
        let frame = build_chart_frame(samples, style, window, formatters, &self.config)?;
        let pass = self.pass_count + 1;

        let mut batch = CommandBatch::new(pass);
        let released = std::mem::take(&mut self.retained);
        for id in &released {
            batch.destroy(*id);
        }
        trace!(pass, released = released.len(), "releasing previous generation");

        let mut retained = Vec::with_capacity(frame.len());
        for element in &frame.elements {
            let id = self.allocate_id();
            batch.create(id, element.clone());
            retained.push(id);
        }

        let applied = self.renderer.apply(&batch);

        // The batch was handed over either way: the previous generation is
        // gone from the engine's point of view.
        self.retained = retained;
        self.pass_count = pass;
        self.last_style = Some(style.kind());

        if let Err(err) = applied {
            warn!(pass, error = %err, "renderer failed to apply render pass");
            self.last_frame = Some(frame);
            return Err(err);
        }

        debug!(
            pass,
            style = ?style.kind(),
            window_start = frame.scale.window.start,
            window_end = frame.scale.window.end,
            minimum = frame.scale.range.minimum,
            maximum = frame.scale.range.maximum,
            destroyed = released.len(),
            created = frame.len(),
            "render pass complete"
        );
        self.last_frame = Some(frame);
        Ok(())
    }

    /// Destroys every retained element, leaving an empty scene.
    pub fn clear(&mut self) -> ChartResult<()> {
        if self.retained.is_empty() {
            return Ok(());
        }

        let pass = self.pass_count + 1;
        let mut batch = CommandBatch::new(pass);
        for id in std::mem::take(&mut self.retained) {
            batch.destroy(id);
        }
        self.pass_count = pass;
        self.last_frame = None;
        self.last_style = None;
        debug!(pass, destroyed = batch.destroy_count(), "chart cleared");
        self.renderer.apply(&batch)
    }

    /// Changes the viewport used by subsequent passes.
    ///
    /// The axis layout must still fit the new viewport; on error the current
    /// viewport is kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.validate()?;
        self.config.axis_layout.validate_for(viewport)?;
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn retained_len(&self) -> usize {
        self.retained.len()
    }

    #[must_use]
    pub fn retained_ids(&self) -> &[ElementId] {
        &self.retained
    }

    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&ChartFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_range(&self) -> Option<ValueRange> {
        self.last_frame.as_ref().map(ChartFrame::range)
    }

    #[must_use]
    pub fn last_style(&self) -> Option<VisualStyleKind> {
        self.last_style
    }

    /// Number of retained elements of `kind`.
    #[must_use]
    pub fn retained_count(&self, kind: ElementKind) -> usize {
        self.last_frame.as_ref().map_or(0, |frame| frame.count(kind))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_element_id);
        self.next_element_id += 1;
        id
    }
}

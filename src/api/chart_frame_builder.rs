use crate::core::{ChartScale, VisibleWindow, WindowSize};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartFrame;
use crate::visual::VisualStyle;

use super::axis_layout::{append_x_axis_guides, append_y_axis_guides};
use super::{ChartEngineConfig, LabelFormatters};

/// Materializes every element of one render pass without side effects
/// outside `style`'s per-pass state.
///
/// Elements are ordered as they must be created: for each visible sample the
/// style's marks followed by its X label and gridline, then the Y labels and
/// gridlines.
pub fn build_chart_frame(
    samples: &[f64],
    style: &mut dyn VisualStyle,
    window: WindowSize,
    formatters: &LabelFormatters,
    config: &ChartEngineConfig,
) -> ChartResult<ChartFrame> {
    let window = VisibleWindow::resolve(samples.len(), window)?;
    let layout = config.axis_layout.validate_for(config.viewport)?;
    let scale = ChartScale::fit(samples, config.viewport, window, config.range_tuning)?;

    style.begin_pass();

    let mut frame = ChartFrame::new(scale);
    for index in window.range() {
        let position = scale.position(index, samples[index]);
        frame.extend(style.emit_marks(position, scale.slot_width));
        append_x_axis_guides(&mut frame, scale, index, layout, formatters);
    }
    append_y_axis_guides(&mut frame, scale, layout, formatters);

    frame.validate().map_err(|err| match err {
        ChartError::InvalidData(reason) => {
            ChartError::InvalidData(format!("render pass rejected: {reason}"))
        }
        other => other,
    })?;
    Ok(frame)
}

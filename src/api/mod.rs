mod axis_layout;
mod chart_frame_builder;
mod engine;
mod engine_config;
mod engine_snapshot;
mod label_format;

pub use axis_layout::AxisLayout;
pub use chart_frame_builder::build_chart_frame;
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use label_format::{
    LabelFormatters, XLabelFormatterFn, YLabelFormatterFn, default_x_label, default_y_label,
};

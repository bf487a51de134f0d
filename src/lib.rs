//! window-graph: windowed sample chart engine.
//!
//! The crate maps a numeric sample sequence into a fixed-size viewport and
//! emits typed element create/destroy commands for a display backend. Visual
//! styles (line, bar) are pluggable and share the same scale and axis layout.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod visual;

pub use api::{ChartEngine, ChartEngineConfig, LabelFormatters};
pub use error::{ChartError, ChartResult};

use serde::{Deserialize, Serialize};

use crate::core::{ValueRangeTuning, Viewport};
use crate::error::{ChartError, ChartResult};

use super::AxisLayout;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub axis_layout: AxisLayout,
    #[serde(default)]
    pub range_tuning: ValueRangeTuning,
}

impl ChartEngineConfig {
    /// Creates a config with default axis layout and range tuning.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            axis_layout: AxisLayout::default(),
            range_tuning: ValueRangeTuning::default(),
        }
    }

    #[must_use]
    pub fn with_axis_layout(mut self, layout: AxisLayout) -> Self {
        self.axis_layout = layout;
        self
    }

    #[must_use]
    pub fn with_range_tuning(mut self, tuning: ValueRangeTuning) -> Self {
        self.range_tuning = tuning;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        let viewport = self.viewport.validate()?;
        self.axis_layout.validate_for(viewport)?;
        self.range_tuning.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

use std::fmt;
use std::sync::Arc;

pub type XLabelFormatterFn = Arc<dyn Fn(usize) -> String + Send + Sync + 'static>;
pub type YLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Default X-axis label: the absolute sample index.
#[must_use]
pub fn default_x_label(index: usize) -> String {
    index.to_string()
}

/// Default Y-axis label: the value rounded to the nearest integer.
///
/// Ties round to even, and a value rounding to negative zero prints as `0`.
#[must_use]
pub fn default_y_label(value: f64) -> String {
    let rounded = value.round_ties_even() + 0.0;
    format!("{rounded:.0}")
}

/// Axis label formatters passed to every render call.
#[derive(Clone)]
pub struct LabelFormatters {
    x: XLabelFormatterFn,
    y: YLabelFormatterFn,
}

impl LabelFormatters {
    #[must_use]
    pub fn new(x: XLabelFormatterFn, y: YLabelFormatterFn) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn with_x(mut self, formatter: XLabelFormatterFn) -> Self {
        self.x = formatter;
        self
    }

    #[must_use]
    pub fn with_y(mut self, formatter: YLabelFormatterFn) -> Self {
        self.y = formatter;
        self
    }

    #[must_use]
    pub fn format_x(&self, index: usize) -> String {
        (self.x)(index)
    }

    #[must_use]
    pub fn format_y(&self, value: f64) -> String {
        (self.y)(value)
    }
}

impl Default for LabelFormatters {
    fn default() -> Self {
        Self {
            x: Arc::new(default_x_label),
            y: Arc::new(default_y_label),
        }
    }
}

impl fmt::Debug for LabelFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFormatters").finish_non_exhaustive()
    }
}

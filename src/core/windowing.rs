use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Requested number of trailing samples to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindowSize {
    /// Show the full history.
    #[default]
    All,
    /// Show at most the last `n` samples. `Last(0)` behaves like `All`.
    Last(usize),
}

impl From<i64> for WindowSize {
    /// Any request `<= 0` means "show everything".
    fn from(requested: i64) -> Self {
        match usize::try_from(requested) {
            Ok(0) | Err(_) => Self::All,
            Ok(size) => Self::Last(size),
        }
    }
}

/// Trailing window of a sample sequence resolved for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWindow {
    /// First visible index (absolute, inclusive).
    pub start: usize,
    /// One past the last visible index (absolute).
    pub end: usize,
    /// Slot count used for horizontal spacing.
    ///
    /// Equals the requested window size, which may exceed `end - start` when
    /// the history is shorter than the request.
    pub size: usize,
}

impl VisibleWindow {
    pub fn resolve(sample_count: usize, requested: WindowSize) -> ChartResult<Self> {
        if sample_count == 0 {
            return Err(ChartError::EmptySamples);
        }

        let size = match requested {
            WindowSize::All | WindowSize::Last(0) => sample_count,
            WindowSize::Last(size) => size,
        };

        Ok(Self {
            start: sample_count.saturating_sub(size),
            end: sample_count,
            size,
        })
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Position of an absolute sample index inside the window.
    #[must_use]
    pub fn offset_of(self, index: usize) -> usize {
        index - self.start
    }
}

/// Returns the samples covered by `window`.
#[must_use]
pub fn samples_in_window(samples: &[f64], window: VisibleWindow) -> &[f64] {
    &samples[window.range()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_zero_requests_mean_all() {
        assert_eq!(WindowSize::from(-1), WindowSize::All);
        assert_eq!(WindowSize::from(0), WindowSize::All);
        assert_eq!(WindowSize::from(i64::MIN), WindowSize::All);
        assert_eq!(WindowSize::from(7), WindowSize::Last(7));
    }

    #[test]
    fn oversized_window_keeps_requested_slot_count() {
        let window = VisibleWindow::resolve(3, WindowSize::Last(10)).expect("window");
        assert_eq!(window.range(), 0..3);
        assert_eq!(window.size, 10);
    }
}

pub mod scale;
pub mod types;
pub mod windowing;

pub use scale::{
    ChartScale, ValueRange, ValueRangeTuning, map_index_to_x, map_value_to_y, slot_width,
};
pub use types::{Point, Size, Viewport};
pub use windowing::{VisibleWindow, WindowSize, samples_in_window};

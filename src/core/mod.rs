pub mod primitives;
pub mod types;
pub mod windowing;

pub use types::{RawPoint, SeriesPoint, Tick};
pub use windowing::{MAX_SERIES_LEN, MIN_SERIES_LEN, TimeWindowFilter};

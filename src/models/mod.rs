pub mod point;
pub mod rejection;
pub mod trip;

pub use point::{Point, RawRecord};
pub use rejection::{RecordError, Rejection};
pub use trip::{Trip, TripStats};

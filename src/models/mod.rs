pub mod record;
pub mod scenario;

pub use record::{TimestampedRecord, TrajectoryRecord};

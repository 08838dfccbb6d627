//! Shared test fakes and utilities for the scrolly story engine.

mod clock;
mod map;
mod source;
mod surface;

pub use clock::FixedClock;
pub use map::{MapCall, RecordingMapBackend};
pub use source::{FailingRowSource, StaticRowSource};
pub use surface::{RecordingSurface, SurfaceCall};

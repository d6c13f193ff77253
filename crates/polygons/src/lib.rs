//! Regular polygons sharing a circumradius, as an indexable, iterable sequence.
//!
//! Layout
//! - `polygon`: `Polygon` with closed-form derived properties.
//! - `sequence`: `PolygonSequence` for vertex counts `3..=m` and its
//!   forward-only `SequenceCursor`.
//! - `cfg`: tolerance constants and `PolyCfg`.
//! - `error`: `PolygonError`, the single error type of the crate.
//!
//! API Policy
//! - Everything is pure computation over immutable values. No I/O, no logging;
//!   errors surface to the caller as `PolygonError`.

pub mod cfg;
pub mod error;
pub mod polygon;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::PolyCfg;
pub use error::PolygonError;
pub use polygon::Polygon;
pub use sequence::{CursorState, PolygonSequence, SequenceCursor};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::PolyCfg;
    pub use crate::error::PolygonError;
    pub use crate::polygon::Polygon;
    pub use crate::sequence::{CursorState, PolygonSequence, SequenceCursor};
    pub use nalgebra::Vector2 as Vec2;
}

//! Pathmorph Core (engine-agnostic)
//!
//! Morphs a polygon between two vertex arrays of equal size. A host animation
//! clock supplies normalized time; the engine eases every vertex toward its
//! destination, writing into a working buffer swapped into the polygon for
//! the animation's lifetime.

pub mod animation;
pub mod buffer;
pub mod config;
pub mod controller;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod host;
pub mod interp;
pub mod render;

// Re-exports for consumers (hosts and renderers)
pub use animation::PathAnimation;
pub use buffer::PointBuffer;
pub use config::Config;
pub use controller::{AnimationHandlers, Targets};
pub use curve::EasingCurve;
pub use error::{MorphError, SnapshotRole};
pub use geometry::{PathInfo, Point, Polygon};
pub use host::{HostAnimation, HostEvent, Timer, NORMALIZED_MAX, NORMALIZED_MIN};
pub use interp::{compute_frame, compute_frame_into, FrameKind};
pub use render::{Layer, RenderTarget};

/// Result type for morph operations
pub type Result<T> = core::result::Result<T, MorphError>;

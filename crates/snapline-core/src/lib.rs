//! Snapline Core Library
//!
//! Alignment and distance-pattern guides for a 2D vector editor, plus a
//! reference shape store that serves as the engine's geometry host.

pub mod camera;
pub mod geometry;
pub mod shapes;
pub mod snap;
pub mod store;

pub use camera::Camera;
pub use geometry::{Axis, BoundingBox, ElementId, ElementInfo, ElementKind, ElementRef, GeometrySource};
pub use shapes::{Bounded, Shape, ShapeId};
pub use snap::{
    ActiveSnap, DistanceGuideline, DistanceMarker, GuideColor, Guideline, GuidelineEngine, Orientation,
    SnapNotifier, SnappingConfig, SnappingConfigUpdate, Subscription,
};
pub use store::ShapeStore;
